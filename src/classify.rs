/*
    This file is part of Constable.

    Constable is free software: you can redistribute it and/or modify
    it under the terms of the GNU Lesser General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    Constable is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU Lesser General Public License
    along with Constable. (LICENSE.md)  If not, see <https://www.gnu.org/licenses/>.
*/
//! Deciding which fields qualify for a pool-backed constant.

use std::borrow::Cow;

use crate::access::FieldFlags;
use crate::cp::Constant;
use crate::ty::FieldType;
use crate::{Error, Result};

/// A field declaration as handed over by the class-file writer.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    pub name: Cow<'static, str>,
    pub ty: FieldType,
    pub access: FieldFlags,
}

impl FieldDescriptor {
    pub fn new<S: Into<Cow<'static, str>>>(name: S, ty: FieldType, access: FieldFlags) -> Self {
        Self {
            name: name.into(),
            ty,
            access,
        }
    }
}

/// The evaluated initializer of a field, as produced by the front end.
#[derive(Clone, Debug, PartialEq)]
pub enum Initializer {
    /// A compile-time literal, already folded to a value.
    Literal(Constant),
    /// Anything the front end could not fold; such fields are assigned by
    /// the class initializer instead.
    Expression,
}

/// Why a field does not get a ConstantValue attribute. A routing signal for
/// the caller, not an error.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum IneligibleReason {
    /// The field is missing `static`, `final`, or both.
    NotStaticFinal,
    /// The field is static final but its initializer is a runtime expression.
    NonLiteralInitializer,
    /// The field has no initializer at all.
    NoInitializer,
}

/// The classifier's verdict on a single field.
#[derive(Clone, Debug, PartialEq)]
pub enum Classification {
    /// The field gets a pool entry holding this value.
    Eligible(Constant),
    /// No attribute; the caller routes the field to `<clinit>` generation.
    Ineligible(IneligibleReason),
}

/// Classifies a field's initializer.
///
/// Ineligibility is a normal outcome; the only failure is a literal that the
/// declared type cannot represent, such as a `short` field holding 32768.
pub fn classify(
    descriptor: &FieldDescriptor,
    initializer: Option<&Initializer>,
) -> Result<Classification> {
    if !descriptor.access.is_constant_candidate() {
        return Ok(Classification::Ineligible(IneligibleReason::NotStaticFinal));
    }
    let value = match initializer {
        None => return Ok(Classification::Ineligible(IneligibleReason::NoInitializer)),
        Some(Initializer::Expression) => {
            return Ok(Classification::Ineligible(
                IneligibleReason::NonLiteralInitializer,
            ))
        }
        Some(Initializer::Literal(value)) => value,
    };
    if !fits(descriptor.ty, value) {
        return Err(Error::TypeMismatch {
            field: descriptor.name.clone(),
            ty: descriptor.ty,
            value: value.clone(),
        });
    }
    Ok(Classification::Eligible(value.clone()))
}

/// Whether the declared type can represent the literal.
///
/// The integer-family kinds all arrive as `I32`; the narrow ones only bound
/// the value's range, since the pool stores them in a full Integer entry
/// either way.
fn fits(ty: FieldType, value: &Constant) -> bool {
    match (ty, value) {
        (FieldType::Int, Constant::I32(_)) => true,
        (FieldType::Byte, Constant::I32(i)) => (i8::MIN as i32..=i8::MAX as i32).contains(i),
        (FieldType::Short, Constant::I32(i)) => (i16::MIN as i32..=i16::MAX as i32).contains(i),
        (FieldType::Char, Constant::I32(i)) => (0..=u16::MAX as i32).contains(i),
        (FieldType::Boolean, Constant::I32(i)) => *i == 0 || *i == 1,
        (FieldType::Long, Constant::I64(_)) => true,
        (FieldType::Float, Constant::F32(_)) => true,
        (FieldType::Double, Constant::F64(_)) => true,
        (FieldType::String, Constant::String(_)) => true,
        _ => false,
    }
}
