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
//! The field types that may carry a ConstantValue attribute.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{Error, Result};

/// A field descriptor of one of the nine constant-capable kinds.
///
/// Arrays and references other than `java/lang/String` never carry a
/// ConstantValue attribute, so they are not representable here; callers route
/// such fields to class-initializer generation before reaching this crate.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum FieldType {
    /// The primitive `byte` (8-bit signed integer).
    Byte,
    /// The primitive `char` (UTF-16 code unit, unsigned 16-bit).
    Char,
    /// The primitive `double` (double-precision floating point number).
    Double,
    /// The primitive `float` (single-precision floating point number).
    Float,
    /// The primitive `int` (32-bit signed integer).
    Int,
    /// The primitive `long` (64-bit signed integer).
    Long,
    /// The primitive `short` (16-bit signed integer).
    Short,
    /// The primitive `boolean`.
    Boolean,
    /// A reference to `java/lang/String`.
    String,
}

impl FieldType {
    /// returns `true` if this type is `Long` or `Double`, whose pool entries
    /// occupy two consecutive slots.
    #[inline]
    pub fn is_wide(self) -> bool {
        matches!(self, FieldType::Long | FieldType::Double)
    }

    /// returns `true` for the kinds that share the 32-bit Integer pool entry.
    ///
    /// The pool defines no entry kind narrower than Integer, so byte, short,
    /// char and boolean constants are inlined into Integer entries; the
    /// declared narrowness lives only in the descriptor.
    #[inline]
    pub fn is_integer_family(self) -> bool {
        matches!(
            self,
            FieldType::Byte
                | FieldType::Short
                | FieldType::Char
                | FieldType::Boolean
                | FieldType::Int
        )
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FieldType::Byte => "B",
            FieldType::Char => "C",
            FieldType::Double => "D",
            FieldType::Float => "F",
            FieldType::Int => "I",
            FieldType::Long => "J",
            FieldType::Short => "S",
            FieldType::Boolean => "Z",
            FieldType::String => "Ljava/lang/String;",
        })
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "B" => FieldType::Byte,
            "C" => FieldType::Char,
            "D" => FieldType::Double,
            "F" => FieldType::Float,
            "I" => FieldType::Int,
            "J" => FieldType::Long,
            "S" => FieldType::Short,
            "Z" => FieldType::Boolean,
            "Ljava/lang/String;" => FieldType::String,
            _ => return Err(Error::Invalid("field descriptor", s.to_owned())),
        })
    }
}
