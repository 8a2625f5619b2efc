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
use std::borrow::Cow;

use thiserror::Error;

use crate::cp::Constant;
use crate::ty::FieldType;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    MUTF(#[from] crate::mod_utf8::MUtf8Error),
    /// The declared field type cannot represent the evaluated literal.
    /// Aborts encoding of the current class; the pool is left untouched.
    #[error("field `{field}`: literal {value:?} is not representable by descriptor {ty}")]
    TypeMismatch {
        field: Cow<'static, str>,
        ty: FieldType,
        value: Constant,
    },
    /// Attribute emission was requested for a field that has no interned
    /// constant. A usage error, fatal to the encoding session.
    #[error("ConstantValue emission requested for field `{0}` with no interned constant")]
    EmitWithoutValue(Cow<'static, str>),
    /// An index does not name an entry of the pool, either because it is out
    /// of range or because it points into the reserved slot after a wide
    /// entry. Never clamped.
    #[error("constant pool index {0} does not name an entry")]
    MalformedPoolIndex(u16),
    /// A field name was handed to the same encoding session twice.
    #[error("field `{0}` was already processed by this session")]
    DuplicateField(Cow<'static, str>),
    #[error("Invalid {0}: {1}")]
    Invalid(&'static str, String),
}

pub type Result<T> = std::result::Result<T, Error>;
