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
//! The ConstantValue attribute record.

use std::io::{Read, Write};

use crate::constants::{CONSTANT_VALUE, CONSTANT_VALUE_LEN};
use crate::cp::{PoolTable, RawPoolEntry};
use crate::{Error, ReadWrite, Result};

/// A ConstantValue attribute: a fixed 2-byte pool-index payload attached to
/// a static final field.
///
/// Obtained from [`FieldBinding::emit`](crate::encode::FieldBinding::emit);
/// immutable once constructed, and constructing it does not touch the pool.
/// On the wire it is the attribute-name index, the length (always 2), and
/// the index of the field's pool entry, big-endian.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ConstantValueAttribute {
    index: u16,
}

impl ConstantValueAttribute {
    pub(crate) fn new(index: u16) -> Self {
        Self { index }
    }

    /// The pool index of the field's constant.
    #[inline]
    pub fn index(self) -> u16 {
        self.index
    }

    /// Writes the 8-byte attribute record.
    ///
    /// The "ConstantValue" name Utf8 entry is interned here, at write time,
    /// so a pool that only ever interned field values stays that way until
    /// the class is actually serialized.
    pub fn write_to<W: Write>(self, pool: &mut PoolTable, writer: &mut W) -> Result<()> {
        let name = pool.intern_raw(RawPoolEntry::Utf8(CONSTANT_VALUE.into()));
        name.write_to(writer)?;
        CONSTANT_VALUE_LEN.write_to(writer)?;
        self.index.write_to(writer)
    }

    /// Reads an attribute record back, validating it against the pool.
    ///
    /// The name index must resolve to the "ConstantValue" Utf8 entry, the
    /// length must be 2, and the value index must name a loadable entry.
    pub fn read_from<R: Read>(pool: &PoolTable, reader: &mut R) -> Result<Self> {
        let name = u16::read_from(reader)?;
        match pool.get(name)? {
            RawPoolEntry::Utf8(s) if *s == CONSTANT_VALUE => {}
            _ => return Err(Error::Invalid("attribute name index", name.to_string())),
        }
        let length = u32::read_from(reader)?;
        if length != CONSTANT_VALUE_LEN {
            return Err(Error::Invalid("attribute length", length.to_string()));
        }
        let index = u16::read_from(reader)?;
        pool.constant(index)?;
        Ok(Self { index })
    }
}
