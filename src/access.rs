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
use std::io::{Read, Write};

use crate::ReadWrite;
use crate::{Error, Result};

bitflags! {
    /// Access and property flags of a field declaration.
    pub struct FieldFlags: u16 {
        const ACC_PUBLIC    = 0b0000_0000_0000_0001;
        const ACC_PRIVATE   = 0b0000_0000_0000_0010;
        const ACC_PROTECTED = 0b0000_0000_0000_0100;
        const ACC_STATIC    = 0b0000_0000_0000_1000;
        const ACC_FINAL     = 0b0000_0000_0001_0000;
        const ACC_VOLATILE  = 0b0000_0000_0100_0000;
        const ACC_TRANSIENT = 0b0000_0000_1000_0000;
        const ACC_SYNTHETIC = 0b0001_0000_0000_0000;
        const ACC_ENUM      = 0b0100_0000_0000_0000;
    }
}

impl FieldFlags {
    /// returns `true` if both `static` and `final` are set, the access
    /// precondition for a ConstantValue attribute.
    #[inline]
    pub fn is_constant_candidate(self) -> bool {
        self.contains(FieldFlags::ACC_STATIC | FieldFlags::ACC_FINAL)
    }
}

impl ReadWrite for FieldFlags {
    fn read_from<T: Read>(reader: &mut T) -> Result<FieldFlags> {
        let bits = u16::read_from(reader)?;
        FieldFlags::from_bits(bits).ok_or_else(|| Error::Invalid("field access flags", bits.to_string()))
    }

    fn write_to<T: Write>(&self, writer: &mut T) -> Result<()> {
        self.bits().write_to(writer)
    }
}
