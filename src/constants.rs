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
//! Constants that can be found in Java class files.

/// Tag byte of a Utf8 constant pool entry.
pub const POOL_UTF8: u8 = 1;
/// Tag byte of an Integer constant pool entry.
pub const POOL_INTEGER: u8 = 3;
/// Tag byte of a Float constant pool entry.
pub const POOL_FLOAT: u8 = 4;
/// Tag byte of a Long constant pool entry.
pub const POOL_LONG: u8 = 5;
/// Tag byte of a Double constant pool entry.
pub const POOL_DOUBLE: u8 = 6;
/// Tag byte of a String constant pool entry.
pub const POOL_STRING: u8 = 8;

/// Name of the attribute this crate emits, stored as a Utf8 entry.
pub const CONSTANT_VALUE: &str = "ConstantValue";

/// Payload length of a ConstantValue attribute: the 2-byte pool index.
pub const CONSTANT_VALUE_LEN: u32 = 2;
