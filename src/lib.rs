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
//! Encoding of compile-time constant fields for Java class files.
//!
//! Three pieces compose linearly: [`classify`](classify::classify) decides
//! whether a static field's initializer qualifies as a compile-time constant,
//! [`PoolTable`](cp::PoolTable) interns the value into a de-duplicated
//! constant pool, and [`ConstantValueAttribute`](attr::ConstantValueAttribute)
//! is the fixed-size record tying the field to its pool entry.
//! [`Session`](encode::Session) drives the three over a class's field list.

#[macro_use]
extern crate bitflags;

pub mod access;
pub mod attr;
pub mod classify;
pub mod constants;
pub mod cp;
pub mod encode;
pub mod error;
pub mod mod_utf8;
pub mod prelude;
pub mod ty;

#[cfg(test)]
mod tests;

use std::io::{Read, Write};

pub use crate::error::{Error, Result};

/// The generic read and write trait. This indicates a structure can be read
/// and written without additional contextual information.
///
/// All numeric types implement `ReadWrite` as big-endian fixed-width values,
/// and `String` as a length-prefixed modified UTF-8 run, matching the wire
/// conventions of the class file format.
pub trait ReadWrite
where
    Self: Sized,
{
    fn read_from<T: Read>(reader: &mut T) -> Result<Self>;
    fn write_to<T: Write>(&self, writer: &mut T) -> Result<()>;
}

macro_rules! impl_readwrite_nums {
    ($(($i:ty, $s:literal)),*) => {
        $(
            impl ReadWrite for $i {
                fn read_from<T: Read>(reader: &mut T) -> Result<Self> {
                    let mut bytes = [0u8; $s];
                    reader.read_exact(&mut bytes)?;
                    Ok(<$i>::from_be_bytes(bytes))
                }
                fn write_to<T: Write>(&self, writer: &mut T) -> Result<()> {
                    writer.write_all(&self.to_be_bytes())?;
                    Ok(())
                }
            }
        )*
    };
}

impl_readwrite_nums! { (u8, 1), (i8, 1), (u16, 2), (i16, 2), (u32, 4), (i32, 4), (f32, 4), (u64, 8), (i64, 8), (f64, 8) }

impl ReadWrite for String {
    fn read_from<T: Read>(reader: &mut T) -> Result<Self> {
        let length = u16::read_from(reader)?;
        let mut buf = vec![0; length as usize];
        reader.read_exact(&mut buf)?;
        Ok(crate::mod_utf8::decode(&buf)?)
    }

    fn write_to<T: Write>(&self, writer: &mut T) -> Result<()> {
        let bytes = crate::mod_utf8::encode(self);
        (bytes.len() as u16).write_to(writer)?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}
