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
//! Conversion between Java's Modified UTF-8 and UTF-8, as used by Utf8
//! constant pool entries.
//!
//! Modified UTF-8 differs from UTF-8 in two ways: the NUL character is
//! written in the two-byte form (so no byte of an encoded string is zero),
//! and supplementary-plane characters are written as a UTF-16 surrogate pair
//! with each half in the three-byte form, six bytes total.
//!
//! Refer to the [JVM Spec](https://docs.oracle.com/javase/specs/jvms/se16/html/jvms-4.html#jvms-4.4.7) for more info.

use thiserror::Error;

/// An error encountered while decoding a modified UTF-8 sequence.
#[derive(Debug, Error)]
pub enum MUtf8Error {
    /// The leading byte announces a multi-byte unit that runs past the end
    /// of the buffer.
    #[error("Malformed input: partial code unit at byte {0}")]
    Truncated(usize),

    /// The byte at this position is not valid where it appears.
    #[error("Malformed input around byte: {0}")]
    AroundByte(usize),
}

/// Decodes one 16-bit code unit starting at `at`, returning it along with
/// the position of the following unit.
fn next_unit(buf: &[u8], at: usize) -> Result<(u32, usize), MUtf8Error> {
    let b = buf[at] as u32;
    match b {
        0x01..=0x7F => Ok((b, at + 1)),
        0xC0..=0xDF => {
            let b2 = *buf.get(at + 1).ok_or(MUtf8Error::Truncated(at))? as u32;
            if b2 & 0xC0 != 0x80 {
                return Err(MUtf8Error::AroundByte(at + 1));
            }
            Ok((((b & 0x1F) << 6) | (b2 & 0x3F), at + 2))
        }
        0xE0..=0xEF => {
            if at + 2 >= buf.len() {
                return Err(MUtf8Error::Truncated(at));
            }
            let b2 = buf[at + 1] as u32;
            let b3 = buf[at + 2] as u32;
            if b2 & 0xC0 != 0x80 || b3 & 0xC0 != 0x80 {
                return Err(MUtf8Error::AroundByte(at + 1));
            }
            Ok((((b & 0x0F) << 12) | ((b2 & 0x3F) << 6) | (b3 & 0x3F), at + 3))
        }
        _ => Err(MUtf8Error::AroundByte(at)),
    }
}

/// Decodes a modified UTF-8 sequence to an owned rust string.
pub fn decode(buf: &[u8]) -> Result<String, MUtf8Error> {
    let mut out = String::with_capacity(buf.len());
    let mut at = 0;
    while at < buf.len() {
        let (unit, next) = next_unit(buf, at)?;
        let scalar = if (0xD800..=0xDBFF).contains(&unit) {
            // high surrogate, the pairing low half must follow
            if next >= buf.len() {
                return Err(MUtf8Error::Truncated(at));
            }
            let (low, after) = next_unit(buf, next)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(MUtf8Error::AroundByte(next));
            }
            at = after;
            0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
        } else {
            at = next;
            unit
        };
        out.push(std::char::from_u32(scalar).ok_or(MUtf8Error::AroundByte(at))?);
    }
    out.shrink_to_fit();
    Ok(out)
}

/// Encodes a string as modified UTF-8.
///
/// This cannot fail: every `&str` is valid UTF-8 and every Unicode scalar
/// value has a modified UTF-8 form.
pub fn encode(str: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(str.len());
    for c in str.chars() {
        let c = c as u32;
        match c {
            0x01..=0x7F => out.push(c as u8),
            // NUL takes the two-byte form so the encoded string is NUL-free
            0x00 | 0x80..=0x7FF => {
                out.push(0xC0 | (c >> 6) as u8);
                out.push(0x80 | (c & 0x3F) as u8);
            }
            0x800..=0xFFFF => {
                out.push(0xE0 | (c >> 12) as u8);
                out.push(0x80 | ((c >> 6) & 0x3F) as u8);
                out.push(0x80 | (c & 0x3F) as u8);
            }
            _ => {
                let c = c - 0x10000;
                let high = 0xD800 | (c >> 10);
                let low = 0xDC00 | (c & 0x3FF);
                for &unit in &[high, low] {
                    out.push(0xE0 | (unit >> 12) as u8);
                    out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                    out.push(0x80 | (unit & 0x3F) as u8);
                }
            }
        }
    }
    out
}
