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
//! The constant pool and its entries.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::io::{Read, Write};

use indexmap::IndexMap;

use crate::constants::*;
use crate::{Error, ReadWrite, Result};

/// A constant value eligible for pool-backed storage.
///
/// Narrow integer kinds (byte, short, char, boolean) have no variant of their
/// own: the pool defines no entry narrower than Integer, so their values
/// arrive here already widened to `I32`.
#[derive(Clone, PartialEq, Debug)]
pub enum Constant {
    /// A 32 bit integer.
    I32(i32),
    /// A single-precision floating-point number.
    F32(f32),
    /// A 64 bit integer.
    I64(i64),
    /// A double-precision floating-point number.
    F64(f64),
    /// A String.
    String(Cow<'static, str>),
}

impl Constant {
    /// returns `true` if this constant is an `i64` or `f64`, i.e. `long` or
    /// `double` in java. Their pool entries take two slots.
    #[inline]
    pub fn is_wide(&self) -> bool {
        matches!(self, Constant::I64(_) | Constant::F64(_))
    }

    /// Creates an instance of Constant that is a string.
    #[inline]
    pub fn string<T: Into<Cow<'static, str>>>(s: T) -> Self {
        Self::String(s.into())
    }
}

#[allow(clippy::derive_hash_xor_eq)]
// Hash by the actual bits of the fp values because that is what will be
// written in byte form.
impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Constant::I32(i) => i.hash(state),
            Constant::F32(f) => f.to_bits().hash(state),
            Constant::I64(i) => i.hash(state),
            Constant::F64(f) => f.to_bits().hash(state),
            Constant::String(s) => s.hash(state),
        }
    }
}

/// A raw constant pool entry as laid out on the wire.
#[derive(Clone, PartialEq, Debug)]
pub enum RawPoolEntry {
    /// Tag 1, a length-prefixed modified UTF-8 run.
    Utf8(Cow<'static, str>),
    /// Tag 3.
    Int(i32),
    /// Tag 4.
    Float(f32),
    /// Tag 5, two slots.
    Long(i64),
    /// Tag 6, two slots.
    Double(f64),
    /// Tag 8, references a Utf8 entry by index.
    Str(u16),
}

/// Deduplication key of an entry: the kind plus the exact bit pattern.
///
/// Floats are keyed by `to_bits`, never numerically, so `+0.0` and `-0.0`
/// intern separately and NaN payloads survive. Equality is not cross-kind:
/// an Integer 42 and a Long 42 occupy distinct entries.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum PoolKey {
    Utf8(Cow<'static, str>),
    Int(i32),
    Float(u32),
    Long(i64),
    Double(u64),
    Str(u16),
}

impl RawPoolEntry {
    /// The tag byte written before the entry's payload.
    #[inline]
    pub fn tag(&self) -> u8 {
        match self {
            RawPoolEntry::Utf8(_) => POOL_UTF8,
            RawPoolEntry::Int(_) => POOL_INTEGER,
            RawPoolEntry::Float(_) => POOL_FLOAT,
            RawPoolEntry::Long(_) => POOL_LONG,
            RawPoolEntry::Double(_) => POOL_DOUBLE,
            RawPoolEntry::Str(_) => POOL_STRING,
        }
    }

    /// returns the number of pool slots this entry takes. Long and Double
    /// entries take two; the slot after theirs is reserved and unusable.
    #[inline]
    pub fn slots(&self) -> u16 {
        match self {
            RawPoolEntry::Long(_) | RawPoolEntry::Double(_) => 2,
            _ => 1,
        }
    }

    pub(crate) fn key(&self) -> PoolKey {
        match self {
            RawPoolEntry::Utf8(s) => PoolKey::Utf8(s.clone()),
            RawPoolEntry::Int(i) => PoolKey::Int(*i),
            RawPoolEntry::Float(f) => PoolKey::Float(f.to_bits()),
            RawPoolEntry::Long(l) => PoolKey::Long(*l),
            RawPoolEntry::Double(d) => PoolKey::Double(d.to_bits()),
            RawPoolEntry::Str(u) => PoolKey::Str(*u),
        }
    }
}

impl ReadWrite for RawPoolEntry {
    fn read_from<T: Read>(reader: &mut T) -> Result<Self> {
        Ok(match u8::read_from(reader)? {
            POOL_UTF8 => RawPoolEntry::Utf8(String::read_from(reader)?.into()),
            POOL_INTEGER => RawPoolEntry::Int(i32::read_from(reader)?),
            POOL_FLOAT => RawPoolEntry::Float(f32::read_from(reader)?),
            POOL_LONG => RawPoolEntry::Long(i64::read_from(reader)?),
            POOL_DOUBLE => RawPoolEntry::Double(f64::read_from(reader)?),
            POOL_STRING => RawPoolEntry::Str(u16::read_from(reader)?),
            tag => return Err(Error::Invalid("constant pool tag", tag.to_string())),
        })
    }

    fn write_to<T: Write>(&self, writer: &mut T) -> Result<()> {
        self.tag().write_to(writer)?;
        match self {
            RawPoolEntry::Utf8(s) => s.as_ref().to_owned().write_to(writer),
            RawPoolEntry::Int(i) => i.write_to(writer),
            RawPoolEntry::Float(f) => f.write_to(writer),
            RawPoolEntry::Long(l) => l.write_to(writer),
            RawPoolEntry::Double(d) => d.write_to(writer),
            RawPoolEntry::Str(u) => u.write_to(writer),
        }
    }
}

/// A class's constant pool, owned by one encoding session.
///
/// Entries are 1-indexed (index 0 is reserved by the format and never
/// allocated) and append-only; interning the same (kind, value) pair twice
/// returns the same index both times. For a fixed sequence of intern calls
/// the assigned indices are fully deterministic.
#[derive(Debug)]
pub struct PoolTable {
    entries: Vec<RawPoolEntry>,
    /// Not the entry count: the next free index, starting at 1 and advancing
    /// by two for each wide entry. Written as `constant_pool_count`.
    len: u16,
    dedup: IndexMap<PoolKey, u16>,
}

impl PoolTable {
    /// Creates an empty constant pool.
    pub fn new() -> Self {
        Self {
            entries: vec![],
            len: 1,
            dedup: IndexMap::new(),
        }
    }

    /// The `constant_pool_count` value: one past the last allocated slot.
    #[inline]
    pub fn count(&self) -> u16 {
        self.len
    }

    /// The entries in allocation order, without the reserved-slot gaps.
    #[inline]
    pub fn entries(&self) -> &[RawPoolEntry] {
        &self.entries
    }

    /// Interns a constant, returning the index of its entry.
    ///
    /// String constants intern their Utf8 entry first and then a String
    /// entry referencing it, so a fresh string costs two entries.
    pub fn intern(&mut self, value: &Constant) -> u16 {
        match value {
            Constant::I32(i) => self.intern_raw(RawPoolEntry::Int(*i)),
            Constant::F32(f) => self.intern_raw(RawPoolEntry::Float(*f)),
            Constant::I64(l) => self.intern_raw(RawPoolEntry::Long(*l)),
            Constant::F64(d) => self.intern_raw(RawPoolEntry::Double(*d)),
            Constant::String(s) => {
                let utf8 = self.intern_raw(RawPoolEntry::Utf8(s.clone()));
                self.intern_raw(RawPoolEntry::Str(utf8))
            }
        }
    }

    /// Interns a raw entry, returning the existing index on a (kind, bits)
    /// match and appending otherwise.
    pub fn intern_raw(&mut self, entry: RawPoolEntry) -> u16 {
        let key = entry.key();
        if let Some(&idx) = self.dedup.get(&key) {
            return idx;
        }
        let idx = self.len;
        self.len += entry.slots();
        self.entries.push(entry);
        self.dedup.insert(key, idx);
        idx
    }

    /// Looks up the entry at `idx`.
    ///
    /// Index 0, indices past the pool, and indices pointing into the reserved
    /// slot after a wide entry all report [`Error::MalformedPoolIndex`].
    pub fn get(&self, idx: u16) -> Result<&RawPoolEntry> {
        let mut at = 1u16;
        for entry in &self.entries {
            if at == idx {
                return Ok(entry);
            }
            at += entry.slots();
            if at > idx {
                break;
            }
        }
        Err(Error::MalformedPoolIndex(idx))
    }

    /// Recovers the constant stored at `idx`, resolving String entries
    /// through their Utf8 target.
    pub fn constant(&self, idx: u16) -> Result<Constant> {
        Ok(match self.get(idx)? {
            RawPoolEntry::Int(i) => Constant::I32(*i),
            RawPoolEntry::Float(f) => Constant::F32(*f),
            RawPoolEntry::Long(l) => Constant::I64(*l),
            RawPoolEntry::Double(d) => Constant::F64(*d),
            RawPoolEntry::Str(u) => match self.get(*u)? {
                RawPoolEntry::Utf8(s) => Constant::String(s.clone()),
                _ => return Err(Error::Invalid("String entry target", u.to_string())),
            },
            RawPoolEntry::Utf8(_) => {
                return Err(Error::Invalid(
                    "constant pool entry",
                    format!("index {} is not a loadable constant", idx),
                ))
            }
        })
    }
}

impl Default for PoolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadWrite for PoolTable {
    fn read_from<T: Read>(reader: &mut T) -> Result<Self> {
        let count = u16::read_from(reader)?;
        let mut pool = PoolTable::new();
        while pool.len < count {
            let entry = RawPoolEntry::read_from(reader)?;
            let idx = pool.len;
            pool.len += entry.slots();
            // rebuild the dedup map so a reader can re-run interning
            // idempotently; first occurrence wins on (malformed) duplicates
            pool.dedup.entry(entry.key()).or_insert(idx);
            pool.entries.push(entry);
        }
        if pool.len != count {
            return Err(Error::Invalid("constant pool count", count.to_string()));
        }
        Ok(pool)
    }

    fn write_to<T: Write>(&self, writer: &mut T) -> Result<()> {
        self.len.write_to(writer)?;
        for entry in &self.entries {
            entry.write_to(writer)?;
        }
        Ok(())
    }
}
