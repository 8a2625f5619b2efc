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
use crate::prelude::*;

fn emitted_attr(pool: &mut PoolTable) -> ConstantValueAttribute {
    let mut binding = FieldBinding::new(
        FieldDescriptor::new(
            "a",
            FieldType::Int,
            FieldFlags::ACC_STATIC | FieldFlags::ACC_FINAL,
        ),
        Some(Initializer::Literal(Constant::I32(5))),
    );
    binding.classify().unwrap();
    binding.intern(pool).unwrap();
    binding.emit().unwrap()
}

#[test]
fn attribute_bytes_are_fixed_shape() {
    let mut pool = PoolTable::new();
    let attr = emitted_attr(&mut pool);
    let mut buf = vec![];
    attr.write_to(&mut pool, &mut buf).unwrap();
    // name index 2 (the Utf8 interned at write time), length 2, value index 1
    assert_eq!(buf, vec![0, 2, 0, 0, 0, 2, 0, 1]);
}

#[test]
fn name_is_interned_at_write_time() {
    let mut pool = PoolTable::new();
    let _ = emitted_attr(&mut pool);
    // emission alone leaves the pool at the value entries
    assert_eq!(pool.entries().len(), 1);
}

#[test]
fn attribute_round_trips() {
    let mut pool = PoolTable::new();
    let attr = emitted_attr(&mut pool);
    let mut buf = vec![];
    attr.write_to(&mut pool, &mut buf).unwrap();
    let read = ConstantValueAttribute::read_from(&pool, &mut buf.as_slice()).unwrap();
    assert_eq!(read, attr);
    assert_eq!(pool.constant(read.index()).unwrap(), Constant::I32(5));
}

#[test]
fn read_rejects_wrong_name() {
    let mut pool = PoolTable::new();
    let value = pool.intern(&Constant::I32(5));
    let mut buf = vec![];
    // name index points at the Integer entry instead of a Utf8
    value.write_to(&mut buf).unwrap();
    CONSTANT_VALUE_LEN.write_to(&mut buf).unwrap();
    value.write_to(&mut buf).unwrap();
    assert!(matches!(
        ConstantValueAttribute::read_from(&pool, &mut buf.as_slice()),
        Err(Error::Invalid("attribute name index", _))
    ));
}

#[test]
fn read_rejects_bad_length() {
    let mut pool = PoolTable::new();
    let value = pool.intern(&Constant::I32(5));
    let name = pool.intern_raw(RawPoolEntry::Utf8(CONSTANT_VALUE.into()));
    let mut buf = vec![];
    name.write_to(&mut buf).unwrap();
    3u32.write_to(&mut buf).unwrap();
    value.write_to(&mut buf).unwrap();
    assert!(matches!(
        ConstantValueAttribute::read_from(&pool, &mut buf.as_slice()),
        Err(Error::Invalid("attribute length", _))
    ));
}

#[test]
fn read_rejects_dangling_value_index() {
    let mut pool = PoolTable::new();
    let name = pool.intern_raw(RawPoolEntry::Utf8(CONSTANT_VALUE.into()));
    let mut buf = vec![];
    name.write_to(&mut buf).unwrap();
    CONSTANT_VALUE_LEN.write_to(&mut buf).unwrap();
    99u16.write_to(&mut buf).unwrap();
    assert!(matches!(
        ConstantValueAttribute::read_from(&pool, &mut buf.as_slice()),
        Err(Error::MalformedPoolIndex(99))
    ));
}
