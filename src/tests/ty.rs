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

#[test]
fn descriptors_round_trip() {
    let kinds = [
        FieldType::Byte,
        FieldType::Char,
        FieldType::Double,
        FieldType::Float,
        FieldType::Int,
        FieldType::Long,
        FieldType::Short,
        FieldType::Boolean,
        FieldType::String,
    ];
    for &ty in &kinds {
        assert_eq!(ty.to_string().parse::<FieldType>().unwrap(), ty);
    }
}

#[test]
fn unknown_descriptors_are_rejected() {
    assert!("V".parse::<FieldType>().is_err());
    assert!("[I".parse::<FieldType>().is_err());
    assert!("Ljava/lang/Object;".parse::<FieldType>().is_err());
}

#[test]
fn wideness_and_integer_family() {
    assert!(FieldType::Long.is_wide());
    assert!(FieldType::Double.is_wide());
    assert!(!FieldType::Int.is_wide());

    assert!(FieldType::Byte.is_integer_family());
    assert!(FieldType::Short.is_integer_family());
    assert!(FieldType::Char.is_integer_family());
    assert!(FieldType::Boolean.is_integer_family());
    assert!(FieldType::Int.is_integer_family());
    assert!(!FieldType::Long.is_integer_family());
    assert!(!FieldType::String.is_integer_family());
}
