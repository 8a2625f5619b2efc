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
use crate::mod_utf8::{decode, encode, MUtf8Error};

#[test]
fn ascii_is_encoded_verbatim() {
    assert_eq!(encode("ConstantValue"), b"ConstantValue".to_vec());
    assert_eq!(decode(b"ConstantValue").unwrap(), "ConstantValue");
}

#[test]
fn nul_takes_the_two_byte_form() {
    assert_eq!(encode("\u{0000}"), vec![0xC0, 0x80]);
    assert_eq!(decode(&[0xC0, 0x80]).unwrap(), "\u{0000}");
    // no byte of an encoded string may be zero
    assert!(!encode("a\u{0000}b").contains(&0));
}

#[test]
fn two_byte_form() {
    // U+03A9 GREEK CAPITAL LETTER OMEGA
    assert_eq!(encode("Ω"), vec![0xCE, 0xA9]);
    assert_eq!(decode(&[0xCE, 0xA9]).unwrap(), "Ω");
}

#[test]
fn three_byte_form() {
    // U+FF34 FULLWIDTH LATIN CAPITAL LETTER T
    assert_eq!(encode("Ｔ"), vec![0xEF, 0xBC, 0xB4]);
    assert_eq!(decode(&[0xEF, 0xBC, 0xB4]).unwrap(), "Ｔ");
}

#[test]
fn supplementary_takes_the_surrogate_form() {
    // U+1F600 encodes as the pair D83D/DE00, three bytes each
    let bytes = vec![0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80];
    assert_eq!(encode("\u{1F600}"), bytes);
    assert_eq!(decode(&bytes).unwrap(), "\u{1F600}");
}

#[test]
fn mixed_round_trip() {
    let s = "value\u{0000}Ω\u{1F600}end";
    assert_eq!(decode(&encode(s)).unwrap(), s);
}

#[test]
fn truncated_unit_is_rejected() {
    assert!(matches!(decode(&[0xCE]), Err(MUtf8Error::Truncated(0))));
    assert!(matches!(decode(&[0xEF, 0xBC]), Err(MUtf8Error::Truncated(0))));
}

#[test]
fn stray_continuation_byte_is_rejected() {
    assert!(matches!(decode(&[0x80]), Err(MUtf8Error::AroundByte(0))));
    assert!(matches!(decode(&[0xCE, 0x29]), Err(MUtf8Error::AroundByte(1))));
}

#[test]
fn unpaired_high_surrogate_is_rejected() {
    // D83D followed by a plain ASCII byte instead of the low half
    assert!(decode(&[0xED, 0xA0, 0xBD, 0x41]).is_err());
}
