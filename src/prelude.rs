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
//! Re-exports

pub use std::borrow::Cow;
pub use std::io::{Read, Write};

pub use crate::access::*;
pub use crate::attr::*;
pub use crate::classify::*;
pub use crate::constants::*;
pub use crate::cp::*;
pub use crate::encode::*;
pub use crate::ty::*;
pub use crate::{Error, ReadWrite, Result};
