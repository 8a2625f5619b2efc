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
//! The per-field encoding state machine and the per-class session driving it.

use std::borrow::Cow;

use indexmap::IndexSet;

use crate::attr::ConstantValueAttribute;
use crate::classify::{classify, Classification, FieldDescriptor, Initializer};
use crate::cp::PoolTable;
use crate::{Error, Result};

/// A field moving through `Uninspected → Classified → Interned → Emitted`.
///
/// No transition may be skipped and `Emitted` is terminal. Ineligible fields
/// stop at `Classified`; asking one for an attribute reports
/// [`Error::EmitWithoutValue`].
#[derive(Debug)]
pub struct FieldBinding {
    descriptor: FieldDescriptor,
    state: FieldState,
}

#[derive(Debug)]
enum FieldState {
    Uninspected { initializer: Option<Initializer> },
    Classified(Classification),
    Interned(u16),
    Emitted(u16),
}

impl FieldBinding {
    pub fn new(descriptor: FieldDescriptor, initializer: Option<Initializer>) -> Self {
        Self {
            descriptor,
            state: FieldState::Uninspected { initializer },
        }
    }

    #[inline]
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// The pool index of this field's constant, once one has been interned.
    pub fn pool_index(&self) -> Option<u16> {
        match self.state {
            FieldState::Interned(index) | FieldState::Emitted(index) => Some(index),
            _ => None,
        }
    }

    /// Runs the classifier over this field's initializer.
    ///
    /// Classifying a field that already left `Uninspected` reports
    /// [`Error::DuplicateField`]: fields are processed exactly once per
    /// encoding session.
    pub fn classify(&mut self) -> Result<Classification> {
        let initializer = match &self.state {
            FieldState::Uninspected { initializer } => initializer.as_ref(),
            _ => return Err(Error::DuplicateField(self.descriptor.name.clone())),
        };
        let classification = classify(&self.descriptor, initializer)?;
        self.state = FieldState::Classified(classification.clone());
        Ok(classification)
    }

    /// Interns the classified value into `pool`, returning its index.
    pub fn intern(&mut self, pool: &mut PoolTable) -> Result<u16> {
        match &self.state {
            FieldState::Classified(Classification::Eligible(value)) => {
                let index = pool.intern(value);
                self.state = FieldState::Interned(index);
                Ok(index)
            }
            FieldState::Classified(Classification::Ineligible(_)) => {
                Err(Error::EmitWithoutValue(self.descriptor.name.clone()))
            }
            _ => Err(Error::Invalid(
                "field state",
                format!("`{}` has no pending classification", self.descriptor.name),
            )),
        }
    }

    /// Produces the attribute for an interned field.
    ///
    /// At most one attribute per binding; any state other than `Interned`,
    /// including a second emit, reports [`Error::EmitWithoutValue`].
    pub fn emit(&mut self) -> Result<ConstantValueAttribute> {
        match self.state {
            FieldState::Interned(index) => {
                self.state = FieldState::Emitted(index);
                Ok(ConstantValueAttribute::new(index))
            }
            _ => Err(Error::EmitWithoutValue(self.descriptor.name.clone())),
        }
    }
}

/// One class-encoding session: exclusively owns its [`PoolTable`] and walks
/// the field list sequentially. Independent sessions share nothing, so
/// separate classes may be encoded concurrently.
#[derive(Debug)]
pub struct Session {
    pool: PoolTable,
    seen: IndexSet<Cow<'static, str>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            pool: PoolTable::new(),
            seen: IndexSet::new(),
        }
    }

    #[inline]
    pub fn pool(&self) -> &PoolTable {
        &self.pool
    }

    /// Hands the finished pool to the class-file writer.
    #[inline]
    pub fn into_pool(self) -> PoolTable {
        self.pool
    }

    /// Runs one field through classify, intern and emit.
    ///
    /// `Ok(None)` means the field is ineligible and must be assigned by the
    /// class initializer instead. A type mismatch aborts before interning,
    /// leaving the pool exactly as it was.
    pub fn encode_field(
        &mut self,
        field: &mut FieldBinding,
    ) -> Result<Option<ConstantValueAttribute>> {
        if !self.seen.insert(field.descriptor().name.clone()) {
            return Err(Error::DuplicateField(field.descriptor().name.clone()));
        }
        match field.classify()? {
            Classification::Ineligible(_) => Ok(None),
            Classification::Eligible(_) => {
                field.intern(&mut self.pool)?;
                field.emit().map(Some)
            }
        }
    }

    /// Encodes a whole field list in declaration order, yielding one
    /// attribute slot per field.
    pub fn encode_fields(
        &mut self,
        fields: &mut [FieldBinding],
    ) -> Result<Vec<Option<ConstantValueAttribute>>> {
        fields.iter_mut().map(|f| self.encode_field(f)).collect()
    }
}
