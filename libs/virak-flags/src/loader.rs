// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Copy validated flag values into a typed options struct

use crate::binder::{Binding, Flags, Options};
use crate::error::BindError;
use crate::values::FlagValue;

impl<T: Options> Flags<T> {
    /// Build `T` from the current flag values.
    ///
    /// Starts from `T::default()` and runs every field's setter, so a flag the
    /// user never touched loads as its declared default.
    pub fn load(&self) -> Result<T, BindError> {
        let mut options = T::default();
        for field in T::fields() {
            let value = self
                .value(field.name)
                .ok_or_else(|| BindError::UnknownFlag(field.name.to_string()))?;
            let mismatch = |expected: &'static str| BindError::KindMismatch {
                flag: field.name.to_string(),
                expected,
                found: value.kind(),
            };
            match (&field.binding, value) {
                (Binding::Str { set, .. }, FlagValue::Str(s)) => set(&mut options, s.clone()),
                (Binding::Bool { set, .. }, FlagValue::Bool(b)) => set(&mut options, *b),
                (Binding::Int { set, .. }, FlagValue::Int(n)) => set(&mut options, *n),
                (Binding::StrList { set, .. }, FlagValue::StrList(items)) => {
                    set(&mut options, items.clone())
                }
                (Binding::Str { .. }, _) => return Err(mismatch("string")),
                (Binding::Bool { .. }, _) => return Err(mismatch("bool")),
                (Binding::Int { .. }, _) => return Err(mismatch("int")),
                (Binding::StrList { .. }, _) => return Err(mismatch("string list")),
            }
        }
        Ok(options)
    }
}
