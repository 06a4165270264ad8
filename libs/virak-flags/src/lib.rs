// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Declarative flag binding and validation for the Virak CLI
//!
//! Commands declare their flags as an options struct with [`options!`]. The
//! struct plugs into clap through [`Flags`], which registers one argument per
//! field and captures the parsed values along with whether the user set each
//! flag explicitly. Before the command body runs, the captured values are
//! checked with a list of [`Rule`]s and then loaded back into the struct:
//!
//! ```ignore
//! let rules = [rules::required("name"), rules::one_of("policy", &["Private", "Public"])];
//! rules::validate(&flags, &rules)?;
//! let opts: CreateOptions = flags.load()?;
//! ```
//!
//! Supported flag kinds form a closed set (string, bool, int, string list),
//! so a field of any other type is rejected at compile time.

pub mod binder;
pub mod error;
mod loader;
mod macros;
pub mod rules;
pub mod ulid;
pub mod values;

pub use binder::{
    Binding, DEFAULT_ZONE_FLAG, Field, FlagSpec, Flags, Options, ZONE_ID_FLAG, bind, specs,
};
pub use error::{BindError, ValidationError};
pub use rules::{Rule, validate};
pub use values::{FlagValue, Values};
