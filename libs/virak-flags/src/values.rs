// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Flag values and the read-only accessor used by validation rules

use std::fmt;

/// A parsed flag value, one variant per supported flag kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Str(String),
    Bool(bool),
    Int(i64),
    StrList(Vec<String>),
}

impl FlagValue {
    /// Name of the kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::StrList(_) => "string list",
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::StrList(items) => f.write_str(&items.join(",")),
        }
    }
}

/// Read-only view over the current flag values of one invocation.
///
/// Rules are written against this trait rather than against clap's
/// `ArgMatches`, so they can be exercised with any backing store.
pub trait Values {
    /// String form of a flag. Ints render as decimal, lists are comma
    /// joined, and bool or unknown flags read as the empty string.
    fn get_string(&self, name: &str) -> String;

    /// Bool value of a flag; false for non-bool or unknown flags.
    fn get_bool(&self, name: &str) -> bool;

    /// Whether the user supplied the flag explicitly on the command line.
    fn changed(&self, name: &str) -> bool;
}
