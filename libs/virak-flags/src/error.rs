// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for virak-flags

use thiserror::Error;

/// A flag value rejected by a validation rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Flag was neither set nor given a usable default
    #[error("required flag --{0} not set")]
    Required(String),

    /// Value outside the allowed set
    #[error("invalid value \"{value}\" for --{flag}: must be one of {}", allowed.join(", "))]
    NotOneOf {
        flag: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Flag required because of other flags' values
    #[error("flag --{0} is required for this combination of flags")]
    RequiredIf(String),

    /// Both flags of an exclusive pair were set
    #[error("flags --{0} and --{1} cannot be used together")]
    MutuallyExclusive(String, String),

    /// Not exactly one flag of a group was set
    #[error("exactly one of {} must be set (got {count})", flags.iter().map(|f| format!("--{f}")).collect::<Vec<_>>().join(", "))]
    ExactlyOne { flags: Vec<String>, count: usize },

    /// Value is not a ULID
    #[error("--{flag} must be a valid ULID, got \"{value}\"")]
    InvalidUlid { flag: String, value: String },

    /// Value shorter than the minimum byte length
    #[error("--{flag} must be at least {min} characters long")]
    TooShort { flag: String, min: usize },

    /// Value longer than the maximum byte length
    #[error("--{flag} must be at most {max} characters long")]
    TooLong { flag: String, max: usize },
}

/// Failure to move parsed flag values into an options struct
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The binding names a flag that was never registered
    #[error("flag --{0} is not registered")]
    UnknownFlag(String),

    /// The registered flag holds a different kind than the binding expects
    #[error("flag --{flag} holds a {found} value, expected {expected}")]
    KindMismatch {
        flag: String,
        expected: &'static str,
        found: &'static str,
    },
}
