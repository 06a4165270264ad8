// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for virak-client

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) calls
#[derive(Error, Debug)]
pub enum Error {
    /// The configured base URL could not be parsed
    #[error("invalid API URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A path value would not stay a single URL segment
    #[error("invalid request path {path}")]
    InvalidPath { path: String },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request deadline elapsed
    #[error("request to {path} timed out")]
    Timeout { path: String },

    /// Connection or protocol failure
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API rejected the token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Error body returned by the API, e.g.
/// `{"message": "The given data was invalid.", "errors": {"name": ["..."]}}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    message: Option<String>,
    errors: BTreeMap<String, Vec<String>>,
}

/// Build a human-readable message from an error response body
pub(crate) fn api_message(status: reqwest::StatusCode, body: &str) -> String {
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string()
    };

    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        let trimmed = body.trim();
        return if trimmed.is_empty() || trimmed.starts_with('<') {
            fallback()
        } else {
            trimmed.to_string()
        };
    };

    let mut message = parsed.message.unwrap_or_else(fallback);
    let details: Vec<String> = parsed
        .errors
        .iter()
        .flat_map(|(field, msgs)| msgs.iter().map(move |m| format!("{field}: {m}")))
        .collect();
    if !details.is_empty() {
        message.push_str(" (");
        message.push_str(&details.join("; "));
        message.push(')');
    }
    message
}
