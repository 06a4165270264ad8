// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tracing setup: a JSON application log plus optional stderr output

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::paths;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "VIRAK_LOG";

const DEFAULT_FILTER: &str = "virak=info,virak_client=info,virak_flags=info";
const VERBOSE_FILTER: &str = "virak=debug,virak_client=debug,virak_flags=debug";

/// Install the global subscriber.
///
/// Failing to open the log file is not fatal; the command still runs, only
/// without a file log.
pub fn init(disable_log: bool, verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let file_layer = if disable_log {
        None
    } else {
        match open_log_file() {
            Ok(file) => Some(fmt::layer().json().with_writer(Mutex::new(file))),
            Err(e) => {
                eprintln!("warning: application log disabled: {e}");
                None
            }
        }
    };

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
}

fn open_log_file() -> std::io::Result<std::fs::File> {
    let dir = paths::log_dir();
    std::fs::create_dir_all(&dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("app.log"))
}
