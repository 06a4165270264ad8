// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::PathBuf;

/// Get the virak configuration directory
///
/// Priority:
/// 1. VIRAK_CONFIG_DIR environment variable
/// 2. ~/.virak-cli/
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("VIRAK_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".virak-cli")
}

/// Get the path to the config file
pub fn config_file() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Get the directory holding the application log
pub fn log_dir() -> PathBuf {
    config_dir().join("logs")
}
