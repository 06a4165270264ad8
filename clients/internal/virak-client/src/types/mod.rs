// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request and response types for the Virak Cloud API
//!
//! Response types are lenient: every field has a default so that fields the
//! API omits, or adds later, never break decoding.

mod bucket;
mod cluster;
mod dns;
mod finance;
mod instance;
mod network;
mod user;
mod zone;

pub use bucket::*;
pub use cluster::*;
pub use dns::*;
pub use finance::*;
pub use instance::*;
pub use network::*;
pub use user::*;
pub use zone::*;
