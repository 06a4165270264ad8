// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! ULID syntax check
//!
//! A ULID is 26 characters of Crockford base32 encoding a 48-bit timestamp
//! followed by 80 bits of randomness. 26 characters carry 130 bits, so the
//! leading character may only use the low 3 bits (`0`-`7`).

const ULID_LEN: usize = 26;

fn is_crockford(c: u8) -> bool {
    matches!(c.to_ascii_uppercase(), b'0'..=b'9' | b'A'..=b'H' | b'J' | b'K' | b'M' | b'N' | b'P'..=b'T' | b'V'..=b'Z')
}

/// Whether `s` is a syntactically valid ULID (case-insensitive)
pub fn is_valid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != ULID_LEN {
        return false;
    }
    if !matches!(bytes[0], b'0'..=b'7') {
        return false;
    }
    bytes.iter().all(|&c| is_crockford(c))
}
