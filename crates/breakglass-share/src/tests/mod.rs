// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod split;

use crate::key::{CompositeKey, KEY_LEN};

/// Key bytes `0x01..=0x20`.
pub(crate) fn ascending_key_bytes() -> [u8; KEY_LEN] {
    let mut bytes = [0u8; KEY_LEN];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = i as u8 + 1;
    }
    bytes
}

pub(crate) fn ascending_key() -> CompositeKey {
    let mut bytes = ascending_key_bytes();
    CompositeKey::from_mut(&mut bytes)
}

pub(crate) fn xor_all(fragments: &[[u8; KEY_LEN]]) -> [u8; KEY_LEN] {
    let mut result = [0u8; KEY_LEN];
    for fragment in fragments {
        for (byte, other) in result.iter_mut().zip(fragment.iter()) {
            *byte ^= *other;
        }
    }
    result
}
