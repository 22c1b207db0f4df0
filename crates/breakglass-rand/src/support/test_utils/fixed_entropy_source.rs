// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Deterministic entropy source for reproducible tests.
///
/// Emits a running byte counter starting at `seed`. The stream continues
/// across calls, so two consecutive fills never return the same bytes
/// (until the counter wraps after 256 bytes).
///
/// **Never** use this outside tests.
pub struct FixedEntropySource {
    next: Cell<u8>,
}

impl FixedEntropySource {
    /// Creates a source whose first emitted byte is `seed`.
    pub fn new(seed: u8) -> Self {
        Self {
            next: Cell::new(seed),
        }
    }
}

impl EntropySource for FixedEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for byte in dest.iter_mut() {
            let value = self.next.get();
            *byte = value;
            self.next.set(value.wrapping_add(1));
        }

        Ok(())
    }
}
