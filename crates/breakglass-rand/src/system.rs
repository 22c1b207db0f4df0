// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

pub(crate) type FillFn = fn(&mut [u8]) -> Result<(), getrandom::Error>;

/// The operating system's CSPRNG, reached through `getrandom`.
///
/// Share generation runs against this source only. There is no userspace
/// fallback generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

/// Fills `dest` with `fill`. On failure `dest` is zero-filled, so a partial
/// draw never reaches a fragment.
pub(crate) fn draw(fill: FillFn, dest: &mut [u8]) -> Result<(), EntropyError> {
    if fill(dest).is_err() {
        dest.fill(0);
        return Err(EntropyError::EntropyNotAvailable);
    }

    Ok(())
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        draw(getrandom::fill, dest)
    }
}
