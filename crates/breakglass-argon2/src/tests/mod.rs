// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


use breakglass_share::KdfParams;

/// Low-cost parameters; production defaults take seconds per derivation.
pub(crate) fn cheap_params() -> KdfParams {
    KdfParams {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
        ..KdfParams::default()
    }
}
