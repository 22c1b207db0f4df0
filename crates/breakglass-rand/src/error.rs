// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Failure to obtain random bytes.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EntropyError {
    /// The OS CSPRNG failed or is unavailable. Callers must abort.
    #[error("system entropy source unavailable")]
    EntropyNotAvailable,
}
