// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors from the Argon2 backend.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum Argon2Error {
    /// Cost parameters or output length rejected by Argon2.
    #[error("invalid argon2 parameters: {0}")]
    InvalidParams(argon2::Error),

    /// Hashing failed, e.g. a salt shorter than 8 bytes.
    #[error("argon2 hashing failed: {0}")]
    Hashing(argon2::Error),
}
