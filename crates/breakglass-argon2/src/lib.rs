// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # breakglass_argon2
//!
//! Native Argon2 backend for [`KeyDerivation`](breakglass_share::KeyDerivation).
//!
//! Turns the operator password and the vault salt into the raw bytes of the
//! composite key, using the algorithm, version and cost parameters carried by
//! [`KdfParams`](breakglass_share::KdfParams).
//!
//! ## Example
//!
//! ```rust
//! use breakglass_argon2::Argon2KeyDerivation;
//! use breakglass_share::{KdfParams, derive_composite_key};
//!
//! let params = KdfParams {
//!     memory_kib: 64,
//!     iterations: 1,
//!     parallelism: 1,
//!     ..KdfParams::default()
//! };
//!
//! let key = derive_composite_key(&Argon2KeyDerivation, b"hunter2", b"vault-salt", &params)
//!     .expect("Failed to derive_composite_key(..)");
//! assert!(!key.is_zeroized());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod kdf;

pub use error::Argon2Error;
pub use kdf::Argon2KeyDerivation;
