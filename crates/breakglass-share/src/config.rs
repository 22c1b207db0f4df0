// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key derivation parameters.

/// Argon2 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KdfAlgorithm {
    /// Data-dependent addressing (KDBX4 default).
    #[default]
    Argon2d,
    /// Hybrid addressing.
    Argon2id,
}

/// Argon2 version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KdfVersion {
    /// Version 0x10.
    V0x10,
    /// Version 0x13.
    #[default]
    V0x13,
}

/// Parameters handed to a [`KeyDerivation`](crate::KeyDerivation).
///
/// Vault containers carry these in their header; [`Default`] matches the
/// KDBX4 defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    /// Argon2 variant.
    pub algorithm: KdfAlgorithm,
    /// Argon2 version.
    pub version: KdfVersion,
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
    /// Requested output length in bytes. Anything but 32 is rejected by
    /// [`derive_composite_key`](crate::derive_composite_key).
    pub output_len: usize,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            algorithm: KdfAlgorithm::Argon2d,
            version: KdfVersion::V0x13,
            memory_kib: 64 * 1024,
            iterations: 2,
            parallelism: 2,
            output_len: crate::key::KEY_LEN,
        }
    }
}
