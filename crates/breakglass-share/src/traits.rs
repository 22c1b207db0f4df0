// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroizing;

use crate::config::KdfParams;
use crate::key::CompositeKey;

/// Capability that turns an operator password into composite key bytes.
///
/// The core depends on this trait only, so native and sandboxed backends are
/// interchangeable. The output length is checked by
/// [`derive_composite_key`](crate::derive_composite_key), not here.
pub trait KeyDerivation {
    /// Backend error.
    type Error: core::fmt::Display;

    /// Derives raw key bytes from `password` and `salt`.
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &KdfParams,
    ) -> Result<Zeroizing<Vec<u8>>, Self::Error>;
}

/// Capability that opens the protected vault with a composite key.
pub trait Vault {
    /// What a successful open yields (e.g. decrypted records).
    type Output;
    /// Rejection reason, e.g. a wrong key.
    type Error;

    /// Attempts to open the vault. Implementations must not retain `key`.
    fn open(&self, key: &CompositeKey) -> Result<Self::Output, Self::Error>;
}
