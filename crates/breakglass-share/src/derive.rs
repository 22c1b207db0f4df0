// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tracing::warn;

use crate::config::KdfParams;
use crate::error::DeriveError;
use crate::key::CompositeKey;
use crate::traits::KeyDerivation;

/// Runs `kdf` and checks that it produced exactly 32 bytes.
///
/// The raw derivation output is zeroized before returning, on success and
/// on failure.
///
/// # Errors
///
/// - [`DeriveError::Backend`] if the backend fails.
/// - [`DeriveError::Input`] with [`InputError::KeyLength`](crate::InputError::KeyLength)
///   if the output is not 32 bytes.
pub fn derive_composite_key<K: KeyDerivation>(
    kdf: &K,
    password: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<CompositeKey, DeriveError> {
    let raw = kdf
        .derive(password, salt, params)
        .map_err(|err| DeriveError::Backend(err.to_string()))?;

    CompositeKey::try_from_slice(&raw).map_err(|err| {
        warn!(actual = raw.len(), "key derivation returned wrong key length");
        DeriveError::from(err)
    })
}
