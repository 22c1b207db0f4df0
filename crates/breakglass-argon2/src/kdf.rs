// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use argon2::{Algorithm, Argon2, Params, Version};
use breakglass_share::{KdfAlgorithm, KdfParams, KdfVersion, KeyDerivation};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Argon2Error;

/// Argon2 key derivation running in-process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2KeyDerivation;

fn algorithm(algorithm: KdfAlgorithm) -> Algorithm {
    match algorithm {
        KdfAlgorithm::Argon2d => Algorithm::Argon2d,
        KdfAlgorithm::Argon2id => Algorithm::Argon2id,
    }
}

fn version(version: KdfVersion) -> Version {
    match version {
        KdfVersion::V0x10 => Version::V0x10,
        KdfVersion::V0x13 => Version::V0x13,
    }
}

impl KeyDerivation for Argon2KeyDerivation {
    type Error = Argon2Error;

    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &KdfParams,
    ) -> Result<Zeroizing<Vec<u8>>, Self::Error> {
        let argon2_params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            Some(params.output_len),
        )
        .map_err(Argon2Error::InvalidParams)?;

        debug!(
            algorithm = ?params.algorithm,
            memory_kib = params.memory_kib,
            iterations = params.iterations,
            parallelism = params.parallelism,
            "deriving composite key"
        );

        let argon2 = Argon2::new(
            algorithm(params.algorithm),
            version(params.version),
            argon2_params,
        );

        // Allocated once at final size; zeroized on every exit path.
        let mut output = Zeroizing::new(vec![0u8; params.output_len]);
        argon2
            .hash_password_into(password, salt, output.as_mut_slice())
            .map_err(Argon2Error::Hashing)?;

        Ok(output)
    }
}
