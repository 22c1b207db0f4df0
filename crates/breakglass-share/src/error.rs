// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use breakglass_codec::Base32Error;
use breakglass_rand::EntropyError;
use thiserror::Error;

use crate::reconstruct::SlotStatus;

/// Share envelope and transcription errors.
///
/// Each variant calls for a different remediation by the operator, so they
/// are never collapsed into one generic failure.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum FormatError {
    /// Wrong number of characters or bytes.
    #[error("length requirement not met: expected {expected}, got {actual}")]
    Length {
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },

    /// Version byte is not one this crate understands.
    #[error("unrecognized key format (version {0})")]
    UnrecognizedVersion(u8),

    /// CRC residue over the envelope is not zero.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Codec failure other than a length violation.
    #[error("Base32Error: {0}")]
    Encoding(Base32Error),
}

impl From<Base32Error> for FormatError {
    fn from(err: Base32Error) -> Self {
        match err {
            Base32Error::EncodeLength { len } => FormatError::Length {
                expected: crate::share::ENVELOPE_LEN,
                actual: len,
            },
            Base32Error::DecodeLength { len } => FormatError::Length {
                expected: crate::share::ENCODED_LEN,
                actual: len,
            },
            other => FormatError::Encoding(other),
        }
    }
}

/// Invalid input handed to the core by its callers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum InputError {
    /// Composite key from key derivation is not 32 bytes.
    #[error("expected key length 32, got {actual}")]
    KeyLength {
        /// Observed length.
        actual: usize,
    },

    /// A split into zero shares was requested.
    #[error("invalid number of shares, has to be 1 or more")]
    NoShares,

    /// Storage for the requested number of fragments cannot be allocated.
    #[error("cannot allocate {requested} shares")]
    TooManyShares {
        /// Requested share count.
        requested: usize,
    },
}

/// Conditions that abort an operation outright.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum FatalError {
    /// The CSPRNG failed. There is no fallback source.
    #[error("cryptographically secure random source unavailable")]
    RandomSourceUnavailable,
}

impl From<EntropyError> for FatalError {
    fn from(err: EntropyError) -> Self {
        match err {
            EntropyError::EntropyNotAvailable => FatalError::RandomSourceUnavailable,
        }
    }
}

/// Errors from splitting a key into shares.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SplitError {
    #[error("InputError: {0}")]
    Input(#[from] InputError),

    #[error("FatalError: {0}")]
    Fatal(#[from] FatalError),

    #[error("FormatError: {0}")]
    Format(#[from] FormatError),
}

impl From<EntropyError> for SplitError {
    fn from(err: EntropyError) -> Self {
        SplitError::Fatal(err.into())
    }
}

/// Errors from recombining shares.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ReconstructError {
    /// No slots were supplied at all.
    #[error("no share slots supplied")]
    NoSlots,

    /// At least one slot is empty or invalid. No key material was produced.
    #[error(
        "{} of {} share slots are empty or invalid",
        .statuses.iter().filter(|status| !status.is_valid()).count(),
        .statuses.len()
    )]
    NotReady {
        /// Per-slot outcome, in slot order.
        statuses: Vec<SlotStatus>,
    },
}

/// Errors from a full unlock attempt.
#[derive(Debug, Error)]
pub enum UnlockError<E> {
    #[error("ReconstructError: {0}")]
    Reconstruct(#[from] ReconstructError),

    /// The vault refused the reconstructed key (wrong share set).
    #[error("failed opening vault, maybe wrong shares: {0}")]
    Rejected(E),
}

/// Errors at the key derivation boundary.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum DeriveError {
    #[error("InputError: {0}")]
    Input(#[from] InputError),

    /// The derivation backend failed.
    #[error("key derivation failed: {0}")]
    Backend(String),
}
