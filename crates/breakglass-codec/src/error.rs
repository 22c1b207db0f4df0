// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors produced by the base-32 codec.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum Base32Error {
    /// Encoding would leave a partial 5-bit group behind.
    #[error("length of data encoded to base32 has to be a multiple of five (got {len} bytes)")]
    EncodeLength {
        /// Input length in bytes.
        len: usize,
    },

    /// Decoding would leave a partial byte behind.
    #[error("length of data decoded from base32 has to be a multiple of eight (got {len} characters)")]
    DecodeLength {
        /// Input length in characters.
        len: usize,
    },

    /// A character outside the alphabet was found.
    #[error("invalid base32 character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the input.
        position: usize,
    },
}
