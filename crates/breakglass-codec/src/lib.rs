// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # breakglass_codec
//!
//! Leaf encodings used to transcribe break-glass shares by hand.
//!
//! - [`base32`]: restricted base-32 over [`ALPHABET`], which omits the
//!   visually ambiguous glyphs `0`, `1`, `O` and `I`.
//! - [`crc16`]: table-driven CRC-16-CCITT (polynomial `0x1021`, initial
//!   register `0xFFFF`) with the zero-residue validation property.
//!
//! ## Example
//!
//! ```rust
//! use breakglass_codec::{base32, crc16};
//!
//! let mut data = vec![1u8, 2, 3, 4];
//! let crc = crc16::checksum(&data);
//! data.extend_from_slice(&crc.to_be_bytes());
//!
//! assert!(crc16::residue_is_zero(&data));
//!
//! let encoded = base32::encode(&[0u8; 5]).expect("Failed to encode(..)");
//! assert_eq!(encoded, "AAAAAAAA");
//!
//! let decoded = base32::decode("aaaaaaaa").expect("Failed to decode(..)");
//! assert_eq!(decoded.as_slice(), &[0u8; 5]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;

pub mod base32;
pub mod crc16;

pub use base32::ALPHABET;
pub use error::Base32Error;
