// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # breakglass_share
//!
//! All-or-nothing splitting of a vault's 32-byte composite key into N
//! hand-transcribable shares.
//!
//! - [`split`] / [`generate_shares`]: XOR the key into N fragments; N-1 are
//!   random, the last one is determined by the rest.
//! - [`Share`] / [`EncodedShare`]: versioned, CRC-16 checked envelope and
//!   its 4-line base-32 rendering.
//! - [`reconstruct`] / [`check_slot`]: validate operator input per slot and
//!   recombine only when every slot is valid.
//! - [`normalize`]: cursor-preserving reformatting while the operator types.
//! - [`KeyDerivation`] / [`Vault`]: capabilities supplied by the caller.
//!
//! This is strictly N-of-N. There is no threshold: losing any share forfeits
//! access.
//!
//! ## Example
//!
//! ```rust
//! use breakglass_rand::SystemEntropySource;
//! use breakglass_share::{CompositeKey, generate_shares, reconstruct};
//!
//! let mut key_bytes = [7u8; 32];
//! let key = CompositeKey::from_mut(&mut key_bytes);
//! assert!(key_bytes.iter().all(|&b| b == 0));
//!
//! let shares = generate_shares(key, 3, &SystemEntropySource {}).expect("Failed to generate_shares(..)");
//! let texts: Vec<String> = shares.iter().map(|share| share.text.to_display_text()).collect();
//!
//! let recovered = reconstruct(&texts).expect("Failed to reconstruct(..)");
//! assert_eq!(recovered.expose(), &[7u8; 32]);
//! ```

#[cfg(test)]
mod tests;

mod config;
mod context;
mod derive;
mod error;
mod key;
mod normalize;
mod reconstruct;
mod share;
mod split;
mod traits;

pub use config::{KdfAlgorithm, KdfParams, KdfVersion};
pub use context::ReconstructionContext;
pub use derive::derive_composite_key;
pub use error::{
    DeriveError, FatalError, FormatError, InputError, ReconstructError, SplitError, UnlockError,
};
pub use key::{CompositeKey, Fragment, KEY_LEN};
pub use normalize::{Normalized, normalize};
pub use reconstruct::{
    SlotFailure, SlotStatus, check_slot, check_slots, is_empty_slot, reconstruct,
};
pub use share::{
    ENCODED_LEN, ENVELOPE_LEN, EncodedShare, GROUP_LEN, LINE_COUNT, LINE_LEN, Share, VERSION,
};
pub use split::{GeneratedShare, ShareSet, generate_shares, split};
pub use traits::{KeyDerivation, Vault};
