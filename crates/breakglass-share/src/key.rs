// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secret 32-byte values: the composite key and its fragments.
//!
//! Both types own their bytes exclusively. They cannot be cloned, print as
//! `[REDACTED …]` and are zero-filled when dropped. Copying bytes in from a
//! caller buffer zero-fills that buffer.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::InputError;

/// Length of a composite key and of every fragment.
pub const KEY_LEN: usize = 32;

#[inline]
fn constant_time_eq(a: &[u8; KEY_LEN], b: &[u8; KEY_LEN]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Generates the API shared by [`CompositeKey`] and [`Fragment`].
macro_rules! impl_secret_bytes {
    ($type:ident, $label:literal) => {
        impl $type {
            pub(crate) fn zeroed() -> Self {
                Self {
                    bytes: [0u8; KEY_LEN],
                }
            }

            #[doc = concat!("Moves `bytes` into a new `", stringify!($type), "`, zeroizing the source.")]
            pub fn from_mut(bytes: &mut [u8; KEY_LEN]) -> Self {
                let mut secret = Self::zeroed();
                secret.bytes.copy_from_slice(bytes);
                bytes.zeroize();
                secret
            }

            /// Exposes the secret bytes.
            ///
            /// Never copy the returned array out by value.
            pub fn expose(&self) -> &[u8; KEY_LEN] {
                &self.bytes
            }

            /// Returns `true` if every byte is zero.
            pub fn is_zeroized(&self) -> bool {
                self.bytes.iter().all(|&b| b == 0)
            }
        }

        impl fmt::Debug for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("[REDACTED ", $label, "]"))
            }
        }

        impl PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                constant_time_eq(&self.bytes, &other.bytes)
            }
        }

        impl Eq for $type {}
    };
}

/// The 32-byte secret that unlocks the vault.
///
/// Produced by key derivation on the generating side and by
/// [`reconstruct`](crate::reconstruct) on the consuming side. Never persisted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CompositeKey {
    bytes: [u8; KEY_LEN],
}

impl_secret_bytes!(CompositeKey, "CompositeKey");

impl CompositeKey {
    /// Copies a key of unknown length, e.g. straight from a key derivation
    /// function.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::KeyLength`] with the observed length if
    /// `bytes` is not exactly [`KEY_LEN`] bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, InputError> {
        if bytes.len() != KEY_LEN {
            return Err(InputError::KeyLength {
                actual: bytes.len(),
            });
        }

        let mut key = Self::zeroed();
        key.bytes.copy_from_slice(bytes);
        Ok(key)
    }

    /// XORs `other` into the key, byte by byte.
    pub(crate) fn xor_assign(&mut self, other: &[u8; KEY_LEN]) {
        for (byte, other) in self.bytes.iter_mut().zip(other.iter()) {
            *byte ^= *other;
        }
    }
}

/// One of N shares of a [`CompositeKey`].
///
/// The XOR of all fragments of a share set equals the composite key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Fragment {
    bytes: [u8; KEY_LEN],
}

impl_secret_bytes!(Fragment, "Fragment");

impl Fragment {
    pub(crate) fn expose_mut(&mut self) -> &mut [u8; KEY_LEN] {
        &mut self.bytes
    }

    /// Turns the accumulator of a split into the final fragment.
    pub(crate) fn from_key(key: CompositeKey) -> Self {
        let mut fragment = Self::zeroed();
        fragment.bytes.copy_from_slice(key.expose());
        // `key` is zeroized on drop.
        fragment
    }
}
