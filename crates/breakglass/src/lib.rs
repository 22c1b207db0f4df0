// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Break-glass recovery for password-protected vaults.</em></p>
//!
//! ---
//!
//! Breakglass splits a vault's 32-byte composite key into N shares that can be
//! printed, handed to N custodians, and typed back in by hand when the vault
//! password is lost. **All N shares are required.** Any N-1 of them reveal
//! nothing about the key.
//!
//! # Features
//!
//! - 🔪 **N-of-N XOR splitting**: N-1 uniformly random fragments, the last one fixes the key
//! - ✍️ **Hand-transcribable**: 56 characters per share, in four `XXXXXXX-XXXXXXX` lines, no `0`/`O`/`1`/`I`
//! - 🧮 **Typo detection**: Versioned envelope with a CRC-16 over every share
//! - 🚪 **Fail-closed**: No key material is produced until every slot holds a valid share
//! - 🧹 **Automatic zeroization**: Keys, fragments and share texts are wiped on drop
//!
//! # Quick Start
//!
//! ```rust
//! use breakglass::argon2::Argon2KeyDerivation;
//! use breakglass::rand::SystemEntropySource;
//! use breakglass::share::{
//!     CompositeKey, KdfParams, ReconstructionContext, Vault, derive_composite_key,
//!     generate_shares,
//! };
//!
//! struct MyVault([u8; 32]);
//!
//! impl Vault for MyVault {
//!     type Output = ();
//!     type Error = ();
//!
//!     fn open(&self, key: &CompositeKey) -> Result<(), ()> {
//!         if key.expose() == &self.0 { Ok(()) } else { Err(()) }
//!     }
//! }
//!
//! let params = KdfParams { memory_kib: 64, iterations: 1, parallelism: 1, ..KdfParams::default() };
//!
//! // At setup: derive the composite key and print the shares.
//! let key = derive_composite_key(&Argon2KeyDerivation, b"password", b"vault-salt", &params)
//!     .expect("Failed to derive_composite_key(..)");
//! let vault = MyVault(*key.expose());
//!
//! let shares = generate_shares(key, 3, &SystemEntropySource {})
//!     .expect("Failed to generate_shares(..)");
//! let printed: Vec<String> = shares.iter().map(|s| s.text.to_display_text()).collect();
//!
//! // At recovery: every custodian types their share into a slot.
//! let mut context = ReconstructionContext::new(printed.len());
//! for (i, text) in printed.iter().enumerate() {
//!     context.input(i, text, text.len(), text.len());
//! }
//!
//! assert!(context.is_ready());
//! context.unlock(&vault).expect("Failed to unlock(..)");
//! ```
//!
//! # Crates
//!
//! - [`share`]: splitting, share format, validation, reconstruction, input normalization
//! - [`codec`]: base-32 alphabet and CRC-16-CCITT
//! - [`rand`]: OS CSPRNG behind the `EntropySource` trait
//! - [`argon2`]: Argon2 backend for `KeyDerivation`
//!
//! # Testing
//!
//! Enable the `test-utils` feature to get deterministic and failure-injecting
//! entropy sources under [`support::test_utils`].
//!
//! # License
//!
//! GPL-3.0-only

pub mod support;

pub use breakglass_argon2 as argon2;
pub use breakglass_codec as codec;
pub use breakglass_rand as rand;
pub use breakglass_share as share;
