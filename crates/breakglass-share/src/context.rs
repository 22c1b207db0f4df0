// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One reconstruction attempt, owned by the caller.

use core::fmt;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::error::UnlockError;
use crate::normalize::{Normalized, normalize};
use crate::reconstruct::{SlotStatus, check_slot, reconstruct};
use crate::traits::Vault;

/// State of a single unlock attempt: the text entered in each share slot.
///
/// The context is the only owner of the composite key while it exists.
/// [`unlock`](Self::unlock) consumes the context; the key and all slot texts
/// are zeroized when it returns, whatever the outcome.
pub struct ReconstructionContext {
    slots: Vec<Zeroizing<String>>,
}

impl fmt::Debug for ReconstructionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReconstructionContext")
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl ReconstructionContext {
    /// Creates a context with `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: (0..slot_count).map(|_| Zeroizing::new(String::new())).collect(),
        }
    }

    /// Creates a context pre-filled with `slots`.
    pub fn with_slots<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            slots: slots
                .into_iter()
                .map(|slot| Zeroizing::new(slot.as_ref().to_owned()))
                .collect(),
        }
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Current text of slot `index` (0-based).
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|slot| slot.as_str())
    }

    /// Replaces slot `index` verbatim and returns its new status.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn set_slot(&mut self, index: usize, text: &str) -> Option<SlotStatus> {
        let slot = self.slots.get_mut(index)?;
        *slot = Zeroizing::new(text.to_owned());
        Some(check_slot(slot))
    }

    /// Feeds an edit of slot `index` through [`normalize`], stores the
    /// reformatted text and returns it together with the mapped selection.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn input(
        &mut self,
        index: usize,
        text: &str,
        selection_start: usize,
        selection_end: usize,
    ) -> Option<Normalized> {
        let slot = self.slots.get_mut(index)?;
        let normalized = normalize(text, selection_start, selection_end);
        *slot = Zeroizing::new(normalized.text.clone());
        Some(normalized)
    }

    /// Status of every slot, in order.
    pub fn statuses(&self) -> Vec<SlotStatus> {
        self.slots.iter().map(|slot| check_slot(slot)).collect()
    }

    /// `true` when there is at least one slot and every slot is valid.
    pub fn is_ready(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|slot| check_slot(slot).is_valid())
    }

    /// Reconstructs the composite key and hands it to `vault`.
    ///
    /// # Errors
    ///
    /// - [`UnlockError::Reconstruct`] if any slot is empty or invalid; the
    ///   vault is not called.
    /// - [`UnlockError::Rejected`] if the vault refuses the key. The scheme
    ///   has no threshold, so no other combination is tried.
    pub fn unlock<V: Vault>(self, vault: &V) -> Result<V::Output, UnlockError<V::Error>> {
        let key = reconstruct(self.slots.iter().map(|slot| slot.as_str()))?;

        let result = vault.open(&key);
        drop(key);

        match result {
            Ok(output) => {
                debug!(shares = self.slots.len(), "vault opened");
                Ok(output)
            }
            Err(err) => {
                warn!(shares = self.slots.len(), "vault rejected the reconstructed key");
                Err(UnlockError::Rejected(err))
            }
        }
    }
}
