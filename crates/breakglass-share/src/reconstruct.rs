// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Slot validation and fail-closed recombination.

use tracing::debug;

use crate::error::{FormatError, ReconstructError};
use crate::key::{CompositeKey, Fragment};
use crate::share::Share;

/// Why a non-empty slot was rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SlotFailure {
    /// Not exactly four full lines of alphabet characters. Re-type.
    Incomplete,
    /// Unknown envelope version. Probably not a share of this scheme.
    UnrecognizedFormat,
    /// CRC residue is not zero. Probably a typo.
    ChecksumMismatch,
}

impl SlotFailure {
    /// Remediation hint for the operator.
    pub fn message(&self) -> &'static str {
        match self {
            SlotFailure::Incomplete => "Four full lines required.",
            SlotFailure::UnrecognizedFormat => "Unrecognized key format.",
            SlotFailure::ChecksumMismatch => "Checksum mismatch, probably a typo.",
        }
    }
}

impl From<&FormatError> for SlotFailure {
    fn from(err: &FormatError) -> Self {
        match err {
            FormatError::Length { .. } | FormatError::Encoding(_) => SlotFailure::Incomplete,
            FormatError::UnrecognizedVersion(_) => SlotFailure::UnrecognizedFormat,
            FormatError::ChecksumMismatch => SlotFailure::ChecksumMismatch,
        }
    }
}

/// Validity of one share slot.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SlotStatus {
    /// Nothing entered yet.
    Empty,
    /// Holds a valid share.
    Valid,
    /// Holds something that is not a valid share.
    Invalid(SlotFailure),
}

impl SlotStatus {
    /// `true` only for [`SlotStatus::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, SlotStatus::Valid)
    }
}

/// A slot is empty when it holds nothing but whitespace and hyphens.
pub fn is_empty_slot(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '-')
}

fn decode_slot(text: &str) -> Result<Option<Fragment>, SlotFailure> {
    if is_empty_slot(text) {
        return Ok(None);
    }

    Share::decode(text)
        .map(|share| Some(share.into_fragment()))
        .map_err(|err| SlotFailure::from(&err))
}

/// Validates a single slot without keeping any key material.
pub fn check_slot(text: &str) -> SlotStatus {
    match decode_slot(text) {
        Ok(None) => SlotStatus::Empty,
        Ok(Some(_)) => SlotStatus::Valid,
        Err(failure) => SlotStatus::Invalid(failure),
    }
}

/// Validates every slot, in order.
pub fn check_slots<I, S>(slots: I) -> Vec<SlotStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    slots
        .into_iter()
        .map(|slot| check_slot(slot.as_ref()))
        .collect()
}

/// Recombines the composite key from every supplied slot.
///
/// All slots are validated, even after a failure, so the returned statuses
/// cover every field. Fragments are XORed together in slot order only once
/// every slot holds a valid share; otherwise the decoded fragments are
/// zeroized and no key material leaves this function.
///
/// The number of slots is whatever the caller supplies; all of them are
/// required.
///
/// # Errors
///
/// - [`ReconstructError::NoSlots`] if `slots` is empty.
/// - [`ReconstructError::NotReady`] if any slot is empty or invalid.
pub fn reconstruct<I, S>(slots: I) -> Result<CompositeKey, ReconstructError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let slots: Vec<S> = slots.into_iter().collect();
    if slots.is_empty() {
        return Err(ReconstructError::NoSlots);
    }

    let mut statuses = Vec::with_capacity(slots.len());
    let mut fragments = Vec::with_capacity(slots.len());

    for (i, slot) in slots.iter().enumerate() {
        match decode_slot(slot.as_ref()) {
            Ok(Some(fragment)) => {
                fragments.push(fragment);
                statuses.push(SlotStatus::Valid);
            }
            Ok(None) => {
                debug!(slot = i + 1, "share slot is empty");
                statuses.push(SlotStatus::Empty);
            }
            Err(failure) => {
                debug!(slot = i + 1, reason = failure.message(), "share slot rejected");
                statuses.push(SlotStatus::Invalid(failure));
            }
        }
    }

    if fragments.len() != slots.len() {
        // `fragments` is dropped here, zeroizing every decoded fragment.
        return Err(ReconstructError::NotReady { statuses });
    }

    let mut key = CompositeKey::zeroed();
    for fragment in &fragments {
        key.xor_assign(fragment.expose());
    }

    debug!(shares = fragments.len(), "composite key reconstructed");

    Ok(key)
}
