// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Additive (XOR) N-of-N splitting.

use breakglass_rand::EntropySource;
use tracing::{debug, warn};

use crate::error::{FatalError, FormatError, InputError, SplitError};
use crate::key::{CompositeKey, Fragment};
use crate::share::{EncodedShare, encode_fragment};

/// An ordered set of fragments produced by one [`split`].
///
/// The XOR of all fragments equals the composite key that was split.
#[derive(Debug)]
pub struct ShareSet {
    fragments: Vec<Fragment>,
}

impl ShareSet {
    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always `false` for a set returned by [`split`].
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments in share order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Consumes the set, yielding the fragments in share order.
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    /// Renders every fragment as a share, numbered from 1.
    pub fn encode(&self) -> Result<Vec<GeneratedShare>, FormatError> {
        self.fragments
            .iter()
            .enumerate()
            .map(|(i, fragment)| {
                Ok(GeneratedShare {
                    index: i + 1,
                    text: encode_fragment(fragment)?,
                })
            })
            .collect()
    }
}

/// A printable share and its 1-based position in the set.
#[derive(Debug)]
pub struct GeneratedShare {
    /// Position in the set, `1..=n`.
    pub index: usize,
    /// The share text.
    pub text: EncodedShare,
}

/// Splits `key` into `count` fragments whose XOR is `key`.
///
/// Fragments `1..count` are drawn from `entropy`; each is folded into an
/// accumulator that starts as a copy of the key, and the final accumulator
/// becomes fragment `count`. Any proper subset of the result is independent
/// of the key.
///
/// `count == 1` is valid and returns the key itself as the only fragment.
///
/// The key, the accumulator and every fragment drawn so far are zeroized on
/// all exit paths.
///
/// # Errors
///
/// - [`InputError::NoShares`] if `count` is zero.
/// - [`InputError::TooManyShares`] if fragment storage for `count` cannot be
///   allocated. Nothing is drawn from `entropy` in that case.
/// - [`FatalError::RandomSourceUnavailable`] if `entropy` fails. The
///   split is aborted; no weaker source is tried.
pub fn split<E: EntropySource>(
    key: CompositeKey,
    count: usize,
    entropy: &E,
) -> Result<ShareSet, SplitError> {
    if count == 0 {
        return Err(InputError::NoShares.into());
    }

    debug!(count, "splitting composite key");
    if count == 1 {
        warn!("generating a single share; it alone grants access to the vault");
    }

    let mut accumulator = key;
    // Exact capacity: the vector never reallocates and strands fragment copies.
    let mut fragments = Vec::new();
    fragments
        .try_reserve_exact(count)
        .map_err(|_| InputError::TooManyShares { requested: count })?;

    for _ in 1..count {
        let mut fragment = Fragment::zeroed();
        entropy
            .fill_bytes(fragment.expose_mut())
            .map_err(FatalError::from)?;

        accumulator.xor_assign(fragment.expose());
        fragments.push(fragment);
    }

    fragments.push(Fragment::from_key(accumulator));

    Ok(ShareSet { fragments })
}

/// Splits `key` and renders every fragment, numbered `1..=count`.
///
/// # Errors
///
/// See [`split`].
pub fn generate_shares<E: EntropySource>(
    key: CompositeKey,
    count: usize,
    entropy: &E,
) -> Result<Vec<GeneratedShare>, SplitError> {
    let set = split(key, count, entropy)?;
    Ok(set.encode()?)
}
