// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use breakglass_rand::SystemEntropySource;
use breakglass_rand::test_utils::{
    FixedEntropySource, MockEntropySource, MockEntropySourceBehaviour,
};
use proptest::prelude::*;

use crate::error::{FatalError, InputError, SplitError};
use crate::key::{CompositeKey, KEY_LEN};
use crate::reconstruct::reconstruct;
use crate::share::Share;
use crate::split::{generate_shares, split};

use super::{ascending_key, ascending_key_bytes, xor_all};

fn fragment_bytes(set: &crate::split::ShareSet) -> Vec<[u8; KEY_LEN]> {
    set.fragments().iter().map(|f| *f.expose()).collect()
}

#[test]
fn test_split_zero_key_into_two_yields_identical_fragments() {
    let key = CompositeKey::zeroed();
    let set = split(key, 2, &SystemEntropySource {}).expect("Failed to split(..)");
    let fragments = fragment_bytes(&set);

    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0], fragments[1]);
    assert_eq!(xor_all(&fragments), [0u8; KEY_LEN]);
}

#[test]
fn test_split_single_share_is_the_key() {
    let set = split(ascending_key(), 1, &SystemEntropySource {}).expect("Failed to split(..)");

    assert_eq!(set.len(), 1);
    assert_eq!(set.fragments()[0].expose(), &ascending_key_bytes());

    let shares = set.encode().expect("Failed to encode()");
    let decoded = Share::decode(shares[0].text.as_canonical()).expect("Failed to decode(..)");
    assert_eq!(decoded.fragment().expose(), &ascending_key_bytes());
}

#[test]
fn test_split_single_share_never_touches_entropy() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let set = split(ascending_key(), 1, &entropy).expect("Failed to split(..)");

    assert_eq!(entropy.call_count(), 0);
    assert_eq!(set.fragments()[0].expose(), &ascending_key_bytes());
}

#[test]
fn test_split_rejects_zero_shares() {
    let result = split(ascending_key(), 0, &SystemEntropySource {});

    assert_eq!(result.err(), Some(SplitError::Input(InputError::NoShares)));
}

#[test]
fn test_split_reports_unallocatable_share_count() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let count = usize::MAX / 16;

    let result = split(ascending_key(), count, &entropy);

    assert_eq!(
        result.err(),
        Some(SplitError::Input(InputError::TooManyShares { requested: count }))
    );
    assert_eq!(entropy.call_count(), 0);
}

#[test]
fn test_split_aborts_when_entropy_fails() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let result = split(ascending_key(), 3, &entropy);

    assert_eq!(
        result.err(),
        Some(SplitError::Fatal(FatalError::RandomSourceUnavailable))
    );
    // No retry after the failure.
    assert_eq!(entropy.call_count(), 2);
}

#[test]
fn test_split_random_fragments_come_from_entropy_in_order() {
    let entropy = FixedEntropySource::new(0x40);
    let set = split(ascending_key(), 3, &entropy).expect("Failed to split(..)");
    let fragments = fragment_bytes(&set);

    let expected_first: Vec<u8> = (0x40..0x60).collect();
    let expected_second: Vec<u8> = (0x60..0x80).collect();
    assert_eq!(fragments[0].to_vec(), expected_first);
    assert_eq!(fragments[1].to_vec(), expected_second);
    assert_eq!(xor_all(&fragments), ascending_key_bytes());
}

#[test]
fn test_split_with_system_entropy_gives_distinct_fragments() {
    let set = split(ascending_key(), 3, &SystemEntropySource {}).expect("Failed to split(..)");
    let fragments = fragment_bytes(&set);

    assert_ne!(fragments[0], fragments[1]);
    assert_ne!(fragments[0], ascending_key_bytes());
    assert_ne!(fragments[1], ascending_key_bytes());
    assert_eq!(xor_all(&fragments), ascending_key_bytes());
}

#[test]
fn test_missing_share_does_not_reconstruct_key() {
    let entropy = FixedEntropySource::new(0x10);
    let shares = generate_shares(ascending_key(), 3, &entropy).expect("Failed to generate_shares(..)");
    let texts: Vec<String> = shares.iter().map(|s| s.text.to_display_text()).collect();

    let partial = reconstruct(&texts[..2]).expect("Failed to reconstruct(..)");
    assert_ne!(partial.expose(), &ascending_key_bytes());

    let full = reconstruct(&texts).expect("Failed to reconstruct(..)");
    assert_eq!(full.expose(), &ascending_key_bytes());
}

#[test]
fn test_generate_shares_numbers_from_one() {
    let shares =
        generate_shares(ascending_key(), 5, &SystemEntropySource {}).expect("Failed to generate_shares(..)");

    let indices: Vec<usize> = shares.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_into_fragments_preserves_order() {
    let entropy = FixedEntropySource::new(0);
    let set = split(ascending_key(), 2, &entropy).expect("Failed to split(..)");
    let first = *set.fragments()[0].expose();

    let fragments = set.into_fragments();
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].expose(), &first);
}

proptest! {
    #[test]
    fn split_then_reconstruct_roundtrips(key_bytes in prop::array::uniform32(any::<u8>()), count in 1usize..=20) {
        let mut bytes = key_bytes;
        let key = CompositeKey::from_mut(&mut bytes);

        let shares = generate_shares(key, count, &SystemEntropySource {}).expect("Failed to generate_shares(..)");
        prop_assert_eq!(shares.len(), count);

        let texts: Vec<String> = shares.iter().map(|s| s.text.to_display_text()).collect();
        let recovered = reconstruct(&texts).expect("Failed to reconstruct(..)");

        prop_assert_eq!(recovered.expose(), &key_bytes);
    }
}
