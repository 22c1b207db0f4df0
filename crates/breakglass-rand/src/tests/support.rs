// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{FixedEntropySource, MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_mock_entropy_source_behaviour_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    assert_eq!(mock.fill_bytes(&mut buf), Err(EntropyError::EntropyNotAvailable));
    assert_eq!(mock.fill_bytes(&mut buf), Err(EntropyError::EntropyNotAvailable));
}

#[test]
fn test_mock_entropy_source_fails_only_at_nth_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert_eq!(mock.fill_bytes(&mut buf), Err(EntropyError::EntropyNotAvailable));
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert_eq!(mock.call_count(), 3);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut bytes = [0u8; 32];

    // First works
    assert!(mock.fill_bytes(&mut bytes).is_ok());

    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);
    assert!(mock.fill_bytes(&mut bytes).is_err());

    mock.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(mock.fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_fixed_entropy_source_is_deterministic() {
    let a = FixedEntropySource::new(7);
    let b = FixedEntropySource::new(7);
    let mut buf_a = [0u8; 32];
    let mut buf_b = [0u8; 32];

    a.fill_bytes(&mut buf_a).expect("Failed to fill_bytes(..)");
    b.fill_bytes(&mut buf_b).expect("Failed to fill_bytes(..)");

    assert_eq!(buf_a, buf_b);
    assert_eq!(buf_a[0], 7);
    assert_eq!(buf_a[31], 38);
}

#[test]
fn test_fixed_entropy_source_stream_continues_across_calls() {
    let source = FixedEntropySource::new(250);
    let mut first = [0u8; 4];
    let mut second = [0u8; 4];

    source.fill_bytes(&mut first).expect("Failed to fill_bytes(..)");
    source.fill_bytes(&mut second).expect("Failed to fill_bytes(..)");

    assert_eq!(first, [250, 251, 252, 253]);
    assert_eq!(second, [254, 255, 0, 1]);
}

#[test]
fn test_entropy_source_by_reference() {
    fn fill<E: EntropySource>(entropy: E, dest: &mut [u8]) -> Result<(), EntropyError> {
        entropy.fill_bytes(dest)
    }

    let source = FixedEntropySource::new(1);
    let mut buf = [0u8; 2];

    fill(&source, &mut buf).expect("Failed to fill(..)");

    assert_eq!(buf, [1, 2]);
}
