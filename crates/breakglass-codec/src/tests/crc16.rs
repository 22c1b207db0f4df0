// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::crc16::{Crc16, INITIAL, TABLE, checksum, residue_is_zero};

fn with_checksum(payload: &[u8]) -> Vec<u8> {
    let mut buffer = payload.to_vec();
    buffer.extend_from_slice(&checksum(payload).to_be_bytes());
    buffer
}

#[test]
fn test_table_matches_ccitt_reference() {
    assert_eq!(TABLE[0], 0x0000);
    assert_eq!(TABLE[1], 0x1021);
    assert_eq!(TABLE[2], 0x2042);
    assert_eq!(TABLE[16], 0x1231);
    assert_eq!(TABLE[128], 0x9188);
    assert_eq!(TABLE[255], 0x1EF0);
}

#[test]
fn test_checksum_check_value() {
    // CRC-16/CCITT-FALSE check value.
    assert_eq!(checksum(b"123456789"), 0x29B1);
}

#[test]
fn test_checksum_of_empty_input_is_initial_register() {
    assert_eq!(checksum(&[]), INITIAL);
}

#[test]
fn test_streaming_matches_one_shot() {
    let data = b"break-glass emergency access";
    let mut crc = Crc16::new();
    crc.update(&data[..5]).update(&data[5..17]).update(&data[17..]);

    assert_eq!(crc.value(), checksum(data));
    assert_eq!(Crc16::default(), Crc16::new());
}

#[test]
fn test_residue_is_zero_detects_wrong_checksum() {
    let mut buffer = with_checksum(&[0x01; 33]);
    assert!(residue_is_zero(&buffer));

    let last = buffer.len() - 1;
    buffer[last] ^= 0x01;
    assert!(!residue_is_zero(&buffer));
}

#[test]
fn test_every_single_bit_flip_in_payload_is_detected() {
    let mut payload = [0u8; 33];
    payload[0] = 1;
    for (i, byte) in payload.iter_mut().enumerate().skip(1) {
        *byte = (i as u8).wrapping_mul(37);
    }
    let original = with_checksum(&payload);

    for bit in 0..33 * 8 {
        let mut corrupted = original.clone();
        corrupted[bit / 8] ^= 0x80 >> (bit % 8);

        assert!(!residue_is_zero(&corrupted), "bit {bit} flip not detected");
    }
}

#[test]
fn test_every_burst_up_to_16_bits_is_detected() {
    let payload = [0xC3u8; 33];
    let original = with_checksum(&payload);
    let total_bits = original.len() * 8;

    for len in 1..=16usize {
        // Bursts start and end with a flipped bit; the middle pattern is all ones.
        for start in 0..=(total_bits - len) {
            let mut corrupted = original.clone();
            for bit in start..start + len {
                corrupted[bit / 8] ^= 0x80 >> (bit % 8);
            }

            assert!(
                !residue_is_zero(&corrupted),
                "burst of {len} bits at {start} not detected"
            );
        }
    }
}

proptest! {
    #[test]
    fn residue_of_payload_with_checksum_is_zero(payload in prop::array::uniform32(any::<u8>()), version in any::<u8>()) {
        let mut buffer = vec![version];
        buffer.extend_from_slice(&payload);

        let extended = with_checksum(&buffer);

        prop_assert_eq!(checksum(&extended), 0);
    }

    #[test]
    fn odd_bit_errors_are_detected(
        payload in prop::array::uniform32(any::<u8>()),
        flips in prop::collection::btree_set(0usize..33 * 8, 1..8)
    ) {
        prop_assume!(flips.len() % 2 == 1);

        let mut buffer = vec![1u8];
        buffer.extend_from_slice(&payload);
        let mut extended = with_checksum(&buffer);

        for bit in flips {
            extended[bit / 8] ^= 0x80 >> (bit % 8);
        }

        prop_assert!(!residue_is_zero(&extended));
    }
}
