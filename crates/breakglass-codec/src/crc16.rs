// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CRC-16-CCITT (polynomial `0x1021`, initial register `0xFFFF`, no
//! reflection, no final XOR).
//!
//! Appending the big-endian checksum to the covered data and running the CRC
//! again over the extended buffer yields `0`. Validation only ever uses this
//! residue test, never a comparison against a stored value.

/// Generator polynomial.
pub const POLYNOMIAL: u16 = 0x1021;

/// Initial register value.
pub const INITIAL: u16 = 0xFFFF;

/// Byte-indexed lookup table.
pub const TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Streaming CRC-16-CCITT.
///
/// Lets callers checksum a version byte and a fragment without first
/// concatenating them into another buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    register: u16,
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc16 {
    /// Creates a CRC with the register set to [`INITIAL`].
    pub const fn new() -> Self {
        Self { register: INITIAL }
    }

    /// Feeds `data` through the register, big-endian.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        for &byte in data {
            let index = ((self.register >> 8) as u8 ^ byte) as usize;
            self.register = (self.register << 8) ^ TABLE[index];
        }
        self
    }

    /// Current checksum.
    pub fn value(&self) -> u16 {
        self.register
    }
}

/// Computes the checksum of `data`.
pub fn checksum(data: &[u8]) -> u16 {
    Crc16::new().update(data).value()
}

/// Returns `true` if `data` ends with the big-endian checksum of the bytes
/// before it, i.e. the CRC over the whole buffer is zero.
pub fn residue_is_zero(data: &[u8]) -> bool {
    checksum(data) == 0
}
