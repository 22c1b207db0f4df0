// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Restricted base-32 codec.
//!
//! Bits are packed MSB-first: every input byte contributes 8 bits and every
//! output character consumes 5. There is no padding. Only inputs whose bit
//! count is an exact multiple of 40 round-trip, which is always the case for
//! share envelopes (35 bytes, 56 characters).

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::{Zeroize, Zeroizing};

use crate::error::Base32Error;

/// RFC 4648 style alphabet without `0`, `1`, `O` and `I`.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Maps a character to its 5-bit value, accepting lowercase letters.
#[inline]
pub fn value_of(character: char) -> Option<u8> {
    if !character.is_ascii() {
        return None;
    }

    match DECODE_TABLE[character.to_ascii_uppercase() as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Returns `true` if `character` belongs to [`ALPHABET`] (case-insensitive).
#[inline]
pub fn is_alphabet_char(character: char) -> bool {
    value_of(character).is_some()
}

/// Number of characters produced when encoding `len` bytes.
#[inline]
pub const fn encoded_len(len: usize) -> usize {
    len * 8 / 5
}

/// Encodes `data` into base-32 text.
///
/// # Errors
///
/// Returns [`Base32Error::EncodeLength`] if `data.len() * 8` is not a
/// multiple of 5, i.e. a partial group would be left over. This is a
/// consistency check: share envelopes never trigger it.
pub fn encode(data: &[u8]) -> Result<String, Base32Error> {
    let mut result = String::with_capacity(encoded_len(data.len()));
    let mut current: u16 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        current = (current << 8) | u16::from(byte);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            let index = (current >> bits) & 0x1F;
            result.push(char::from(ALPHABET[index as usize]));
            current &= (1 << bits) - 1;
        }
    }

    current.zeroize();

    if bits != 0 {
        result.zeroize();
        return Err(Base32Error::EncodeLength { len: data.len() });
    }

    Ok(result)
}

/// Decodes base-32 text, uppercasing it first.
///
/// The returned buffer is zeroized on drop.
///
/// # Errors
///
/// - [`Base32Error::DecodeLength`] if the text length is not a multiple of 8.
/// - [`Base32Error::InvalidCharacter`] for characters outside [`ALPHABET`].
pub fn decode(text: &str) -> Result<Zeroizing<Vec<u8>>, Base32Error> {
    let len = text.chars().count();
    if len % 8 != 0 {
        return Err(Base32Error::DecodeLength { len });
    }

    let mut result = Zeroizing::new(Vec::with_capacity(len / 8 * 5));
    let mut current: u16 = 0;
    let mut bits: u32 = 0;

    for (position, character) in text.chars().enumerate() {
        let Some(value) = value_of(character) else {
            current.zeroize();
            return Err(Base32Error::InvalidCharacter {
                character,
                position,
            });
        };

        current = (current << 5) | u16::from(value);
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            result.push((current >> bits) as u8);
            current &= (1 << bits) - 1;
        }
    }

    current.zeroize();

    if bits != 0 {
        return Err(Base32Error::DecodeLength { len });
    }

    Ok(result)
}
