// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Live reformatting of operator input.
//!
//! The operator types or pastes into a free-form text field. After every
//! edit the field is rewritten to the canonical display layout (uppercase,
//! `XXXXXXX-XXXXXXX` groups, 14 characters per line) while the cursor or
//! selection stays next to the same characters it was next to before.

use breakglass_codec::base32;

use crate::share::{GROUP_LEN, LINE_LEN};

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Reformatted text.
    pub text: String,
    /// New selection start, in characters.
    pub selection_start: usize,
    /// New selection end, in characters.
    pub selection_end: usize,
}

#[derive(Clone, Copy)]
enum Token {
    Symbol(char),
    Marker,
}

/// Reformats `text` and maps the selection `[selection_start, selection_end)`
/// onto the result.
///
/// Offsets are character offsets. Offsets past the end are clamped and a
/// reversed selection is put in order. Characters outside the alphabet are
/// dropped silently; this function never fails.
///
/// Layout rules:
/// - a line break follows every 14th alphabet character, including the last
///   one of the text;
/// - a hyphen follows the 7th character of a line, but only if an 8th follows.
pub fn normalize(text: &str, selection_start: usize, selection_end: usize) -> Normalized {
    let len = text.chars().count();
    let start = selection_start.min(selection_end).min(len);
    let end = selection_start.max(selection_end).min(len);

    // Mark both selection boundaries, keep alphabet characters only.
    let mut tokens = Vec::with_capacity(len + 2);
    for (i, character) in text.chars().enumerate() {
        if i == start {
            tokens.push(Token::Marker);
        }
        if i == end {
            tokens.push(Token::Marker);
        }
        if base32::is_alphabet_char(character) {
            tokens.push(Token::Symbol(character.to_ascii_uppercase()));
        }
    }
    if start == len {
        tokens.push(Token::Marker);
    }
    if end == len {
        tokens.push(Token::Marker);
    }

    let symbol_count = tokens
        .iter()
        .filter(|token| matches!(token, Token::Symbol(_)))
        .count();

    let mut output = String::with_capacity(symbol_count + symbol_count / 7 + 1);
    let mut markers = [0usize; 2];
    let mut marker_count = 0;
    let mut written = 0;

    for token in tokens {
        match token {
            Token::Marker => {
                markers[marker_count] = output.len();
                marker_count += 1;
            }
            Token::Symbol(symbol) => {
                output.push(symbol);
                written += 1;

                if written % LINE_LEN == 0 {
                    output.push('\n');
                } else if written % LINE_LEN == GROUP_LEN && written < symbol_count {
                    output.push('-');
                }
            }
        }
    }

    Normalized {
        text: output,
        selection_start: markers[0],
        selection_end: markers[1],
    }
}
