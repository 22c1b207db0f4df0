// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Versioned share envelope and its textual rendering.
//!
//! Binary layout (35 bytes):
//!
//! ```text
//! +---------+----------------------+------------------+
//! | version | fragment (32 bytes)  | CRC16 (BE, 2)    |
//! +---------+----------------------+------------------+
//! ```
//!
//! The CRC covers `version ++ fragment`. The envelope is base-32 encoded to
//! 56 characters and shown as four lines of `XXXXXXX-XXXXXXX`.

use core::fmt;

use breakglass_codec::{base32, crc16};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::FormatError;
use crate::key::{Fragment, KEY_LEN};

/// The only envelope version this crate reads and writes.
pub const VERSION: u8 = 1;

/// Envelope length in bytes.
pub const ENVELOPE_LEN: usize = 1 + KEY_LEN + 2;

/// Canonical encoded length in characters.
pub const ENCODED_LEN: usize = base32::encoded_len(ENVELOPE_LEN);

/// Characters per displayed line.
pub const LINE_LEN: usize = 14;

/// Characters per hyphen-separated group.
pub const GROUP_LEN: usize = 7;

/// Lines per share.
pub const LINE_COUNT: usize = ENCODED_LEN / LINE_LEN;

const CHECKSUM_OFFSET: usize = 1 + KEY_LEN;

fn checksum_of(version: u8, fragment: &[u8; KEY_LEN]) -> u16 {
    crc16::Crc16::new()
        .update(&[version])
        .update(fragment)
        .value()
}

fn envelope(version: u8, fragment: &[u8; KEY_LEN], checksum: u16) -> Zeroizing<[u8; ENVELOPE_LEN]> {
    let mut bytes = Zeroizing::new([0u8; ENVELOPE_LEN]);
    bytes[0] = version;
    bytes[1..CHECKSUM_OFFSET].copy_from_slice(fragment);
    bytes[CHECKSUM_OFFSET..].copy_from_slice(&checksum.to_be_bytes());
    bytes
}

/// Encodes a fragment as a version-1 share without taking ownership of it.
pub(crate) fn encode_fragment(fragment: &Fragment) -> Result<EncodedShare, FormatError> {
    let checksum = checksum_of(VERSION, fragment.expose());
    let bytes = envelope(VERSION, fragment.expose(), checksum);

    EncodedShare::from_canonical(base32::encode(&bytes[..])?)
}

/// A decoded, validated share envelope.
pub struct Share {
    version: u8,
    fragment: Fragment,
    checksum: u16,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("version", &self.version)
            .field("fragment", &self.fragment)
            .field("checksum", &format_args!("[REDACTED]"))
            .finish()
    }
}

impl Share {
    /// Wraps `fragment` in a version-1 envelope.
    pub fn new(fragment: Fragment) -> Self {
        let checksum = checksum_of(VERSION, fragment.expose());

        Self {
            version: VERSION,
            fragment,
            checksum,
        }
    }

    /// Envelope version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// CRC-16 over `version ++ fragment`.
    pub fn checksum(&self) -> u16 {
        self.checksum
    }

    /// The carried fragment.
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Unwraps the fragment.
    pub fn into_fragment(self) -> Fragment {
        self.fragment
    }

    /// Serializes the 35-byte envelope.
    pub fn to_bytes(&self) -> Zeroizing<[u8; ENVELOPE_LEN]> {
        envelope(self.version, self.fragment.expose(), self.checksum)
    }

    /// Parses and validates a 35-byte envelope.
    ///
    /// Checks run in order: length, version, checksum residue. A foreign
    /// version is reported as such even when its checksum is consistent.
    ///
    /// # Errors
    ///
    /// - [`FormatError::Length`] if `bytes` is not [`ENVELOPE_LEN`] long.
    /// - [`FormatError::UnrecognizedVersion`] if the version byte is not [`VERSION`].
    /// - [`FormatError::ChecksumMismatch`] if the CRC residue is not zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() != ENVELOPE_LEN {
            return Err(FormatError::Length {
                expected: ENVELOPE_LEN,
                actual: bytes.len(),
            });
        }

        let version = bytes[0];
        if version != VERSION {
            return Err(FormatError::UnrecognizedVersion(version));
        }

        if !crc16::residue_is_zero(bytes) {
            return Err(FormatError::ChecksumMismatch);
        }

        let mut fragment = Fragment::zeroed();
        fragment
            .expose_mut()
            .copy_from_slice(&bytes[1..CHECKSUM_OFFSET]);

        Ok(Self {
            version,
            fragment,
            checksum: u16::from_be_bytes([bytes[CHECKSUM_OFFSET], bytes[CHECKSUM_OFFSET + 1]]),
        })
    }

    /// Renders the share as text.
    pub fn encode(&self) -> Result<EncodedShare, FormatError> {
        let bytes = self.to_bytes();
        EncodedShare::from_canonical(base32::encode(&bytes[..])?)
    }

    /// Parses operator-entered text.
    ///
    /// Every character outside the alphabet (whitespace, hyphens, typos such
    /// as `O` or `1`) is discarded; lowercase is accepted.
    ///
    /// # Errors
    ///
    /// [`FormatError::Length`] unless exactly [`ENCODED_LEN`] alphabet
    /// characters remain, otherwise the errors of [`Share::from_bytes`].
    pub fn decode(text: &str) -> Result<Self, FormatError> {
        let actual = text.chars().filter(|&c| base32::is_alphabet_char(c)).count();
        if actual != ENCODED_LEN {
            return Err(FormatError::Length {
                expected: ENCODED_LEN,
                actual,
            });
        }

        let mut canonical = Zeroizing::new(String::with_capacity(ENCODED_LEN));
        canonical.extend(
            text.chars()
                .filter(|&c| base32::is_alphabet_char(c))
                .map(|c| c.to_ascii_uppercase()),
        );

        let bytes = base32::decode(&canonical)?;
        Self::from_bytes(&bytes)
    }
}

/// Canonical 56-character rendering of a share.
///
/// [`Display`](fmt::Display) and [`to_display_text`](Self::to_display_text)
/// produce the four-line, hyphen-grouped form meant for printing. The text is
/// zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct EncodedShare {
    canonical: String,
}

impl fmt::Debug for EncodedShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED EncodedShare]")
    }
}

impl fmt::Display for EncodedShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line[..GROUP_LEN])?;
            f.write_str("-")?;
            f.write_str(&line[GROUP_LEN..])?;
        }
        Ok(())
    }
}

impl EncodedShare {
    pub(crate) fn from_canonical(mut canonical: String) -> Result<Self, FormatError> {
        if canonical.len() != ENCODED_LEN {
            let actual = canonical.len();
            canonical.zeroize();
            return Err(FormatError::Length {
                expected: ENCODED_LEN,
                actual,
            });
        }

        Ok(Self { canonical })
    }

    /// Validates operator-entered text and returns its canonical form.
    ///
    /// # Errors
    ///
    /// See [`Share::decode`].
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        Share::decode(text)?.encode()
    }

    /// The 56 characters fed to and received from the codec.
    pub fn as_canonical(&self) -> &str {
        &self.canonical
    }

    /// The four 14-character lines, without separators.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        (0..LINE_COUNT).map(move |i| &self.canonical[i * LINE_LEN..(i + 1) * LINE_LEN])
    }

    /// The printable form: `XXXXXXX-XXXXXXX` lines joined by `\n`.
    pub fn to_display_text(&self) -> String {
        // Capacity covers the whole rendering, so the buffer is never reallocated.
        let mut text = String::with_capacity(LINE_COUNT * (LINE_LEN + 2));
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(&line[..GROUP_LEN]);
            text.push('-');
            text.push_str(&line[GROUP_LEN..]);
        }
        text
    }
}
