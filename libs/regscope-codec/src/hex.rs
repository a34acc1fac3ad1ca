//! Lenient hex/binary text normalization and byte rendering
//!
//! Accepts the notations seen in device manuals, packet captures and log
//! dumps (`0x48 0x65`, `48:65`, `48-65`, `0100_1000`) and reduces them to
//! plain bytes. The only implicit correction is left-padding: an odd number
//! of hex digits gets one leading zero nibble, and a bit string is padded
//! with leading zeros to a whole number of bytes.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::trace;

use crate::error::{CodecError, Result};

/// How input text should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Hex,
    Binary,
}

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ':' | '-')
}

/// Parse decorated hex text into bytes
///
/// Strips `0x`/`0X` prefixes and bare `x`/`X` wherever they occur, plus
/// whitespace, commas, colons and hyphens. Positions in errors are char
/// indices into the original text.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let mut nibbles = Vec::with_capacity(text.len());
    let mut chars = text.chars().enumerate().peekable();

    while let Some((position, c)) = chars.next() {
        if c == '0' && matches!(chars.peek(), Some((_, 'x' | 'X'))) {
            chars.next();
            continue;
        }
        if matches!(c, 'x' | 'X') || is_separator(c) {
            continue;
        }
        match c.to_digit(16) {
            Some(nibble) => nibbles.push(nibble as u8),
            None => {
                trace!("Rejecting hex input at {}: {:?}", position, c);
                return Err(CodecError::InvalidCharacter { ch: c, position });
            },
        }
    }

    if nibbles.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    if nibbles.len() % 2 != 0 {
        nibbles.insert(0, 0);
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Parse a bit string into bytes
///
/// Strips whitespace, commas, colons, hyphens and underscores, then packs
/// groups of eight bits MSB-first.
pub fn parse_binary(text: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.len());

    for (position, c) in text.chars().enumerate() {
        match c {
            '0' => bits.push(0u8),
            '1' => bits.push(1u8),
            '_' => {},
            c if is_separator(c) => {},
            c => {
                trace!("Rejecting binary input at {}: {:?}", position, c);
                return Err(CodecError::InvalidBinaryCharacter { ch: c, position });
            },
        }
    }

    if bits.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let pad = (8 - bits.len() % 8) % 8;
    let mut padded = vec![0u8; pad];
    padded.extend_from_slice(&bits);

    Ok(padded
        .chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |acc, bit| (acc << 1) | bit))
        .collect())
}

/// Parse `text` according to `format`
pub fn parse_input(text: &str, format: InputFormat) -> Result<Vec<u8>> {
    match format {
        InputFormat::Hex => parse_hex(text),
        InputFormat::Binary => parse_binary(text),
    }
}

/// Encode bytes to uppercase hex string
/// Example: [0x12, 0x34, 0xAB] -> "1234AB"
pub fn encode_upper(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len() * 2);
    for byte in data {
        // Writing to String buffer is infallible
        let _ = write!(&mut result, "{:02X}", byte);
    }
    result
}

/// Render bytes as space-separated uppercase hex pairs
/// Example: [0x12, 0x34, 0xAB] -> "12 34 AB"
pub fn bytes_to_hex_text(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len() * 3);
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let _ = write!(&mut result, "{:02X}", byte);
    }
    result
}

/// Render bytes as space-separated 8-bit groups
/// Example: [0x12, 0x34] -> "00010010 00110100"
pub fn bytes_to_binary_text(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len() * 9);
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let _ = write!(&mut result, "{:08b}", byte);
    }
    result
}
