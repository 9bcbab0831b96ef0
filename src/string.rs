//! Byte ↔ codepoint transcoding over the supplementary private use areas.
//!
//! Every pair of bytes `(a, b)` becomes one character `AREA_A + (a << 8) + b`
//! in plane 15.  Two cases live in plane 16 instead:
//!
//! | Input                 | Codepoint                    |
//! |-----------------------|------------------------------|
//! | `(0xFF, 0xFE)`        | `AREA_B + 0`                 |
//! | `(0xFF, 0xFF)`        | `AREA_B + 1`                 |
//! | trailing single `a`   | `AREA_B + (a << 8) + 0xEE`   |
//!
//! The `(0xFF, 0xFE..=0xFF)` aliases are part of the consumer's reference
//! format and must be reproduced exactly even though the plane 15 rule would
//! also be unambiguous for them.

use crate::error::DecodeError;

/// Start of supplementary private use area A (plane 15).
pub const AREA_A: u32 = 0x0F_0000;
/// Start of supplementary private use area B (plane 16).
pub const AREA_B: u32 = 0x10_0000;

const SINGLE_BYTE_MARK: u32 = 0xEE;

/// The one or two bytes carried by a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharBytes {
    One(u8),
    Two(u8, u8),
}

impl CharBytes {
    fn append_to(self, out: &mut Vec<u8>) {
        match self {
            CharBytes::One(a)    => out.push(a),
            CharBytes::Two(a, b) => out.extend_from_slice(&[a, b]),
        }
    }
}

/// Map one byte, or a pair of bytes, to its codepoint.
pub fn encode_codepoint(a: u8, b: Option<u8>) -> u32 {
    match b {
        Some(b) if a == 0xFF && b >= 0xFE => AREA_B + u32::from(b - 0xFE),
        Some(b) => AREA_A + (u32::from(a) << 8) + u32::from(b),
        None    => AREA_B + (u32::from(a) << 8) + SINGLE_BYTE_MARK,
    }
}

/// Same as [`encode_codepoint`], as a `char`.
pub fn encode_char(a: u8, b: Option<u8>) -> char {
    // Every codepoint produced lies in 0xF0000..=0x10FFEE, all valid scalars.
    char::from_u32(encode_codepoint(a, b)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Encode an arbitrary byte sequence as a string of private use characters.
pub fn encode_string(data: &[u8]) -> String {
    data.chunks(2)
        .map(|pair| match *pair {
            [a, b] => encode_char(a, Some(b)),
            [a]    => encode_char(a, None),
            _      => unreachable!("chunks(2) yields one or two bytes"),
        })
        .collect()
}

/// Recover the bytes carried by one character.
pub fn decode_char(c: char) -> Result<CharBytes, DecodeError> {
    let n = u32::from(c);
    if !(AREA_A..=AREA_B + 0xFFFF).contains(&n) {
        return Err(DecodeError::BadCodepoint(n));
    }

    if n >= AREA_B {
        if n & 0xFF == SINGLE_BYTE_MARK {
            return Ok(CharBytes::One(((n & 0xFF00) >> 8) as u8));
        }
        return Ok(CharBytes::Two(0xFF, 0xFEu8.wrapping_add((n & 0xFF) as u8)));
    }

    Ok(CharBytes::Two(((n & 0xFF00) >> 8) as u8, (n & 0xFF) as u8))
}

/// Decode a private use string back to the bytes it carries.
pub fn decode_string(data: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(data.len() / 2);
    for c in data.chars() {
        decode_char(c)?.append_to(&mut out);
    }
    Ok(out)
}
