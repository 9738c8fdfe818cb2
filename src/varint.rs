//! Variable-length base-64 integer codec.
//!
//! Packs unsigned integers into ASCII bytes, 5 bits per byte:
//! continuation bytes carry `(x & 31) + 95` and land in `[95, 127)`,
//! the final byte carries the remaining bits as `x + 63` and lands in
//! `[63, 95)`. Signed integers ride on top through a zigzag mapping so
//! small magnitudes of either sign stay short.

use crate::error::CodecError;

/// Encodes a single unsigned integer.
///
/// Output is one byte per 5 bits of magnitude, minimum one byte
/// (`0` encodes as `"?"`).
pub fn encode_uint(x: u64) -> String {
    let mut out = String::with_capacity(13);
    encode_uint_into(x, &mut out);
    out
}

/// Encodes a slice of unsigned integers as one concatenated string.
pub fn encode_uints(xs: &[u64]) -> String {
    let mut out = String::with_capacity(xs.len() * 2);
    for &x in xs {
        encode_uint_into(x, &mut out);
    }
    out
}

fn encode_uint_into(mut x: u64, out: &mut String) {
    while x >= 32 {
        // All emitted bytes stay below 127, so pushing as char is ASCII.
        out.push((((x & 31) + 95) as u8) as char);
        x >>= 5;
    }
    out.push(((x + 63) as u8) as char);
}

/// Decodes a string into the unsigned integers it encodes.
///
/// Fails with [`CodecError::InvalidCharacter`] on any byte outside
/// `[63, 127)` and with [`CodecError::Unterminated`] if the input ends
/// on a continuation byte. Values wider than 64 bits are not
/// representable; the result of decoding a continuation run that
/// overflows `u64` is unspecified.
pub fn decode_uints(s: &str) -> Result<Vec<u64>, CodecError> {
    let mut xs = Vec::new();
    let mut acc: u64 = 0;
    let mut shift: u32 = 0;
    for (position, c) in s.bytes().enumerate() {
        match c {
            63..=94 => {
                xs.push(acc + (u64::from(c - 63) << shift));
                acc = 0;
                shift = 0;
            }
            95..=126 => {
                acc += u64::from(c - 95) << shift;
                shift += 5;
            }
            _ => {
                return Err(CodecError::InvalidCharacter {
                    character: c,
                    position,
                });
            }
        }
    }
    if shift != 0 {
        return Err(CodecError::Unterminated);
    }
    Ok(xs)
}

/// Encodes a single signed integer via the zigzag mapping.
pub fn encode_int(x: i64) -> String {
    encode_uint(zigzag(x))
}

/// Encodes a slice of signed integers as one concatenated string.
pub fn encode_ints(xs: &[i64]) -> String {
    let mut out = String::with_capacity(xs.len() * 2);
    for &x in xs {
        encode_uint_into(zigzag(x), &mut out);
    }
    out
}

fn zigzag(x: i64) -> u64 {
    let y = (x as u64) << 1;
    if x < 0 { !y } else { y }
}

/// Decodes a string into the signed integers it encodes.
///
/// Errors from the unsigned layer propagate unchanged.
pub fn decode_ints(s: &str) -> Result<Vec<i64>, CodecError> {
    let xs = decode_uints(s)?;
    Ok(xs
        .into_iter()
        .map(|u| {
            let v = (u >> 1) as i64;
            if u & 1 == 0 { v } else { -v - 1 }
        })
        .collect())
}
