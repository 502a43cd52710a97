//! Bit-unpacking decoder.

use crate::options::Config;
use crate::Base32Error;

/// Decodes `text` under a resolved configuration.
///
/// When padding is enabled and the input ends with the pad character, only
/// the prefix before the FIRST pad occurrence is decoded; everything from
/// that point on is treated as trailing padding. Each character in the
/// prefix contributes 5 bits, most significant bits first, and every 8
/// buffered bits become one output byte. Trailing bits short of a full
/// byte are the encoder's zero fill and are discarded without inspection.
///
/// # Errors
///
/// Returns [`Base32Error::InvalidCharacter`] for any character in the
/// decoded prefix that is absent from the alphabet.
pub(crate) fn decode_with(text: &str, config: &Config) -> Result<Vec<u8>, Base32Error> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let total = text.chars().count();
    let effective = match config.pad.map(|p| p as char) {
        Some(pad) if text.ends_with(pad) => {
            text.chars().position(|c| c == pad).unwrap_or(total)
        }
        _ => total,
    };

    let mut out = Vec::with_capacity(effective * 5 / 8);
    let mut acc: u16 = 0;
    let mut bits: u32 = 0;
    for (position, character) in text.chars().take(effective).enumerate() {
        let value = match u32::from(character) {
            code if code < 256 => config.table[code as usize],
            _ => -1,
        };
        if value < 0 {
            return Err(Base32Error::InvalidCharacter { character, position });
        }
        acc = (acc << 5) | value as u16;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }

    Ok(out)
}
