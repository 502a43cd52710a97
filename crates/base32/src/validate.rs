//! Alphabet and padding validation.
//!
//! All configuration errors are raised here, at configuration-resolution
//! time, so the encode/decode loops never have to re-check the alphabet.

use crate::Base32Error;

/// Number of symbols in a base32 alphabet.
pub(crate) const BASE: usize = 32;

/// Validates a candidate alphabet against a resolved padding character.
///
/// The checks run in order:
/// 1. the alphabet must be exactly `base` bytes long (measured in underlying
///    bytes, not characters, so multi-byte characters cannot smuggle a
///    short alphabet past the check);
/// 2. no alphabet byte may equal the padding character;
/// 3. no alphabet byte may be CR or LF.
///
/// # Arguments
///
/// * `alphabet` - The candidate alphabet.
/// * `pad_char` - The resolved padding byte, or `None` when padding is disabled.
/// * `base` - The required alphabet length, 32 for this codec.
///
/// # Returns
///
/// The alphabet, unchanged, when all checks pass.
///
/// # Errors
///
/// Returns the error naming the first failed check.
///
/// # Example
///
/// ```
/// use b32_codec::{validate_alphabet, ALPHABET};
///
/// let validated = validate_alphabet(ALPHABET, Some(b'='), 32).unwrap();
/// assert_eq!(validated, ALPHABET);
/// ```
pub fn validate_alphabet<'a>(
    alphabet: &'a str,
    pad_char: Option<u8>,
    base: usize,
) -> Result<&'a str, Base32Error> {
    check_alphabet_bytes(alphabet.as_bytes(), pad_char, base)?;
    Ok(alphabet)
}

/// Byte-level form of [`validate_alphabet`], shared with configuration
/// resolution where the alphabet is already stored as raw bytes.
pub(crate) fn check_alphabet_bytes(
    bytes: &[u8],
    pad_char: Option<u8>,
    base: usize,
) -> Result<(), Base32Error> {
    if bytes.len() != base {
        return Err(Base32Error::InvalidAlphabetLength {
            expected: base,
            actual: bytes.len(),
        });
    }
    if let Some(pad) = pad_char {
        if bytes.contains(&pad) {
            return Err(Base32Error::AlphabetContainsPadChar(pad as char));
        }
    }
    if bytes.iter().any(|&b| b == b'\r' || b == b'\n') {
        return Err(Base32Error::AlphabetContainsNewline);
    }
    Ok(())
}

/// Resolves a padding-character option into a padding byte.
///
/// An empty string disables padding (`Ok(None)`). Otherwise only the FIRST
/// character of the input is considered; any remainder is silently dropped.
/// That keeps compatibility with callers passing multi-character strings,
/// at the cost of being surprising, so prefer single-character input.
///
/// # Errors
///
/// Returns [`Base32Error::InvalidPadChar`] when the first character is CR,
/// LF, or has a code point above 0xFF.
///
/// # Example
///
/// ```
/// use b32_codec::resolve_pad_char;
///
/// assert_eq!(resolve_pad_char("=").unwrap(), Some(b'='));
/// assert_eq!(resolve_pad_char("").unwrap(), None);
/// ```
pub fn resolve_pad_char(pad_char: &str) -> Result<Option<u8>, Base32Error> {
    let Some(first) = pad_char.chars().next() else {
        return Ok(None);
    };
    if first == '\r' || first == '\n' || (first as u32) > 0xFF {
        return Err(Base32Error::InvalidPadChar(first));
    }
    Ok(Some(first as u8))
}
