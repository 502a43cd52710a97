//! Extended-hex base32 decoding function.

use crate::codec::BASE32_HEX;
use crate::Base32Error;

/// Decodes an extended-hex ("base32hex") string to bytes.
///
/// # Errors
///
/// Returns [`Base32Error::InvalidCharacter`] when the input contains a
/// character outside the extended-hex alphabet.
///
/// # Example
///
/// ```
/// use b32_codec::from_base32_hex;
///
/// assert_eq!(from_base32_hex("CPNMU===").unwrap(), b"foo");
/// ```
pub fn from_base32_hex(text: &str) -> Result<Vec<u8>, Base32Error> {
    BASE32_HEX.decode(text)
}
