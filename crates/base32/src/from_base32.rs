//! Standard base32 decoding function.

use crate::codec::BASE32;
use crate::Base32Error;

/// Decodes a standard base32 string to bytes.
///
/// Uses the RFC 4648 alphabet with `=` padding. The decoded bytes are
/// returned as-is; converting them back to text is the caller's concern.
///
/// # Errors
///
/// Returns [`Base32Error::InvalidCharacter`] when the input contains a
/// character outside the alphabet.
///
/// # Example
///
/// ```
/// use b32_codec::from_base32;
///
/// assert_eq!(from_base32("MZXW6YTBOI======").unwrap(), b"foobar");
/// ```
pub fn from_base32(text: &str) -> Result<Vec<u8>, Base32Error> {
    BASE32.decode(text)
}
