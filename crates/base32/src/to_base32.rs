//! Standard base32 encoding function.

use crate::codec::BASE32;

/// Encodes a byte slice to a standard base32 string.
///
/// Uses the RFC 4648 alphabet with `=` padding.
///
/// # Example
///
/// ```
/// use b32_codec::to_base32;
///
/// assert_eq!(to_base32(b"foobar"), "MZXW6YTBOI======");
/// ```
pub fn to_base32(data: &[u8]) -> String {
    BASE32.encode(data)
}
