//! Extended-hex base32 encoding function.

use crate::codec::BASE32_HEX;

/// Encodes a byte slice with the extended-hex ("base32hex") alphabet and
/// `=` padding.
///
/// # Example
///
/// ```
/// use b32_codec::to_base32_hex;
///
/// assert_eq!(to_base32_hex(b"foo"), "CPNMU===");
/// ```
pub fn to_base32_hex(data: &[u8]) -> String {
    BASE32_HEX.encode(data)
}
