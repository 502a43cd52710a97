//! Factory function for creating base32 decoders with custom alphabets.

use crate::codec::Base32;
use crate::options::Base32Options;
use crate::Base32Error;

/// Creates a base32 decoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 32-character alphabet. Defaults to the standard RFC 4648 alphabet.
/// * `pad_char` - The padding character. Defaults to `=`; an empty string disables padding.
///
/// # Returns
///
/// A function that decodes a base32 `&str` to a `Vec<u8>`.
///
/// # Errors
///
/// Returns an error if the alphabet/padding pair fails validation.
///
/// # Example
///
/// ```
/// use b32_codec::create_from_base32;
///
/// let decode = create_from_base32(None, None).unwrap();
/// assert_eq!(decode("MZXW6===").unwrap(), b"foo");
/// ```
pub fn create_from_base32(
    chars: Option<&str>,
    pad_char: Option<&str>,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base32Error>, Base32Error> {
    let codec = Base32::new(&Base32Options {
        alphabet: chars.map(str::to_owned),
        pad_char: pad_char.map(str::to_owned),
    })?;
    Ok(move |text: &str| codec.decode(text))
}
