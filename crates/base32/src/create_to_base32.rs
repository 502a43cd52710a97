//! Factory function for creating base32 encoders with custom alphabets.

use crate::codec::Base32;
use crate::options::Base32Options;
use crate::Base32Error;

/// Creates a base32 encoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 32-character alphabet. Defaults to the standard RFC 4648 alphabet.
/// * `pad_char` - The padding character. Defaults to `=`; an empty string disables padding.
///
/// # Returns
///
/// A function that encodes a byte slice to a base32 `String`.
///
/// # Errors
///
/// Returns an error if the alphabet/padding pair fails validation.
///
/// # Example
///
/// ```
/// use b32_codec::create_to_base32;
///
/// let encode = create_to_base32(None, Some("")).unwrap();
/// assert_eq!(encode(b"foobar"), "MZXW6YTBOI");
/// ```
pub fn create_to_base32(
    chars: Option<&str>,
    pad_char: Option<&str>,
) -> Result<impl Fn(&[u8]) -> String, Base32Error> {
    let codec = Base32::new(&Base32Options {
        alphabet: chars.map(str::to_owned),
        pad_char: pad_char.map(str::to_owned),
    })?;
    Ok(move |data: &[u8]| codec.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_encoding() {
        let encode = create_to_base32(None, None).unwrap();
        assert_eq!(encode(b"foob"), "MZXW6YQ=");
    }

    #[test]
    fn custom_alphabet_and_pad() {
        let encode =
            create_to_base32(Some("abcdefghijklmnopqrstuvwxyz234567"), Some("*")).unwrap();
        assert_eq!(encode(b"f"), "my******");
    }

    #[test]
    fn rejects_bad_alphabet() {
        assert!(matches!(
            create_to_base32(Some("too short"), None),
            Err(Base32Error::InvalidAlphabetLength { .. })
        ));
    }
}
