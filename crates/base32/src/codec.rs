//! The `Base32` codec instance.

use crate::constants::{ALPHABET_HEX_BYTES, PAD};
use crate::decode::decode_with;
use crate::encode::encode_with;
use crate::options::{Base32Options, Config, DEFAULT_CONFIG};
use crate::Base32Error;

/// A base32 codec holding one validated default configuration.
///
/// The configuration is validated eagerly at construction and never mutated
/// afterwards, so a `Base32` value can be shared freely across threads.
/// Per-call overrides resolve into an independent configuration and leave
/// the instance untouched.
///
/// # Example
///
/// ```
/// use b32_codec::{Base32, Base32Options};
///
/// let codec = Base32::new(&Base32Options::new()).unwrap();
/// assert_eq!(codec.encode(b"foo"), "MZXW6===");
/// assert_eq!(codec.decode("MZXW6===").unwrap(), b"foo");
/// ```
#[derive(Debug, Clone)]
pub struct Base32 {
    config: Config,
}

/// Ready-to-use codec: standard RFC 4648 alphabet, `=` padding.
pub static BASE32: Base32 = Base32 {
    config: DEFAULT_CONFIG,
};

/// Ready-to-use codec: extended-hex alphabet, `=` padding.
pub static BASE32_HEX: Base32 = Base32 {
    config: Config::from_parts(*ALPHABET_HEX_BYTES, Some(PAD as u8)),
};

impl Base32 {
    /// Creates a codec, merging `options` over the standard defaults
    /// (RFC 4648 alphabet, `=` padding).
    ///
    /// # Errors
    ///
    /// Returns a validation error when the merged alphabet/padding pair is
    /// malformed; nothing is constructed on failure.
    pub fn new(options: &Base32Options) -> Result<Self, Base32Error> {
        Ok(Self {
            config: Config::resolve(&DEFAULT_CONFIG, options)?,
        })
    }

    /// Encodes `data` with the instance configuration.
    ///
    /// Infallible: every 5-bit value is a valid alphabet index once the
    /// configuration has been validated.
    pub fn encode(&self, data: &[u8]) -> String {
        encode_with(data, &self.config)
    }

    /// Encodes `data` with `options` resolved over the instance
    /// configuration for this call only.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the override is malformed.
    pub fn encode_with(&self, data: &[u8], options: &Base32Options) -> Result<String, Base32Error> {
        let config = Config::resolve(&self.config, options)?;
        Ok(encode_with(data, &config))
    }

    /// Decodes `text` with the instance configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Base32Error::InvalidCharacter`] when the input contains a
    /// character absent from the alphabet.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, Base32Error> {
        decode_with(text, &self.config)
    }

    /// Decodes `text` with `options` resolved over the instance
    /// configuration for this call only.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the override is malformed, or
    /// [`Base32Error::InvalidCharacter`] for input outside the alphabet.
    pub fn decode_with(&self, text: &str, options: &Base32Options) -> Result<Vec<u8>, Base32Error> {
        let config = Config::resolve(&self.config, options)?;
        decode_with(text, &config)
    }
}

impl Default for Base32 {
    fn default() -> Self {
        BASE32.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ALPHABET_HEX;

    #[test]
    fn default_codec_matches_static() {
        let codec = Base32::default();
        assert_eq!(codec.encode(b"foobar"), BASE32.encode(b"foobar"));
    }

    #[test]
    fn hex_static_uses_extended_hex_alphabet() {
        assert_eq!(BASE32_HEX.encode(b"f"), "CO======");
        assert_eq!(BASE32_HEX.encode(b"foo"), "CPNMU===");
        assert_eq!(BASE32_HEX.decode("CPNMU===").unwrap(), b"foo");
    }

    #[test]
    fn construction_fails_eagerly_on_bad_alphabet() {
        let options = Base32Options::new().with_alphabet("ABC");
        assert_eq!(
            Base32::new(&options).unwrap_err(),
            Base32Error::InvalidAlphabetLength {
                expected: 32,
                actual: 3
            }
        );
    }

    #[test]
    fn construction_fails_on_pad_collision() {
        let options = Base32Options::new()
            .with_alphabet(ALPHABET_HEX)
            .with_pad_char("0");
        assert_eq!(
            Base32::new(&options).unwrap_err(),
            Base32Error::AlphabetContainsPadChar('0')
        );
    }

    #[test]
    fn per_call_override_does_not_mutate_the_instance() {
        let codec = Base32::default();
        let hex = Base32Options::new().with_alphabet(ALPHABET_HEX);
        assert_eq!(codec.encode_with(b"f", &hex).unwrap(), "CO======");
        assert_eq!(codec.encode(b"f"), "MY======");
    }

    #[test]
    fn invalid_override_leaves_the_instance_usable() {
        let codec = Base32::default();
        let bad = Base32Options::new().with_pad_char("\n");
        assert_eq!(
            codec.decode_with("MY======", &bad).unwrap_err(),
            Base32Error::InvalidPadChar('\n')
        );
        assert_eq!(codec.decode("MY======").unwrap(), b"f");
    }

    #[test]
    fn padding_disabled_roundtrip() {
        let codec = Base32::new(&Base32Options::new().with_pad_char("")).unwrap();
        assert_eq!(codec.encode(b"f"), "MY");
        assert_eq!(codec.encode(b"foobar"), "MZXW6YTBOI");
        assert_eq!(codec.decode("MZXW6YTBOI").unwrap(), b"foobar");
    }
}
