//! Codec configuration: the caller-facing options bag and the resolved,
//! validated configuration used by the encode/decode loops.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::validate::{check_alphabet_bytes, resolve_pad_char, BASE};
use crate::Base32Error;

/// Optional codec configuration.
///
/// Every field set to `None` keeps the corresponding default (the standard
/// alphabet, `=` padding). An explicitly empty `pad_char` disables padding.
/// The same shape is accepted by [`Base32::new`](crate::Base32::new) and by
/// the per-call `encode_with`/`decode_with` overrides.
///
/// # Example
///
/// ```
/// use b32_codec::{Base32, Base32Options};
///
/// let codec = Base32::new(&Base32Options::new().with_pad_char("")).unwrap();
/// assert_eq!(codec.encode(b"f"), "MY");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base32Options {
    /// Replacement 32-character alphabet.
    pub alphabet: Option<String>,
    /// Padding character; an empty string disables padding.
    pub pad_char: Option<String>,
}

impl Base32Options {
    /// Options that keep every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement alphabet.
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// Sets the padding character; an empty string disables padding.
    pub fn with_pad_char(mut self, pad_char: impl Into<String>) -> Self {
        self.pad_char = Some(pad_char.into());
        self
    }
}

/// A fully validated codec configuration.
///
/// Built only through validation ([`Config::resolve`]) or from the known-good
/// built-in alphabets, and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Config {
    /// Direct mapping from a 5-bit value to its alphabet byte.
    pub(crate) alphabet: [u8; BASE],
    /// Padding byte, or `None` when padding is disabled.
    pub(crate) pad: Option<u8>,
    /// Reverse lookup from a byte to its 5-bit value, -1 for absent bytes.
    pub(crate) table: [i16; 256],
}

/// The built-in default configuration: standard alphabet, `=` padding.
pub(crate) const DEFAULT_CONFIG: Config = Config::from_parts(*ALPHABET_BYTES, Some(PAD as u8));

impl Config {
    /// Assembles a configuration from known-valid parts, building the
    /// reverse lookup table. Const so the built-in codecs can live in
    /// statics.
    pub(crate) const fn from_parts(alphabet: [u8; BASE], pad: Option<u8>) -> Self {
        let mut table = [-1i16; 256];
        let mut i = 0;
        while i < BASE {
            table[alphabet[i] as usize] = i as i16;
            i += 1;
        }
        Self { alphabet, pad, table }
    }

    /// Resolves `options` over `defaults` into a validated configuration.
    ///
    /// Each supplied field replaces the default; the merged alphabet/pad
    /// pair is then validated as a whole, so a pad override that collides
    /// with the default alphabet is still caught. `defaults` is never
    /// modified.
    pub(crate) fn resolve(defaults: &Config, options: &Base32Options) -> Result<Config, Base32Error> {
        let pad = match &options.pad_char {
            Some(pad_char) => resolve_pad_char(pad_char)?,
            None => defaults.pad,
        };
        let mut alphabet = defaults.alphabet;
        match &options.alphabet {
            Some(chars) => {
                check_alphabet_bytes(chars.as_bytes(), pad, BASE)?;
                alphabet.copy_from_slice(chars.as_bytes());
            }
            None => check_alphabet_bytes(&alphabet, pad, BASE)?,
        }
        Ok(Config::from_parts(alphabet, pad))
    }
}
