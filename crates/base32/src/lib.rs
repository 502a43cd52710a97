//! Base32 encoding and decoding utilities.
//!
//! This crate provides base32 encoding/decoding with support for:
//! - The standard RFC 4648 alphabet and the extended-hex alphabet
//! - Custom 32-character alphabets
//! - Configurable or disabled padding
//!
//! # Example
//!
//! ```
//! use b32_codec::{to_base32, from_base32};
//!
//! let encoded = to_base32(b"foobar");
//! assert_eq!(encoded, "MZXW6YTBOI======");
//! let decoded = from_base32(&encoded).unwrap();
//! assert_eq!(decoded, b"foobar");
//! ```

use thiserror::Error;

mod codec;
mod constants;
mod create_from_base32;
mod create_to_base32;
mod decode;
mod encode;
mod from_base32;
mod from_base32_hex;
mod options;
mod to_base32;
mod to_base32_hex;
mod validate;

pub use codec::{Base32, BASE32, BASE32_HEX};
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_HEX, ALPHABET_HEX_BYTES, PAD};
pub use create_from_base32::create_from_base32;
pub use create_to_base32::create_to_base32;
pub use from_base32::from_base32;
pub use from_base32_hex::from_base32_hex;
pub use options::Base32Options;
pub use to_base32::to_base32;
pub use to_base32_hex::to_base32_hex;
pub use validate::{resolve_pad_char, validate_alphabet};

/// Error type for base32 configuration and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base32Error {
    /// The alphabet is not exactly 32 single-byte characters long.
    #[error("alphabet must be {expected} bytes long, got {actual}")]
    InvalidAlphabetLength {
        /// Required length in bytes.
        expected: usize,
        /// Length in bytes of the supplied alphabet.
        actual: usize,
    },
    /// The alphabet contains the padding character.
    #[error("alphabet must not contain the padding character {0:?}")]
    AlphabetContainsPadChar(char),
    /// The alphabet contains a carriage-return or line-feed character.
    #[error("alphabet must not contain newline characters")]
    AlphabetContainsNewline,
    /// The padding character is CR, LF, or not representable as a single byte.
    #[error("invalid padding character {0:?}")]
    InvalidPadChar(char),
    /// Decode input contains a character absent from the active alphabet.
    #[error("invalid base32 character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset within the decode input.
        position: usize,
    },
}
