/// Standard RFC 4648 base32 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Standard base32 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Extended-hex ("base32hex") alphabet.
pub const ALPHABET_HEX: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Extended-hex alphabet as a byte array.
pub const ALPHABET_HEX_BYTES: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Default padding character.
pub const PAD: char = '=';
