//! Bit-packing encoder.

use crate::options::Config;

/// Encodes `data` under a resolved configuration.
///
/// The input is consumed as a bit stream, most significant bits first:
/// each byte pushes 8 bits into the accumulator and every 5 buffered bits
/// become one alphabet character. A trailing group of 1-4 bits is
/// left-shifted to fill a full 5-bit slot. When padding is enabled the
/// output is filled with the pad character up to the next multiple of 8
/// characters; empty input stays empty and is never padded.
pub(crate) fn encode_with(data: &[u8], config: &Config) -> String {
    if data.is_empty() {
        return String::new();
    }

    let unpadded = (data.len() * 8).div_ceil(5);
    let capacity = match config.pad {
        Some(_) => unpadded.div_ceil(8) * 8,
        None => unpadded,
    };
    let mut out = String::with_capacity(capacity);
    let mut symbols = 0usize;

    // 16 bits is enough: the accumulator never holds more than the <5
    // leftover bits plus one incoming byte.
    let mut acc: u16 = 0;
    let mut bits: u32 = 0;
    for &byte in data {
        acc = (acc << 8) | byte as u16;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(config.alphabet[((acc >> bits) & 0x1f) as usize] as char);
            symbols += 1;
        }
    }
    if bits > 0 {
        out.push(config.alphabet[((acc << (5 - bits)) & 0x1f) as usize] as char);
        symbols += 1;
    }

    if let Some(pad) = config.pad {
        let pad = pad as char;
        while symbols % 8 != 0 {
            out.push(pad);
            symbols += 1;
        }
    }

    out
}
