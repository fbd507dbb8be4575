/// Fixed-width hexadecimal encoding and decoding for NumKey
///
/// This module provides functionality to encode u64 key values to
/// 16-character lowercase hex strings and decode such strings back to
/// u64 values using lookup tables. The fixed width makes the textual
/// form lexicographically sortable in the same order as the numeric
/// keys.
use once_cell::sync::Lazy;

/// Character set for hex encoding
const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Lookup table for decoding hex characters to their values.
/// Uppercase input is accepted; output is always lowercase.
static DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| {
    let mut map = [-1i8; 256];
    for (i, &c) in HEX_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
        map[c.to_ascii_uppercase() as usize] = i as i8;
    }
    map
});

/// Exact length of an encoded u64 key (16 characters)
pub const LEN: usize = 16;

/// Encode a u64 key to a fixed-width 16-character array
///
/// # Arguments
/// * `value` - The u64 key to encode
///
/// # Returns
/// * `[u8; LEN]` - The 16 lowercase hex characters, zero-left-padded
pub fn encode_array(mut value: u64) -> [u8; LEN] {
    let mut buffer = [b'0'; LEN];
    let mut position = LEN;

    while value > 0 && position > 0 {
        position -= 1;
        buffer[position] = HEX_CHARS[(value & 0xF) as usize];
        value >>= 4;
    }

    buffer
}

/// Encode a u64 key to a fixed-width 16-character lowercase hex string
///
/// # Arguments
/// * `value` - The u64 key to encode
///
/// # Returns
/// * `String` - Exactly 16 hex characters, zero-left-padded
pub fn encode(value: u64) -> String {
    String::from_utf8_lossy(&encode_array(value)).into_owned()
}

/// Decode a 16-character hex string back to a u64 key
///
/// # Arguments
/// * `encoded` - The hex encoded string (upper or lower case)
///
/// # Returns
/// * `Result<u64, ParseHexError>` - The decoded u64 key or an error
pub fn decode(encoded: &str) -> Result<u64, ParseHexError> {
    if encoded.len() != LEN {
        return Err(ParseHexError::InvalidLength {
            len: encoded.len(),
        });
    }

    let mut result: u64 = 0;
    for &c in encoded.as_bytes() {
        let value = DECODE_MAP[c as usize];
        if value == -1 {
            return Err(ParseHexError::InvalidCharacter(c as char));
        }
        result = (result << 4) | value as u64;
    }

    Ok(result)
}

/// Errors that can occur during hex decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    /// The input string is not exactly 16 characters long
    #[error("Expected exactly 16 hex characters, got {len}")]
    InvalidLength { len: usize },

    /// The input string contains an invalid character
    #[error("Invalid hex character: {0}")]
    InvalidCharacter(char),
}
