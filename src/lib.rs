//! # NumKey
//!
//! A Rust implementation of a 64-bit reversible encoding for E.164
//! phone numbers and short codes.
//!
//! Encode an ISO 3166 alpha-2 country code plus a number of up to 15
//! digits into keys that are:
//! - 📦 Compact (two 32-bit words)
//! - 📈 Sortable by country, then number
//! - 🔄 Fully reversible up to 15 digits (leading zeros included)
//! - 🔒 Pure and thread-safe (no state, no I/O)

#![forbid(unsafe_code)]

pub mod hex;

mod country;
mod countrykey;
mod error;
mod key;
mod layout;
mod number;
mod prefix;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use countrykey::CountryKey;
pub use error::NumKeyError;
pub use key::{NumData, NumKey};
pub use prefix::PrefixKey;

// Re-export the field codecs for callers composing their own keys
pub use country::{decode_country, encode_country};
pub use number::{decode_number, encode_number};

// Re-export hex codec at crate root
pub use hex::ParseHexError;
pub use hex::LEN as HEX_LEN;
pub use hex::{decode as hex_decode, encode as hex_encode, encode_array as hex_encode_array};

// Layout limits callers may want to pre-validate against
pub use layout::{MAX_NUMBER_LEN, PREFIX_MAX_LEN};
