//! NumKey composition and decomposition.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::country::{decode_country, encode_country};
use crate::error::NumKeyError;
use crate::hex;
use crate::hex::ParseHexError;
use crate::layout::{MASK_LENGTH, SHIFT_COUNTRY_SL};
use crate::number::{decode_number, encode_number};

/// Decoded NumKey components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumData {
    /// ISO 3166 alpha-2 country code
    pub country: String,
    /// Short code or E.164 number (empty if the encoding was not reversible)
    pub number: String,
}

/// 64-bit country + number key, stored as two 32-bit words.
///
/// The derived ordering compares `hi` before `lo`, which is exactly the
/// numeric order of the combined 64-bit value: keys sort by country
/// first, then by number magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NumKey {
    /// High word: country letters and the top 22 magnitude bits
    pub hi: u32,
    /// Low word: remaining magnitude bits and the length tag
    pub lo: u32,
}

impl NumKey {
    /// Encode a country code and number into a NumKey.
    ///
    /// This is the unchecked primitive: the caller is responsible for
    /// passing two uppercase ASCII letters and a decimal digit string.
    /// Malformed input produces a deterministic garbage key without
    /// panicking. Numbers longer than 15 digits keep only the trailing
    /// 15 and the key becomes non-reversible.
    pub fn new(country: &str, number: &str) -> Self {
        let (num_hi, num_lo) = encode_number(number);
        Self {
            hi: encode_country(country) | num_hi,
            lo: num_lo,
        }
    }

    /// Encode with input validation.
    ///
    /// Accepts exactly two uppercase ASCII letters and a non-empty
    /// string of decimal digits. Over-long numbers are still accepted
    /// and degrade to the documented non-reversible encoding.
    pub fn try_new(country: &str, number: &str) -> Result<Self, NumKeyError> {
        if country.len() != 2 || !country.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(NumKeyError::InvalidCountry {
                country: country.to_string(),
            });
        }
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumKeyError::InvalidNumber {
                number: number.to_string(),
            });
        }
        Ok(Self::new(country, number))
    }

    /// Build a key directly from its two words.
    #[inline(always)]
    pub const fn from_parts(hi: u32, lo: u32) -> Self {
        Self { hi, lo }
    }

    /// Build a key from the combined 64-bit value.
    #[inline(always)]
    pub const fn from_u64(nk: u64) -> Self {
        Self {
            hi: (nk >> 32) as u32,
            lo: nk as u32,
        }
    }

    /// The combined 64-bit value, `hi` in the upper half.
    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        ((self.hi as u64) << 32) | (self.lo as u64)
    }

    /// Decompose the key into its country and number components
    #[inline]
    pub fn decode(self) -> NumData {
        NumData {
            country: self.country(),
            number: self.number(),
        }
    }

    /// Extract the country component
    #[inline]
    pub fn country(self) -> String {
        decode_country(self.hi)
    }

    /// Extract the number component.
    /// Returns the empty string when the length tag is zero.
    #[inline]
    pub fn number(self) -> String {
        decode_number(self.hi, self.lo)
    }

    /// Whether decoding recovers the original number exactly.
    /// False when the number was empty or longer than 15 digits.
    #[inline(always)]
    pub const fn is_reversible(self) -> bool {
        (self.lo & MASK_LENGTH) != 0
    }

    /// Three-way comparison using only the country bits, for
    /// country-grouped ordering independent of the number payload.
    #[inline]
    pub fn compare_country(self, other: Self) -> Ordering {
        (self.hi >> SHIFT_COUNTRY_SL).cmp(&(other.hi >> SHIFT_COUNTRY_SL))
    }

    /// Canonical text form: exactly 16 lowercase hex characters,
    /// `hi` then `lo`, zero-left-padded.
    #[inline]
    pub fn to_hex(self) -> String {
        hex::encode(self.as_u64())
    }

    /// Parse the canonical 16-character hex form.
    #[inline]
    pub fn from_hex(encoded: &str) -> Result<Self, ParseHexError> {
        hex::decode(encoded).map(Self::from_u64)
    }
}

impl fmt::Display for NumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for NumKey {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u64> for NumKey {
    fn from(nk: u64) -> Self {
        Self::from_u64(nk)
    }
}

impl From<NumKey> for u64 {
    fn from(nk: NumKey) -> Self {
        nk.as_u64()
    }
}
