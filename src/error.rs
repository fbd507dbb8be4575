use thiserror::Error;

/// Represents errors raised by the checked NumKey constructor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumKeyError {
    /// Error when the country code is not two uppercase ASCII letters
    #[error("Country code {country:?} is invalid. Expected two uppercase ASCII letters")]
    InvalidCountry { country: String },
    /// Error when the number contains anything other than decimal digits
    #[error("Number {number:?} is invalid. Expected a non-empty string of decimal digits")]
    InvalidNumber { number: String },
}
