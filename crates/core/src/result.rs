//! Core results and error types

use thiserror::Error;

/// Core error type encompassing all placeholder and substitution failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A placeholder was already generated for this id on the same replacer.
    #[error("id \"{0}\" has already been used to identify a replacement value, choose a different string")]
    DuplicateIdentifier(String),

    /// Calldata is not `0x`-optional, even-length hexadecimal.
    #[error("invalid hex calldata: {0}")]
    InvalidHex(String),

    /// The numeric replacement is not a decimal or `0x` hexadecimal integer.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// The operation code is neither a call nor a delegate call.
    #[error("invalid operation code: {0}")]
    InvalidOperation(u8),

    /// Registered ids that the replacement map does not cover.
    #[error("the following keys should be replaced and are missing: {}", .0.join(" "))]
    MissingReplacement(Vec<String>),

    /// The numeric replacement does not fit in 32 bytes.
    #[error("number is too large to represent in 32 bytes: {0}")]
    NumberTooLarge(String),

    /// Replacement keys that were never registered as placeholders.
    #[error(
        "the following keys were specified to be replaced but the corresponding placeholder was not found: {}",
        .0.join(" ")
    )]
    UnknownReplacement(Vec<String>),
}

/// Core result type
pub type Result<T> = std::result::Result<T, Error>;
