//! Error types for the classicrypt library.

use thiserror::Error;

/// Errors produced by the classicrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// A number-theory primitive was called with a modulus below 2.
    #[error("Modulus {n} is outside the valid domain (must be at least 2)")]
    InvalidDomain { n: i64 },
    /// A scalar or matrix has no multiplicative inverse under the modulus.
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    KeyNotInvertible { value: i64, modulus: i64 },
    /// A textual key could not be parsed.
    #[error("Malformed key: {0}")]
    InvalidKeyFormat(String),
    /// A key was parsed but fails the validity predicate for its cipher.
    #[error("Key rejected: {0}")]
    KeyRejected(String),
    /// A configurable alphabet is empty or repeats a symbol.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
    /// A cipher configuration value cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
