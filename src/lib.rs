//! Classical substitution ciphers over a shared modular-arithmetic substrate.
//!
//! Three ciphers are provided, none of them cryptographically secure:
//!
//! - **Shift** (Caesar): constant offset over a configurable alphabet.
//! - **Affine**: `c = a·m + b mod 95` over the 95 printable ASCII symbols.
//! - **Hill**: 2-symbol blocks multiplied by an invertible 2×2 matrix mod 95.
//!
//! # Architecture
//!
//! ```text
//! utils::number_theory  (gcd, coprime set, modular inverse)
//!     ↑
//! utils::matrix         (2×2 determinant, adjugate, inverse mod n)
//!     ↑
//! alphabet + config     (symbol ↔ index, passthrough set, Hill filler)
//!     ↑
//! ShiftCipher / AffineCipher / HillCipher
//!     ↑
//! ClassicCipher         (key-selected dispatcher)
//! ```
//!
//! # Examples
//!
//! Affine round trip with a key parsed from user input:
//!
//! ```
//! use classicrypt::{AffineCipher, AffineKey};
//!
//! let key: AffineKey = "(49, 18)".parse().unwrap();
//! let cipher = AffineCipher::with_key(key);
//!
//! let secret = cipher.encrypt("HELLO");
//! assert_eq!(secret, "n:ttI");
//!
//! let recovered = cipher.decrypt(&secret).unwrap();
//! assert_eq!(recovered.text, "HELLO");
//! assert_eq!(recovered.inverse_used, 64);
//! ```
//!
//! Hill round trip with a freshly generated key:
//!
//! ```
//! use classicrypt::{hill_decrypt, hill_encrypt, hill_generate_key};
//!
//! let key = hill_generate_key().unwrap();
//! let secret = hill_encrypt(key.matrix(), "Meet me at noon").unwrap();
//! assert_eq!(hill_decrypt(key.matrix(), &secret).unwrap(), "Meet me at noon");
//! ```

#![deny(clippy::all)]

pub mod affine_cipher;
pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod error;
pub mod hill_cipher;
pub mod random;
pub mod shift_cipher;
pub mod utils;

pub use affine_cipher::{
    affine_decrypt, affine_encrypt, affine_key_is_valid, AffineCipher, AffineDecryption,
    AffineKey,
};
pub use alphabet::{Alphabet, PrintableAlphabet, SymbolMap};
pub use cipher::{ClassicCipher, Key};
pub use config::CipherConfig;
pub use error::CipherError;
pub use hill_cipher::{hill_decrypt, hill_encrypt, hill_key_is_valid, HillCipher, HillKey};
pub use shift_cipher::{shift_decrypt, shift_encrypt, ShiftCipher};
pub use utils::matrix::Matrix2;

/// Generates a random valid affine key with the thread-local RNG.
///
/// # Errors
/// Never fails for the fixed printable alphabet; see
/// [`random::key_generator::generate_affine_key`].
pub fn affine_generate_key() -> Result<AffineKey, CipherError> {
    random::key_generator::generate_affine_key_thread()
}

/// Generates a random valid Hill key with the thread-local RNG.
///
/// # Errors
/// Never fails for the fixed printable alphabet; see
/// [`random::key_generator::generate_hill_key`].
pub fn hill_generate_key() -> Result<HillKey, CipherError> {
    random::key_generator::generate_hill_key_thread()
}
