//! ClassicCipher: a single entry point over the three cipher families.
//!
//! Holds a [`Key`] together with the alphabet (shift) or configuration
//! (affine, Hill) it is used with, and routes encryption and decryption to
//! the matching cipher.

use crate::affine_cipher::{AffineCipher, AffineKey};
use crate::alphabet::Alphabet;
use crate::config::CipherConfig;
use crate::error::CipherError;
use crate::hill_cipher::{HillCipher, HillKey};
use crate::shift_cipher::ShiftCipher;

/// A key for one of the supported ciphers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Additive offset; any integer, used modulo the alphabet length.
    Shift(i64),
    /// Validated affine key `(a, b)`.
    Affine(AffineKey),
    /// Validated 2×2 Hill key.
    Hill(HillKey),
}

impl From<AffineKey> for Key {
    fn from(key: AffineKey) -> Self {
        Key::Affine(key)
    }
}

impl From<HillKey> for Key {
    fn from(key: HillKey) -> Self {
        Key::Hill(key)
    }
}

/// Cipher instance selected by its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassicCipher {
    /// Shift cipher over a configurable alphabet.
    Shift(ShiftCipher<Alphabet>),
    /// Affine cipher over the printable alphabet.
    Affine(AffineCipher),
    /// Hill cipher over the printable alphabet.
    Hill(HillCipher),
}

impl ClassicCipher {
    /// Builds the cipher matching `key`.
    ///
    /// `alphabet` is used only by the shift cipher and `config` only by the
    /// affine and Hill ciphers.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{Alphabet, CipherConfig, ClassicCipher, Key};
    ///
    /// let key = Key::Affine("(49, 18)".parse().unwrap());
    /// let cipher = ClassicCipher::new(key, Alphabet::english(), CipherConfig::default());
    /// let secret = cipher.encrypt("HELLO");
    /// assert_eq!(cipher.decrypt(&secret).unwrap(), "HELLO");
    /// ```
    pub fn new(key: Key, alphabet: Alphabet, config: CipherConfig) -> Self {
        match key {
            Key::Shift(k) => ClassicCipher::Shift(ShiftCipher::new(k, alphabet)),
            Key::Affine(k) => ClassicCipher::Affine(AffineCipher::new(k, config)),
            Key::Hill(k) => ClassicCipher::Hill(HillCipher::new(k, config)),
        }
    }

    /// Shift cipher over `alphabet`.
    pub fn shift(key: i64, alphabet: Alphabet) -> Self {
        ClassicCipher::Shift(ShiftCipher::new(key, alphabet))
    }

    /// Affine cipher with the default configuration.
    pub fn affine(key: AffineKey) -> Self {
        ClassicCipher::Affine(AffineCipher::with_key(key))
    }

    /// Hill cipher with the default configuration.
    pub fn hill(key: HillKey) -> Self {
        ClassicCipher::Hill(HillCipher::with_key(key))
    }

    /// The key this cipher was built with.
    pub fn key(&self) -> Key {
        match self {
            ClassicCipher::Shift(c) => Key::Shift(c.key()),
            ClassicCipher::Affine(c) => Key::Affine(*c.key()),
            ClassicCipher::Hill(c) => Key::Hill(*c.key()),
        }
    }

    /// Encrypts `plaintext`.
    pub fn encrypt(&self, plaintext: &str) -> String {
        match self {
            ClassicCipher::Shift(c) => c.encrypt(plaintext),
            ClassicCipher::Affine(c) => c.encrypt(plaintext),
            ClassicCipher::Hill(c) => c.encrypt(plaintext),
        }
    }

    /// Decrypts `ciphertext`.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyNotInvertible`] if the affine multiplier or
    /// Hill matrix has no inverse modulo 95.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        match self {
            ClassicCipher::Shift(c) => Ok(c.decrypt(ciphertext)),
            ClassicCipher::Affine(c) => c.decrypt(ciphertext).map(|d| d.text),
            ClassicCipher::Hill(c) => c.decrypt(ciphertext),
        }
    }
}
