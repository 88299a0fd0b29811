//! AffineCipher: `c = a·m + b mod 95` over the printable alphabet.
//!
//! Characters in the configured passthrough set, and any character outside
//! the printable range, are copied unchanged.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::alphabet::{PrintableAlphabet, SymbolMap, PRINTABLE_LEN};
use crate::config::CipherConfig;
use crate::error::CipherError;
use crate::utils::converter::parse_affine_key;
use crate::utils::number_theory::{coprime_set, is_coprime, modular_inverse};

/// Validated affine key `(a, b)`.
///
/// Valid iff `a` is in `coprime_set(95)` (so `1 <= a <= 94`) and
/// `0 <= b <= 94`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AffineKey {
    a: i64,
    b: i64,
}

impl AffineKey {
    /// Creates a key, checking it against [`affine_key_is_valid`].
    ///
    /// # Errors
    /// Returns [`CipherError::KeyRejected`] if the key is not valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::AffineKey;
    ///
    /// assert!(AffineKey::new(49, 18).is_ok());
    /// assert!(AffineKey::new(5, 10).is_err());
    /// ```
    pub fn new(a: i64, b: i64) -> Result<Self, CipherError> {
        if !(1..PRINTABLE_LEN).contains(&a) || !is_coprime(a, PRINTABLE_LEN) {
            return Err(CipherError::KeyRejected(format!(
                "multiplier {} is not coprime with {} in [1, {}]",
                a,
                PRINTABLE_LEN,
                PRINTABLE_LEN - 1
            )));
        }
        if !(0..PRINTABLE_LEN).contains(&b) {
            return Err(CipherError::KeyRejected(format!(
                "offset {} is outside [0, {}]",
                b,
                PRINTABLE_LEN - 1
            )));
        }
        Ok(AffineKey { a, b })
    }

    /// Builds a key without validation. Callers guarantee validity.
    pub(crate) fn new_unchecked(a: i64, b: i64) -> Self {
        AffineKey { a, b }
    }

    /// The multiplier `a`.
    pub fn a(&self) -> i64 {
        self.a
    }

    /// The offset `b`.
    pub fn b(&self) -> i64 {
        self.b
    }

    /// The key as an `(a, b)` tuple.
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.a, self.b)
    }

    /// `a⁻¹ mod 95`.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyNotInvertible`] if `a` has no inverse,
    /// which a validated key never triggers.
    pub fn inverse_multiplier(&self) -> Result<i64, CipherError> {
        modular_inverse(PRINTABLE_LEN, self.a)
    }
}

impl TryFrom<(i64, i64)> for AffineKey {
    type Error = CipherError;

    fn try_from((a, b): (i64, i64)) -> Result<Self, Self::Error> {
        AffineKey::new(a, b)
    }
}

impl FromStr for AffineKey {
    type Err = CipherError;

    /// Parses `"(a, b)"` and validates the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = parse_affine_key(s)?;
        AffineKey::new(a, b)
    }
}

impl fmt::Display for AffineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Recovered plaintext together with the inverse multiplier used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineDecryption {
    /// The recovered plaintext.
    pub text: String,
    /// `a⁻¹ mod 95`.
    pub inverse_used: i64,
}

/// Affine cipher bound to a key and a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineCipher {
    key: AffineKey,
    config: CipherConfig,
}

impl AffineCipher {
    /// Creates a cipher with an explicit configuration.
    pub fn new(key: AffineKey, config: CipherConfig) -> Self {
        AffineCipher { key, config }
    }

    /// Creates a cipher with the default configuration.
    pub fn with_key(key: AffineKey) -> Self {
        Self::new(key, CipherConfig::default())
    }

    /// The key in use.
    pub fn key(&self) -> &AffineKey {
        &self.key
    }

    /// Encrypts `plaintext`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{AffineCipher, AffineKey};
    ///
    /// let cipher = AffineCipher::with_key(AffineKey::new(49, 18).unwrap());
    /// assert_eq!(cipher.encrypt("HELLO"), "n:ttI");
    /// ```
    pub fn encrypt(&self, plaintext: &str) -> String {
        let AffineKey { a, b } = self.key;
        self.substitute(plaintext, |m| (a * m + b).rem_euclid(PRINTABLE_LEN))
    }

    /// Decrypts `ciphertext`, also reporting the inverse multiplier used.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyNotInvertible`] if `a` has no inverse
    /// modulo 95.
    pub fn decrypt(&self, ciphertext: &str) -> Result<AffineDecryption, CipherError> {
        let a_inv = self.key.inverse_multiplier()?;
        debug!(key = %self.key, inverse = a_inv, "derived affine inverse multiplier");
        let b = self.key.b;
        let text = self.substitute(ciphertext, |c| ((c - b) * a_inv).rem_euclid(PRINTABLE_LEN));
        Ok(AffineDecryption {
            text,
            inverse_used: a_inv,
        })
    }

    fn substitute(&self, text: &str, f: impl Fn(i64) -> i64) -> String {
        text.chars()
            .map(|c| match self.config.substitution_index(c) {
                Some(index) => PrintableAlphabet.symbol_of(f(index as i64) as usize),
                None => c,
            })
            .collect()
    }
}

/// Returns `true` if `(a, b)` is a valid affine key.
///
/// # Examples
///
/// ```
/// use classicrypt::affine_key_is_valid;
///
/// assert!(affine_key_is_valid((49, 18)));
/// assert!(!affine_key_is_valid((5, 10)));
/// ```
pub fn affine_key_is_valid(key: (i64, i64)) -> bool {
    let (a, b) = key;
    let a_ok = coprime_set(PRINTABLE_LEN)
        .map(|set| set.binary_search(&a).is_ok())
        .unwrap_or(false);
    a_ok && (0..PRINTABLE_LEN).contains(&b)
}

/// Encrypts `plaintext` with the affine key `(a, b)` and the default configuration.
///
/// # Errors
/// Returns [`CipherError::KeyRejected`] if the key is not valid; no output
/// is produced in that case.
pub fn affine_encrypt(key: (i64, i64), plaintext: &str) -> Result<String, CipherError> {
    let key = AffineKey::try_from(key)?;
    Ok(AffineCipher::with_key(key).encrypt(plaintext))
}

/// Decrypts `ciphertext` with the affine key `(a, b)` and the default configuration.
///
/// # Errors
/// - [`CipherError::KeyRejected`] if the key is not valid.
/// - [`CipherError::KeyNotInvertible`] if `a` has no inverse modulo 95.
pub fn affine_decrypt(key: (i64, i64), ciphertext: &str) -> Result<AffineDecryption, CipherError> {
    let key = AffineKey::try_from(key)?;
    AffineCipher::with_key(key).decrypt(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_validity_matches_constructor() {
        for a in -5..=100 {
            for b in [-1, 0, 18, 94, 95] {
                assert_eq!(
                    affine_key_is_valid((a, b)),
                    AffineKey::new(a, b).is_ok(),
                    "validity disagreement for ({}, {})",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_key_rejected() {
        assert!(!affine_key_is_valid((5, 10)));
        assert!(!affine_key_is_valid((19, 10)));
        assert!(!affine_key_is_valid((0, 10)));
        assert!(!affine_key_is_valid((96, 10)));
        assert!(!affine_key_is_valid((49, 95)));
        assert!(matches!(
            AffineKey::new(5, 10),
            Err(CipherError::KeyRejected(_))
        ));
    }

    #[test]
    fn test_hello_known_vector() {
        let cipher = AffineCipher::with_key(AffineKey::new(49, 18).unwrap());
        // H=40 -> 78 'n', E=37 -> 26 ':', L=44 -> 84 't', O=47 -> 41 'I'
        assert_eq!(cipher.encrypt("HELLO"), "n:ttI");
        let decrypted = cipher.decrypt("n:ttI").unwrap();
        assert_eq!(decrypted.text, "HELLO");
        assert_eq!(decrypted.inverse_used, 64);
    }

    #[test]
    fn test_passthrough_preserved() {
        let cipher = AffineCipher::with_key(AffineKey::new(49, 18).unwrap());
        let plain = "Canción\tdel\nmar: ÁÉÍÓÚ";
        let enc = cipher.encrypt(plain);
        assert_eq!(enc.chars().count(), plain.chars().count());
        for (p, c) in plain.chars().zip(enc.chars()) {
            if "\n\tÁÉÍÓÚáéíóú".contains(p) {
                assert_eq!(p, c);
            }
        }
        assert_eq!(cipher.decrypt(&enc).unwrap().text, plain);
    }

    #[test]
    fn test_non_printable_outside_passthrough_is_copied() {
        let cipher = AffineCipher::with_key(AffineKey::new(3, 7).unwrap());
        let enc = cipher.encrypt("año\r");
        let chars: Vec<char> = enc.chars().collect();
        assert_eq!(chars[1], 'ñ');
        assert_eq!(chars[3], '\r');
        assert_eq!(cipher.decrypt(&enc).unwrap().text, "año\r");
    }

    #[test]
    fn test_custom_passthrough_space() {
        let config = CipherConfig::new().with_passthrough(" ").unwrap();
        let cipher = AffineCipher::new(AffineKey::new(7, 3).unwrap(), config);
        let enc = cipher.encrypt("a b c");
        assert_eq!(enc.chars().nth(1), Some(' '));
        assert_eq!(enc.chars().nth(3), Some(' '));
        assert_eq!(cipher.decrypt(&enc).unwrap().text, "a b c");
    }

    #[test]
    fn test_roundtrip_every_valid_key() {
        let text = "The quick brown fox jumps over the lazy dog! 0123456789 ~{}|";
        for a in coprime_set(PRINTABLE_LEN).unwrap() {
            for b in [0, 1, 47, 94] {
                let enc = affine_encrypt((a, b), text).unwrap();
                let dec = affine_decrypt((a, b), &enc).unwrap();
                assert_eq!(dec.text, text, "roundtrip failed for ({}, {})", a, b);
                assert_eq!(a * dec.inverse_used % PRINTABLE_LEN, 1);
            }
        }
    }

    #[test]
    fn test_identity_key() {
        assert_eq!(affine_encrypt((1, 0), "unchanged").unwrap(), "unchanged");
    }

    #[test]
    fn test_invalid_key_blocks_operation() {
        assert!(matches!(
            affine_encrypt((5, 10), "HELLO"),
            Err(CipherError::KeyRejected(_))
        ));
        assert!(matches!(
            affine_decrypt((49, 120), "HELLO"),
            Err(CipherError::KeyRejected(_))
        ));
    }

    #[test]
    fn test_unchecked_key_surfaces_not_invertible() {
        let cipher = AffineCipher::with_key(AffineKey::new_unchecked(5, 10));
        assert_eq!(
            cipher.decrypt("abc"),
            Err(CipherError::KeyNotInvertible {
                value: 5,
                modulus: 95
            })
        );
    }

    #[test]
    fn test_key_text_format() {
        let key: AffineKey = "(49, 82)".parse().unwrap();
        assert_eq!(key.as_tuple(), (49, 82));
        assert_eq!(key.to_string(), "(49, 82)");
        assert!(matches!(
            "(5, 10)".parse::<AffineKey>(),
            Err(CipherError::KeyRejected(_))
        ));
        assert!(matches!(
            "49 82".parse::<AffineKey>(),
            Err(CipherError::InvalidKeyFormat(_))
        ));
    }
}
