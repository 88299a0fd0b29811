//! HillCipher: 2-symbol block substitution with a 2×2 matrix key mod 95.
//!
//! Only printable, non-passthrough characters form the block stream. The
//! stream is padded with the configured filler to an even length, each pair
//! `(m0, m1)` becomes `K·(m0, m1) mod 95`, and the transformed stream is
//! woven back into the original text: walking the original character by
//! character, passthrough characters are copied and every other character
//! consumes the next symbol of the transformed stream. Symbols left over
//! after the walk (the padding block) are appended at the end.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::alphabet::{PrintableAlphabet, SymbolMap, PRINTABLE_LEN};
use crate::config::CipherConfig;
use crate::error::CipherError;
use crate::utils::converter::parse_hill_key;
use crate::utils::matrix::Matrix2;
use crate::utils::number_theory::is_coprime;

/// Number of symbols per Hill block.
const BLOCK_LEN: usize = 2;

/// Validated Hill key: a 2×2 matrix whose determinant is a unit mod 95.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HillKey {
    matrix: Matrix2,
    reduced: Matrix2,
}

impl HillKey {
    /// Creates a key, checking it against [`hill_key_is_valid`].
    ///
    /// # Errors
    /// Returns [`CipherError::KeyRejected`] if the determinant is not
    /// coprime with 95.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{HillKey, Matrix2};
    ///
    /// assert!(HillKey::new(Matrix2::from_row_major(81, 63, 66, 85)).is_ok());
    /// assert!(HillKey::new(Matrix2::from_row_major(5, 0, 0, 1)).is_err());
    /// ```
    pub fn new(matrix: Matrix2) -> Result<Self, CipherError> {
        let det = matrix.determinant_mod(PRINTABLE_LEN)?;
        if !is_coprime(det, PRINTABLE_LEN) {
            return Err(CipherError::KeyRejected(format!(
                "determinant {} mod {} is not coprime with {}",
                det, PRINTABLE_LEN, PRINTABLE_LEN
            )));
        }
        let reduced = matrix.reduce(PRINTABLE_LEN)?;
        Ok(HillKey { matrix, reduced })
    }

    /// The matrix as given.
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// `K⁻¹ mod 95`.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyNotInvertible`] if the determinant has no
    /// inverse, which a validated key never triggers.
    pub fn inverse(&self) -> Result<Matrix2, CipherError> {
        self.matrix.inverse_mod(PRINTABLE_LEN)
    }
}

impl TryFrom<Matrix2> for HillKey {
    type Error = CipherError;

    fn try_from(matrix: Matrix2) -> Result<Self, Self::Error> {
        HillKey::new(matrix)
    }
}

impl FromStr for HillKey {
    type Err = CipherError;

    /// Parses `"a, b, c, d"` (or `"[a, b, c, d]"`) and validates the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HillKey::new(parse_hill_key(s)?)
    }
}

impl fmt::Display for HillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = self.matrix.rows();
        write!(f, "{}, {}, {}, {}", a, b, c, d)
    }
}

/// Hill cipher bound to a key and a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: HillKey,
    config: CipherConfig,
}

impl HillCipher {
    /// Creates a cipher with an explicit configuration.
    pub fn new(key: HillKey, config: CipherConfig) -> Self {
        HillCipher { key, config }
    }

    /// Creates a cipher with the default configuration.
    pub fn with_key(key: HillKey) -> Self {
        Self::new(key, CipherConfig::default())
    }

    /// The key in use.
    pub fn key(&self) -> &HillKey {
        &self.key
    }

    /// Encrypts `plaintext`.
    ///
    /// When the number of substitutable symbols is odd, the filler is added
    /// before blocking and its cipher symbol ends up as the last character
    /// of the output.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{HillCipher, HillKey, Matrix2};
    ///
    /// let key = HillKey::new(Matrix2::from_row_major(81, 63, 66, 85)).unwrap();
    /// let cipher = HillCipher::with_key(key);
    /// assert_eq!(cipher.encrypt("AB"), "aA");
    /// assert_eq!(cipher.decrypt("aA").unwrap(), "AB");
    /// ```
    pub fn encrypt(&self, plaintext: &str) -> String {
        let stream = self.block_stream(plaintext);
        let transformed = self.apply_blocks(&self.key.reduced, &stream);
        self.weave(plaintext, &transformed)
    }

    /// Decrypts `ciphertext`, dropping a trailing filler symbol.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyNotInvertible`] if the key matrix has no
    /// inverse modulo 95.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let inverse = self.key.inverse()?;
        debug!(key = %self.key, inverse = %inverse, "derived Hill inverse key");

        let stream = self.block_stream(ciphertext);
        if stream.len() > ciphertext_symbols(ciphertext, &self.config) {
            warn!(
                symbols = stream.len() - 1,
                "ciphertext has an odd number of symbols; padded before decoding"
            );
        }
        let transformed = self.apply_blocks(&inverse, &stream);
        let mut plaintext = self.weave(ciphertext, &transformed);
        if plaintext.ends_with(self.config.filler()) {
            plaintext.pop();
        }
        Ok(plaintext)
    }

    /// Indices of the substitutable symbols of `text`, padded to a whole
    /// number of blocks.
    fn block_stream(&self, text: &str) -> Vec<i64> {
        let mut stream: Vec<i64> = text
            .chars()
            .filter_map(|c| self.config.substitution_index(c))
            .map(|i| i as i64)
            .collect();
        if !stream.len().is_multiple_of(BLOCK_LEN) {
            if let Some(filler) = PrintableAlphabet.index_of(self.config.filler()) {
                stream.push(filler as i64);
            }
        }
        stream
    }

    fn apply_blocks(&self, matrix: &Matrix2, stream: &[i64]) -> Vec<char> {
        stream
            .chunks_exact(BLOCK_LEN)
            .flat_map(|block| matrix.apply_reduced([block[0], block[1]], PRINTABLE_LEN))
            .map(|i| PrintableAlphabet.symbol_of(i as usize))
            .collect()
    }

    /// Walks `original`, copying passthrough characters and consuming one
    /// symbol of `transformed` for every substitutable one.
    fn weave(&self, original: &str, transformed: &[char]) -> String {
        let mut out = String::with_capacity(original.len() + BLOCK_LEN);
        let mut cursor = 0;
        for c in original.chars() {
            if self.config.substitution_index(c).is_some() {
                out.push(transformed[cursor]);
                cursor += 1;
            } else {
                out.push(c);
            }
        }
        out.extend(&transformed[cursor..]);
        out
    }
}

fn ciphertext_symbols(text: &str, config: &CipherConfig) -> usize {
    text.chars()
        .filter(|&c| config.substitution_index(c).is_some())
        .count()
}

/// Returns `true` if `key` is a valid Hill key: `gcd(det(K) mod 95, 95) = 1`.
pub fn hill_key_is_valid(key: &Matrix2) -> bool {
    key.determinant_mod(PRINTABLE_LEN)
        .map(|det| is_coprime(det, PRINTABLE_LEN))
        .unwrap_or(false)
}

/// Encrypts `plaintext` with the matrix `key` and the default configuration.
///
/// # Errors
/// Returns [`CipherError::KeyRejected`] if the key is not valid.
pub fn hill_encrypt(key: &Matrix2, plaintext: &str) -> Result<String, CipherError> {
    let key = HillKey::new(*key)?;
    Ok(HillCipher::with_key(key).encrypt(plaintext))
}

/// Decrypts `ciphertext` with the matrix `key` and the default configuration.
///
/// # Errors
/// Returns [`CipherError::KeyRejected`] if the key is not valid.
pub fn hill_decrypt(key: &Matrix2, ciphertext: &str) -> Result<String, CipherError> {
    let key = HillKey::new(*key)?;
    HillCipher::with_key(key).decrypt(ciphertext)
}
