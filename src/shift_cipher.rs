//! ShiftCipher: Caesar-style substitution over a configurable alphabet.
//!
//! Each symbol found in the alphabet is replaced by the symbol `key`
//! positions further along (wrapping). Symbols outside the alphabet are
//! copied unchanged.

use crate::alphabet::{Alphabet, SymbolMap};

/// Caesar-style cipher bound to a key and an alphabet.
///
/// Any integer is a valid key; it is used modulo the alphabet length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCipher<A: SymbolMap = Alphabet> {
    key: i64,
    alphabet: A,
}

impl<A: SymbolMap> ShiftCipher<A> {
    /// Creates a shift cipher.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{Alphabet, ShiftCipher};
    ///
    /// let cipher = ShiftCipher::new(3, Alphabet::english());
    /// assert_eq!(cipher.encrypt("hola, mundo"), "krod, pxqgr");
    /// assert_eq!(cipher.decrypt("krod, pxqgr"), "hola, mundo");
    /// ```
    pub fn new(key: i64, alphabet: A) -> Self {
        ShiftCipher { key, alphabet }
    }

    /// The key as given.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// The alphabet the cipher works over.
    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    /// Encrypts `text`, shifting forward by the key.
    pub fn encrypt(&self, text: &str) -> String {
        shift_text(&self.alphabet, self.key, text, true)
    }

    /// Decrypts `text`, shifting backward by the key.
    pub fn decrypt(&self, text: &str) -> String {
        shift_text(&self.alphabet, self.key, text, false)
    }
}

fn shift_text<A: SymbolMap>(alphabet: &A, key: i64, text: &str, forward: bool) -> String {
    let m = alphabet.len() as i64;
    if m == 0 {
        return text.to_string();
    }
    // Reducing first keeps `index + offset` far from overflow for any i64 key.
    let k = key.rem_euclid(m);
    let offset = if forward { k } else { m - k };
    text.chars()
        .map(|c| match alphabet.index_of(c) {
            Some(index) => alphabet.symbol_of(((index as i64 + offset) % m) as usize),
            None => c,
        })
        .collect()
}

/// Encrypts `text` with a shift of `key` over `alphabet`.
pub fn shift_encrypt<A: SymbolMap>(key: i64, text: &str, alphabet: &A) -> String {
    shift_text(alphabet, key, text, true)
}

/// Decrypts `text` with a shift of `key` over `alphabet`.
pub fn shift_decrypt<A: SymbolMap>(key: i64, text: &str, alphabet: &A) -> String {
    shift_text(alphabet, key, text, false)
}
