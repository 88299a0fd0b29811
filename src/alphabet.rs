//! Symbol ↔ index bijections.
//!
//! Two alphabets exist: the fixed [`PrintableAlphabet`] (code points
//! 32..=126, index 0..=94) used by the affine and Hill ciphers, and the
//! configurable [`Alphabet`] built from a caller-supplied string, used by
//! the shift cipher.

use std::collections::HashMap;

use crate::error::CipherError;

/// First code point of the printable alphabet (space).
pub const PRINTABLE_FIRST: u32 = 32;

/// Number of symbols in the printable alphabet, and the modulus of the
/// affine and Hill ciphers.
pub const PRINTABLE_LEN: i64 = 95;

/// Lower-case English letters.
pub const ENGLISH_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Lower-case Spanish letters (with ñ after n).
pub const SPANISH_ALPHABET: &str = "abcdefghijklmnñopqrstuvwxyz";

/// Lower-case German letters followed by umlauts and ß.
pub const GERMAN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzäöüß";

/// An ordered set of symbols with a stable index assignment.
pub trait SymbolMap {
    /// Number of symbols.
    fn len(&self) -> usize;

    /// Returns `true` if the alphabet has no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of `symbol`, or `None` if it is not part of the alphabet.
    fn index_of(&self, symbol: char) -> Option<usize>;

    /// Symbol at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn symbol_of(&self, index: usize) -> char;

    /// Returns `true` if `symbol` is part of the alphabet.
    fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }
}

/// The 95 printable ASCII symbols, `' '` (index 0) through `'~'` (index 94).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintableAlphabet;

impl SymbolMap for PrintableAlphabet {
    fn len(&self) -> usize {
        PRINTABLE_LEN as usize
    }

    fn index_of(&self, symbol: char) -> Option<usize> {
        let code = symbol as u32;
        if (PRINTABLE_FIRST..PRINTABLE_FIRST + PRINTABLE_LEN as u32).contains(&code) {
            Some((code - PRINTABLE_FIRST) as usize)
        } else {
            None
        }
    }

    fn symbol_of(&self, index: usize) -> char {
        assert!(
            index < PRINTABLE_LEN as usize,
            "printable index {} out of range",
            index
        );
        char::from(PRINTABLE_FIRST as u8 + index as u8)
    }
}

/// A caller-supplied alphabet; indices are the symbol positions in the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from a string of unique symbols.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidAlphabet`] if `symbols` is empty or
    /// repeats a symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::alphabet::{Alphabet, SymbolMap};
    ///
    /// let abc = Alphabet::new("abc").unwrap();
    /// assert_eq!(abc.index_of('c'), Some(2));
    /// assert!(Alphabet::new("abca").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, CipherError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(CipherError::InvalidAlphabet(
                "alphabet must contain at least one symbol".into(),
            ));
        }
        let mut positions = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if positions.insert(c, i).is_some() {
                return Err(CipherError::InvalidAlphabet(format!(
                    "symbol {:?} appears more than once",
                    c
                )));
            }
        }
        Ok(Alphabet { symbols, positions })
    }

    /// The English alphabet.
    pub fn english() -> Self {
        Self::from_known(ENGLISH_ALPHABET)
    }

    /// The Spanish alphabet.
    pub fn spanish() -> Self {
        Self::from_known(SPANISH_ALPHABET)
    }

    /// The German alphabet.
    pub fn german() -> Self {
        Self::from_known(GERMAN_ALPHABET)
    }

    /// The symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    fn from_known(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let positions = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Alphabet { symbols, positions }
    }
}

impl SymbolMap for Alphabet {
    fn len(&self) -> usize {
        self.symbols.len()
    }

    fn index_of(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    fn symbol_of(&self, index: usize) -> char {
        self.symbols[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_bounds() {
        let p = PrintableAlphabet;
        assert_eq!(p.len(), 95);
        assert_eq!(p.index_of(' '), Some(0));
        assert_eq!(p.index_of('~'), Some(94));
        assert_eq!(p.index_of('H'), Some(40));
        assert_eq!(p.symbol_of(0), ' ');
        assert_eq!(p.symbol_of(94), '~');
    }

    #[test]
    fn test_printable_outside_range() {
        let p = PrintableAlphabet;
        assert_eq!(p.index_of('\n'), None);
        assert_eq!(p.index_of('\u{7f}'), None);
        assert_eq!(p.index_of('á'), None);
        assert_eq!(p.index_of('ñ'), None);
    }

    #[test]
    fn test_printable_bijection() {
        let p = PrintableAlphabet;
        for i in 0..p.len() {
            assert_eq!(p.index_of(p.symbol_of(i)), Some(i));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_printable_symbol_of_out_of_range() {
        PrintableAlphabet.symbol_of(95);
    }

    #[test]
    fn test_builtin_alphabets_are_valid() {
        for text in [ENGLISH_ALPHABET, SPANISH_ALPHABET, GERMAN_ALPHABET] {
            let built = Alphabet::new(text).unwrap();
            assert_eq!(built.len(), text.chars().count());
        }
        assert_eq!(Alphabet::english().len(), 26);
        assert_eq!(Alphabet::spanish().len(), 27);
        assert_eq!(Alphabet::german().len(), 30);
        assert_eq!(Alphabet::spanish().index_of('ñ'), Some(14));
    }

    #[test]
    fn test_custom_alphabet_bijection() {
        let a = Alphabet::new("zyx!").unwrap();
        assert_eq!(a.index_of('z'), Some(0));
        assert_eq!(a.index_of('!'), Some(3));
        assert_eq!(a.index_of('a'), None);
        for i in 0..a.len() {
            assert_eq!(a.index_of(a.symbol_of(i)), Some(i));
        }
    }

    #[test]
    fn test_invalid_alphabets() {
        assert!(matches!(
            Alphabet::new(""),
            Err(CipherError::InvalidAlphabet(_))
        ));
        assert_eq!(
            Alphabet::new("abb"),
            Err(CipherError::InvalidAlphabet(
                "symbol 'b' appears more than once".into()
            ))
        );
    }
}
