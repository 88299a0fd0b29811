//! Cipher configuration for the printable-alphabet ciphers.
//!
//! Holds the passthrough set and the Hill padding filler. A character takes
//! part in substitution only if it is a printable symbol and is not in the
//! passthrough set; everything else is copied verbatim.

use std::collections::BTreeSet;

use crate::alphabet::{PrintableAlphabet, SymbolMap};
use crate::error::CipherError;

/// Characters copied unchanged by default: tab, newline and accented vowels.
pub const DEFAULT_PASSTHROUGH: &str = "\n\tÁÉÍÓÚáéíóú";

/// Symbol appended to an odd-length Hill block stream.
pub const DEFAULT_FILLER: char = 'X';

/// Configuration passed to [`AffineCipher`](crate::AffineCipher) and
/// [`HillCipher`](crate::HillCipher) at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherConfig {
    passthrough: BTreeSet<char>,
    filler: char,
}

impl Default for CipherConfig {
    fn default() -> Self {
        CipherConfig {
            passthrough: DEFAULT_PASSTHROUGH.chars().collect(),
            filler: DEFAULT_FILLER,
        }
    }
}

impl CipherConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the passthrough set with the characters of `chars`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidConfig`] if the current filler would
    /// become a passthrough character.
    pub fn with_passthrough(mut self, chars: &str) -> Result<Self, CipherError> {
        let passthrough: BTreeSet<char> = chars.chars().collect();
        if passthrough.contains(&self.filler) {
            return Err(CipherError::InvalidConfig(format!(
                "filler {:?} cannot be a passthrough character",
                self.filler
            )));
        }
        self.passthrough = passthrough;
        Ok(self)
    }

    /// Sets the Hill padding filler.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidConfig`] if `filler` is not a printable
    /// symbol or is in the passthrough set.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::CipherConfig;
    ///
    /// assert!(CipherConfig::new().with_filler('Q').is_ok());
    /// assert!(CipherConfig::new().with_filler('Ñ').is_err());
    /// ```
    pub fn with_filler(mut self, filler: char) -> Result<Self, CipherError> {
        if !PrintableAlphabet.contains(filler) {
            return Err(CipherError::InvalidConfig(format!(
                "filler {:?} is not a printable symbol",
                filler
            )));
        }
        if self.passthrough.contains(&filler) {
            return Err(CipherError::InvalidConfig(format!(
                "filler {:?} cannot be a passthrough character",
                filler
            )));
        }
        self.filler = filler;
        Ok(self)
    }

    /// The Hill padding filler.
    pub fn filler(&self) -> char {
        self.filler
    }

    /// Returns `true` if `c` is copied verbatim by the printable ciphers.
    pub fn is_passthrough(&self, c: char) -> bool {
        self.passthrough.contains(&c)
    }

    /// Printable index of `c` if it takes part in substitution.
    pub(crate) fn substitution_index(&self, c: char) -> Option<usize> {
        if self.is_passthrough(c) {
            None
        } else {
            PrintableAlphabet.index_of(c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passthrough() {
        let config = CipherConfig::default();
        for c in "\n\tÁÉÍÓÚáéíóú".chars() {
            assert!(config.is_passthrough(c), "{:?} should pass through", c);
        }
        assert!(!config.is_passthrough('a'));
        assert!(!config.is_passthrough(' '));
        assert_eq!(config.filler(), 'X');
    }

    #[test]
    fn test_substitution_index() {
        let config = CipherConfig::default();
        assert_eq!(config.substitution_index('A'), Some(33));
        assert_eq!(config.substitution_index('\n'), None);
        assert_eq!(config.substitution_index('é'), None);
        // Outside the printable range but not configured as passthrough.
        assert_eq!(config.substitution_index('ñ'), None);
    }

    #[test]
    fn test_custom_passthrough_can_hold_printable_symbols() {
        let config = CipherConfig::new().with_passthrough(" \n").unwrap();
        assert_eq!(config.substitution_index(' '), None);
        assert!(!config.is_passthrough('á'));
    }

    #[test]
    fn test_filler_validation() {
        assert!(matches!(
            CipherConfig::new().with_filler('\t'),
            Err(CipherError::InvalidConfig(_))
        ));
        assert!(matches!(
            CipherConfig::new().with_passthrough("X"),
            Err(CipherError::InvalidConfig(_))
        ));
        let config = CipherConfig::new()
            .with_passthrough("#")
            .unwrap()
            .with_filler('#');
        assert!(config.is_err());
        assert_eq!(CipherConfig::new().with_filler('z').unwrap().filler(), 'z');
    }
}
