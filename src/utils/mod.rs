//! Pure helpers shared by the ciphers: number theory, 2×2 matrix
//! algebra and textual key conversion.

pub mod converter;
pub mod matrix;
pub mod number_theory;
