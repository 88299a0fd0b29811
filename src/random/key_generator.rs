//! Random valid-key generation for the affine and Hill ciphers.
//!
//! Generators are generic over any [`rand::Rng`] so callers can supply a
//! seeded generator for reproducible keys; the `*_thread` variants use the
//! thread-local generator.

use rand::Rng;
use tracing::debug;

use crate::affine_cipher::AffineKey;
use crate::alphabet::PRINTABLE_LEN;
use crate::error::CipherError;
use crate::hill_cipher::{hill_key_is_valid, HillKey};
use crate::utils::matrix::Matrix2;
use crate::utils::number_theory::coprime_set;

/// Draws an affine key: `a` uniformly from `coprime_set(95)`, `b` uniformly
/// from `[0, 94]`. The result is always valid.
///
/// # Errors
/// Returns [`CipherError::InvalidDomain`] only if the alphabet modulus is
/// below 2, which the fixed printable alphabet never is.
pub fn generate_affine_key<R: Rng + ?Sized>(rng: &mut R) -> Result<AffineKey, CipherError> {
    let units = coprime_set(PRINTABLE_LEN)?;
    let a = units[rng.gen_range(0..units.len())];
    let b = rng.gen_range(0..PRINTABLE_LEN);
    debug!(a, b, "generated affine key");
    Ok(AffineKey::new_unchecked(a, b))
}

/// Draws random 2×2 matrices with entries in `[0, 94]` until one has a
/// determinant coprime with 95.
pub fn generate_hill_key<R: Rng + ?Sized>(rng: &mut R) -> Result<HillKey, CipherError> {
    let mut draws = 0u32;
    loop {
        draws += 1;
        let candidate = Matrix2::from_row_major(
            rng.gen_range(0..PRINTABLE_LEN),
            rng.gen_range(0..PRINTABLE_LEN),
            rng.gen_range(0..PRINTABLE_LEN),
            rng.gen_range(0..PRINTABLE_LEN),
        );
        if hill_key_is_valid(&candidate) {
            debug!(draws, key = %candidate, "generated Hill key");
            return HillKey::new(candidate);
        }
    }
}

/// [`generate_affine_key`] with the thread-local generator.
pub fn generate_affine_key_thread() -> Result<AffineKey, CipherError> {
    generate_affine_key(&mut rand::thread_rng())
}

/// [`generate_hill_key`] with the thread-local generator.
pub fn generate_hill_key_thread() -> Result<HillKey, CipherError> {
    generate_hill_key(&mut rand::thread_rng())
}
