//! Number-theory primitives shared by the affine and Hill ciphers.
//!
//! All functions are pure: failures are reported through
//! [`CipherError`] and never printed.

use crate::error::CipherError;

/// Greatest common divisor of `a` and `b` (Euclidean algorithm on absolute values).
///
/// `gcd(0, 0)` is 0; `gcd(0, b)` is `|b|`.
///
/// # Examples
///
/// ```
/// use classicrypt::utils::number_theory::gcd;
///
/// assert_eq!(gcd(49, 95), 1);
/// assert_eq!(gcd(-10, 95), 5);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a as i64
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b) >= 0` and `a * x + b * y = g`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
        (old_t, t) = (t, old_t - quotient * t);
    }

    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Returns `true` when `gcd(a, b) == 1`.
pub fn is_coprime(a: i64, b: i64) -> bool {
    gcd(a, b) == 1
}

/// Every `i` in `[1, n)` with `gcd(i, n) == 1`, in ascending order.
///
/// # Errors
/// Returns [`CipherError::InvalidDomain`] if `n < 2`.
pub fn coprime_set(n: i64) -> Result<Vec<i64>, CipherError> {
    if n < 2 {
        return Err(CipherError::InvalidDomain { n });
    }
    Ok((1..n).filter(|&i| is_coprime(i, n)).collect())
}

/// Euler's totient, the size of [`coprime_set`].
///
/// # Errors
/// Returns [`CipherError::InvalidDomain`] if `n < 2`.
pub fn totient(n: i64) -> Result<usize, CipherError> {
    coprime_set(n).map(|set| set.len())
}

/// Modular multiplicative inverse of `a` modulo `n`.
///
/// Returns `b` in `[0, n)` such that `a * b ≡ 1 (mod n)`. `a` may be
/// negative or larger than `n`; it is reduced first.
///
/// # Errors
/// - [`CipherError::InvalidDomain`] if `n < 2`.
/// - [`CipherError::KeyNotInvertible`] if `gcd(a, n) != 1`.
///
/// # Examples
///
/// ```
/// use classicrypt::utils::number_theory::modular_inverse;
///
/// assert_eq!(modular_inverse(95, 49).unwrap(), 64);
/// assert!(modular_inverse(95, 5).is_err());
/// ```
pub fn modular_inverse(n: i64, a: i64) -> Result<i64, CipherError> {
    if n < 2 {
        return Err(CipherError::InvalidDomain { n });
    }
    let reduced = a.rem_euclid(n);
    let (g, x, _) = extended_gcd(reduced, n);
    if g != 1 {
        return Err(CipherError::KeyNotInvertible { value: a, modulus: n });
    }
    Ok(x.rem_euclid(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_gcd(a: i64, b: i64) -> i64 {
        if a == 0 {
            return b;
        }
        if b == 0 {
            return a;
        }
        (1..=a.min(b))
            .rev()
            .find(|d| a % d == 0 && b % d == 0)
            .unwrap_or(1)
    }

    #[test]
    fn test_gcd_matches_brute_force() {
        for a in 0..=200 {
            for b in 0..=200 {
                assert_eq!(gcd(a, b), brute_gcd(a, b), "gcd({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_gcd_negative_operands() {
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(-12, -18), 6);
        assert_eq!(gcd(0, -7), 7);
    }

    #[test]
    fn test_gcd_extremes() {
        assert_eq!(gcd(i64::MIN, 95), 1);
        assert_eq!(gcd(i64::MAX, 0), i64::MAX);
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        for a in -50..=50 {
            for b in -50..=50 {
                let (g, x, y) = extended_gcd(a, b);
                assert_eq!(g, gcd(a, b), "gcd mismatch for ({}, {})", a, b);
                assert_eq!(a * x + b * y, g, "Bezout fails for ({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_coprime_set_95_has_72_elements() {
        let set = coprime_set(95).unwrap();
        assert_eq!(set.len(), 72);
        assert!(set.contains(&1));
        assert!(set.contains(&49));
        assert!(!set.contains(&5));
        assert!(!set.contains(&19));
        assert!(set.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_coprime_set_small_domain() {
        assert_eq!(coprime_set(2).unwrap(), vec![1]);
        assert_eq!(coprime_set(1), Err(CipherError::InvalidDomain { n: 1 }));
        assert_eq!(coprime_set(-4), Err(CipherError::InvalidDomain { n: -4 }));
    }

    #[test]
    fn test_totient() {
        assert_eq!(totient(95).unwrap(), 72);
        assert_eq!(totient(26).unwrap(), 12);
        assert_eq!(totient(7).unwrap(), 6);
    }

    #[test]
    fn test_modular_inverse_49_mod_95() {
        let inv = modular_inverse(95, 49).unwrap();
        assert_eq!(49 * inv % 95, 1);
        assert_eq!(inv, 64);
    }

    #[test]
    fn test_modular_inverse_all_units_mod_95() {
        for a in coprime_set(95).unwrap() {
            let inv = modular_inverse(95, a).unwrap();
            assert!((0..95).contains(&inv));
            assert_eq!(a * inv % 95, 1, "inverse of {} is wrong", a);
        }
    }

    #[test]
    fn test_modular_inverse_reduces_operand() {
        assert_eq!(modular_inverse(95, 49 + 95 * 3).unwrap(), 64);
        assert_eq!(modular_inverse(95, -1).unwrap(), 94);
    }

    #[test]
    fn test_modular_inverse_not_invertible() {
        assert_eq!(
            modular_inverse(95, 5),
            Err(CipherError::KeyNotInvertible {
                value: 5,
                modulus: 95
            })
        );
        assert!(modular_inverse(95, 0).is_err());
    }

    #[test]
    fn test_modular_inverse_invalid_domain() {
        assert_eq!(
            modular_inverse(1, 3),
            Err(CipherError::InvalidDomain { n: 1 })
        );
    }
}
