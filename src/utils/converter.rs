//! Textual key parsing.
//!
//! Converts the key literals typed by a user into typed integer tuples:
//! affine keys as `(a, b)` and Hill keys as four comma-separated integers
//! `a, b, c, d` read row-major (optionally wrapped in `[...]`). Parsing
//! checks arity and numeric type only; cipher validity is checked by the
//! key types themselves.

use crate::error::CipherError;
use crate::utils::matrix::Matrix2;

/// Parses an affine key literal such as `"(49, 82)"`.
///
/// Surrounding whitespace is ignored and the parentheses are required.
///
/// # Errors
/// Returns [`CipherError::InvalidKeyFormat`] if the parentheses are missing,
/// the arity is not 2, or a component is not an integer.
pub fn parse_affine_key(input: &str) -> Result<(i64, i64), CipherError> {
    let inner = strip_delimiters(input.trim(), '(', ')').ok_or_else(|| {
        CipherError::InvalidKeyFormat(format!(
            "affine key must be written as (a, b), got {:?}",
            input.trim()
        ))
    })?;
    let values = parse_integers(inner, 2)?;
    Ok((values[0], values[1]))
}

/// Parses a Hill key literal such as `"81, 63, 66, 85"` or `"[81, 63, 66, 85]"`.
///
/// # Errors
/// Returns [`CipherError::InvalidKeyFormat`] if the arity is not 4 or a
/// component is not an integer.
pub fn parse_hill_key(input: &str) -> Result<Matrix2, CipherError> {
    let trimmed = input.trim();
    let inner = strip_delimiters(trimmed, '[', ']').unwrap_or(trimmed);
    let values = parse_integers(inner, 4)?;
    Ok(Matrix2::from_row_major(
        values[0], values[1], values[2], values[3],
    ))
}

fn strip_delimiters(input: &str, open: char, close: char) -> Option<&str> {
    input.strip_prefix(open)?.strip_suffix(close)
}

fn parse_integers(input: &str, arity: usize) -> Result<Vec<i64>, CipherError> {
    let values = input
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>().map_err(|_| {
                CipherError::InvalidKeyFormat(format!("{:?} is not an integer", part))
            })
        })
        .collect::<Result<Vec<i64>, CipherError>>()?;

    if values.len() != arity {
        return Err(CipherError::InvalidKeyFormat(format!(
            "expected {} values, found {}",
            arity,
            values.len()
        )));
    }
    Ok(values)
}
