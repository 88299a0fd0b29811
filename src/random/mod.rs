//! Random key material for the affine and Hill ciphers.
//!
//! Built on the `rand` crate; every generator accepts a caller-supplied
//! RNG so keys can be reproduced from a seed.

pub mod key_generator;
