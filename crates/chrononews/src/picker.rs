//! Deterministic selection of one pool element per seed.
//!
//! The seed fed to the hash is the caller's seed joined to the decimal pool
//! length with a hyphen. The length suffix differentiates selections across
//! pools of different sizes that share a base seed, and is part of the
//! reproducibility contract.

use crate::error::PickError;
use crate::hash::hash_code;

/// Picks one element of `pool` deterministically for the given seed.
///
/// The same pool contents, pool length, and seed always yield the same
/// element, across processes and builds.
///
/// # Errors
///
/// Returns [`PickError::EmptyPool`] if `pool` has no elements. This is a
/// configuration defect in the caller and should be treated as fatal.
///
/// # Example
///
/// ```
/// use chrononews::pick;
///
/// let pool = ["alpha", "beta", "gamma"];
/// let first = pick(&pool, "29.2.2024-0-title").expect("non-empty pool");
/// let second = pick(&pool, "29.2.2024-0-title").expect("non-empty pool");
/// assert_eq!(first, second);
/// ```
pub fn pick<'a, T>(pool: &'a [T], seed: &str) -> Result<&'a T, PickError> {
    if pool.is_empty() {
        return Err(PickError::EmptyPool);
    }
    let salted = format!("{seed}-{}", pool.len());
    let index = index_for(hash_code(&salted), pool.len());
    pool.get(index).ok_or(PickError::EmptyPool)
}

/// Reduces a hash to an index in `0..len`.
///
/// Uses `unsigned_abs` so `i32::MIN` maps to 2147483648 instead of
/// panicking, matching the source semantics of a float absolute value.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "modular reduction over the pool length is the selection contract"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the remainder is bounded by the pool length"
)]
fn index_for(hash: i32, len: usize) -> usize {
    (u64::from(hash.unsigned_abs()) % len as u64) as usize
}
