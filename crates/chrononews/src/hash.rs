//! Rolling string hash used to derive every selection in a batch.
//!
//! The hash is a 32-bit signed multiply-add accumulation over UTF-16 code
//! units. Overflow wraps in two's complement, so negative results are
//! legitimate outputs and part of the contract: downstream consumers take
//! the absolute value before modular reduction.

/// Hashes a string into a 32-bit signed integer.
///
/// Iterates the input by UTF-16 code unit and folds each unit into the
/// accumulator as `acc * 32 - acc + unit` with wrapping 32-bit arithmetic.
/// The empty string hashes to zero.
///
/// # Example
///
/// ```
/// use chrononews::hash_code;
///
/// assert_eq!(hash_code(""), 0);
/// assert_eq!(hash_code("a"), 97);
/// assert_eq!(hash_code("abc"), 96354);
/// ```
#[must_use]
pub fn hash_code(input: &str) -> i32 {
    let mut acc: i32 = 0;
    for unit in input.encode_utf16() {
        acc = acc
            .wrapping_mul(32)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit));
    }
    acc
}
