//! Text seed hashing.

/// Hashes a text seed to a non-negative integer.
///
/// This is the classic multiply-by-31 polynomial hash over UTF-16 code
/// units, computed in wrapping 32-bit signed arithmetic. The result is the
/// absolute value of the accumulator, so it lies in `0..=2^31`. Browsers
/// compute the same value from the same seed, which is what lets every
/// participant reproduce the deal independently.
///
/// # Example
///
/// ```
/// use eopdeal::hash_seed;
///
/// assert_eq!(hash_seed(""), 0);
/// assert_eq!(hash_seed("test"), 3_556_498);
/// ```
#[must_use]
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0_i32, |acc, unit| {
            acc.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}
