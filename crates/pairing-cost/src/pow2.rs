//! Power-of-two helpers for sweep parameters.

/// Smallest power of two `>= v`, with `0` mapping to `1`.
///
/// `1024 -> 1024`, `1023 -> 1024`, `1205 -> 2048`.
pub fn next_pow_of_2(v: u64) -> u64 {
    if v == 0 {
        return 1;
    }
    let bits = 64 - (v - 1).leading_zeros();
    1u64 << bits
}

/// The literal bit test `(x & (x - 1)) == 0`.
///
/// Classifies `0` as a power of two; callers never pass `0`.
pub fn is_pow_of_2(x: u64) -> bool {
    (x & x.wrapping_sub(1)) == 0
}
