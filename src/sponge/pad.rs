use crate::bits::BitString;

/// A padding rule maps a rate `x` and a message length `m` to the suffix
/// that brings the message to a multiple of `x` bits.
pub type PaddingRule = fn(usize, usize) -> BitString;

/// pad10*1: a one, j = (-m - 2) mod x zeros, and a closing one.
///
/// The rate `x` must be positive.
pub fn pad10star1(x: usize, m: usize) -> BitString {
    debug_assert!(x > 0, "pad10*1 needs a positive rate");
    let j = (x - (m + 2) % x) % x;
    let mut bits = vec![false; j + 2];
    bits[0] = true;
    bits[j + 1] = true;
    BitString::from(bits)
}
