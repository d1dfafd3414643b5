//! Format parameters derived from the exponent width.
//!
//! The layout is always 1 sign bit, `exp_bits` exponent bits and
//! `7 - exp_bits` fraction bits. Everything else follows from that choice.

/// Fraction field width for a 1-E-(7-E) layout.
#[inline]
pub const fn frac_bits(exp_bits: u32) -> u32 {
    7 - exp_bits
}

/// Exponent bias: 2^(E-1) - 1.
///
/// E=1 -> 0, E=2 -> 1, E=3 -> 3, E=4 -> 7, E=5 -> 15, E=6 -> 31.
#[inline]
pub const fn bias(exp_bits: u32) -> i32 {
    (1 << (exp_bits - 1)) - 1
}

/// All-ones exponent field, the infinity encoding.
#[inline]
pub const fn exp_max(exp_bits: u32) -> u8 {
    ((1u16 << exp_bits) - 1) as u8
}

/// Mask covering the fraction field.
#[inline]
pub const fn frac_mask(exp_bits: u32) -> u8 {
    ((1u16 << frac_bits(exp_bits)) - 1) as u8
}
