//! Packing between the logical minifloat fields and the 8-bit storage form.
//!
//! Storage order is sign (bit 7), then the exponent field, then the
//! fraction field in the low bits. That ordering makes the packed byte
//! monotone in magnitude within a sign, which is what lets rounding be a
//! plain integer increment. Everything here is explicit shift/mask; no
//! type punning.

use crate::core::params::{exp_max, frac_bits, frac_mask};

/// Logical fields of a packed 1-E-(7-E) minifloat byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    pub sign: u8,     // 0 or 1
    pub exponent: u8, // E-bit field
    pub fraction: u8, // (7-E)-bit field
}

/// Pack fields as `(sign << 7) | (exponent << F) | fraction`.
///
/// Out-of-range fields are masked to their widths, so the result is
/// deterministic for any input.
#[inline]
pub const fn pack(exp_bits: u32, f: Fields) -> u8 {
    ((f.sign & 1) << 7)
        | ((f.exponent & exp_max(exp_bits)) << frac_bits(exp_bits))
        | (f.fraction & frac_mask(exp_bits))
}

/// Inverse of [`pack`]; pure bit extraction, total over all 256 bytes.
#[inline]
pub const fn unpack(exp_bits: u32, byte: u8) -> Fields {
    Fields {
        sign: byte >> 7,
        exponent: (byte >> frac_bits(exp_bits)) & exp_max(exp_bits),
        fraction: byte & frac_mask(exp_bits),
    }
}
