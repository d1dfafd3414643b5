use core::cmp::Ordering;
use core::fmt;
use core::ops::Neg;

use crate::core::params::{bias, exp_max, frac_bits, frac_mask};
use crate::core::rep::{self, Fields};

/// Configurable 8-bit minifloat: 1 sign bit, `E` exponent bits and
/// `7 - E` fraction bits, with exponent bias `2^(E-1) - 1`.
///
/// Storage order is sign (MSB) : exponent : fraction (LSB), so the packed
/// byte is monotone in magnitude within a sign. The all-ones exponent with
/// zero fraction is the only special encoding per sign (infinity); the
/// format has no NaN. `f32` NaN therefore converts to infinity, and `f32`
/// subnormals flush to zero.
///
/// Values are only meaningful relative to one fixed `E`; bytes packed
/// under different widths must not be mixed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct F8<const E: u32>(u8);

/// 1-1-6: bias 0. Subnormal-only format; it has no normal values.
pub type F8E1M6 = F8<1>;
/// 1-2-5: bias 1.
pub type F8E2M5 = F8<2>;
/// 1-3-4: bias 3.
pub type F8E3M4 = F8<3>;
/// 1-4-3: bias 7. The default configuration of the format family.
pub type F8E4M3 = F8<4>;
/// 1-5-2: bias 15.
pub type F8E5M2 = F8<5>;
/// 1-6-1: bias 31.
pub type F8E6M1 = F8<6>;

impl<const E: u32> F8<E> {
    // Rejects a bad width once, when the instantiation is first used.
    const VALID_WIDTH: () = assert!(E >= 1 && E <= 6, "exponent width must be in 1..=6");

    pub const EXP_BITS: u32 = E;
    pub const FRAC_BITS: u32 = frac_bits(E);
    pub const BIAS: i32 = bias(E);

    // ---- constants ----

    /// +0.0: all bits clear.
    pub const ZERO: Self = Self(0x00);

    /// -0.0: sign bit only.
    pub const NEG_ZERO: Self = Self(0x80);

    /// +Infinity: exponent all ones, fraction 0.
    pub const POS_INF: Self = Self(exp_max(E) << frac_bits(E));

    /// -Infinity.
    pub const NEG_INF: Self = Self(0x80 | (exp_max(E) << frac_bits(E)));

    /// Largest finite positive value: one packed step below +infinity.
    pub const MAX_FINITE: Self = Self((exp_max(E) << frac_bits(E)) - 1);

    /// Smallest positive subnormal: exponent 0, fraction 1.
    pub const MIN_SUBNORMAL_POS: Self = Self(0x01);

    /// Largest positive subnormal: exponent 0, fraction all ones.
    pub const MAX_SUBNORMAL_POS: Self = Self(frac_mask(E));

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        let () = Self::VALID_WIDTH;
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u8 {
        self.0
    }

    /// Pack logical fields into storage order. Out-of-range fields are
    /// masked to their widths.
    #[inline]
    pub const fn from_parts(sign: u8, exponent: u8, fraction: u8) -> Self {
        Self::from_bits(rep::pack(
            E,
            Fields {
                sign,
                exponent,
                fraction,
            },
        ))
    }

    #[inline]
    pub const fn to_parts(self) -> Fields {
        rep::unpack(E, self.0)
    }

    #[inline]
    pub const fn sign_bit(self) -> u8 {
        self.0 >> 7
    }

    #[inline]
    pub const fn exponent_field(self) -> u8 {
        (self.0 >> Self::FRAC_BITS) & exp_max(E)
    }

    #[inline]
    pub const fn fraction_field(self) -> u8 {
        self.0 & frac_mask(E)
    }

    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & 0x80 != 0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 & 0x7F == 0
    }

    // Any all-ones exponent is infinity: the decoder ignores the fraction
    // field there, so the predicate must too.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.exponent_field() == exp_max(E)
    }

    #[inline]
    pub const fn is_subnormal(self) -> bool {
        self.exponent_field() == 0 && self.fraction_field() != 0
    }

    /// Round up by one unit in the last place of the packed encoding.
    ///
    /// The storage order makes the packed byte monotone in magnitude
    /// within a sign, so a fraction overflow carries into the exponent
    /// field and, at the top of the normal range, into the infinity
    /// encoding. Callers only invoke this on values below infinity, so
    /// the increment never reaches the sign bit.
    #[inline]
    pub const fn next_up(self) -> Self {
        debug_assert!(
            self.0 & 0x7F < Self::POS_INF.0,
            "next_up called at or above the infinity encoding"
        );
        Self(self.0 + 1)
    }

    /// Convert an `f32` to the nearest representable value, rounding on
    /// the guard bit with ties up.
    ///
    /// Total over all 2^32 input patterns. Two collapses lose information
    /// but are defined behavior, not errors: `f32` subnormals flush to
    /// zero, and `f32` NaN is not distinguished from infinity (the narrow
    /// format has no NaN encoding). The sign bit is always preserved.
    pub fn from_f32(v: f32) -> Self {
        let () = Self::VALID_WIDTH;
        let f = Self::FRAC_BITS;

        let bits = v.to_bits();
        let sign = ((bits >> 31) as u8) << 7;
        let exponent = ((bits >> 23) & 0xFF) as i32;
        let m = bits & 0x7F_FFFF;

        // f32 zero and subnormals flush to narrow zero
        if exponent == 0 {
            return Self(sign);
        }
        // f32 infinity and NaN both map to narrow infinity
        if exponent == 0xFF {
            return Self(sign | Self::POS_INF.0);
        }

        let exp_value = exponent - 127;
        if exp_value > Self::BIAS {
            return Self(sign | Self::POS_INF.0);
        }
        if exp_value < -(Self::BIAS + f as i32) {
            return Self(sign);
        }

        let (low7, guard) = if exp_value <= -Self::BIAS {
            // Subnormal: the implicit leading 1 lands on fraction bit p,
            // with the top p mantissa bits packed below it. The smallest
            // binade has p = -1: no settable bit, only the rounding probe.
            let p = exp_value + Self::BIAS + f as i32 - 1;
            if p < 0 {
                (0u8, (m >> 22) & 1)
            } else {
                let p = p as u32;
                let frac = (1u32 << p) | ((m >> (23 - p)) & ((1u32 << p) - 1));
                (frac as u8, (m >> (22 - p)) & 1)
            }
        } else {
            let exp_field = (exp_value + Self::BIAS) as u8;
            let frac = (m >> (23 - f)) as u8;
            ((exp_field << f) | frac, (m >> (22 - f)) & 1)
        };

        let tentative = Self(sign | low7);
        if guard == 1 {
            tentative.next_up()
        } else {
            tentative
        }
    }

    /// Reconstruct the `f32` value. Total over all 256 bytes; subnormal
    /// encodings renormalize into normal `f32` values.
    pub fn to_f32(self) -> f32 {
        let () = Self::VALID_WIDTH;
        let f = Self::FRAC_BITS;

        let Fields {
            sign,
            exponent,
            fraction,
        } = self.to_parts();

        let (wide_exp, wide_frac) = if exponent == 0 {
            if fraction == 0 {
                (0u32, 0u32)
            } else {
                // Renormalize: the leading fraction bit becomes the
                // implicit 1, the bits below it shift up to the top of
                // the f32 mantissa.
                let p = 7 - fraction.leading_zeros();
                let wide_exp = (127 - Self::BIAS - f as i32 + 1 + p as i32) as u32;
                let wide_frac = ((fraction & ((1u16 << p) - 1) as u8) as u32) << (23 - p);
                (wide_exp, wide_frac)
            }
        } else if exponent == exp_max(E) {
            (0xFF, 0)
        } else {
            (
                (exponent as i32 - Self::BIAS + 127) as u32,
                (fraction as u32) << (23 - f),
            )
        };

        f32::from_bits(((sign as u32) << 31) | (wide_exp << 23) | wide_frac)
    }
}

impl<const E: u32> From<f32> for F8<E> {
    #[inline]
    fn from(v: f32) -> Self {
        Self::from_f32(v)
    }
}

impl<const E: u32> From<F8<E>> for f32 {
    #[inline]
    fn from(x: F8<E>) -> Self {
        x.to_f32()
    }
}

impl<const E: u32> Neg for F8<E> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0 ^ 0x80)
    }
}

impl<const E: u32> PartialOrd for F8<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // The format has no NaN, so the decoded comparison is total.
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl<const E: u32> fmt::Display for F8<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.to_bits();
        if self.is_infinite() {
            let sign = if self.is_sign_negative() { '-' } else { '+' };
            write!(f, "F8<{}>({}inf, bits=0x{:02X})", E, sign, bits)
        } else {
            write!(f, "F8<{}>({:.8e}, bits=0x{:02X})", E, self.to_f32(), bits)
        }
    }
}
