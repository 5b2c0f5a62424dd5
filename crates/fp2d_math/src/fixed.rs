//! Deterministic fixed-point scalar
//!
//! [`Fixed`] stores a real value as a signed 64-bit integer scaled by
//! [`SCALE`]. Arithmetic never touches floating point: products and quotients
//! are computed in 128 bits, rounded toward zero, and saturated back into the
//! 64-bit range, so every platform produces the same bits.
//!
//! # Example
//!
//! ```
//! use fp2d_math::Fixed;
//!
//! let gravity = Fixed::from_milli(9_810);
//! let dt = Fixed::from_milli(20);
//! assert_eq!(gravity * dt, Fixed::from_micro(196_200));
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw value of one whole unit
pub const SCALE: i64 = 1_000_000_000;

const SCALE_WIDE: i128 = SCALE as i128;

/// Signed fixed-point number with [`SCALE`] raw units per whole
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Fixed(i64);

impl Fixed {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(SCALE);
    pub const HALF: Self = Self(SCALE / 2);
    /// Largest representable value, also used as an "infinite" sentinel
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Wrap a raw scaled integer
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw scaled integer
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Whole units
    #[inline]
    pub const fn from_int(whole: i64) -> Self {
        Self(whole.saturating_mul(SCALE))
    }

    /// Thousandths of a unit (`from_milli(9_810)` is 9.81)
    #[inline]
    pub const fn from_milli(milli: i64) -> Self {
        Self(milli.saturating_mul(SCALE / 1_000))
    }

    /// Millionths of a unit
    #[inline]
    pub const fn from_micro(micro: i64) -> Self {
        Self(micro.saturating_mul(SCALE / 1_000_000))
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// `-ONE`, `ZERO` or `ONE`
    #[inline]
    pub const fn signum(self) -> Self {
        Self(self.0.signum() * SCALE)
    }

    /// Half the value, rounded toward zero
    #[inline]
    pub const fn half(self) -> Self {
        Self(self.0 / 2)
    }

    /// `self / rhs`, rounded toward zero. `None` when `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        let wide = i128::from(self.0) * SCALE_WIDE / i128::from(rhs.0);
        Some(Self(saturate(wide)))
    }

    /// Square root, rounded down. Negative inputs have no real root and yield zero.
    pub fn sqrt(self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        let scaled = u128::from(self.0.unsigned_abs()) * u128::from(SCALE.unsigned_abs());
        Self(i64::try_from(isqrt(scaled)).unwrap_or(i64::MAX))
    }

    /// `sqrt(x² + y²)` from the raw values, rounded down, with no
    /// intermediate rescaling. Zero only when both inputs are zero.
    pub fn hypot(x: Self, y: Self) -> Self {
        let (x, y) = (u128::from(x.0.unsigned_abs()), u128::from(y.0.unsigned_abs()));
        Self(i64::try_from(isqrt(x * x + y * y)).unwrap_or(i64::MAX))
    }

    /// `self / (self + other)` with the sum kept in 128 bits, rounded toward
    /// zero. `None` when the sum is zero.
    pub fn share_of_sum(self, other: Self) -> Option<Self> {
        let sum = i128::from(self.0) + i128::from(other.0);
        if sum == 0 {
            return None;
        }
        Some(Self(saturate(i128::from(self.0) * SCALE_WIDE / sum)))
    }
}

fn saturate(wide: i128) -> i64 {
    i64::try_from(wide).unwrap_or(if wide.is_negative() { i64::MIN } else { i64::MAX })
}

/// Floor square root by Newton iteration from an overestimate
pub(crate) fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let shift = (128 - n.leading_zeros() + 1) / 2;
    let mut x = 1u128 << shift;
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

impl Add for Fixed {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Mul for Fixed {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(saturate(i128::from(self.0) * i128::from(rhs.0) / SCALE_WIDE))
    }
}

impl Neg for Fixed {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = SCALE.unsigned_abs();
        write!(f, "{}{}.{:09}", sign, magnitude / scale, magnitude % scale)
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constructors_share_scale() {
        assert_eq!(Fixed::from_int(2).raw(), 2 * SCALE);
        assert_eq!(Fixed::from_milli(250), Fixed::from_micro(250_000));
        assert_eq!(Fixed::HALF + Fixed::HALF, Fixed::ONE);
    }

    #[test]
    fn test_mul_is_exact_for_decimal_inputs() {
        let v = Fixed::from_milli(9_810) * Fixed::from_milli(20);
        assert_eq!(v, Fixed::from_micro(196_200));
        assert_eq!(v * Fixed::from_milli(20), Fixed::from_micro(3_924));
    }

    #[test]
    fn test_mul_rounds_toward_zero() {
        let tiny = Fixed::from_raw(-1);
        assert_eq!(tiny * Fixed::HALF, Fixed::ZERO);
        assert_eq!(Fixed::from_raw(3) * Fixed::HALF, Fixed::from_raw(1));
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(Fixed::ONE.checked_div(Fixed::ZERO), None);
        let third = Fixed::ONE.checked_div(Fixed::from_int(3)).unwrap();
        assert_eq!(third.raw(), 333_333_333);
        let neg = (-Fixed::ONE).checked_div(Fixed::from_int(3)).unwrap();
        assert_eq!(neg.raw(), -333_333_333);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(Fixed::MAX + Fixed::ONE, Fixed::MAX);
        assert_eq!(Fixed::MAX * Fixed::from_int(2), Fixed::MAX);
        assert_eq!(Fixed::MIN - Fixed::ONE, Fixed::MIN);
        assert_eq!(-Fixed::MIN, Fixed::MAX);
        assert_eq!(Fixed::MAX.checked_div(Fixed::from_raw(1)), Some(Fixed::MAX));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Fixed::from_int(4).sqrt(), Fixed::from_int(2));
        assert_eq!(Fixed::from_micro(160_000).sqrt(), Fixed::from_milli(400));
        assert_eq!(Fixed::from_int(2).sqrt().raw(), 1_414_213_562);
        assert_eq!(Fixed::from_int(-4).sqrt(), Fixed::ZERO);
        assert_eq!(Fixed::ZERO.sqrt(), Fixed::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Fixed::from_milli(-1_500)), "-1.500000000");
        assert_eq!(format!("{:?}", Fixed::from_micro(3_924)), "Fixed(0.003924000)");
    }

    #[test]
    fn test_signum_and_half() {
        assert_eq!(Fixed::from_milli(-3).signum(), -Fixed::ONE);
        assert_eq!(Fixed::ZERO.signum(), Fixed::ZERO);
        assert_eq!(Fixed::from_raw(-3).half(), Fixed::from_raw(-1));
    }

    #[test]
    fn test_hypot_keeps_small_components() {
        let d = Fixed::from_raw(40_000);
        assert_eq!(Fixed::hypot(d, d).raw(), 56_568);
        assert_eq!(Fixed::hypot(Fixed::from_int(-3), Fixed::from_int(4)), Fixed::from_int(5));
        assert_eq!(Fixed::hypot(Fixed::ZERO, Fixed::ZERO), Fixed::ZERO);
        assert_eq!(Fixed::hypot(Fixed::MIN, Fixed::MIN), Fixed::MAX);
    }

    #[test]
    fn test_share_of_sum() {
        let three = Fixed::from_int(3);
        assert_eq!(three.share_of_sum(three), Some(Fixed::HALF));
        assert_eq!(Fixed::MAX.share_of_sum(Fixed::MAX), Some(Fixed::HALF));
        assert_eq!(Fixed::ONE.share_of_sum(Fixed::from_int(3)), Some(Fixed::from_milli(250)));
        assert_eq!(Fixed::ZERO.share_of_sum(Fixed::ZERO), None);
    }

    proptest! {
        #[test]
        fn sqrt_never_overshoots(raw in 0i64..=i64::MAX) {
            let x = Fixed::from_raw(raw);
            let root = x.sqrt();
            prop_assert!(root * root <= x);
        }

        #[test]
        fn mul_commutes(a in -1_000_000_000_000i64..1_000_000_000_000, b in -1_000_000_000_000i64..1_000_000_000_000) {
            let (a, b) = (Fixed::from_raw(a), Fixed::from_raw(b));
            prop_assert_eq!(a * b, b * a);
        }
    }
}
