//! 2D fixed-point vector

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::fixed::{isqrt, Fixed, SCALE};

/// Smallest raw magnitude the larger component is scaled up to before a
/// diagonal vector is normalized
const NORMALIZE_PRECISION: u128 = 1_000_000_000_000;

/// 2D vector used for positions, velocities and accelerations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: Fixed,
    pub y: Fixed,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(Fixed::ZERO, Fixed::ZERO);
    pub const X: Self = Self::new(Fixed::ONE, Fixed::ZERO);
    pub const Y: Self = Self::new(Fixed::ZERO, Fixed::ONE);

    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: Fixed) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn dot(self, other: Self) -> Fixed {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> Fixed {
        self.dot(self)
    }

    /// Euclidean length taken from the raw components, rounded down
    #[inline]
    pub fn length(self) -> Fixed {
        Fixed::hypot(self.x, self.y)
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> Fixed {
        (self - other).length_squared()
    }

    /// Unit vector in the same direction, `None` for the zero vector.
    ///
    /// Axis-aligned vectors normalize exactly to `±X` / `±Y`. Other vectors
    /// are scaled up in 128 bits before the root is taken, so even a delta of
    /// a few raw units yields a unit-length result.
    pub fn normalize(self) -> Option<Self> {
        match (self.x.is_zero(), self.y.is_zero()) {
            (true, true) => None,
            (false, true) => Some(Self::new(self.x.signum(), Fixed::ZERO)),
            (true, false) => Some(Self::new(Fixed::ZERO, self.y.signum())),
            (false, false) => Some(self.diagonal_unit()),
        }
    }

    fn diagonal_unit(self) -> Self {
        let (ax, ay) = (
            u128::from(self.x.raw().unsigned_abs()),
            u128::from(self.y.raw().unsigned_abs()),
        );
        let k = (NORMALIZE_PRECISION / ax.max(ay)).max(1);
        let (sx, sy) = (ax * k, ay * k);
        // len >= max(sx, sy) >= 1, so each quotient is at most SCALE
        let len = isqrt(sx * sx + sy * sy);
        let scale = u128::from(SCALE.unsigned_abs());
        let unit = |s: u128, sign: Fixed| {
            let raw = i64::try_from(s * scale / len).unwrap_or(SCALE);
            Fixed::from_raw(raw) * sign
        };
        Self::new(unit(sx, self.x.signum()), unit(sy, self.y.signum()))
    }

    /// Divide both components by a scalar, `None` when it is zero
    #[inline]
    pub fn checked_div(self, rhs: Fixed) -> Option<Self> {
        Some(Self::new(self.x.checked_div(rhs)?, self.y.checked_div(rhs)?))
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise clamp into `[min, max]`
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<Fixed> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
