use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{GeometryError, ParseError, Result};
use crate::math::{tolerance, Scalar};
use crate::text;

/// A 2D vector of `f32` or `f64` coordinates.
///
/// `Vec2` is a plain `Copy` value: assigning it or passing it by value makes
/// an independent copy. Use [`SharedVec2`](super::SharedVec2) when two owners
/// must observe the same mutable storage.
///
/// Equality and ordering are exact and field-wise. Ordering is
/// lexicographic: `x` first, then `y`. For approximate comparisons see
/// [`is_close`](Self::is_close), [`all_close`](Self::all_close),
/// [`is_near`](Self::is_near) and [`all_near`](Self::all_near).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    /// Creates a new vector from its coordinates.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the null vector `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Returns the unit vector `(1, 0)`.
    #[must_use]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Returns the unit vector `(0, 1)`.
    #[must_use]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Returns the coordinate at `index` (`0` for `x`, `1` for `y`).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index > 1`.
    pub fn get(&self, index: usize) -> Result<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(GeometryError::IndexOutOfRange { index, len: 2 }.into()),
        }
    }

    /// Sets the coordinate at `index` (`0` for `x`, `1` for `y`).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index > 1`, in which
    /// case the vector is left unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(GeometryError::IndexOutOfRange { index, len: 2 }.into()),
        }
        Ok(())
    }

    /// Sets both coordinates to zero.
    pub fn set_zero(&mut self) {
        *self = Self::zero();
    }

    /// Returns the coordinates as `[x, y]`.
    #[must_use]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Returns the Euclidean length `sqrt(x² + y²)`.
    #[must_use]
    pub fn length(self) -> T {
        self.squared_length().sqrt()
    }

    /// Returns the squared Euclidean length `x² + y²`.
    ///
    /// Cheaper than [`length`](Self::length) and exact enough to compare
    /// lengths with each other.
    #[must_use]
    pub fn squared_length(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Makes this vector unit-length by dividing it by its length.
    ///
    /// Returns whether the vector was normalizable. The null vector is not:
    /// it is replaced by `(1, 0)` and `false` is returned.
    pub fn normalize(&mut self) -> bool {
        self.normalize_with_epsilon(T::zero())
    }

    /// Like [`normalize`](Self::normalize), but vectors whose length is less
    /// than or equal to `epsilon` are considered non-normalizable, as are
    /// vectors with an infinite or NaN coordinate.
    pub fn normalize_with_epsilon(&mut self, epsilon: T) -> bool {
        match self.unit_and_length() {
            Some((unit, l)) if l > epsilon => {
                *self = unit;
                true
            }
            _ => {
                tracing::debug!(x = %self.x, y = %self.y, "vector is not normalizable, using unit x");
                *self = Self::unit_x();
                false
            }
        }
    }

    /// Unit vector along `self` together with the length of `self`.
    ///
    /// `None` for the null vector and for non-finite coordinates. Vectors
    /// whose squared length overflows or underflows are rescaled by their
    /// largest coordinate first; the returned length may then be infinite.
    fn unit_and_length(self) -> Option<(Self, T)> {
        let l2 = self.squared_length();
        if l2.is_normal() {
            let l = l2.sqrt();
            return Some((self / l, l));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return None;
        }
        let m = self.x.abs().max(self.y.abs());
        if m == T::zero() {
            return None;
        }
        let scaled = self / m;
        let l = scaled.length();
        Some((scaled / l, m * l))
    }

    /// Returns a unit-length copy of this vector, or `(1, 0)` for the null
    /// vector. See [`normalize`](Self::normalize).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns a unit-length copy of this vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the length is less than or
    /// equal to `epsilon`, or if a coordinate is infinite or NaN.
    pub fn try_normalized(self, epsilon: T) -> Result<Self> {
        match self.unit_and_length() {
            Some((unit, l)) if l > epsilon => Ok(unit),
            _ => Err(GeometryError::ZeroVector.into()),
        }
    }

    /// Rotates this vector by 90° counter-clockwise: `(x, y) → (-y, x)`.
    pub fn orthogonalize(&mut self) -> &mut Self {
        *self = self.orthogonalized();
        self
    }

    /// Returns this vector rotated by 90° counter-clockwise.
    #[must_use]
    pub fn orthogonalized(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Dot product `x₁x₂ + y₁y₂`.
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Determinant `x₁y₂ - y₁x₂`, i.e. the signed area of the parallelogram
    /// spanned by both vectors. Positive when `other` is counter-clockwise
    /// from `self`.
    #[must_use]
    pub fn det(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Signed angle in radians from `self` to `other`, in `(-π, π]`.
    ///
    /// Computed as `atan2(det, dot)`, so `v.angle(v)` is exactly zero.
    /// Opposite vectors give `π`, whatever the sign of the zero determinant.
    #[must_use]
    pub fn angle(self, other: Self) -> T {
        let a = self.det(other).atan2(self.dot(other));
        if a == -T::PI() {
            T::PI()
        } else {
            a
        }
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[must_use]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// Returns whether this vector and `other` are almost equal, relative to
    /// their magnitude, using the default tolerance of `T`.
    ///
    /// The test is `‖a - b‖ <= rel_tol * max(‖a‖, ‖b‖)`. Because it scales
    /// with the whole vector, `(1, 0)` is close to `(1, 1e-10)`. An infinite
    /// coordinate makes the threshold unbounded, so `(inf, 42)` is close to
    /// `(inf, 43)`. Use [`all_close`](Self::all_close) to compare each
    /// coordinate on its own.
    #[must_use]
    pub fn is_close(self, other: Self) -> bool {
        self.is_close_with(other, T::DEFAULT_REL_TOL, T::DEFAULT_ABS_TOL)
    }

    /// [`is_close`](Self::is_close) with explicit tolerances.
    ///
    /// `abs_tol` is a floor for the allowed distance, useful when comparing
    /// against the null vector.
    #[must_use]
    pub fn is_close_with(self, other: Self, rel_tol: T, abs_tol: T) -> bool {
        tolerance::is_close_vec2(self, other, rel_tol, abs_tol)
    }

    /// Returns whether each coordinate of this vector is almost equal to the
    /// matching coordinate of `other`, using the default tolerance of `T`.
    ///
    /// Unlike [`is_close`](Self::is_close), `(1, 0)` is not close to
    /// `(1, 1e-10)` and `(inf, 42)` is not close to `(inf, 43)`.
    #[must_use]
    pub fn all_close(self, other: Self) -> bool {
        self.all_close_with(other, T::DEFAULT_REL_TOL, T::DEFAULT_ABS_TOL)
    }

    /// [`all_close`](Self::all_close) with explicit tolerances: for each
    /// coordinate, `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
    #[must_use]
    pub fn all_close_with(self, other: Self, rel_tol: T, abs_tol: T) -> bool {
        tolerance::all_close_vec2(self, other, rel_tol, abs_tol)
    }

    /// Returns whether the Euclidean distance to `other` is at most `abs_tol`.
    #[must_use]
    pub fn is_near(self, other: Self, abs_tol: T) -> bool {
        tolerance::is_near_vec2(self, other, abs_tol)
    }

    /// Returns whether each coordinate differs from the matching coordinate
    /// of `other` by at most `abs_tol`.
    #[must_use]
    pub fn all_near(self, other: Self, abs_tol: T) -> bool {
        tolerance::all_near_vec2(self, other, abs_tol)
    }
}

impl Vec2<f64> {
    /// Converts to single precision, rounding each coordinate.
    ///
    /// Coordinates beyond the `f32` range become infinite.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(self) -> Vec2<f32> {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl From<Vec2<f32>> for Vec2<f64> {
    fn from(v: Vec2<f32>) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y))
    }
}

// ── conversions ──

impl<T: Scalar> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<Vec2<T>> for [T; 2] {
    fn from(v: Vec2<T>) -> Self {
        v.to_array()
    }
}

impl<T: Scalar> TryFrom<&[T]> for Vec2<T> {
    type Error = GeometryError;

    fn try_from(values: &[T]) -> std::result::Result<Self, Self::Error> {
        match *values {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(GeometryError::InvalidArity {
                expected: 2,
                found: values.len(),
            }),
        }
    }
}

impl<T: Scalar> From<nalgebra::Vector2<T>> for Vec2<T> {
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Scalar> From<Vec2<T>> for nalgebra::Vector2<T> {
    fn from(v: Vec2<T>) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl<T: Scalar> From<nalgebra::Point2<T>> for Vec2<T> {
    fn from(p: nalgebra::Point2<T>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl<T: Scalar> From<Vec2<T>> for nalgebra::Point2<T> {
    fn from(v: Vec2<T>) -> Self {
        nalgebra::Point2::new(v.x, v.y)
    }
}

// ── indexing ──

impl<T: Scalar> Index<usize> for Vec2<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index > 1`. Use [`Vec2::get`] for a checked access.
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {index}"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vec2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of range: {index}"),
        }
    }
}

// ── arithmetic ──

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl<T: Scalar> MulAssign<T> for Vec2<T> {
    fn mul_assign(&mut self, s: T) {
        self.x = self.x * s;
        self.y = self.y * s;
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl<T: Scalar> DivAssign<T> for Vec2<T> {
    fn div_assign(&mut self, s: T) {
        self.x = self.x / s;
        self.y = self.y / s;
    }
}

macro_rules! impl_scalar_mul_vec2 {
    ($($t:ty),*) => {$(
        impl Mul<Vec2<$t>> for $t {
            type Output = Vec2<$t>;

            fn mul(self, v: Vec2<$t>) -> Vec2<$t> {
                v * self
            }
        }
    )*};
}

impl_scalar_mul_vec2!(f32, f64);

impl<T: Scalar> Sum for Vec2<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

// ── text ──

/// Writes `(x, y)` with `.` as decimal separator, whatever the locale.
///
/// A precision (`{:.2}`) applies to both coordinates.
impl<T: Scalar> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$})", self.x, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Parses `(x, y)`, allowing whitespace around every token.
impl<T: Scalar> FromStr for Vec2<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        text::parse_all(s, text::read_vec2)
    }
}
