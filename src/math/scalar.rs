use std::fmt::{Debug, Display};
use std::num::ParseFloatError;
use std::ops::Mul;
use std::str::FromStr;

use num_traits::{Float, FloatConst};

use crate::geometry::Vec2;

/// Floating-point precision a [`Vec2`] can be instantiated with.
///
/// Implemented for `f32` and `f64` only. All vector operations, including
/// the tolerance predicates, are written once against this trait so both
/// precisions share the exact same code path.
pub trait Scalar:
    Float
    + FloatConst
    + nalgebra::Scalar
    + Debug
    + Display
    + Default
    + FromStr<Err = ParseFloatError>
    + Mul<Vec2<Self>, Output = Vec2<Self>>
{
    /// Relative tolerance used by `is_close` and `all_close` when none is given.
    const DEFAULT_REL_TOL: Self;

    /// Absolute tolerance used by `is_close` and `all_close` when none is given.
    ///
    /// Zero means only the relative tolerance applies, so a vector is never
    /// close to a nonzero vector when one of them is exactly zero.
    const DEFAULT_ABS_TOL: Self;
}

impl Scalar for f32 {
    const DEFAULT_REL_TOL: Self = 1e-5;
    const DEFAULT_ABS_TOL: Self = 0.0;
}

impl Scalar for f64 {
    const DEFAULT_REL_TOL: Self = 1e-9;
    const DEFAULT_ABS_TOL: Self = 0.0;
}
