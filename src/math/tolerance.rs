//! Tolerance-based comparison of scalars and 2D vectors.
//!
//! Two families of predicates are provided:
//!
//! - `*_close` predicates use a tolerance relative to the magnitude of the
//!   compared values, with an optional absolute floor.
//! - `*_near` predicates use an absolute tolerance only.
//!
//! The vector predicates come in two scopes. `is_close_vec2` and
//! `is_near_vec2` compare the Euclidean norm of the difference against the
//! norms of the operands, while `all_close_vec2` and `all_near_vec2` compare
//! each coordinate on its own.
//!
//! These scopes disagree when a coordinate is infinite. For `a = (inf, 42)`
//! and `b = (inf, 43)`, the difference is `(0, -1)` but both norms are
//! infinite, so `is_close_vec2` holds while `all_close_vec2` does not.

use super::Scalar;
use crate::geometry::Vec2;

/// Returns whether `a` and `b` are almost equal within a relative tolerance,
/// or within an absolute tolerance when `abs_tol` is larger.
///
/// Equal infinities are close; an infinity is never close to any other
/// value, and NaN is never close to anything.
#[must_use]
pub fn is_close<T: Scalar>(a: T, b: T, rel_tol: T, abs_tol: T) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= (rel_tol * b).abs() || diff <= (rel_tol * a).abs() || diff <= abs_tol
}

/// Returns whether `|a - b| <= abs_tol`, treating equal infinities as near.
#[must_use]
pub fn is_near<T: Scalar>(a: T, b: T, abs_tol: T) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    (a - b).abs() <= abs_tol
}

/// Difference `a - b` where equal values, infinities included, give zero.
///
/// Plain subtraction would turn `inf - inf` into NaN.
#[must_use]
pub fn inf_diff<T: Scalar>(a: T, b: T) -> T {
    if a == b {
        T::zero()
    } else {
        a - b
    }
}

fn norm<T: Scalar>(v: Vec2<T>) -> T {
    v.x.hypot(v.y)
}

fn diff_norm<T: Scalar>(a: Vec2<T>, b: Vec2<T>) -> T {
    norm(Vec2::new(inf_diff(a.x, b.x), inf_diff(a.y, b.y)))
}

/// Whole-vector relative comparison:
/// `‖a - b‖ <= max(rel_tol * max(‖a‖, ‖b‖), abs_tol)`.
///
/// Returns `false` when the difference is not finite (opposite infinities,
/// or an infinite coordinate facing a finite one).
#[must_use]
pub fn is_close_vec2<T: Scalar>(a: Vec2<T>, b: Vec2<T>, rel_tol: T, abs_tol: T) -> bool {
    let d = diff_norm(a, b);
    if !d.is_finite() {
        return false;
    }
    d <= rel_tol * norm(b) || d <= rel_tol * norm(a) || d <= abs_tol
}

/// Per-coordinate relative comparison, see [`is_close`].
#[must_use]
pub fn all_close_vec2<T: Scalar>(a: Vec2<T>, b: Vec2<T>, rel_tol: T, abs_tol: T) -> bool {
    is_close(a.x, b.x, rel_tol, abs_tol) && is_close(a.y, b.y, rel_tol, abs_tol)
}

/// Whole-vector absolute comparison: `‖a - b‖ <= abs_tol`.
#[must_use]
pub fn is_near_vec2<T: Scalar>(a: Vec2<T>, b: Vec2<T>, abs_tol: T) -> bool {
    let d = diff_norm(a, b);
    d.is_finite() && d <= abs_tol
}

/// Per-coordinate absolute comparison, see [`is_near`].
#[must_use]
pub fn all_near_vec2<T: Scalar>(a: Vec2<T>, b: Vec2<T>, abs_tol: T) -> bool {
    is_near(a.x, b.x, abs_tol) && is_near(a.y, b.y, abs_tol)
}
