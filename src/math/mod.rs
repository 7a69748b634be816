pub mod scalar;
pub mod tolerance;

pub use scalar::Scalar;

use crate::geometry::{Vec2, Vec2Array};

/// Single-precision 2D vector.
pub type Vec2f = Vec2<f32>;

/// Double-precision 2D vector.
pub type Vec2d = Vec2<f64>;

/// Growable array of single-precision 2D vectors.
pub type Vec2fArray = Vec2Array<f32>;

/// Growable array of double-precision 2D vectors.
pub type Vec2dArray = Vec2Array<f64>;
