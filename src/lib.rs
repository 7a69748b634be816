pub mod error;
pub mod geometry;
pub mod math;
pub mod text;

pub use error::{GeometryError, ParseError, PlanarError, Result};
pub use geometry::{SharedVec2, Vec2, Vec2Array};
pub use math::{Scalar, Vec2d, Vec2dArray, Vec2f, Vec2fArray};
