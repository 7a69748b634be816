mod shared;
mod vec2;
mod vec2_array;

pub use shared::SharedVec2;
pub use vec2::Vec2;
pub use vec2_array::Vec2Array;
