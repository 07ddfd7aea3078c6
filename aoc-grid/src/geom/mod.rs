//! Integer geometry on the puzzle lattice
//!
//! Coordinates follow screen conventions: `x` grows to the right and `y`
//! grows downward, so "up" is `y - 1`.

mod bounding_box;
mod direction;
mod point;

pub use bounding_box::{BoundingBox2D, BoundingBox3D};
pub use direction::Direction;
pub use point::{DIRECTIONS_2D, DIRECTIONS_3D, Point2D, Point3D};
