//! Pure math/data for Snapdeck
//!
//! Geometry primitives and color definitions shared by the gesture,
//! animation and controller crates. No dependencies, no I/O.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Size};
}
