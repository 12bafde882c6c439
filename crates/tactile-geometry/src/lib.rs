//! Pure math for touch input in Tactile
//!
//! This crate contains the geometry primitives shared by the gesture
//! recognizer and the touch handler.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Offset, Point};
}
