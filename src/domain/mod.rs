//! Pure domain types with minimal dependencies
//!
//! Types here have no rendering dependencies (tiny-skia, image)
//! so geometry can be computed and tested on its own.

pub mod geometry;

pub use geometry::*;
