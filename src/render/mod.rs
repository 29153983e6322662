//! Pen icon rendering module
//!
//! This module contains:
//! - Geometry calculations deriving every pen outline from the canvas size
//! - Image rendering using tiny-skia (for saving to file)

pub mod geometry;
pub mod image;
