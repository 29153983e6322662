//! Pen icon geometry
//!
//! Every shape of the icon is derived from the canvas size through the
//! ratios in [`pen`], so the same size always yields the same outlines.

use crate::domain::{Point, Polygon, Vector};

/// Pen proportions, as fractions of the canvas size or of the pen width
pub mod pen {
    /// Axis start (cap end) as a fraction of the canvas size
    pub const START: (f32, f32) = (0.28, 0.18);
    /// Axis end (nib end) as a fraction of the canvas size
    pub const END: (f32, f32) = (0.78, 0.78);
    /// Pen body width as a fraction of the canvas size
    pub const WIDTH: f32 = 0.16;

    /// Shadow extent on the positive side of the axis, in half-widths
    pub const SHADOW_POSITIVE: f32 = 0.4;
    /// Shadow extent on the negative side of the axis, in half-widths
    pub const SHADOW_NEGATIVE: f32 = 0.6;

    /// Nib length in pen widths
    pub const NIB_LENGTH: f32 = 0.85;
    /// Nib centerline stroke width in pen widths
    pub const NIB_LINE_WIDTH: f32 = 0.08;

    /// Eraser cap length in pen widths
    pub const ERASER_LENGTH: f32 = 0.9;

    /// Clip extent on the positive side of the axis, in half-widths
    pub const CLIP_POSITIVE: f32 = 0.5;
    /// Clip extent on the negative side of the axis, in half-widths
    pub const CLIP_NEGATIVE: f32 = 0.2;
    /// Clip length in pen widths
    pub const CLIP_LENGTH: f32 = 1.0;
}

/// All outlines needed to paint the pen at one canvas size
#[derive(Clone, Debug, PartialEq)]
pub struct PenGeometry {
    pub start: Point,
    pub end: Point,
    pub width: f32,
    /// Unit vector from `start` to `end`
    pub direction: Vector,
    /// Half-width offset perpendicular to the axis
    pub perp: Vector,
    pub body: Polygon,
    pub shadow: Polygon,
    pub nib: Polygon,
    pub nib_tip: Point,
    /// Centerline stroke width in whole pixels
    pub nib_line_width: f32,
    pub eraser: Polygon,
    pub clip: Polygon,
}

/// Quadrilateral spanning `from..to` between `left` and `right` perpendicular offsets
fn band(from: Point, to: Point, left: Vector, right: Vector) -> Option<Polygon> {
    Polygon::new(vec![from + left, to + left, to + right, from + right])
}

impl PenGeometry {
    /// Compute the pen outlines for a `size` x `size` canvas.
    ///
    /// Returns `None` when the axis collapses to a point (a zero size).
    pub fn for_size(size: u32) -> Option<Self> {
        let s = size as f32;
        let start = Point::new(s * pen::START.0, s * pen::START.1);
        let end = Point::new(s * pen::END.0, s * pen::END.1);
        let width = s * pen::WIDTH;

        let direction = Vector::between(start, end).normalize()?;
        let perp = direction.perpendicular() * (width / 2.0);

        let body = band(start, end, perp, -perp)?;
        let shadow = band(
            start,
            end,
            perp * pen::SHADOW_POSITIVE,
            -perp * pen::SHADOW_NEGATIVE,
        )?;

        let nib_tip = end + direction * (width * pen::NIB_LENGTH);
        let nib = Polygon::new(vec![end + perp, nib_tip, end - perp])?;
        // Whole pixels, truncated, but never thinner than one pixel
        let nib_line_width = (width * pen::NIB_LINE_WIDTH).trunc().max(1.0);

        let eraser_start = start - direction * (width * pen::ERASER_LENGTH);
        let eraser = band(eraser_start, start, perp, -perp)?;

        let clip_back = start - direction * (width * pen::CLIP_LENGTH);
        let clip = Polygon::new(vec![
            start + perp * pen::CLIP_POSITIVE,
            start - perp * pen::CLIP_NEGATIVE,
            clip_back - perp * pen::CLIP_NEGATIVE,
            clip_back + perp * pen::CLIP_POSITIVE,
        ])?;

        log::debug!(
            "Pen geometry for {size}px: axis length {:.2}, width {:.2}, nib line {}px",
            Vector::between(start, end).length(),
            width,
            nib_line_width
        );

        Some(Self {
            start,
            end,
            width,
            direction,
            perp,
            body,
            shadow,
            nib,
            nib_tip,
            nib_line_width,
            eraser,
            clip,
        })
    }
}
