//! Image rendering for the pen icon using tiny-skia
//!
//! These functions paint a [`PenGeometry`] onto an RgbaImage for saving to disk.

use anyhow::{Context, Result};
use image::RgbaImage;
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::PenGeometry;
use crate::domain::{Point, Polygon};
use crate::palette::{self, IconColor};

/// Convert RgbaImage to Pixmap, apply drawing function, and copy back
fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) -> Result<()> {
    let (w, h) = (img.width(), img.height());
    let size = tiny_skia::IntSize::from_wh(w, h)
        .with_context(|| format!("Invalid canvas size: {w}x{h}"))?;
    let mut pixmap = Pixmap::from_vec(img.as_raw().clone(), size)
        .context("Canvas buffer does not match its dimensions")?;

    f(&mut pixmap);

    // Copy back
    img.copy_from_slice(pixmap.data());
    Ok(())
}

fn solid_paint(color: IconColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = true;
    paint
}

/// Build a closed path through the polygon's vertices
fn build_polygon_path(polygon: &Polygon) -> Option<tiny_skia::Path> {
    let (first, rest) = polygon.vertices().split_first()?;

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

fn fill_polygon(pixmap: &mut Pixmap, polygon: &Polygon, color: IconColor) {
    let Some(path) = build_polygon_path(polygon) else {
        log::warn!("Skipping degenerate polygon: {:?}", polygon.vertices());
        return;
    };
    pixmap.fill_path(
        &path,
        &solid_paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn stroke_line(pixmap: &mut Pixmap, from: Point, to: Point, width: f32, color: IconColor) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width,
        line_cap: LineCap::Butt,
        ..Default::default()
    };
    pixmap.stroke_path(
        &path,
        &solid_paint(color),
        &stroke,
        Transform::identity(),
        None,
    );
}

/// Paint every part of the pen in order.
///
/// Later shapes cover earlier ones: shadow, body, nib, nib centerline,
/// eraser cap, clip.
pub fn draw_pen_on_image(img: &mut RgbaImage, pen: &PenGeometry) -> Result<()> {
    with_pixmap(img, |pixmap| {
        fill_polygon(pixmap, &pen.shadow, palette::PEN_SHADOW);
        fill_polygon(pixmap, &pen.body, palette::PEN_BODY);
        fill_polygon(pixmap, &pen.nib, palette::PEN_NIB);
        stroke_line(
            pixmap,
            pen.nib_tip,
            pen.end,
            pen.nib_line_width,
            palette::PEN_NIB_LINE,
        );
        fill_polygon(pixmap, &pen.eraser, palette::PEN_CLIP);
        fill_polygon(pixmap, &pen.clip, palette::PEN_SHADOW);
    })
}

/// Render the pen icon onto a fresh `size` x `size` canvas
pub fn render_pen(size: u32) -> Result<RgbaImage> {
    let pen = PenGeometry::for_size(size)
        .with_context(|| format!("Cannot compute pen geometry for a {size}px canvas"))?;

    let mut img = RgbaImage::from_pixel(size, size, palette::BACKGROUND.into());
    draw_pen_on_image(&mut img, &pen)?;
    Ok(img)
}
