//! Icon files: where they live, what they are called, and writing them

use anyhow::{Context, Result};
use image::RgbaImage;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::render::image::render_pen;

/// Icon sizes generated by a run, in order
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// Root of the project the icons belong to
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Directory the icons are written into
pub fn icon_dir(root: &Path) -> PathBuf {
    root.join("public").join("icons")
}

pub fn icon_file_name(size: u32) -> String {
    format!("pen-{size}.png")
}

/// Render the pen at `size` and save it as `<dir>/pen-<size>.png`.
///
/// Creates `dir` if it does not exist and returns the written path.
pub fn create_icon(size: u32, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create icon directory: {}", dir.display()))?;

    let img = render_pen(size)?;
    let path = dir.join(icon_file_name(size));
    save_rgba(&img, &path)?;

    log::info!("Wrote {}x{} icon to {}", size, size, path.display());
    Ok(path)
}

/// Write every icon in [`ICON_SIZES`] under `root`, reporting each saved file
pub fn generate_all(root: &Path) -> Result<Vec<PathBuf>> {
    let dir = icon_dir(root);
    log::info!("Generating pen icons in {}", dir.display());

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let path = create_icon(size, &dir)?;
        let shown = path.strip_prefix(root).unwrap_or(path.as_path());
        println!("Saved {}", shown.display());
        written.push(path);
    }
    Ok(written)
}

fn save_rgba(img: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create icon file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_png(&mut writer, img)
        .with_context(|| format!("Failed to encode PNG: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write icon file: {}", path.display()))?;
    Ok(())
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_file_name() {
        assert_eq!(icon_file_name(192), "pen-192.png");
        assert_eq!(icon_file_name(512), "pen-512.png");
    }

    #[test]
    fn test_icon_dir_under_public() {
        let root = Path::new("/project");
        assert_eq!(icon_dir(root), PathBuf::from("/project/public/icons"));
    }

    #[test]
    fn test_create_icon_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("icons");
        assert!(!dir.exists());

        let path = create_icon(192, &dir).unwrap();
        assert_eq!(path, dir.join("pen-192.png"));

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (192, 192));
    }

    #[test]
    fn test_saved_icon_matches_render() {
        let tmp = tempfile::tempdir().unwrap();
        let path = create_icon(192, tmp.path()).unwrap();

        let saved = image::open(&path).unwrap().to_rgba8();
        let rendered = render_pen(192).unwrap();
        assert_eq!(saved.as_raw(), rendered.as_raw());
    }

    #[test]
    fn test_generate_all_writes_two_files() {
        let tmp = tempfile::tempdir().unwrap();
        let written = generate_all(tmp.path()).unwrap();

        let dir = icon_dir(tmp.path());
        assert_eq!(
            written,
            vec![dir.join("pen-192.png"), dir.join("pen-512.png")]
        );

        let mut names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["pen-192.png", "pen-512.png"]);

        for (path, size) in written.iter().zip(ICON_SIZES) {
            let img = image::open(path).unwrap();
            assert_eq!((img.width(), img.height()), (size, size));
        }
    }

    #[test]
    fn test_create_icon_fails_on_unwritable_dir() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the directory should be
        let blocker = tmp.path().join("icons");
        std::fs::write(&blocker, b"not a directory").unwrap();

        assert!(create_icon(192, &blocker).is_err());
        assert!(create_icon(192, &blocker.join("sub")).is_err());
    }
}
