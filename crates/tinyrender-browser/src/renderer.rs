//! Canvas export.
//!
//! The rasterizer in `tinyrender-css` produces a [`Canvas`] of straight RGBA
//! colors. This module hands those pixels to the outside world:
//!
//! ```text
//! Canvas → RgbaImage → PNG
//!        → ARGB bytes
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use tinyrender_css::{Canvas, ColorValue};

/// Copy the canvas into an [`RgbaImage`].
#[must_use]
pub fn to_rgba_image(canvas: &Canvas) -> RgbaImage {
    RgbaImage::from_fn(canvas.width() as u32, canvas.height() as u32, |x, y| {
        let c = canvas
            .pixel(x as usize, y as usize)
            .unwrap_or(ColorValue::WHITE);
        Rgba([c.r, c.g, c.b, c.a])
    })
}

/// Flatten the canvas into alpha-first bytes, row by row.
#[must_use]
pub fn to_argb_bytes(canvas: &Canvas) -> Vec<u8> {
    canvas
        .pixels()
        .iter()
        .flat_map(|c| [c.a, c.r, c.g, c.b])
        .collect()
}

/// Write the canvas to `path` as a PNG.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    to_rgba_image(canvas)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to save PNG to '{}'", path.display()))
}
