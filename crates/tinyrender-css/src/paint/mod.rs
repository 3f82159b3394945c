//! CSS Painting
//!
//! [CSS 2.1 Appendix E - Elaborate description of Stacking Contexts](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! This module implements the painting phase, which converts a layout tree into
//! a display list of drawing commands, and a software rasterizer that executes
//! the list into a pixel buffer.
//!
//! # Architecture
//!
//! ```text
//! Style → Layout → Paint → Rasterize
//!                    ↓         ↓
//!              DisplayList   Canvas
//! ```

mod canvas;
mod display_list;
mod painter;

pub use canvas::Canvas;
pub use display_list::{DisplayCommand, DisplayList};
pub use painter::build_display_list;

use crate::layout::{LayoutBox, Rect};

/// Paint a laid-out tree into a new canvas the size of `bounds`.
#[must_use]
pub fn paint(layout_root: &LayoutBox<'_>, bounds: Rect) -> Canvas {
    paint_display_list(&build_display_list(layout_root), bounds)
}

/// Rasterize `display_list` into a new canvas the size of `bounds`.
///
/// Fractional sizes are truncated; negative sizes give an empty canvas.
#[must_use]
pub fn paint_display_list(display_list: &DisplayList, bounds: Rect) -> Canvas {
    let mut canvas = Canvas::new(bounds.width as usize, bounds.height as usize);
    for item in display_list.commands() {
        canvas.paint_item(item);
    }
    canvas
}
