//! Software rasterizer.
//!
//! Executes a display list into a fixed-size, row-major pixel buffer.
//! Later commands overwrite earlier ones; there is no blending even though
//! colors carry alpha.

use crate::values::ColorValue;

use super::DisplayCommand;

/// A pixel buffer, initially opaque white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<ColorValue>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Create a blank canvas.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![ColorValue::WHITE; width * height],
            width,
            height,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row by row from the top-left corner.
    #[must_use]
    pub fn pixels(&self) -> &[ColorValue] {
        &self.pixels
    }

    /// The pixel at column `x`, row `y`, if it lies on the canvas.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<ColorValue> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Rasterize one command.
    ///
    /// Each edge of the rectangle is clamped to the canvas independently and
    /// truncated to a pixel index. The fill covers both the low and the high
    /// index, so a rectangle paints one extra column and row past its right
    /// and bottom edges. Pixels that would fall past the last column or row
    /// are dropped.
    pub fn paint_item(&mut self, item: &DisplayCommand) {
        match item {
            DisplayCommand::SolidColor(color, rect) => {
                if self.width == 0 || self.height == 0 {
                    return;
                }

                let width = self.width as f32;
                let height = self.height as f32;

                // Clamp the rectangle to the canvas boundaries.
                let x0 = rect.x.clamp(0.0, width) as usize;
                let y0 = rect.y.clamp(0.0, height) as usize;
                let x1 = (rect.x + rect.width).clamp(0.0, width) as usize;
                let y1 = (rect.y + rect.height).clamp(0.0, height) as usize;

                let x_end = x1.min(self.width - 1);
                let y_end = y1.min(self.height - 1);

                for y in y0..=y_end {
                    let row = y * self.width;
                    for x in x0..=x_end {
                        self.pixels[row + x] = *color;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use quickcheck_macros::quickcheck;

    const RED: ColorValue = ColorValue::new(255, 0, 0, 255);
    const BLUE: ColorValue = ColorValue::new(0, 0, 255, 255);

    fn fill(canvas: &mut Canvas, color: ColorValue, rect: Rect) {
        canvas.paint_item(&DisplayCommand::SolidColor(color, rect));
    }

    fn count(canvas: &Canvas, color: ColorValue) -> usize {
        canvas.pixels().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.pixels().len(), 12);
        assert!(canvas.pixels().iter().all(|&p| p == ColorValue::WHITE));
    }

    #[test]
    fn test_fill_bounds_are_inclusive() {
        // Known quirk: a 2x2 rectangle covers 3x3 pixels.
        let mut canvas = Canvas::new(10, 10);
        fill(&mut canvas, RED, Rect::new(1.0, 1.0, 2.0, 2.0));

        assert_eq!(count(&canvas, RED), 9);
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(3, 3), Some(RED));
        assert_eq!(canvas.pixel(4, 4), Some(ColorValue::WHITE));
        assert_eq!(canvas.pixel(0, 0), Some(ColorValue::WHITE));
    }

    #[test]
    fn test_zero_width_rect_paints_one_column() {
        let mut canvas = Canvas::new(5, 5);
        fill(&mut canvas, RED, Rect::new(2.0, 0.0, 0.0, 4.0));
        assert_eq!(count(&canvas, RED), 5);
        assert!((0..5).all(|y| canvas.pixel(2, y) == Some(RED)));
    }

    #[test]
    fn test_fill_clamps_to_canvas() {
        let mut canvas = Canvas::new(4, 4);
        fill(&mut canvas, RED, Rect::new(-10.0, -10.0, 100.0, 100.0));
        assert_eq!(count(&canvas, RED), 16);
    }

    #[test]
    fn test_later_commands_overwrite() {
        let mut canvas = Canvas::new(4, 4);
        fill(&mut canvas, RED, Rect::new(0.0, 0.0, 4.0, 4.0));
        fill(&mut canvas, ColorValue::new(0, 0, 255, 10), Rect::new(0.0, 0.0, 0.0, 0.0));

        // No blending: the translucent pixel replaces red outright.
        assert_eq!(canvas.pixel(0, 0), Some(ColorValue::new(0, 0, 255, 10)));
        assert_eq!(count(&canvas, RED), 15);
    }

    #[test]
    fn test_empty_canvas_ignores_commands() {
        let mut canvas = Canvas::new(0, 0);
        fill(&mut canvas, RED, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(canvas.pixels().is_empty());
    }

    #[test]
    fn test_pixel_out_of_range() {
        let canvas = Canvas::new(2, 2);
        assert_eq!(canvas.pixel(2, 0), None);
        assert_eq!(canvas.pixel(0, 2), None);
    }

    #[quickcheck]
    fn prop_fill_covers_exactly_the_clamped_bounds(x: i8, y: i8, w: u8, h: u8) -> bool {
        const W: usize = 16;
        const H: usize = 12;

        let mut canvas = Canvas::new(W, H);
        let rect = Rect::new(f32::from(x), f32::from(y), f32::from(w), f32::from(h));
        fill(&mut canvas, BLUE, rect);

        let x0 = rect.x.clamp(0.0, W as f32) as usize;
        let y0 = rect.y.clamp(0.0, H as f32) as usize;
        let x1 = (rect.x + rect.width).clamp(0.0, W as f32) as usize;
        let y1 = (rect.y + rect.height).clamp(0.0, H as f32) as usize;

        canvas.pixels().len() == W * H
            && (0..H).all(|py| {
                (0..W).all(|px| {
                    let inside = (x0..=x1).contains(&px) && (y0..=y1).contains(&py);
                    let expected = if inside { BLUE } else { ColorValue::WHITE };
                    canvas.pixel(px, py) == Some(expected)
                })
            })
    }
}
