//! Painter - generates display list from layout tree
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! The painter walks the layout tree and generates drawing commands in the
//! correct painting order (back to front).

use crate::layout::{LayoutBox, Rect};
use crate::values::{ColorValue, Value};

use super::{DisplayCommand, DisplayList};

/// Paint a layout tree and return the display list.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Each box paints, in order:
/// 1. Background color, over the border box
/// 2. Border, as four strips
/// 3. Descendants, in tree order
#[must_use]
pub fn build_display_list(layout_root: &LayoutBox<'_>) -> DisplayList {
    let mut list = DisplayList::new();
    render_layout_box(&mut list, layout_root);
    list
}

fn render_layout_box(list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    render_background(list, layout_box);
    render_borders(list, layout_box);
    for child in &layout_box.children {
        render_layout_box(list, child);
    }
}

/// [CSS Backgrounds § 3.7](https://www.w3.org/TR/css-backgrounds-3/#background-painting-area)
///
/// "The initial value of 'background-clip' is 'border-box', meaning
/// the background is painted within the border box."
fn render_background(list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    if let Some(color) = get_color(layout_box, "background") {
        list.push(DisplayCommand::SolidColor(
            color,
            layout_box.dimensions.border_box(),
        ));
    }
}

/// Paint the four border strips: left, right, top, bottom.
///
/// Every strip spans the full border box in its long direction, so the
/// corners are painted twice.
fn render_borders(list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    let Some(color) = get_color(layout_box, "border-color") else {
        return;
    };

    let d = &layout_box.dimensions;
    let border_box = d.border_box();

    // Left border
    list.push(DisplayCommand::SolidColor(
        color,
        Rect::new(border_box.x, border_box.y, d.border.left, border_box.height),
    ));

    // Right border
    list.push(DisplayCommand::SolidColor(
        color,
        Rect::new(
            border_box.x + border_box.width - d.border.right,
            border_box.y,
            d.border.right,
            border_box.height,
        ),
    ));

    // Top border
    list.push(DisplayCommand::SolidColor(
        color,
        Rect::new(border_box.x, border_box.y, border_box.width, d.border.top),
    ));

    // Bottom border
    list.push(DisplayCommand::SolidColor(
        color,
        Rect::new(
            border_box.x,
            border_box.y + border_box.height - d.border.bottom,
            border_box.width,
            d.border.bottom,
        ),
    ));
}

/// Return the specified color for CSS property `name`, or `None` if the box
/// is anonymous or the value is not a color.
fn get_color(layout_box: &LayoutBox<'_>, name: &str) -> Option<ColorValue> {
    match layout_box.style_node()?.value(name)? {
        Value::Color(color) => Some(color),
        _ => None,
    }
}
