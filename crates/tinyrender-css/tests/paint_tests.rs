//! Integration tests for display list generation and rasterization.

use tinyrender_css::{
    ColorValue, DisplayCommand, DisplayList, Dimensions, Rect, build_display_list, layout_tree,
    paint, paint_display_list, parse_stylesheet, style_tree,
};

const RED: ColorValue = ColorValue::new(255, 0, 0, 255);
const GREEN: ColorValue = ColorValue::new(0, 255, 0, 255);

fn viewport(width: f32) -> Dimensions {
    let mut dims = Dimensions::default();
    dims.content.width = width;
    dims
}

fn rect_of(command: &DisplayCommand) -> Rect {
    match command {
        DisplayCommand::SolidColor(_, rect) => *rect,
    }
}

fn color_of(command: &DisplayCommand) -> ColorValue {
    match command {
        DisplayCommand::SolidColor(color, _) => *color,
    }
}

#[test]
fn test_background_then_four_borders() {
    let root = tinyrender_html::parse("<div></div>").unwrap();
    let sheet = parse_stylesheet(
        "div { display: block; width: 20px; height: 10px; border-width: 2px; \
         background: #ff0000; border-color: #00ff00; }",
    )
    .unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(100.0)).unwrap();
    let list = build_display_list(&layout);

    assert_eq!(list.len(), 5);
    let commands = list.commands();

    // Background covers the border box.
    assert_eq!(color_of(&commands[0]), RED);
    assert_eq!(rect_of(&commands[0]), Rect::new(0.0, 0.0, 24.0, 14.0));

    // Left, right, top, bottom. Side strips span the full border-box height,
    // so corners are covered twice (known quirk).
    assert!(commands[1..].iter().all(|c| color_of(c) == GREEN));
    assert_eq!(rect_of(&commands[1]), Rect::new(0.0, 0.0, 2.0, 14.0));
    assert_eq!(rect_of(&commands[2]), Rect::new(22.0, 0.0, 2.0, 14.0));
    assert_eq!(rect_of(&commands[3]), Rect::new(0.0, 0.0, 24.0, 2.0));
    assert_eq!(rect_of(&commands[4]), Rect::new(0.0, 12.0, 24.0, 2.0));
}

#[test]
fn test_no_colors_no_commands() {
    let root = tinyrender_html::parse("<div><p></p></div>").unwrap();
    let sheet = parse_stylesheet("div, p { display: block; height: 5px; }").unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(100.0)).unwrap();

    assert!(build_display_list(&layout).is_empty());
}

#[test]
fn test_non_color_background_is_ignored() {
    let root = tinyrender_html::parse("<div></div>").unwrap();
    let sheet = parse_stylesheet("div { display: block; background: none; }").unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(100.0)).unwrap();

    assert!(build_display_list(&layout).is_empty());
}

#[test]
fn test_children_paint_after_parent_in_tree_order() {
    let root = tinyrender_html::parse(r#"<div><p id="a"></p><p id="b"></p></div>"#).unwrap();
    let sheet = parse_stylesheet(
        "div, p { display: block; } \
         div { background: #000000; } \
         #a { background: #ff0000; height: 5px; } \
         #b { background: #00ff00; height: 5px; }",
    )
    .unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(100.0)).unwrap();
    let list = build_display_list(&layout);

    let colors: Vec<ColorValue> = list.commands().iter().map(color_of).collect();
    assert_eq!(colors, vec![ColorValue::BLACK, RED, GREEN]);
}

#[test]
fn test_anonymous_boxes_paint_nothing_but_children_are_visited() {
    let root = tinyrender_html::parse("<div><span></span></div>").unwrap();
    let sheet =
        parse_stylesheet("div { display: block; } span { background: #ff0000; }").unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(100.0)).unwrap();
    let list = build_display_list(&layout);

    // Only the inline span paints; its geometry is zero.
    assert_eq!(list.len(), 1);
    assert_eq!(rect_of(&list.commands()[0]), Rect::default());
}

#[test]
fn test_full_viewport_background_fills_canvas() {
    let root = tinyrender_html::parse("<div></div>").unwrap();
    let sheet =
        parse_stylesheet("div { display: block; height: 30px; background: #ff0000ff; }").unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(40.0)).unwrap();

    let canvas = paint(&layout, Rect::new(0.0, 0.0, 40.0, 30.0));

    assert_eq!(canvas.width(), 40);
    assert_eq!(canvas.height(), 30);
    assert!(canvas.pixels().iter().all(|&p| p == RED));
}

#[test]
fn test_unpainted_area_stays_white() {
    let root = tinyrender_html::parse("<div></div>").unwrap();
    let sheet = parse_stylesheet(
        "div { display: block; width: 10px; height: 10px; background: #ff0000; }",
    )
    .unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(40.0)).unwrap();

    let canvas = paint(&layout, Rect::new(0.0, 0.0, 40.0, 30.0));

    assert_eq!(canvas.pixel(5, 5), Some(RED));
    // Inclusive fill: column and row 10 are painted too (known quirk).
    assert_eq!(canvas.pixel(10, 10), Some(RED));
    assert_eq!(canvas.pixel(11, 5), Some(ColorValue::WHITE));
    assert_eq!(canvas.pixel(5, 11), Some(ColorValue::WHITE));
    assert_eq!(canvas.pixel(39, 29), Some(ColorValue::WHITE));
}

#[test]
fn test_border_overwrites_background() {
    let root = tinyrender_html::parse("<div></div>").unwrap();
    let sheet = parse_stylesheet(
        "div { display: block; width: 10px; height: 10px; border-width: 3px; \
         background: #ff0000; border-color: #00ff00; }",
    )
    .unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(40.0)).unwrap();

    let canvas = paint(&layout, Rect::new(0.0, 0.0, 40.0, 30.0));

    assert_eq!(canvas.pixel(0, 0), Some(GREEN));
    assert_eq!(canvas.pixel(8, 1), Some(GREEN));
    assert_eq!(canvas.pixel(8, 8), Some(RED));
    assert_eq!(canvas.pixel(15, 15), Some(GREEN));
}

#[test]
fn test_paint_matches_rasterizing_the_display_list() {
    let root = tinyrender_html::parse("<div></div>").unwrap();
    let sheet = parse_stylesheet(
        "div { display: block; width: 6px; height: 4px; border-width: 1px; \
         background: #ff0000; border-color: #00ff00; }",
    )
    .unwrap();
    let styled = style_tree(&root, &sheet);
    let layout = layout_tree(&styled, viewport(20.0)).unwrap();
    let bounds = Rect::new(0.0, 0.0, 20.0, 10.0);

    let list = build_display_list(&layout);
    assert_eq!(paint_display_list(&list, bounds), paint(&layout, bounds));
}

#[test]
fn test_display_list_canvas_size_truncates_bounds() {
    let mut list = DisplayList::new();
    list.push(DisplayCommand::SolidColor(RED, Rect::new(0.0, 0.0, 1.0, 1.0)));

    let canvas = paint_display_list(&list, Rect::new(0.0, 0.0, 3.9, 2.5));
    assert_eq!(canvas.width(), 3);
    assert_eq!(canvas.height(), 2);
    assert_eq!(canvas.pixel(1, 1), Some(RED));
    assert_eq!(canvas.pixel(2, 1), Some(ColorValue::WHITE));

    let empty = paint_display_list(&list, Rect::new(0.0, 0.0, -4.0, 5.0));
    assert_eq!(empty.width(), 0);
    assert!(empty.pixels().is_empty());
}
