//! Stylesheet parsing, cascade, block layout and painting for tinyrender.
//!
//! # Scope
//!
//! This crate implements the pipeline from a document tree and a stylesheet
//! to pixels:
//! - **Stylesheet parser**: simple selectors (`tag#id.class`, `*`), and
//!   keyword, hex color and `px` length values
//! - **Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/)):
//!   selector matching and specificity-ordered declaration merging
//! - **Layout** ([CSS 2.1 § 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)):
//!   box tree construction with anonymous blocks, width/margin resolution,
//!   vertical stacking and height propagation
//! - **Painting** ([CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)):
//!   display list of solid-color rectangles, rasterized into a [`Canvas`]
//!
//! # Not Yet Implemented
//!
//! - Inheritance and initial values
//! - Combinators, attribute selectors, pseudo-classes
//! - Units other than `px`
//! - Inline layout and text
//! - Alpha blending

/// CSS cascade and styled tree construction per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Box model and block layout per [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html).
pub mod layout;
/// Display list and rasterization per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// Stylesheet parser.
pub mod parser;
/// Selector matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Styled tree types.
pub mod style;
/// Specified value types per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use cascade::style_tree;
pub use layout::{
    BoxType, Dimensions, EdgeSizes, LayoutBox, LayoutError, Rect, build_layout_tree, layout_tree,
};
pub use paint::{
    Canvas, DisplayCommand, DisplayList, build_display_list, paint, paint_display_list,
};
pub use parser::{CssParseError, CssParser, Declaration, Rule, Stylesheet, parse_stylesheet};
pub use selector::{Selector, SimpleSelector, Specificity};
pub use style::{Display, PropertyMap, StyledNode};
pub use values::{ColorValue, Unit, Value};
