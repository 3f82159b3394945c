//! CSS Layout Engine
//!
//! Turns a styled tree into a tree of boxes with geometry, following the
//! normal-flow block layout of CSS 2.1.
//!
//! # Relevant Specifications
//!
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`layout_box`] - Box tree construction and the block layout algorithm
//!
//! # Not Yet Implemented
//!
//! - Inline formatting (line boxes, text measurement)
//! - Margin collapsing
//! - Floats, positioning, flex and grid

pub mod box_model;
pub mod layout_box;

pub use box_model::{Dimensions, EdgeSizes, Rect};
pub use layout_box::{BoxType, LayoutBox, LayoutError, build_layout_tree, layout_tree};
