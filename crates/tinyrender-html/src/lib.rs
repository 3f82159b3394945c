//! Markup parser for the tinyrender pipeline.
//!
//! # Scope
//!
//! This crate turns a small subset of HTML into a [`tinyrender_dom::Node`] tree:
//! - Elements with quoted attributes: `<div id="main" class='a b'>...</div>`
//! - Text runs (everything up to the next `<`)
//! - Whitespace between nodes is skipped
//!
//! # Not Yet Implemented
//!
//! - Comments, DOCTYPE and processing instructions
//! - Void and self-closing elements
//! - Character references
//! - Implicit end tags (every element must be explicitly closed)

mod error;
mod parser;

pub use error::HtmlParseError;
pub use parser::{HtmlParser, parse};
