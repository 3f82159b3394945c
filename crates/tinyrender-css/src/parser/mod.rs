//! Stylesheet parser.
//!
//! A recursive-descent scanner over the source text producing a
//! [`Stylesheet`]: an ordered list of rules, each with a selector list and a
//! declaration block.

mod css_parser;
mod error;

pub use css_parser::{CssParser, Declaration, Rule, Stylesheet, parse_stylesheet};
pub use error::CssParseError;
