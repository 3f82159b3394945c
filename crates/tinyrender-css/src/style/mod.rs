//! Styled tree
//!
//! The style resolver pairs every document node with the declarations that
//! apply to it. The result mirrors the document tree exactly; text nodes get
//! an empty property map.
//!
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/)

mod display;

pub use display::Display;

use std::collections::HashMap;

use tinyrender_common::warning::warn_once;
use tinyrender_dom::Node;

use crate::values::Value;

/// Map from CSS property names to values.
pub type PropertyMap = HashMap<String, Value>;

/// A document node with its cascaded property values.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledNode<'a> {
    /// The document node this style belongs to.
    pub node: &'a Node,
    /// Cascaded values, last write wins.
    pub specified_values: PropertyMap,
    /// Styled children, one per document child, in document order.
    pub children: Vec<StyledNode<'a>>,
}

impl StyledNode<'_> {
    /// Return the specified value of a property if it exists.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<Value> {
        self.specified_values.get(name).cloned()
    }

    /// Return the specified value of property `name`, or property
    /// `fallback_name` if that doesn't exist, or `default` if neither does.
    ///
    /// Used for directional box-model properties such as `margin-left`, which
    /// fall back to their non-directional form (`margin`).
    #[must_use]
    pub fn lookup(&self, name: &str, fallback_name: &str, default: &Value) -> Value {
        self.value(name)
            .or_else(|| self.value(fallback_name))
            .unwrap_or_else(|| default.clone())
    }

    /// [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// The value of the `display` property. Absent or unrecognized values
    /// are [`Display::Inline`].
    #[must_use]
    pub fn display(&self) -> Display {
        match self.value("display") {
            Some(Value::Keyword(keyword)) => keyword.parse().unwrap_or_else(|_| {
                warn_once(
                    "CSS",
                    &format!("unsupported display value '{keyword}', treating as inline"),
                );
                Display::Inline
            }),
            _ => Display::Inline,
        }
    }
}
