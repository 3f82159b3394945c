//! Errors reported by the stylesheet parser.

use thiserror::Error;

/// Malformed stylesheet text. Parsing stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssParseError {
    /// A specific character was required but something else was found.
    #[error("expected '{expected}' at byte {pos}, found '{found}'")]
    UnexpectedChar {
        /// The character the grammar requires here.
        expected: char,
        /// The character actually present.
        found: char,
        /// Byte offset into the source.
        pos: usize,
    },

    /// The input ended in the middle of a rule.
    #[error("unexpected end of input while parsing {context}")]
    UnexpectedEof {
        /// What was being parsed when input ran out.
        context: &'static str,
    },

    /// A `#` color was not six or eight hex digits.
    #[error("invalid hex color '#{text}' at byte {pos}")]
    InvalidHexColor {
        /// The digits following `#`.
        text: String,
        /// Byte offset of the `#`.
        pos: usize,
    },

    /// A numeric literal could not be read as a number.
    #[error("invalid number '{text}' at byte {pos}")]
    InvalidNumber {
        /// The literal as written.
        text: String,
        /// Byte offset into the source.
        pos: usize,
    },

    /// A length used a unit other than `px`.
    #[error("unknown unit '{unit}' at byte {pos}")]
    UnknownUnit {
        /// The unit as written (possibly empty).
        unit: String,
        /// Byte offset of the unit.
        pos: usize,
    },

    /// A declaration had nothing between `:` and `;`.
    #[error("missing value for property '{property}' at byte {pos}")]
    MissingValue {
        /// The declaration's property name.
        property: String,
        /// Byte offset where the value should start.
        pos: usize,
    },
}
