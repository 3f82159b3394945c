//! Errors reported by the markup parser.

use thiserror::Error;

/// Malformed markup. Parsing stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlParseError {
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

    /// The input ended in the middle of a construct.
    #[error("unexpected end of input while parsing {context}")]
    UnexpectedEof {
        /// What was being parsed when input ran out.
        context: &'static str,
    },

    /// A closing tag does not match the element it closes.
    #[error("closing tag </{close}> does not match <{open}>")]
    MismatchedClosingTag {
        /// Tag name of the open element.
        open: String,
        /// Tag name found in the closing tag.
        close: String,
    },

    /// An attribute value was not wrapped in `"` or `'`.
    #[error("attribute value at byte {pos} must be quoted, found '{found}'")]
    UnquotedAttributeValue {
        /// The character found where a quote was expected.
        found: char,
        /// Byte offset into the source.
        pos: usize,
    },
}
