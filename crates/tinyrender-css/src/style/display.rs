//! CSS Display property
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)

use serde::Serialize;
use strum_macros::EnumString;

/// The box a node generates, derived from its `display` keyword.
///
/// Only the three values the block layout engine distinguishes are modeled.
/// Any other keyword is treated as [`Display::Inline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Display {
    /// "The element generates an inline-level box when placed in flow layout."
    Inline,
    /// "The element generates a block-level box when placed in flow layout."
    Block,
    /// [§ 2.5 Box Generation](https://www.w3.org/TR/css-display-3/#box-generation)
    /// "The element and its descendants generate no boxes or text runs."
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keywords() {
        assert_eq!("block".parse::<Display>(), Ok(Display::Block));
        assert_eq!("inline".parse::<Display>(), Ok(Display::Inline));
        assert_eq!("none".parse::<Display>(), Ok(Display::None));
        assert!("flex".parse::<Display>().is_err());
        assert_eq!(Display::Block.to_string(), "block");
    }
}
