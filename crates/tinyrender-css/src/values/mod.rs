//! Specified values per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
//!
//! Only three kinds of value are modeled: identifier keywords, hex colors and
//! pixel lengths. Everything the stylesheet parser produces is one of these.

mod color;

pub use color::ColorValue;

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Units of a `<length>`. Only absolute pixels are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Unit {
    /// [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    #[strum(serialize = "px")]
    Px,
}

/// A value on the right-hand side of a declaration.
#[derive(Debug, Clone, Serialize)]
pub enum Value {
    /// An identifier such as `auto`, `block` or `none`.
    Keyword(String),
    /// A `#rrggbb` or `#rrggbbaa` color.
    Color(ColorValue),
    /// A number followed by a unit.
    Length(f32, Unit),
}

impl Value {
    /// Return the size of a length in pixels, or zero for any other value.
    #[must_use]
    pub const fn to_px(&self) -> f32 {
        match *self {
            Self::Length(f, Unit::Px) => f,
            _ => 0.0,
        }
    }

    /// Is this the keyword `keyword`?
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Self::Keyword(k) if k == keyword)
    }
}

/// Values compare per variant. Lengths compare by magnitude alone; the unit
/// is not part of equality.
impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Keyword(a), Self::Keyword(b)) => a == b,
            (Self::Color(a), Self::Color(b)) => a == b,
            (Self::Length(a, _), Self::Length(b, _)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("px".parse::<Unit>(), Ok(Unit::Px));
        assert_eq!("PX".parse::<Unit>(), Ok(Unit::Px));
        assert!("em".parse::<Unit>().is_err());
        assert_eq!(Unit::Px.to_string(), "px");
    }

    #[test]
    fn test_to_px() {
        assert!((Value::Length(12.5, Unit::Px).to_px() - 12.5).abs() < f32::EPSILON);
        assert!(Value::Keyword("auto".to_string()).to_px().abs() < f32::EPSILON);
        assert!(Value::Color(ColorValue::BLACK).to_px().abs() < f32::EPSILON);
    }

    #[test]
    fn test_equality_is_per_variant() {
        let auto = Value::Keyword("auto".to_string());
        assert_eq!(auto, Value::Keyword("auto".to_string()));
        assert_ne!(auto, Value::Keyword("none".to_string()));
        assert_ne!(auto, Value::Length(0.0, Unit::Px));

        let red = Value::Color(ColorValue::new(255, 0, 0, 255));
        assert_eq!(red, Value::Color(ColorValue::new(255, 0, 0, 255)));
        assert_ne!(red, Value::Color(ColorValue::new(255, 0, 0, 128)));
    }

    #[test]
    fn test_length_equality_compares_magnitude() {
        assert_eq!(Value::Length(10.0, Unit::Px), Value::Length(10.0, Unit::Px));
        assert_ne!(Value::Length(10.0, Unit::Px), Value::Length(10.5, Unit::Px));
    }

    #[test]
    fn test_is_keyword() {
        assert!(Value::Keyword("auto".to_string()).is_keyword("auto"));
        assert!(!Value::Length(0.0, Unit::Px).is_keyword("auto"));
    }
}
