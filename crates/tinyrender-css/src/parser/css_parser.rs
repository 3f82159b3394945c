//! Recursive-descent stylesheet parser.
//!
//! Grammar accepted:
//!
//! ```text
//! stylesheet  := rule*
//! rule        := selectors '{' declaration* '}'
//! selectors   := simple (',' simple)*
//! simple      := ( '*' | ident | '#' ident | '.' ident )*
//! declaration := ident ':' value ';'
//! value       := '#' hex{6,8} | number unit | ident
//! ```
//!
//! `/* ... */` comments may appear anywhere whitespace may.

use tinyrender_common::Cursor;

use crate::selector::{Selector, SimpleSelector};
use crate::values::{ColorValue, Unit, Value};

use super::CssParseError;

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// A parsed stylesheet: rules in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// The list of rules in the stylesheet.
    pub rules: Vec<Rule>,
}

/// [§ 9 Style rules](https://www.w3.org/TR/css-syntax-3/#style-rules)
///
/// A style rule: a selector list and a declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Selectors, sorted by descending specificity.
    pub selectors: Vec<Selector>,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// A `name: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The property value.
    pub value: Value,
}

/// Parse stylesheet text into a [`Stylesheet`].
///
/// # Errors
///
/// Returns a [`CssParseError`] for malformed rules, invalid hex colors,
/// unparsable numbers and units other than `px`.
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet, CssParseError> {
    CssParser::new(source).parse_stylesheet()
}

/// Stylesheet parser state: a cursor over the source text.
#[derive(Debug, Clone)]
pub struct CssParser {
    cursor: Cursor,
}

fn valid_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl CssParser {
    /// Create a parser for `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Parse the whole source. See [`parse_stylesheet`].
    ///
    /// # Errors
    ///
    /// Returns a [`CssParseError`] on malformed input.
    pub fn parse_stylesheet(mut self) -> Result<Stylesheet, CssParseError> {
        let mut rules = Vec::new();
        loop {
            self.skip_whitespace()?;
            if self.cursor.eof() {
                break;
            }
            rules.push(self.parse_rule()?);
        }
        Ok(Stylesheet { rules })
    }

    fn parse_rule(&mut self) -> Result<Rule, CssParseError> {
        Ok(Rule {
            selectors: self.parse_selectors()?,
            declarations: self.parse_declarations()?,
        })
    }

    /// Comma-separated selector list, up to (not including) the `{`.
    fn parse_selectors(&mut self) -> Result<Vec<Selector>, CssParseError> {
        let mut selectors = Vec::new();
        loop {
            selectors.push(Selector::Simple(self.parse_simple_selector()));
            self.skip_whitespace()?;
            let pos = self.cursor.position();
            match self.cursor.next_char() {
                Some(',') => {
                    let _ = self.cursor.consume_char();
                    self.skip_whitespace()?;
                }
                Some('{') => break,
                Some(found) => {
                    return Err(CssParseError::UnexpectedChar {
                        expected: '{',
                        found,
                        pos,
                    });
                }
                None => {
                    return Err(CssParseError::UnexpectedEof {
                        context: "a selector list",
                    });
                }
            }
        }

        // Most specific first, so the cascade sees the strongest match.
        selectors.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
        Ok(selectors)
    }

    /// `tag#id.class1.class2`, or `*`.
    fn parse_simple_selector(&mut self) -> SimpleSelector {
        let mut selector = SimpleSelector::default();
        while let Some(c) = self.cursor.next_char() {
            match c {
                '#' => {
                    let _ = self.cursor.consume_char();
                    selector.id = Some(self.parse_identifier());
                }
                '.' => {
                    let _ = self.cursor.consume_char();
                    selector.class.push(self.parse_identifier());
                }
                '*' => {
                    let _ = self.cursor.consume_char();
                }
                c if valid_identifier_char(c) => {
                    selector.tag_name = Some(self.parse_identifier());
                }
                _ => break,
            }
        }
        selector
    }

    /// `{ name: value; ... }`
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, CssParseError> {
        self.expect('{', "a declaration block")?;
        let mut declarations = Vec::new();
        loop {
            self.skip_whitespace()?;
            match self.cursor.next_char() {
                Some('}') => {
                    let _ = self.cursor.consume_char();
                    break;
                }
                Some(_) => declarations.push(self.parse_declaration()?),
                None => {
                    return Err(CssParseError::UnexpectedEof {
                        context: "a declaration block",
                    });
                }
            }
        }
        Ok(declarations)
    }

    /// `name: value;`
    fn parse_declaration(&mut self) -> Result<Declaration, CssParseError> {
        let name = self.parse_identifier();
        self.skip_whitespace()?;
        self.expect(':', "a declaration")?;
        self.skip_whitespace()?;
        let value = self.parse_value(&name)?;
        self.skip_whitespace()?;
        self.expect(';', "a declaration")?;
        Ok(Declaration { name, value })
    }

    fn parse_value(&mut self, property: &str) -> Result<Value, CssParseError> {
        match self.cursor.next_char() {
            Some(c) if c.is_ascii_digit() => self.parse_length(),
            Some('#') => self.parse_color(),
            _ => {
                let pos = self.cursor.position();
                let keyword = self.parse_identifier();
                if keyword.is_empty() {
                    return Err(CssParseError::MissingValue {
                        property: property.to_string(),
                        pos,
                    });
                }
                Ok(Value::Keyword(keyword))
            }
        }
    }

    /// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    fn parse_length(&mut self) -> Result<Value, CssParseError> {
        let pos = self.cursor.position();
        let text = self.cursor.consume_while(|c| c.is_ascii_digit() || c == '.');
        let number = text
            .parse::<f32>()
            .map_err(|_| CssParseError::InvalidNumber { text, pos })?;

        let unit_pos = self.cursor.position();
        let unit = self.parse_identifier();
        let unit = unit
            .parse::<Unit>()
            .map_err(|_| CssParseError::UnknownUnit { unit, pos: unit_pos })?;

        Ok(Value::Length(number, unit))
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    fn parse_color(&mut self) -> Result<Value, CssParseError> {
        let pos = self.cursor.position();
        self.expect('#', "a color")?;
        let text = self.cursor.consume_while(|c| c.is_ascii_hexdigit());
        ColorValue::from_hex(&text)
            .map(Value::Color)
            .ok_or(CssParseError::InvalidHexColor { text, pos })
    }

    fn parse_identifier(&mut self) -> String {
        self.cursor.consume_while(valid_identifier_char)
    }

    /// Skip whitespace and `/* ... */` comments.
    fn skip_whitespace(&mut self) -> Result<(), CssParseError> {
        loop {
            self.cursor.consume_whitespace();
            if !self.cursor.starts_with("/*") {
                return Ok(());
            }
            let _ = self.cursor.consume_n(2);
            while !self.cursor.starts_with("*/") {
                if self.cursor.consume_char().is_none() {
                    return Err(CssParseError::UnexpectedEof {
                        context: "a comment",
                    });
                }
            }
            let _ = self.cursor.consume_n(2);
        }
    }

    /// Consume `expected` or report what was found instead.
    fn expect(&mut self, expected: char, context: &'static str) -> Result<(), CssParseError> {
        let pos = self.cursor.position();
        match self.cursor.consume_char() {
            Some(c) if c == expected => Ok(()),
            Some(found) => Err(CssParseError::UnexpectedChar {
                expected,
                found,
                pos,
            }),
            None => Err(CssParseError::UnexpectedEof { context }),
        }
    }
}
