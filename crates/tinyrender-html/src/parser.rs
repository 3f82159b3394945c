//! Recursive-descent markup parser.

use tinyrender_common::Cursor;
use tinyrender_dom::{AttributesMap, Node};

use crate::HtmlParseError;

/// Parse a markup string into a document tree.
///
/// If the source contains exactly one top-level node it is returned as the
/// root; otherwise the top-level nodes are wrapped in a synthesized `html`
/// element.
///
/// # Errors
///
/// Returns an [`HtmlParseError`] for unbalanced tags, unquoted attribute
/// values, or input that ends mid-element.
pub fn parse(source: &str) -> Result<Node, HtmlParseError> {
    HtmlParser::new(source).parse()
}

/// Markup parser state: a cursor over the source text.
#[derive(Debug, Clone)]
pub struct HtmlParser {
    cursor: Cursor,
}

impl HtmlParser {
    /// Create a parser for `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Parse the whole source. See [`parse`].
    ///
    /// # Errors
    ///
    /// Returns an [`HtmlParseError`] on malformed markup.
    pub fn parse(mut self) -> Result<Node, HtmlParseError> {
        let mut nodes = self.parse_nodes()?;

        // Anything left over is a stray closing tag at the top level.
        if !self.cursor.eof() {
            let close = self.parse_closing_tag()?;
            return Err(HtmlParseError::MismatchedClosingTag {
                open: String::new(),
                close,
            });
        }

        if nodes.len() == 1 {
            if let Some(root) = nodes.pop() {
                return Ok(root);
            }
        }
        Ok(Node::element("html", AttributesMap::new(), nodes))
    }

    /// Parse sibling nodes until end of input or a closing tag.
    fn parse_nodes(&mut self) -> Result<Vec<Node>, HtmlParseError> {
        let mut nodes = Vec::new();
        loop {
            self.cursor.consume_whitespace();
            if self.cursor.eof() || self.cursor.starts_with("</") {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    fn parse_node(&mut self) -> Result<Node, HtmlParseError> {
        match self.cursor.next_char() {
            Some('<') => self.parse_element(),
            _ => Ok(self.parse_text()),
        }
    }

    /// `<tag attr="value">children</tag>`
    fn parse_element(&mut self) -> Result<Node, HtmlParseError> {
        // Opening tag.
        self.expect('<', "an opening tag")?;
        let tag_name = self.parse_name();
        let attrs = self.parse_attributes()?;
        self.expect('>', "an opening tag")?;

        // Contents.
        let children = self.parse_nodes()?;

        // Closing tag.
        let close = self.parse_closing_tag()?;
        if close != tag_name {
            return Err(HtmlParseError::MismatchedClosingTag {
                open: tag_name,
                close,
            });
        }

        Ok(Node::element(tag_name, attrs, children))
    }

    /// `</tag>`, returning the tag name.
    fn parse_closing_tag(&mut self) -> Result<String, HtmlParseError> {
        self.expect('<', "a closing tag")?;
        self.expect('/', "a closing tag")?;
        let name = self.parse_name();
        self.expect('>', "a closing tag")?;
        Ok(name)
    }

    fn parse_text(&mut self) -> Node {
        Node::text(self.cursor.consume_while(|c| c != '<'))
    }

    /// Tag and attribute names: letters, digits, `-` and `_`.
    fn parse_name(&mut self) -> String {
        self.cursor
            .consume_while(|c| c.is_alphanumeric() || c == '-' || c == '_')
    }

    fn parse_attributes(&mut self) -> Result<AttributesMap, HtmlParseError> {
        let mut attrs = AttributesMap::new();
        loop {
            self.cursor.consume_whitespace();
            match self.cursor.next_char() {
                Some('>') => break,
                Some(_) => {
                    let (name, value) = self.parse_attribute()?;
                    let _ = attrs.insert(name, value);
                }
                None => {
                    return Err(HtmlParseError::UnexpectedEof {
                        context: "an attribute list",
                    });
                }
            }
        }
        Ok(attrs)
    }

    /// `name="value"`
    fn parse_attribute(&mut self) -> Result<(String, String), HtmlParseError> {
        let name = self.parse_name();
        self.expect('=', "an attribute")?;
        let value = self.parse_attribute_value()?;
        Ok((name, value))
    }

    fn parse_attribute_value(&mut self) -> Result<String, HtmlParseError> {
        let pos = self.cursor.position();
        let open_quote = match self.cursor.consume_char() {
            Some(quote @ ('"' | '\'')) => quote,
            Some(found) => return Err(HtmlParseError::UnquotedAttributeValue { found, pos }),
            None => {
                return Err(HtmlParseError::UnexpectedEof {
                    context: "an attribute value",
                });
            }
        };
        let value = self.cursor.consume_while(|c| c != open_quote);
        self.expect(open_quote, "an attribute value")?;
        Ok(value)
    }

    /// Consume `expected` or report what was found instead.
    fn expect(&mut self, expected: char, context: &'static str) -> Result<(), HtmlParseError> {
        let pos = self.cursor.position();
        match self.cursor.consume_char() {
            Some(c) if c == expected => Ok(()),
            Some(found) => Err(HtmlParseError::UnexpectedChar {
                expected,
                found,
                pos,
            }),
            None => Err(HtmlParseError::UnexpectedEof { context }),
        }
    }
}
