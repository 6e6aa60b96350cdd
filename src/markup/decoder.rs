/*!
 * XML to marker text decoder.
 *
 * Accepts only the XML shape the encoder produces (after translation):
 * plain identifier elements, `key="value"` attributes and self-closing
 * variable elements. Anything else is rejected rather than guessed at.
 */

use log::debug;

use crate::errors::MarkupError;

use super::escape::{push_marker_text, unescape_text};
use super::stack::OpenTagStack;
use super::tag::{Attribute, VARIABLE_ELEMENT, VARIABLE_NAME_ATTRIBUTE};

/// A single lexical unit of encoder-shaped XML
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlToken<'a> {
    /// Raw text between elements, entities not yet resolved
    Text(&'a str),
    /// `<name>` or `<name key="value" ...>`
    Open {
        name: &'a str,
        attributes: Vec<Attribute<'a>>,
    },
    /// `</name>`
    Close { name: &'a str },
    /// `<umg:variable name="..."/>`
    Variable { name: &'a str },
}

/// Lazy tokenizer over XML text, stopping after the first error
pub struct XmlScanner<'a> {
    input: &'a str,
    offset: usize,
    failed: bool,
}

impl<'a> XmlScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            failed: false,
        }
    }

    /// Scan the element starting at the `<` at the start of `rest`
    fn scan_element(&self, rest: &'a str) -> Result<(XmlToken<'a>, usize), MarkupError> {
        let end = rest.find('>').ok_or(MarkupError::UnclosedElement {
            position: self.offset,
        })?;
        let content = &rest[1..end];
        let (body, self_closing) = match content.strip_suffix('/') {
            Some(body) => (body, true),
            None => (content, false),
        };

        let mut parts = body.split_whitespace();
        let name = parts.next().ok_or(MarkupError::EmptyElement {
            position: self.offset,
        })?;

        if let Some(closed) = name.strip_prefix('/') {
            if closed.is_empty() {
                return Err(MarkupError::EmptyElement {
                    position: self.offset,
                });
            }
            return Ok((XmlToken::Close { name: closed }, end + 1));
        }

        let attributes = parts
            .map(Attribute::parse_xml)
            .collect::<Result<Vec<_>, _>>()?;

        let token = if self_closing {
            if name != VARIABLE_ELEMENT {
                return Err(MarkupError::UnsupportedSelfClosingElement {
                    name: name.to_string(),
                });
            }
            let variable = attributes
                .iter()
                .find(|attribute| attribute.key == VARIABLE_NAME_ATTRIBUTE)
                .ok_or_else(|| MarkupError::MalformedVariable {
                    element: rest[..=end].to_string(),
                })?;
            XmlToken::Variable {
                name: variable.value,
            }
        } else {
            XmlToken::Open { name, attributes }
        };

        Ok((token, end + 1))
    }
}

impl<'a> Iterator for XmlScanner<'a> {
    type Item = Result<(usize, XmlToken<'a>), MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let rest = &input[self.offset..];
        if rest.is_empty() || self.failed {
            return None;
        }

        let start = self.offset;
        let scanned = match rest.find('<') {
            None => Ok((XmlToken::Text(rest), rest.len())),
            Some(0) => self.scan_element(rest),
            Some(pos) => Ok((XmlToken::Text(&rest[..pos]), pos)),
        };

        match scanned {
            Ok((token, consumed)) => {
                self.offset += consumed;
                Some(Ok((start, token)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Converts encoder-shaped XML back to marker text
///
/// Tags still open at the end are left open; the text renderer closes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDecoder;

impl XmlDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, xml: &str) -> Result<String, MarkupError> {
        let mut out = String::with_capacity(xml.len());
        let mut stack = OpenTagStack::new();

        for item in XmlScanner::new(xml) {
            let (position, token) = item?;
            match token {
                XmlToken::Text(raw) => push_marker_text(&mut out, &unescape_text(raw)?),
                XmlToken::Open { name, attributes } => {
                    out.push('{');
                    out.push_str(name);
                    for attribute in &attributes {
                        out.push(' ');
                        attribute.write_marker(&mut out);
                    }
                    out.push('}');
                    stack.push(name);
                }
                XmlToken::Close { name } => {
                    if !stack.close(name) {
                        return Err(MarkupError::UnknownClosingTag {
                            name: name.to_string(),
                            position,
                        });
                    }
                    out.push_str("{/");
                    out.push_str(name);
                    out.push('}');
                }
                XmlToken::Variable { name } => {
                    out.push_str("%{");
                    out.push_str(name);
                    out.push('}');
                }
            }
        }

        if !stack.is_empty() {
            debug!("Leaving {} tag(s) open at end of decoded text", stack.len());
        }

        Ok(out)
    }
}

/// Decode XML produced by the encoder (or a tag-preserving translation of it)
pub fn xml_to_markup(xml: &str) -> Result<String, MarkupError> {
    XmlDecoder::new().decode(xml)
}
