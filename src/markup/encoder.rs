/*!
 * Marker text to XML encoder.
 *
 * `MarkupScanner` walks the input once and yields one `MarkupToken` at a
 * time; `MarkupEncoder` writes each token straight to the output while
 * tracking open tags. Tags still open at the end of the input are closed,
 * innermost first.
 */

use log::{debug, warn};

use crate::app_config::{MarkupConfig, Strictness};
use crate::errors::MarkupError;

use super::escape::escape_text;
use super::stack::OpenTagStack;
use super::tag::{is_markup_safe, Attribute, VARIABLE_ELEMENT, VARIABLE_NAME_ATTRIBUTE};

/// A single lexical unit of marker text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupToken<'a> {
    /// Run of plain text, not yet escaped
    Text(&'a str),
    /// Character produced by an escape (`{{`) or a `%` that starts no variable
    Literal(char),
    /// `{name}` or `{name key=value ...}`
    Open {
        name: &'a str,
        attributes: Vec<Attribute<'a>>,
    },
    /// `{/name}`
    Close { name: &'a str },
    /// `%{name}`
    Variable { name: &'a str },
}

/// Lazy tokenizer over marker text
///
/// Yields `(byte offset, token)` pairs and stops after the first error.
pub struct MarkupScanner<'a> {
    input: &'a str,
    offset: usize,
    strictness: Strictness,
    failed: bool,
}

impl<'a> MarkupScanner<'a> {
    pub fn new(input: &'a str, strictness: Strictness) -> Self {
        Self {
            input,
            offset: 0,
            strictness,
            failed: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Scan the region opened by the `{` at the start of `rest`
    fn scan_brace(&self, rest: &'a str) -> Result<(MarkupToken<'a>, usize), MarkupError> {
        if rest[1..].starts_with('{') {
            return Ok((MarkupToken::Literal('{'), 2));
        }

        // `}}` inside the region is an escaped brace and does not end it
        let mut search_from = 1;
        let end = loop {
            let close = rest[search_from..]
                .find('}')
                .map(|pos| pos + search_from)
                .ok_or(MarkupError::UnclosedTagRegion {
                    position: self.offset,
                })?;
            if rest[close + 1..].starts_with('}') {
                search_from = close + 2;
            } else {
                break close;
            }
        };

        let mut parts = rest[1..end].split_whitespace();
        let name = parts.next().ok_or(MarkupError::EmptyTagRegion {
            position: self.offset,
        })?;
        let attributes = parts
            .map(Attribute::parse_marker)
            .collect::<Result<Vec<_>, _>>();

        // Only the leading `/` of a closer may appear in a name
        let bare = name.strip_prefix('/').unwrap_or(name);
        if bare.contains('/') || !is_markup_safe(bare) {
            return Err(MarkupError::InvalidTagName {
                name: name.to_string(),
                position: self.offset,
            });
        }

        let token = match name.strip_prefix('/') {
            Some(closed) => {
                // A closer with parameters is rejected even when they are malformed
                match attributes {
                    Ok(ref attributes) if attributes.is_empty() => {
                        MarkupToken::Close { name: closed }
                    }
                    _ => {
                        return Err(MarkupError::ClosingTagWithAttributes {
                            name: closed.to_string(),
                        });
                    }
                }
            }
            None => MarkupToken::Open {
                name,
                attributes: attributes?,
            },
        };

        Ok((token, end + 1))
    }

    /// Scan from the `%` at the start of `rest`
    fn scan_percent(&self, rest: &'a str) -> Result<(MarkupToken<'a>, usize), MarkupError> {
        if rest.len() == 1 {
            return match self.strictness {
                Strictness::Strict => Err(MarkupError::TrailingPercent {
                    position: self.offset,
                }),
                Strictness::Lenient => Ok((MarkupToken::Literal('%'), 1)),
            };
        }
        if !rest[1..].starts_with('{') {
            return Ok((MarkupToken::Literal('%'), 1));
        }

        let end = rest[2..]
            .find('}')
            .map(|pos| pos + 2)
            .ok_or(MarkupError::UnclosedVariableReference {
                position: self.offset,
            })?;

        let name = &rest[2..end];
        if name.contains(char::is_whitespace) || !is_markup_safe(name) {
            return Err(MarkupError::InvalidVariableName {
                name: name.to_string(),
                position: self.offset,
            });
        }

        Ok((MarkupToken::Variable { name }, end + 1))
    }
}

impl<'a> Iterator for MarkupScanner<'a> {
    type Item = Result<(usize, MarkupToken<'a>), MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest();
        if rest.is_empty() || self.failed {
            return None;
        }

        let start = self.offset;
        let scanned = match rest.find(['%', '{']) {
            None => Ok((MarkupToken::Text(rest), rest.len())),
            Some(0) if rest.starts_with('{') => self.scan_brace(rest),
            Some(0) => self.scan_percent(rest),
            Some(pos) => Ok((MarkupToken::Text(&rest[..pos]), pos)),
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

/// Result of encoding one string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The XML text to hand to the translation service
    pub text: String,
    /// Conditions tolerated in lenient mode
    pub warnings: Vec<MarkupError>,
}

/// Converts marker text to XML
#[derive(Debug, Clone, Default)]
pub struct MarkupEncoder {
    config: MarkupConfig,
}

impl MarkupEncoder {
    pub fn new(config: MarkupConfig) -> Self {
        Self { config }
    }

    /// Encode marker text, closing any tags left open at the end
    pub fn encode(&self, text: &str) -> Result<Encoded, MarkupError> {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        let mut stack = OpenTagStack::new();
        let mut warnings = Vec::new();

        for item in MarkupScanner::new(text, self.config.strictness) {
            let (position, token) = item?;
            match token {
                MarkupToken::Text(run) => out.push_str(&escape_text(run)),
                MarkupToken::Literal(ch) => out.push(ch),
                MarkupToken::Open { name, attributes } => {
                    write_open_element(&mut out, name, &attributes);
                    stack.push(name);
                }
                MarkupToken::Close { name } => {
                    if stack.close(name) {
                        write_close_element(&mut out, name);
                    } else {
                        let error = MarkupError::UnknownClosingTag {
                            name: name.to_string(),
                            position,
                        };
                        match self.config.strictness {
                            Strictness::Strict => return Err(error),
                            Strictness::Lenient => {
                                warn!("Dropping stray closing tag: {}", error);
                                warnings.push(error);
                            }
                        }
                    }
                }
                MarkupToken::Variable { name } => {
                    out.push('<');
                    out.push_str(VARIABLE_ELEMENT);
                    out.push(' ');
                    Attribute {
                        key: VARIABLE_NAME_ATTRIBUTE,
                        value: name,
                    }
                    .write_xml(&mut out);
                    out.push_str("/>");
                }
            }
        }

        if !stack.is_empty() {
            debug!("Auto-closing {} open tag(s) at end of input", stack.len());
        }
        for name in stack.drain_innermost_first() {
            write_close_element(&mut out, name);
        }

        Ok(Encoded { text: out, warnings })
    }
}

fn write_open_element(out: &mut String, name: &str, attributes: &[Attribute<'_>]) {
    out.push('<');
    out.push_str(name);
    for attribute in attributes {
        out.push(' ');
        attribute.write_xml(out);
    }
    out.push('>');
}

fn write_close_element(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Encode marker text with the default (lenient) configuration
pub fn markup_to_xml(text: &str) -> Result<String, MarkupError> {
    MarkupEncoder::default().encode(text).map(|encoded| encoded.text)
}
