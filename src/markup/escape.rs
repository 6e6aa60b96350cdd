/*!
 * Text escaping for plain-text runs on either side of the conversion.
 */

use std::borrow::Cow;

use quick_xml::escape::{escape, unescape};

use crate::errors::MarkupError;

/// Escape a plain-text run of marker text for inclusion in XML
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text)
}

/// Resolve entities in an XML text run
pub fn unescape_text(text: &str) -> Result<Cow<'_, str>, MarkupError> {
    unescape(text).map_err(|e| MarkupError::InvalidEntity {
        reason: e.to_string(),
    })
}

/// Append decoded text to marker output, doubling `{` so it stays literal
pub fn push_marker_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == '{' {
            out.push('{');
        }
        out.push(ch);
    }
}
