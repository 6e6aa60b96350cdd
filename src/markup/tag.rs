/*!
 * Tag grammar shared by the encoder and the decoder.
 */

use crate::errors::MarkupError;

/// XML element standing in for a `%{name}` variable reference
pub const VARIABLE_ELEMENT: &str = "umg:variable";

/// Attribute of [`VARIABLE_ELEMENT`] carrying the variable name
pub const VARIABLE_NAME_ATTRIBUTE: &str = "name";

/// Whether `text` can sit inside an element or a quoted attribute unescaped
pub(crate) fn is_markup_safe(text: &str) -> bool {
    !text.contains(['<', '>', '"'])
}

/// A `key=value` parameter of an opening tag
///
/// Values are carried verbatim in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Attribute<'a> {
    /// Parse a marker-text parameter (`key=value`, split on the first `=`)
    ///
    /// `<`, `>` and `"` are refused anywhere in the parameter.
    pub fn parse_marker(spec: &'a str) -> Result<Self, MarkupError> {
        spec.split_once('=')
            .filter(|_| is_markup_safe(spec))
            .map(|(key, value)| Self { key, value })
            .ok_or_else(|| MarkupError::InvalidAttributeSpecifier {
                specifier: spec.to_string(),
            })
    }

    /// Parse an XML attribute (`key="value"`)
    pub fn parse_xml(spec: &'a str) -> Result<Self, MarkupError> {
        let invalid = || MarkupError::InvalidAttributeSpecifier {
            specifier: spec.to_string(),
        };
        let (key, quoted) = spec.split_once('=').ok_or_else(invalid)?;
        let value = quoted
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .ok_or_else(invalid)?;
        Ok(Self { key, value })
    }

    /// Append as `key="value"`
    pub fn write_xml(&self, out: &mut String) {
        out.push_str(self.key);
        out.push_str("=\"");
        out.push_str(self.value);
        out.push('"');
    }

    /// Append as `key=value`
    pub fn write_marker(&self, out: &mut String) {
        out.push_str(self.key);
        out.push('=');
        out.push_str(self.value);
    }
}
