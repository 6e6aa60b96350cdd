/*!
 * Error types for the umgloc library.
 *
 * This module contains custom error types for the markup converter and the
 * translation service, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while converting between marker text and XML
///
/// Offsets are byte offsets into the string being converted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// An opening `{` never finds its terminating `}`
    #[error("unclosed tag region starting at byte {position}")]
    UnclosedTagRegion { position: usize },

    /// A `%{` never finds its terminating `}`
    #[error("unclosed variable reference starting at byte {position}")]
    UnclosedVariableReference { position: usize },

    /// A tag parameter is not of the form `key=value`
    #[error("invalid attribute specifier: {specifier}")]
    InvalidAttributeSpecifier { specifier: String },

    /// A closing marker names a tag that is not open
    #[error("unknown closing tag '{name}' at byte {position}")]
    UnknownClosingTag { name: String, position: usize },

    /// `{}` with nothing but whitespace inside
    #[error("empty tag region at byte {position}")]
    EmptyTagRegion { position: usize },

    /// `{/name key=value}`
    #[error("closing tag '{name}' cannot carry attributes")]
    ClosingTagWithAttributes { name: String },

    /// A lone `%` at the very end of the input (strict mode only)
    #[error("trailing '%' at byte {position}")]
    TrailingPercent { position: usize },

    /// A `<` never finds its terminating `>`
    #[error("unclosed element starting at byte {position}")]
    UnclosedElement { position: usize },

    /// `<>` or `</>`
    #[error("empty element at byte {position}")]
    EmptyElement { position: usize },

    /// A self-closing element other than a variable reference
    #[error("unsupported self-closing element '{name}'")]
    UnsupportedSelfClosingElement { name: String },

    /// A variable element without a usable `name` attribute
    #[error("malformed variable element: {element}")]
    MalformedVariable { element: String },

    /// A tag name that cannot be written as an XML element name
    #[error("invalid tag name '{name}' at byte {position}")]
    InvalidTagName { name: String, position: usize },

    /// A variable name that cannot be carried in the `name` attribute
    #[error("invalid variable name '{name}' at byte {position}")]
    InvalidVariableName { name: String, position: usize },

    /// Text contains an entity that cannot be resolved
    #[error("invalid entity in text: {reason}")]
    InvalidEntity { reason: String },
}

/// Errors a `Translator` reports back to the service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never got a usable answer (transport failure, timeout,
    /// unreadable body); raised by translator implementations outside this crate
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned a different number of strings than it was sent
    #[error("Provider returned {actual} translations for {expected} strings")]
    ResponseMismatch { expected: usize, actual: usize },

    /// The service was built from an unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for TranslationError {
    fn from(error: anyhow::Error) -> Self {
        Self::Config(error.to_string())
    }
}
