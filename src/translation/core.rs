/*!
 * Core markup-aware translation functionality.
 *
 * Every string is encoded to XML, the encoded strings go to the translator in
 * a single request with XML tag handling, and the translations are decoded
 * back to marker text. A string that cannot be converted in either direction
 * is recorded as a failure and left out; it never aborts the other strings.
 */

use log::{debug, info, warn};

use crate::app_config::{Config, MarkupConfig, TranslationConfig};
use crate::errors::{MarkupError, TranslationError};
use crate::markup::{MarkupEncoder, XmlDecoder};
use crate::providers::{TranslateRequest, Translator};

/// Direction in which a string failed to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStage {
    /// Marker text -> XML, before translation
    Encode,
    /// XML -> marker text, after translation
    Decode,
}

/// A string that could not be round-tripped through the translator
#[derive(Debug, Clone, PartialEq)]
pub struct StringFailure {
    /// Index of the string in the input slice
    pub index: usize,
    /// The original marker text
    pub source: String,
    /// Where conversion failed
    pub stage: ConversionStage,
    /// The grammar violation
    pub error: MarkupError,
}

/// A successfully translated string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedEntry {
    /// Index of the string in the input slice
    pub index: usize,
    /// The original marker text
    pub source: String,
    /// The translated marker text
    pub translated: String,
}

/// Result of translating a set of strings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationOutcome {
    /// Translated strings in input order
    pub entries: Vec<TranslatedEntry>,
    /// Strings skipped because of markup errors
    pub failures: Vec<StringFailure>,
    /// Characters billed by the translator
    pub billed_characters: u64,
}

impl TranslationOutcome {
    /// Whether every input string was translated
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Translation service wrapping a translator with markup conversion
#[derive(Debug, Clone)]
pub struct LocalizationService<T: Translator> {
    /// The translator used for requests
    translator: T,
    /// Source language, `None` to let the translator detect it
    source_language: Option<String>,
    /// Target language
    target_language: String,
    /// Request options
    pub config: TranslationConfig,
    /// Markup conversion options
    pub markup: MarkupConfig,
}

impl<T: Translator> LocalizationService<T> {
    /// Create a new service from a validated configuration
    pub fn new(translator: T, config: &Config) -> Result<Self, TranslationError> {
        config.validate()?;
        Ok(Self {
            translator,
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
            config: config.translation.clone(),
            markup: config.markup,
        })
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Translate a set of marker-text strings
    ///
    /// Fails as a whole only when the translator fails or returns a response
    /// that does not line up with the request.
    pub async fn translate_strings(&self, texts: &[String]) -> Result<TranslationOutcome, TranslationError> {
        let encoder = MarkupEncoder::new(self.markup);
        let mut outcome = TranslationOutcome::default();

        // Phase 1: encode, remembering which input each request slot belongs to
        let mut indices = Vec::with_capacity(texts.len());
        let mut encoded = Vec::with_capacity(texts.len());
        for (index, text) in texts.iter().enumerate() {
            match encoder.encode(text) {
                Ok(result) => {
                    indices.push(index);
                    encoded.push(result.text);
                }
                Err(error) => {
                    warn!("Skipping string {} (cannot encode): {}", index, error);
                    outcome.failures.push(StringFailure {
                        index,
                        source: text.clone(),
                        stage: ConversionStage::Encode,
                        error,
                    });
                }
            }
        }

        if encoded.is_empty() {
            debug!("Nothing to send to {}", self.translator.name());
            return Ok(outcome);
        }

        // Phase 2: one request for everything that encoded cleanly
        let expected = encoded.len();
        let request = TranslateRequest::new(
            encoded,
            self.source_language.clone(),
            self.target_language.clone(),
            &self.config,
        );
        debug!(
            "Sending {} strings ({} chars) to {}",
            expected,
            request.char_count(),
            self.translator.name()
        );
        let translations = self.translator.translate(request).await?;
        if translations.len() != expected {
            return Err(TranslationError::ResponseMismatch {
                expected,
                actual: translations.len(),
            });
        }

        // Phase 3: decode
        let decoder = XmlDecoder::new();
        for (index, translation) in indices.into_iter().zip(translations) {
            outcome.billed_characters += translation.billed_characters;
            match decoder.decode(&translation.text) {
                Ok(translated) => outcome.entries.push(TranslatedEntry {
                    index,
                    source: texts[index].clone(),
                    translated,
                }),
                Err(error) => {
                    warn!("Dropping translation of string {} (cannot decode): {}", index, error);
                    outcome.failures.push(StringFailure {
                        index,
                        source: texts[index].clone(),
                        stage: ConversionStage::Decode,
                        error,
                    });
                }
            }
        }
        outcome.failures.sort_by_key(|failure| failure.index);

        info!(
            "Translated {}/{} strings ({} billed characters)",
            outcome.entries.len(),
            texts.len(),
            outcome.billed_characters
        );

        Ok(outcome)
    }
}
