/*!
 * Translation service seam.
 *
 * The library never talks to a translation backend itself. Callers plug one
 * in through the `Translator` trait; the only requirement is that the
 * backend leaves XML tags untouched when asked for XML tag handling.
 *
 * - `mock`: in-memory translator for tests and dry runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_config::{TagHandling, TranslationConfig};
use crate::errors::ProviderError;

/// One translation request covering several strings
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateRequest {
    /// Strings to translate, already encoded to XML
    pub texts: Vec<String>,
    /// Source language, or `None` for auto-detection
    pub source_language: Option<String>,
    /// Target language
    pub target_language: String,
    /// Tag handling mode
    pub tag_handling: TagHandling,
    /// Whether the service may infer structure from the markup
    pub outline_detection: bool,
    /// Tags that never split sentences
    pub non_splitting_tags: Vec<String>,
    /// Tags that always split sentences
    pub splitting_tags: Vec<String>,
    /// Additional untranslated context
    pub context: Option<String>,
}

impl TranslateRequest {
    /// Build a request for `texts` using the request options in `config`
    pub fn new(
        texts: Vec<String>,
        source_language: Option<String>,
        target_language: impl Into<String>,
        config: &TranslationConfig,
    ) -> Self {
        Self {
            texts,
            source_language,
            target_language: target_language.into(),
            tag_handling: config.tag_handling,
            outline_detection: config.outline_detection,
            non_splitting_tags: config.non_splitting_tags.clone(),
            splitting_tags: config.splitting_tags.clone(),
            context: config.context.clone(),
        }
    }

    /// Total number of characters being sent
    pub fn char_count(&self) -> usize {
        self.texts.iter().map(|text| text.chars().count()).sum()
    }
}

/// One translated string as returned by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedText {
    /// Translated XML text
    pub text: String,
    /// Characters the service billed for this string
    pub billed_characters: u64,
}

/// Common trait for translation backends
///
/// Implementations must return exactly one `TranslatedText` per input string,
/// in input order.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate every string in the request
    async fn translate(&self, request: TranslateRequest) -> Result<Vec<TranslatedText>, ProviderError>;

    /// Short backend name used in log messages
    fn name(&self) -> &str;
}

pub mod mock;
