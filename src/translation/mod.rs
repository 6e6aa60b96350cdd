/*!
 * Markup-aware translation service.
 *
 * This module drives a `Translator` over marker-text strings. It is split
 * into two submodules:
 *
 * - `core`: encode, translate and decode one set of strings
 * - `batch`: translate several named groups with bounded concurrency
 */

// Re-export main types for easier usage
pub use self::batch::{BatchTranslator, GroupOutcome, TranslationGroup};
pub use self::core::{
    ConversionStage, LocalizationService, StringFailure, TranslatedEntry, TranslationOutcome,
};

// Submodules
pub mod batch;
pub mod core;
