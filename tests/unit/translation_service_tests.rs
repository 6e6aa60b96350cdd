/*!
 * Tests for the markup-aware translation service
 */

use umgloc::app_config::{Config, Strictness, TagHandling};
use umgloc::errors::{MarkupError, TranslationError};
use umgloc::providers::mock::MockTranslator;
use umgloc::translation::{ConversionStage, LocalizationService};

use crate::common;

fn strings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_service_creation_withInvalidConfig_shouldFail() {
    let mut config = common::test_config();
    config.translation.tag_handling = TagHandling::Html;

    let result = LocalizationService::new(MockTranslator::echo(), &config);
    assert!(matches!(result, Err(TranslationError::Config(_))));
}

#[tokio::test]
async fn test_translateStrings_withEchoTranslator_shouldReturnInputs() {
    common::init_logging();
    let service = LocalizationService::new(MockTranslator::echo(), &common::test_config()).unwrap();
    let texts: Vec<String> = common::sample_marker_strings().iter().map(|t| t.to_string()).collect();

    let outcome = service.translate_strings(&texts).await.unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.entries.len(), texts.len());
    for entry in &outcome.entries {
        assert_eq!(entry.translated, texts[entry.index]);
        assert_eq!(entry.source, texts[entry.index]);
    }
    assert_eq!(service.translator().request_count(), 1);
}

#[tokio::test]
async fn test_translateStrings_withEncodeFailure_shouldSkipOnlyThatString() {
    common::init_logging();
    let service = LocalizationService::new(MockTranslator::uppercase(), &common::test_config()).unwrap();
    let texts = strings(&["{b}hello{/b}", "broken {tag", "plain & simple"]);

    let outcome = service.translate_strings(&texts).await.unwrap();

    let translated: Vec<(usize, &str)> = outcome
        .entries
        .iter()
        .map(|entry| (entry.index, entry.translated.as_str()))
        .collect();
    assert_eq!(translated, vec![(0, "{b}HELLO{/b}"), (2, "PLAIN & SIMPLE")]);

    assert_eq!(outcome.failures.len(), 1);
    let failure = &outcome.failures[0];
    assert_eq!(failure.index, 1);
    assert_eq!(failure.source, "broken {tag");
    assert_eq!(failure.stage, ConversionStage::Encode);
    assert_eq!(failure.error, MarkupError::UnclosedTagRegion { position: 7 });

    // "<b>hello</b>" + "plain &amp; simple"
    assert_eq!(outcome.billed_characters, 12 + 18);
}

#[tokio::test]
async fn test_translateStrings_withDecodeFailure_shouldRecordDecodeStage() {
    let translator = MockTranslator::echo().with_custom_response(|text| text.replace("</b>", "</i>"));
    let service = LocalizationService::new(translator, &common::test_config()).unwrap();
    let texts = strings(&["{b}hi{/b}", "fine"]);

    let outcome = service.translate_strings(&texts).await.unwrap();

    assert_eq!(outcome.entries.len(), 1);
    assert_eq!(outcome.entries[0].translated, "fine");
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].stage, ConversionStage::Decode);
    assert!(matches!(
        outcome.failures[0].error,
        MarkupError::UnknownClosingTag { ref name, .. } if name == "i"
    ));
}

#[tokio::test]
async fn test_translateStrings_strictMode_shouldRejectStrayClosers() {
    let mut config = common::test_config();
    config.markup.strictness = Strictness::Strict;
    let service = LocalizationService::new(MockTranslator::echo(), &config).unwrap();

    let outcome = service.translate_strings(&strings(&["a{/x}b"])).await.unwrap();

    assert!(outcome.entries.is_empty());
    assert_eq!(outcome.failures.len(), 1);
    // Nothing encoded cleanly, so no request is sent
    assert_eq!(service.translator().request_count(), 0);
}

#[tokio::test]
async fn test_translateStrings_lenientMode_shouldDropStrayClosers() {
    let service = LocalizationService::new(MockTranslator::echo(), &common::test_config()).unwrap();

    let outcome = service.translate_strings(&strings(&["a{/x}b"])).await.unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.entries[0].translated, "ab");
}

#[tokio::test]
async fn test_translateStrings_withFailingTranslator_shouldReturnProviderError() {
    let service = LocalizationService::new(MockTranslator::failing(), &common::test_config()).unwrap();

    let result = service.translate_strings(&strings(&["hello"])).await;
    assert!(matches!(result, Err(TranslationError::Provider(_))));
}

#[tokio::test]
async fn test_translateStrings_withMissingTranslations_shouldReportMismatch() {
    let service = LocalizationService::new(MockTranslator::dropping(), &common::test_config()).unwrap();

    let result = service.translate_strings(&strings(&["one", "two"])).await;
    assert!(matches!(
        result,
        Err(TranslationError::ResponseMismatch {
            expected: 2,
            actual: 1
        })
    ));
}

#[tokio::test]
async fn test_translateStrings_withNoStrings_shouldNotCallTranslator() {
    let service = LocalizationService::new(MockTranslator::echo(), &Config::default()).unwrap();

    let outcome = service.translate_strings(&[]).await.unwrap();

    assert_eq!(outcome, Default::default());
    assert_eq!(service.translator().request_count(), 0);
}
