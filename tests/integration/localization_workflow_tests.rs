/*!
 * Integration tests for translating several groups of strings
 */

use umgloc::providers::mock::MockTranslator;
use umgloc::translation::{BatchTranslator, LocalizationService, TranslationGroup};

use crate::common;

fn group(name: &str, texts: &[&str]) -> TranslationGroup {
    TranslationGroup::new(name, texts.iter().map(|t| t.to_string()).collect())
}

#[tokio::test]
async fn test_translateGroups_shouldKeepGroupOrderAndTranslateEachGroup() {
    common::init_logging();
    let service = LocalizationService::new(MockTranslator::uppercase(), &common::test_config()).unwrap();
    let batch = BatchTranslator::new(service);

    let groups = vec![
        group("CoreMod", &["{b}Start{/b} game", "Quit"]),
        group("ShopMod", &["Costs %{price} gold", "{color value=red}Sold out{/color}"]),
        group("EmptyMod", &[]),
    ];

    let outcomes = batch.translate_groups(&groups).await;

    let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["CoreMod", "ShopMod", "EmptyMod"]);

    let core = outcomes[0].result.as_ref().unwrap();
    assert_eq!(core.entries[0].translated, "{b}START{/b} GAME");
    assert_eq!(core.entries[1].translated, "QUIT");

    let shop = outcomes[1].result.as_ref().unwrap();
    assert_eq!(shop.entries[0].translated, "COSTS %{price} GOLD");
    assert_eq!(shop.entries[1].translated, "{color value=red}SOLD OUT{/color}");

    assert!(outcomes[2].result.as_ref().unwrap().entries.is_empty());
    // One request per non-empty group
    assert_eq!(batch.service().translator().request_count(), 2);
}

#[tokio::test]
async fn test_translateGroups_shouldRespectConcurrencyLimit() {
    let mut config = common::test_config();
    config.translation.concurrent_requests = 2;
    let translator = MockTranslator::echo().with_delay(20);
    let service = LocalizationService::new(translator, &config).unwrap();
    let batch = BatchTranslator::new(service);

    let groups: Vec<TranslationGroup> = (0..6)
        .map(|i| group(&format!("Mod{}", i), &["text"]))
        .collect();

    let outcomes = batch.translate_groups(&groups).await;

    assert_eq!(outcomes.len(), 6);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
    let max_in_flight = batch.service().translator().max_in_flight();
    assert!(max_in_flight >= 1 && max_in_flight <= 2, "max in flight was {}", max_in_flight);
}

#[tokio::test]
async fn test_translateGroups_withFailingTranslator_shouldReportEveryGroup() {
    let service = LocalizationService::new(MockTranslator::failing(), &common::test_config()).unwrap();
    let batch = BatchTranslator::new(service);

    let outcomes = batch
        .translate_groups(&[group("A", &["x"]), group("B", &["y"])])
        .await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.result.is_err()));
}
