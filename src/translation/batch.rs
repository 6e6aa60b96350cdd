/*!
 * Batch translation processing.
 *
 * Strings are grouped by owner (a mod, a localization namespace, ...) and each
 * group goes to the translator as its own request. Groups are translated
 * concurrently, bounded by `concurrent_requests`.
 */

use futures::stream::{self, StreamExt};
use log::{error, info};
use std::time::Instant;

use crate::errors::TranslationError;
use crate::providers::Translator;

use super::core::{LocalizationService, TranslationOutcome};

/// A named set of strings translated in one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationGroup {
    /// Group name, used for reporting only
    pub name: String,
    /// Marker-text strings
    pub texts: Vec<String>,
}

impl TranslationGroup {
    pub fn new(name: impl Into<String>, texts: Vec<String>) -> Self {
        Self {
            name: name.into(),
            texts,
        }
    }
}

/// Result for one group
#[derive(Debug)]
pub struct GroupOutcome {
    /// Group name
    pub name: String,
    /// Outcome of the group's request
    pub result: Result<TranslationOutcome, TranslationError>,
}

/// Batch translator for processing several groups
pub struct BatchTranslator<T: Translator> {
    /// The translation service to use
    service: LocalizationService<T>,

    /// Maximum number of concurrent requests
    max_concurrent_requests: usize,
}

impl<T: Translator> BatchTranslator<T> {
    /// Create a new batch translator
    pub fn new(service: LocalizationService<T>) -> Self {
        Self {
            max_concurrent_requests: service.config.concurrent_requests.max(1),
            service,
        }
    }

    pub fn service(&self) -> &LocalizationService<T> {
        &self.service
    }

    /// Translate every group, returning outcomes in input order
    ///
    /// Empty groups are reported with an empty outcome and send no request.
    pub async fn translate_groups(&self, groups: &[TranslationGroup]) -> Vec<GroupOutcome> {
        let total_groups = groups.len();
        let service = &self.service;

        let outcomes: Vec<GroupOutcome> = stream::iter(groups.iter().enumerate())
            .map(|(group_index, group)| async move {
                if group.texts.is_empty() {
                    return GroupOutcome {
                        name: group.name.clone(),
                        result: Ok(TranslationOutcome::default()),
                    };
                }

                let start_time = Instant::now();
                let result = service.translate_strings(&group.texts).await;
                match &result {
                    Ok(outcome) => info!(
                        "Group '{}' ({} of {}) translated in {:?}: {} ok, {} skipped",
                        group.name,
                        group_index + 1,
                        total_groups,
                        start_time.elapsed(),
                        outcome.entries.len(),
                        outcome.failures.len()
                    ),
                    Err(e) => error!("Group '{}' failed: {}", group.name, e),
                }

                GroupOutcome {
                    name: group.name.clone(),
                    result,
                }
            })
            .buffered(self.max_concurrent_requests)
            .collect()
            .await;

        let billed: u64 = outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .map(|outcome| outcome.billed_characters)
            .sum();
        info!("Billed characters: {}", billed);

        outcomes
    }
}
