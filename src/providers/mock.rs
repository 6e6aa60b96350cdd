/*!
 * Mock translator implementation for testing.
 *
 * This module provides a translator that simulates different behaviors:
 * - `MockTranslator::echo()` - Returns every string unchanged
 * - `MockTranslator::uppercase()` - "Translates" text outside tags to upper case
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockTranslator::dropping()` - Loses the last string of every request
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{TranslateRequest, TranslatedText, Translator};

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Returns the input text as is
    Echo,
    /// Upper-cases text between tags, leaving tags and entities alone
    Uppercase,
    /// Always fails with an error
    Failing,
    /// Returns one translation fewer than requested
    DropLast,
}

/// Mock translator for testing the translation service
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of requests received
    request_count: Arc<AtomicUsize>,
    /// Requests currently being served
    in_flight: Arc<AtomicUsize>,
    /// Highest number of requests served at once
    max_in_flight: Arc<AtomicUsize>,
    /// Simulated latency per request
    delay_ms: u64,
    /// Custom per-string translation (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            delay_ms: 0,
            custom_response: None,
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn uppercase() -> Self {
        Self::new(MockBehavior::Uppercase)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn dropping() -> Self {
        Self::new(MockBehavior::DropLast)
    }

    /// Delay every request by `delay_ms` milliseconds
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set a custom per-string translation
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Highest number of concurrent requests observed
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Upper-case everything outside `<...>` elements and `&...;` entities
    pub fn uppercase_outside_tags(xml: &str) -> String {
        let mut out = String::with_capacity(xml.len());
        let mut in_tag = false;
        let mut in_entity = false;
        for ch in xml.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => in_tag = false,
                '&' if !in_tag => in_entity = true,
                ';' if in_entity => in_entity = false,
                _ => {}
            }
            if in_tag || in_entity {
                out.push(ch);
            } else {
                out.extend(ch.to_uppercase());
            }
        }
        out
    }

    fn translate_text(&self, text: &str) -> String {
        if let Some(generator) = self.custom_response {
            return generator(text);
        }
        match self.behavior {
            MockBehavior::Uppercase => Self::uppercase_outside_tags(text),
            _ => text.to_string(),
        }
    }
}

impl Clone for MockTranslator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            in_flight: Arc::clone(&self.in_flight),
            max_in_flight: Arc::clone(&self.max_in_flight),
            delay_ms: self.delay_ms,
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, request: TranslateRequest) -> Result<Vec<TranslatedText>, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if self.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.delay_ms)).await;
        }

        let result = match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated translator failure".to_string(),
            }),
            behavior => {
                let mut translations: Vec<TranslatedText> = request
                    .texts
                    .iter()
                    .map(|text| TranslatedText {
                        text: self.translate_text(text),
                        billed_characters: text.chars().count() as u64,
                    })
                    .collect();
                if behavior == MockBehavior::DropLast {
                    translations.pop();
                }
                Ok(translations)
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn name(&self) -> &str {
        "mock"
    }
}
