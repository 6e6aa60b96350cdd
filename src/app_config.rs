use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the library configuration including loading,
/// validating and saving configuration settings.
/// Represents the library configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Source language code (auto-detected by the service when absent)
    #[serde(default)]
    pub source_language: Option<String>,

    /// Target language code
    pub target_language: String,

    /// Markup conversion settings
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Translation request settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// How the encoder reacts to recoverable grammar violations
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Drop stray closing tags (reported as warnings) and keep a trailing `%`
    #[default]
    Lenient,
    /// Fail on stray closing tags and on a trailing `%`
    Strict,
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for Strictness {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(anyhow!("Invalid strictness: {}", s)),
        }
    }
}

/// Markup conversion configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkupConfig {
    /// Policy for unmatched closing tags and a trailing `%`
    #[serde(default)]
    pub strictness: Strictness,
}

/// Tag handling mode requested from the translation service
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagHandling {
    Html,
    #[default]
    Xml,
}

/// Translation request configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Tag handling mode; the markup encoder produces XML
    #[serde(default)]
    pub tag_handling: TagHandling,

    /// Let the service infer document structure from the markup
    #[serde(default)]
    pub outline_detection: bool,

    /// Tags whose content must never be split into separate sentences
    #[serde(default)]
    pub non_splitting_tags: Vec<String>,

    /// Tags that always split sentences
    #[serde(default)]
    pub splitting_tags: Vec<String>,

    /// Extra context sent with every request, not translated itself
    #[serde(default)]
    pub context: Option<String>,

    /// Maximum number of requests in flight when translating several groups
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            tag_handling: TagHandling::default(),
            outline_detection: false,
            non_splitting_tags: Vec::new(),
            splitting_tags: Vec::new(),
            context: None,
            concurrent_requests: default_concurrent_requests(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_concurrent_requests() -> usize {
    4
}

// Language codes are service-specific ("EN", "PT-BR", "ZH-HANS"); only the shape is checked here
fn is_language_code(code: &str) -> bool {
    let mut parts = code.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok && parts.all(|p| !p.is_empty() && p.len() <= 4 && p.chars().all(|c| c.is_ascii_alphanumeric()))
}

impl Config {
    /// Parse a configuration from JSON, filling in defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Cap the `log` facade at the configured level
    ///
    /// The installed logger still applies its own filter below this cap.
    pub fn apply_log_level(&self) {
        log::set_max_level(self.log_level.to_level_filter());
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !is_language_code(&self.target_language) {
            return Err(anyhow!("Invalid target language: '{}'", self.target_language));
        }
        if let Some(source) = &self.source_language {
            if !is_language_code(source) {
                return Err(anyhow!("Invalid source language: '{}'", source));
            }
        }

        if self.translation.tag_handling != TagHandling::Xml {
            return Err(anyhow!("Marker text is encoded as XML; tag_handling must be 'xml'"));
        }
        if self.translation.concurrent_requests == 0 {
            return Err(anyhow!("concurrent_requests must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: None,
            target_language: "EN-US".to_string(),
            markup: MarkupConfig::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
