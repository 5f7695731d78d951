use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::catalog::ReconcileOptions;
use crate::errors::AppError;
use crate::language_utils::{
    validate_language_code, DEFAULT_LANGUAGE, SECONDARY_DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES,
};
use crate::translation::FieldResolver;

/// Catalog maintenance settings, stored as JSON (`conf.json` by default)
///
/// Every field has a default, so a partial file is enough.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding one `<code>.json` catalog per language
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,

    /// Languages kept in sync by reconciliation and audits
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Language whose catalog defines the canonical key set
    #[serde(default = "default_baseline_language")]
    pub baseline_language: String,

    /// First fallback when resolving multilingual fields
    #[serde(default = "default_default_language")]
    pub default_language: String,

    /// Second fallback when resolving multilingual fields
    #[serde(default = "default_secondary_default_language")]
    pub secondary_default_language: String,

    /// Reconciliation settings
    #[serde(default)]
    pub reconcile: ReconcileConfig,

    /// Audit settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Reconciliation settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ReconcileConfig {
    /// Language whose text fills in for languages an entry does not cover
    #[serde(default)]
    pub fallback_language: Option<String>,
}

impl From<&ReconcileConfig> for ReconcileOptions {
    fn from(config: &ReconcileConfig) -> Self {
        Self {
            fallback_language: config.fallback_language.clone(),
        }
    }
}

/// Audit settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AuditConfig {
    /// Subtree audited when none is given on the command line; empty = whole catalog
    #[serde(default)]
    pub subtree: String,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
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
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_locales_dir() -> String {
    "client/src/i18n/locales".to_string()
}

fn default_languages() -> Vec<String> {
    SUPPORTED_LANGUAGES.iter().map(|code| code.to_string()).collect()
}

fn default_baseline_language() -> String {
    "zh".to_string()
}

fn default_default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_secondary_default_language() -> String {
    SECONDARY_DEFAULT_LANGUAGE.to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json + "\n")
            .context(format!("Failed to write config to file: {:?}", path))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.locales_dir.trim().is_empty() {
            return Err(AppError::Config("locales_dir must not be empty".to_string()).into());
        }

        if self.languages.is_empty() {
            return Err(AppError::Config("At least one catalog language is required".to_string()).into());
        }

        for language in &self.languages {
            validate_language_code(language)?;
        }

        let mut seen = std::collections::HashSet::new();
        if let Some(duplicate) = self.languages.iter().find(|l| !seen.insert(l.as_str())) {
            return Err(AppError::Config(format!("Language '{}' is listed more than once", duplicate)).into());
        }

        if !self.languages.contains(&self.baseline_language) {
            return Err(AppError::Config(format!(
                "Baseline language '{}' is not one of the configured languages",
                self.baseline_language
            )).into());
        }

        validate_language_code(&self.default_language)?;
        validate_language_code(&self.secondary_default_language)?;

        if let Some(fallback) = &self.reconcile.fallback_language {
            validate_language_code(fallback)?;
        }

        Ok(())
    }

    /// Resolver using the configured fallback chain
    pub fn resolver(&self) -> FieldResolver {
        FieldResolver::new(&self.default_language, &self.secondary_default_language)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            locales_dir: default_locales_dir(),
            languages: default_languages(),
            baseline_language: default_baseline_language(),
            default_language: default_default_language(),
            secondary_default_language: default_secondary_default_language(),
            reconcile: ReconcileConfig::default(),
            audit: AuditConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
