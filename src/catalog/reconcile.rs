/*!
 * Non-destructive merge of newly introduced keys into catalog documents.
 *
 * Reconciliation only ever fills vacant slots: a key path that already holds
 * a non-empty value keeps it, whatever text is proposed. Running the same
 * entries twice is therefore a no-op on the second run.
 */

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::document::{CatalogDocument, KeyPath};
use crate::errors::CatalogError;

/// A key path plus proposed texts per language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogKeyEntry {
    /// Dot-separated key path, e.g. `nav.fortune_services`
    pub key: String,

    /// Proposed text per language code
    #[serde(default)]
    pub text: BTreeMap<String, String>,
}

impl CatalogKeyEntry {
    /// Create an entry without texts
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: BTreeMap::new(),
        }
    }

    /// Builder-style text addition
    pub fn with_text(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.text.insert(language.into(), text.into());
        self
    }

    /// Non-empty proposed text for a language
    pub fn text_for(&self, language: &str) -> Option<&str> {
        self.text
            .get(language)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

/// Tuning for a reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Language whose proposed text is used when an entry has none for the target
    #[serde(default)]
    pub fallback_language: Option<String>,
}

/// Why an entry left a document untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The key path already holds a non-empty value
    AlreadyPresent,
    /// The entry proposes no text for the language
    NoText,
}

/// Result of reconciling one language's document
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    /// The document after reconciliation
    pub document: CatalogDocument,

    /// Whether any key path was written
    pub changed: bool,

    /// Key paths written, in entry order
    pub applied: Vec<String>,

    /// Key paths left untouched and why
    pub skipped: Vec<(String, SkipReason)>,
}

/// Reconcile with default options
pub fn reconcile(
    language: &str,
    document: CatalogDocument,
    entries: &[CatalogKeyEntry],
) -> Result<ReconcileOutcome, CatalogError> {
    reconcile_with_options(language, document, entries, &ReconcileOptions::default())
}

/// Merge entries into a language's document, never overwriting non-empty values
///
/// Entries are applied in order; when two entries target the same key path
/// the first successful write sticks. All key paths are validated before the
/// document is touched.
pub fn reconcile_with_options(
    language: &str,
    mut document: CatalogDocument,
    entries: &[CatalogKeyEntry],
    options: &ReconcileOptions,
) -> Result<ReconcileOutcome, CatalogError> {
    let paths = entries
        .iter()
        .map(|entry| entry.key.parse::<KeyPath>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut applied = Vec::new();
    let mut skipped = Vec::new();

    for (entry, path) in entries.iter().zip(&paths) {
        let proposed = entry.text_for(language).or_else(|| {
            options
                .fallback_language
                .as_deref()
                .and_then(|fallback| entry.text_for(fallback))
        });

        let Some(text) = proposed else {
            debug!("[{}] {}: no proposed text", language, entry.key);
            skipped.push((entry.key.clone(), SkipReason::NoText));
            continue;
        };

        if document.set_if_vacant(language, path, text)? {
            debug!("[{}] {}: added", language, entry.key);
            applied.push(entry.key.clone());
        } else {
            debug!("[{}] {}: already present", language, entry.key);
            skipped.push((entry.key.clone(), SkipReason::AlreadyPresent));
        }
    }

    let changed = !applied.is_empty();
    if changed {
        info!("Catalog '{}': added {} key(s)", language, applied.len());
    } else {
        info!("Catalog '{}': already up to date", language);
    }

    Ok(ReconcileOutcome {
        document,
        changed,
        applied,
        skipped,
    })
}
