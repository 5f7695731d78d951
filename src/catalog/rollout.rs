/*!
 * Rollout files: the key entries a feature introduces, authored once.
 *
 * Two layouts are accepted side by side:
 *
 * ```json
 * {
 *   "entries": [{ "key": "nav.fortune_services", "text": { "fr": "Physionomie & Feng Shui" } }],
 *   "bundles": [{ "namespace": "trust", "translations": { "en": { "title": "Trust & Security" } } }]
 * }
 * ```
 *
 * Bundles group a namespace's new keys per language and expand into
 * `namespace.key` entries.
 */

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use super::reconcile::CatalogKeyEntry;
use crate::file_utils::FileManager;

/// New keys for one namespace, grouped by language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceBundle {
    /// Namespace key path the keys are created under
    pub namespace: String,

    /// Language code -> (key -> text), in authoring order
    #[serde(default)]
    pub translations: Map<String, Value>,
}

impl NamespaceBundle {
    /// Expand into entries, keys ordered by first appearance across languages
    pub fn to_entries(&self) -> Result<Vec<CatalogKeyEntry>> {
        let mut order: Vec<String> = Vec::new();
        let mut texts: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();

        for (language, keys) in &self.translations {
            let keys = keys.as_object().with_context(|| {
                format!(
                    "Bundle '{}': translations for '{}' must be an object of key -> text",
                    self.namespace, language
                )
            })?;

            for (key, text) in keys {
                let text = text.as_str().with_context(|| {
                    format!(
                        "Bundle '{}': text for '{}.{}' in '{}' must be a string",
                        self.namespace, self.namespace, key, language
                    )
                })?;

                if !texts.contains_key(key) {
                    order.push(key.clone());
                }
                texts
                    .entry(key.clone())
                    .or_default()
                    .insert(language.clone(), text.to_string());
            }
        }

        Ok(order
            .into_iter()
            .map(|key| {
                let text = texts.remove(&key).unwrap_or_default();
                CatalogKeyEntry {
                    key: format!("{}.{}", self.namespace, key),
                    text,
                }
            })
            .collect())
    }
}

/// Parsed rollout file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolloutFile {
    /// Explicit key entries
    #[serde(default)]
    pub entries: Vec<CatalogKeyEntry>,

    /// Per-language namespace bundles
    #[serde(default)]
    pub bundles: Vec<NamespaceBundle>,
}

impl RolloutFile {
    /// Load a rollout file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse rollout file: {:?}", path.as_ref()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// All entries in processing order: explicit entries, then bundles
    pub fn into_entries(self) -> Result<Vec<CatalogKeyEntry>> {
        let mut entries = self.entries;
        for bundle in &self.bundles {
            entries.extend(bundle.to_entries()?);
        }
        Ok(entries)
    }
}
