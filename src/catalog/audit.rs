/*!
 * Read-only completeness check of catalogs against a baseline language.
 *
 * The baseline's subtree defines the required leaves; every other language
 * gets one row per required leaf.
 */

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::document::{CatalogDocument, KeyPath};
use super::store::CatalogStore;
use crate::errors::CatalogError;
use crate::language_utils::get_language_name;

/// Completeness of one required leaf in one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditStatus {
    /// Non-empty string
    Present,
    /// Key path absent, or holding an empty string or a non-string value
    MissingKey,
    /// The whole namespace at the audited subtree is absent
    MissingSubtree,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::MissingKey => "missing-key",
            Self::MissingSubtree => "missing-subtree",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One (language, key path, status) line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRow {
    pub language: String,
    pub key_path: String,
    pub status: AuditStatus,
}

/// Rows grouped by language, then by leaf path in baseline order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Baseline language the required leaves come from
    pub baseline_language: String,

    /// Audited subtree; empty means the whole document
    pub subtree: String,

    /// Number of required leaves in the baseline subtree
    pub required_leaves: usize,

    pub rows: Vec<AuditRow>,
}

impl AuditReport {
    /// Row count per status
    pub fn summary(&self) -> BTreeMap<AuditStatus, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.status).or_insert(0) += 1;
        }
        counts
    }

    /// Whether every row is present
    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(|row| row.status.is_present())
    }

    /// Rows that need attention
    pub fn gaps(&self) -> impl Iterator<Item = &AuditRow> {
        self.rows.iter().filter(|row| !row.status.is_present())
    }

    /// Human-readable report, one block per language
    pub fn render_text(&self) -> String {
        let subtree = if self.subtree.is_empty() { "<root>" } else { self.subtree.as_str() };
        let mut out = String::new();
        out.push_str(&format!(
            "Audit of '{}' against baseline '{}' ({} required key(s))\n",
            subtree, self.baseline_language, self.required_leaves
        ));

        let mut current: Option<&str> = None;
        for row in &self.rows {
            if current != Some(row.language.as_str()) {
                let name = get_language_name(&row.language).unwrap_or_else(|_| row.language.clone());
                out.push_str(&format!("\n[{}] {}\n", row.language, name));
                current = Some(row.language.as_str());
            }
            let marker = if row.status.is_present() { "ok" } else { "!!" };
            out.push_str(&format!("  {} {:<16} {}\n", marker, row.status.as_str(), row.key_path));
        }

        let summary = self
            .summary()
            .iter()
            .map(|(status, count)| format!("{}={}", status, count))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\nSummary: {}\n", if summary.is_empty() { "no rows".to_string() } else { summary }));
        out
    }
}

/// Audit persisted catalogs
///
/// Any catalog that cannot be loaded aborts the audit.
pub fn audit<S: CatalogStore + ?Sized>(
    store: &S,
    baseline_language: &str,
    subtree: &str,
    languages: &[String],
) -> Result<AuditReport, CatalogError> {
    let baseline = store.load(baseline_language)?;

    let mut targets = Vec::new();
    for language in languages.iter().filter(|l| l.as_str() != baseline_language) {
        targets.push((language.clone(), store.load(language)?));
    }

    audit_documents(baseline_language, &baseline, subtree, &targets)
}

/// Audit documents already in memory
pub fn audit_documents(
    baseline_language: &str,
    baseline: &CatalogDocument,
    subtree: &str,
    targets: &[(String, CatalogDocument)],
) -> Result<AuditReport, CatalogError> {
    let required = baseline
        .string_leaves(subtree)?
        .ok_or_else(|| CatalogError::MissingBaselineSubtree {
            language: baseline_language.to_string(),
            subtree: subtree.to_string(),
        })?;
    debug!("Baseline '{}' defines {} leaf key(s) under '{}'", baseline_language, required.len(), subtree);

    let baseline_is_namespace = baseline.has_namespace(subtree)?;

    let mut rows = Vec::with_capacity(required.len() * targets.len());
    for (language, document) in targets.iter().filter(|(l, _)| l != baseline_language) {
        let subtree_present = subtree_present(document, subtree, baseline_is_namespace)?;
        if !subtree_present {
            warn!("Catalog '{}' has no '{}' namespace", language, subtree);
        }

        for path in &required {
            let status = if subtree_present {
                leaf_status(document, path)
            } else {
                AuditStatus::MissingSubtree
            };
            rows.push(AuditRow {
                language: language.clone(),
                key_path: path.to_string(),
                status,
            });
        }
    }

    Ok(AuditReport {
        baseline_language: baseline_language.to_string(),
        subtree: subtree.to_string(),
        required_leaves: required.len(),
        rows,
    })
}

/// Whether the target still has something where the baseline keeps its subtree
///
/// When the baseline subtree is a namespace, only a namespace counts.
fn subtree_present(
    document: &CatalogDocument,
    subtree: &str,
    baseline_is_namespace: bool,
) -> Result<bool, CatalogError> {
    if baseline_is_namespace {
        return document.has_namespace(subtree);
    }
    let path = KeyPath::parse(subtree)?;
    Ok(document.get(&path).is_some())
}

fn leaf_status(document: &CatalogDocument, path: &KeyPath) -> AuditStatus {
    match document.get(path) {
        Some(Value::String(text)) if !text.is_empty() => AuditStatus::Present,
        _ => AuditStatus::MissingKey,
    }
}
