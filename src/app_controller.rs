use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::collections::HashSet;

use crate::app_config::Config;
use crate::catalog::{
    audit, reconcile_with_options, AuditReport, CatalogDocument, CatalogKeyEntry, CatalogStore,
    JsonCatalogStore, ReconcileOptions, SkipReason,
};
use crate::language_utils::{get_language_name, is_supported_language, validate_language_code};
use crate::translation::{FieldResolver, TranslatableField};

// @module: Application controller for catalog maintenance

/// What reconciliation did to one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageReconcileSummary {
    pub language: String,
    pub changed: bool,
    pub applied: Vec<String>,
    pub skipped: Vec<(String, SkipReason)>,
}

/// Outcome of a reconciliation run over every configured language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileReport {
    /// Whether documents were written back
    pub persisted: bool,
    pub languages: Vec<LanguageReconcileSummary>,
}

impl ReconcileReport {
    /// Languages whose catalog changed
    pub fn changed_languages(&self) -> Vec<&str> {
        self.languages
            .iter()
            .filter(|summary| summary.changed)
            .map(|summary| summary.language.as_str())
            .collect()
    }

    /// Total number of key paths written
    pub fn applied_count(&self) -> usize {
        self.languages.iter().map(|summary| summary.applied.len()).sum()
    }
}

/// Catalog presence for one configured language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStatus {
    pub code: String,
    pub name: String,
    pub has_catalog: bool,
    /// Whether the code belongs to the storefront's supported set
    pub supported: bool,
}

/// Main application controller for catalog maintenance
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Catalog persistence
    store: Box<dyn CatalogStore>,

    // @field: Field resolver built from config
    resolver: FieldResolver,
}

impl Controller {
    // @method: Create a new controller using the JSON catalogs under `locales_dir`
    pub fn with_config(config: Config) -> Result<Self> {
        let store = JsonCatalogStore::new(&config.locales_dir);
        Self::with_store(config, Box::new(store))
    }

    // @method: Create a new controller with an explicit store
    pub fn with_store(config: Config, store: Box<dyn CatalogStore>) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let resolver = config.resolver();

        Ok(Self {
            config,
            store,
            resolver,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &dyn CatalogStore {
        self.store.as_ref()
    }

    /// Merge entries into every configured language, all or nothing
    ///
    /// Every catalog is loaded and reconciled in memory before anything is
    /// written, so a missing or broken catalog aborts the run with no
    /// language modified.
    pub fn reconcile_all(
        &self,
        entries: &[CatalogKeyEntry],
        options: &ReconcileOptions,
        dry_run: bool,
    ) -> Result<ReconcileReport> {
        self.warn_unknown_languages(entries);

        let mut documents: Vec<(String, CatalogDocument)> = Vec::with_capacity(self.config.languages.len());
        for language in &self.config.languages {
            let document = self
                .store
                .load(language)
                .with_context(|| format!("Reconciliation aborted while loading '{}'", language))?;
            documents.push((language.clone(), document));
        }

        let mut outcomes = Vec::with_capacity(documents.len());
        for (language, document) in documents {
            let outcome = reconcile_with_options(&language, document, entries, options)
                .with_context(|| format!("Reconciliation aborted on '{}'", language))?;
            outcomes.push((language, outcome));
        }

        if dry_run {
            info!("Dry run: no catalog written");
        } else {
            for (language, outcome) in outcomes.iter().filter(|(_, outcome)| outcome.changed) {
                self.store
                    .save(language, &outcome.document)
                    .with_context(|| format!("Failed to save catalog '{}'", language))?;
            }
        }

        let languages = outcomes
            .into_iter()
            .map(|(language, outcome)| LanguageReconcileSummary {
                language,
                changed: outcome.changed,
                applied: outcome.applied,
                skipped: outcome.skipped,
            })
            .collect();

        let report = ReconcileReport {
            persisted: !dry_run,
            languages,
        };
        info!(
            "Reconciliation finished: {} key(s) added across {} language(s)",
            report.applied_count(),
            report.changed_languages().len()
        );

        Ok(report)
    }

    /// Audit configured languages against the baseline
    pub fn audit(&self, subtree: Option<&str>, baseline: Option<&str>) -> Result<AuditReport> {
        let subtree = subtree.unwrap_or(&self.config.audit.subtree);
        let baseline = baseline.unwrap_or(&self.config.baseline_language);

        let report = audit(self.store.as_ref(), baseline, subtree, &self.config.languages)
            .context("Audit aborted")?;

        let gaps = report.gaps().count();
        if gaps > 0 {
            warn!("Audit found {} incomplete row(s)", gaps);
        } else {
            info!("Audit found no gaps");
        }

        Ok(report)
    }

    /// Display string for a stored field in the active language
    pub fn resolve_field(&self, raw: Option<&str>, active_language: &str) -> String {
        self.resolver.resolve(raw, active_language)
    }

    /// Stored multilingual form of a field, wrapping legacy plain text under `language`
    pub fn upgrade_field(&self, raw: &str, language: &str) -> Result<String> {
        validate_language_code(language)?;
        Ok(TranslatableField::decode(raw).upgrade(language).encode())
    }

    /// Configured languages with their display names and catalog presence
    pub fn language_statuses(&self) -> Result<Vec<LanguageStatus>> {
        let available: HashSet<String> = self
            .store
            .available_languages()
            .context("Failed to list catalogs")?
            .into_iter()
            .collect();

        Ok(self
            .config
            .languages
            .iter()
            .map(|code| LanguageStatus {
                code: code.clone(),
                name: get_language_name(code).unwrap_or_else(|_| code.clone()),
                has_catalog: available.contains(code),
                supported: is_supported_language(code),
            })
            .collect())
    }

    /// Entries may carry texts for languages that have no catalog here
    fn warn_unknown_languages(&self, entries: &[CatalogKeyEntry]) {
        let configured: HashSet<&str> = self.config.languages.iter().map(String::as_str).collect();
        let mut reported = HashSet::new();

        for entry in entries {
            for language in entry.text.keys() {
                if !configured.contains(language.as_str()) && reported.insert(language.clone()) {
                    warn!("Text for unconfigured language '{}' is ignored (first seen on '{}')", language, entry.key);
                }
            }
        }
    }
}
