/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use polycat::app_config::Config;
use polycat::catalog::{CatalogDocument, MemoryCatalogStore};
use polycat::Controller;
use crate::common;

/// Test the controller rejects an invalid configuration
#[test]
fn test_controller_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.baseline_language = "nl".to_string();

    assert!(Controller::with_config(config).is_err());
}

/// Test the controller resolves fields with the configured fallback chain
#[test]
fn test_controller_resolveField_shouldUseConfiguredDefaults() -> Result<()> {
    let mut config = Config::default();
    config.default_language = "ja".to_string();
    let controller = Controller::with_store(config, Box::new(MemoryCatalogStore::new()))?;

    let raw = r#"{"ko":"비취","ja":"翡翠","en":"Jade"}"#;
    assert_eq!(controller.resolve_field(Some(raw), "th"), "翡翠");
    assert_eq!(controller.resolve_field(Some(raw), "ko-KR"), "비취");
    assert_eq!(controller.resolve_field(None, "ko"), "");
    assert_eq!(controller.resolve_field(Some("Jade"), "ko"), "Jade");

    Ok(())
}

/// Test language listing reports which catalogs exist
#[test]
fn test_controller_languageStatuses_shouldReportCatalogPresence() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_catalogs(temp_dir.path(), &[("zh", "{}"), ("en", "{}")])?;

    let config = common::config_for(temp_dir.path(), &["zh", "en", "fr"], "zh");
    let controller = Controller::with_config(config)?;
    let statuses = controller.language_statuses()?;

    let present: Vec<(&str, bool)> = statuses.iter().map(|s| (s.code.as_str(), s.has_catalog)).collect();
    assert_eq!(present, vec![("zh", true), ("en", true), ("fr", false)]);
    assert_eq!(statuses[2].name, "French");

    Ok(())
}

/// Test the audit defaults come from the configuration
#[test]
fn test_controller_audit_withConfiguredSubtree_shouldUseIt() -> Result<()> {
    let store = MemoryCatalogStore::new();
    store.insert("zh", CatalogDocument::parse("zh", r#"{"hero": {"title": "标题"}, "nav": {"home": "首页"}}"#)?);
    store.insert("es", CatalogDocument::parse("es", r#"{"hero": {"title": "Título"}}"#)?);

    let mut config = Config::default();
    config.languages = vec!["zh".to_string(), "es".to_string()];
    config.audit.subtree = "hero".to_string();
    let controller = Controller::with_store(config, Box::new(store))?;

    let report = controller.audit(None, None)?;
    assert_eq!(report.subtree, "hero");
    assert!(report.is_complete());

    let whole = controller.audit(Some(""), None)?;
    assert!(!whole.is_complete());

    Ok(())
}

/// Test legacy plain text is wrapped and multilingual values pass through
#[test]
fn test_controller_upgradeField_shouldWrapPlainText() -> Result<()> {
    let controller = Controller::with_store(Config::default(), Box::new(MemoryCatalogStore::new()))?;

    assert_eq!(controller.upgrade_field("Jade Bracelet", "en")?, r#"{"en":"Jade Bracelet"}"#);
    assert_eq!(controller.upgrade_field(r#"{"zh":"玉手镯"}"#, "en")?, r#"{"zh":"玉手镯"}"#);
    assert!(controller.upgrade_field("Jade", "../en").is_err());

    Ok(())
}

/// Test languages outside the storefront set are flagged
#[test]
fn test_controller_languageStatuses_withUnsupportedCode_shouldFlagIt() -> Result<()> {
    let store = MemoryCatalogStore::new();
    store.insert("zh", CatalogDocument::new());
    store.insert("nl", CatalogDocument::new());

    let mut config = Config::default();
    config.languages = vec!["zh".to_string(), "nl".to_string()];
    let controller = Controller::with_store(config, Box::new(store))?;

    let supported: Vec<bool> = controller.language_statuses()?.iter().map(|s| s.supported).collect();
    assert_eq!(supported, vec![true, false]);

    Ok(())
}
