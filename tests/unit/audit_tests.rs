/*!
 * Tests for catalog audits
 */

use anyhow::Result;
use polycat::catalog::{audit, AuditStatus, CatalogDocument, MemoryCatalogStore};
use polycat::CatalogError;

fn store_with(catalogs: &[(&str, &str)]) -> MemoryCatalogStore {
    let store = MemoryCatalogStore::new();
    for (language, json) in catalogs {
        store.insert(language, CatalogDocument::parse(language, json).unwrap());
    }
    store
}

fn languages(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_audit_withMissingSubtitle_shouldReportOneMissingKey() -> Result<()> {
    let store = store_with(&[
        ("zh", r#"{"hero": {"title": "开光法器", "subtitle": "传承千年智慧"}}"#),
        ("en", r#"{"hero": {"title": "Sacred Jewelry"}}"#),
    ]);

    let report = audit(&store, "zh", "hero", &languages(&["zh", "en"]))?;
    let rows: Vec<(&str, &str, AuditStatus)> = report
        .rows
        .iter()
        .map(|r| (r.language.as_str(), r.key_path.as_str(), r.status))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("en", "hero.title", AuditStatus::Present),
            ("en", "hero.subtitle", AuditStatus::MissingKey),
        ]
    );
    assert_eq!(report.summary().get(&AuditStatus::MissingKey), Some(&1));

    Ok(())
}

#[test]
fn test_audit_withEmptyTitle_shouldReportMissingKey() -> Result<()> {
    let store = store_with(&[
        ("zh", r#"{"hero": {"title": "标题", "subtitle": "副标题"}}"#),
        ("en", r#"{"hero": {"title": "", "subtitle": "Subtitle"}}"#),
    ]);

    let report = audit(&store, "zh", "hero", &languages(&["zh", "en"]))?;
    let rows: Vec<String> = report
        .rows
        .iter()
        .map(|r| format!("{} {} {}", r.language, r.key_path, r.status))
        .collect();

    assert_eq!(rows, vec!["en hero.title missing-key", "en hero.subtitle present"]);
    assert_eq!(report.summary().len(), 2);
    Ok(())
}

#[test]
fn test_audit_shouldGroupByLanguageInGivenOrder() -> Result<()> {
    let store = store_with(&[
        ("zh", r#"{"hero": {"title": "标题", "subtitle": "副标题"}}"#),
        ("ko", r#"{"hero": {"title": "제목", "subtitle": "부제목"}}"#),
        ("ar", r#"{"nav": {}}"#),
        ("vi", r#"{"hero": {"subtitle": "Phụ đề"}}"#),
    ]);

    let report = audit(&store, "zh", "hero", &languages(&["ko", "ar", "zh", "vi"]))?;
    let rows: Vec<String> = report
        .rows
        .iter()
        .map(|r| format!("{}:{}:{}", r.language, r.key_path, r.status))
        .collect();

    assert_eq!(
        rows,
        vec![
            "ko:hero.title:present",
            "ko:hero.subtitle:present",
            "ar:hero.title:missing-subtree",
            "ar:hero.subtitle:missing-subtree",
            "vi:hero.title:missing-key",
            "vi:hero.subtitle:present",
        ]
    );

    Ok(())
}

#[test]
fn test_audit_shouldNotMutateCatalogs() -> Result<()> {
    let store = store_with(&[
        ("zh", r#"{"hero": {"title": "标题"}}"#),
        ("th", r#"{"nav": {"home": "หน้าแรก"}}"#),
    ]);
    let before = store.load_snapshot();

    audit(&store, "zh", "hero", &languages(&["zh", "th"]))?;

    assert_eq!(store.load_snapshot(), before);
    Ok(())
}

#[test]
fn test_audit_withMissingTargetCatalog_shouldFail() {
    let store = store_with(&[("zh", r#"{"hero": {"title": "标题"}}"#)]);

    let err = audit(&store, "zh", "hero", &languages(&["zh", "hi"])).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { ref language, .. } if language == "hi"));
}

#[test]
fn test_audit_withWholeDocument_shouldUseAllBaselineLeaves() -> Result<()> {
    let store = store_with(&[
        ("zh", r#"{"nav": {"home": "首页"}, "hero": {"title": "标题"}}"#),
        ("id", r#"{"nav": {"home": "Beranda"}, "hero": {"title": ""}}"#),
    ]);

    let report = audit(&store, "zh", "", &languages(&["zh", "id"]))?;
    let statuses: Vec<AuditStatus> = report.rows.iter().map(|r| r.status).collect();

    assert_eq!(report.required_leaves, 2);
    assert_eq!(statuses, vec![AuditStatus::Present, AuditStatus::MissingKey]);
    Ok(())
}

#[test]
fn test_auditReport_shouldSerializeRowsForReporting() -> Result<()> {
    let store = store_with(&[
        ("zh", r#"{"hero": {"title": "标题"}}"#),
        ("pt", r#"{}"#),
    ]);

    let report = audit(&store, "zh", "hero", &languages(&["zh", "pt"]))?;
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["rows"][0]["language"], "pt");
    assert_eq!(json["rows"][0]["key_path"], "hero.title");
    assert_eq!(json["rows"][0]["status"], "missing-subtree");
    Ok(())
}

/// Snapshot helper so tests can compare store contents
trait Snapshot {
    fn load_snapshot(&self) -> Vec<(String, CatalogDocument)>;
}

impl Snapshot for MemoryCatalogStore {
    fn load_snapshot(&self) -> Vec<(String, CatalogDocument)> {
        use polycat::CatalogStore;
        self.available_languages()
            .unwrap()
            .into_iter()
            .map(|l| {
                let document = self.load(&l).unwrap();
                (l, document)
            })
            .collect()
    }
}
