/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use polycat::errors::{AppError, CatalogError};

#[test]
fn test_catalogError_notFound_shouldDisplayLanguageAndPath() {
    let error = CatalogError::NotFound {
        language: "fr".to_string(),
        path: PathBuf::from("locales/fr.json"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Catalog not found"));
    assert!(display.contains("'fr'"));
    assert!(display.contains("locales/fr.json"));
}

#[test]
fn test_catalogError_parse_shouldDisplayLanguage() {
    let error = CatalogError::Parse {
        language: "ru".to_string(),
        message: "expected value at line 1 column 1".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse catalog"));
    assert!(display.contains("'ru'"));
    assert_eq!(error.language(), Some("ru"));
}

#[test]
fn test_catalogError_invalidKeyPath_shouldHaveNoLanguage() {
    let error = CatalogError::InvalidKeyPath {
        key_path: "nav..home".to_string(),
        reason: "key path contains an empty segment".to_string(),
    };
    assert_eq!(error.language(), None);
    assert!(error.to_string().contains("nav..home"));
}

#[test]
fn test_appError_fromCatalogError_shouldWrapCorrectly() {
    let catalog_error = CatalogError::InvalidLanguageCode("??".to_string());
    let app_error: AppError = catalog_error.into();

    match app_error {
        AppError::Catalog(_) => {}
        other => panic!("unexpected variant: {}", other),
    }
}

#[test]
fn test_appError_fromIoAndAnyhow_shouldConvert() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert!(matches!(AppError::from(io_error), AppError::File(_)));

    let any_error = anyhow::anyhow!("boom");
    let app_error = AppError::from(any_error);
    assert!(app_error.to_string().contains("boom"));
}
