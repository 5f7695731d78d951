/*!
 * Tests for language utility functions
 */

use polycat::language_utils::{
    base_language, get_language_name, is_supported_language, validate_language_code,
    SUPPORTED_LANGUAGES,
};

#[test]
fn test_supportedLanguages_shouldContainFifteenDistinctCodes() {
    let mut codes = SUPPORTED_LANGUAGES.to_vec();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 15);
    for code in SUPPORTED_LANGUAGES {
        assert!(validate_language_code(code).is_ok(), "code {}", code);
        assert!(get_language_name(code).is_ok(), "code {}", code);
    }
}

#[test]
fn test_isSupportedLanguage_withRegionSuffix_shouldUseBase() {
    assert!(is_supported_language("zh-CN"));
    assert!(is_supported_language("PT-br"));
    assert!(is_supported_language("id"));
    assert!(!is_supported_language("tr"));
    assert!(!is_supported_language("nl-BE"));
}

#[test]
fn test_baseLanguage_withVariousCodes_shouldReturnFirstSegment() {
    assert_eq!(base_language("zh-CN"), "zh");
    assert_eq!(base_language("en"), "en");
    assert_eq!(base_language("-x"), "");
}

#[test]
fn test_getLanguageName_withValidCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("fr-CA").unwrap(), "French");
    assert_eq!(get_language_name("de").unwrap(), "German");
    assert!(get_language_name("xx").is_err());
}
