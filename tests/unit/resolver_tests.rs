/*!
 * Tests for multilingual field resolution
 */

use polycat::translation::{resolve, FieldResolver, MultilingualText, TranslatableField};
use polycat::SUPPORTED_LANGUAGES;

fn encode(pairs: &[(&str, &str)]) -> String {
    pairs.iter().copied().collect::<MultilingualText>().encode()
}

/// Every language present in the map resolves to its own text
#[test]
fn test_resolve_withActiveLanguagePresent_shouldReturnItsText() {
    let pairs: Vec<(String, String)> = SUPPORTED_LANGUAGES
        .iter()
        .map(|code| (code.to_string(), format!("text-{}", code)))
        .collect();
    let raw = pairs.iter().map(|(l, t)| (l.as_str(), t.as_str())).collect::<MultilingualText>().encode();

    for code in SUPPORTED_LANGUAGES {
        assert_eq!(resolve(Some(&raw), code), format!("text-{}", code));
    }
}

#[test]
fn test_resolve_withRegionSuffix_shouldFallBackToBaseLanguage() {
    let raw = encode(&[("en", "Jade Bracelet"), ("zh", "玉手镯")]);

    assert_eq!(resolve(Some(&raw), "zh-CN"), "玉手镯");
    assert_eq!(resolve(Some(&raw), "zh-CN"), resolve(Some(&raw), "zh"));
}

#[test]
fn test_resolve_withExactRegionEntry_shouldPreferItOverBase() {
    let raw = encode(&[("zh", "玉手镯"), ("zh-Hant", "玉手鐲")]);
    assert_eq!(resolve(Some(&raw), "zh-Hant"), "玉手鐲");
}

#[test]
fn test_resolve_withoutActiveOrBase_shouldUseEnglishTier() {
    let raw = encode(&[("fr", "Bracelet"), ("zh", "玉手镯"), ("en", "Jade Bracelet")]);
    assert_eq!(resolve(Some(&raw), "ja"), "Jade Bracelet");
}

#[test]
fn test_resolve_withoutEnglish_shouldUseChineseTier() {
    let raw = encode(&[("fr", "Bracelet"), ("zh", "玉手镯")]);
    assert_eq!(resolve(Some(&raw), "ja"), "玉手镯");
}

#[test]
fn test_resolve_withOnlyOtherLanguages_shouldUseFirstInsertedKey() {
    let raw = encode(&[("de", "Armband"), ("fr", "Bracelet")]);
    assert_eq!(resolve(Some(&raw), "ja"), "Armband");

    let reversed = encode(&[("fr", "Bracelet"), ("de", "Armband")]);
    assert_eq!(resolve(Some(&reversed), "ja"), "Bracelet");
}

#[test]
fn test_resolve_withEmptyMap_shouldReturnEmptyString() {
    assert_eq!(resolve(Some("{}"), "en"), "");
}

#[test]
fn test_resolve_withPlainStrings_shouldReturnThemVerbatim() {
    let plain = [
        "Jade Bracelet",
        "玉手镯",
        "[\"en\", \"zh\"]",
        "null",
        "123",
        "{not json",
        "  {\"en\": ",
        "\"quoted\"",
    ];

    for value in plain {
        for language in ["en", "zh", "zh-CN", "xx"] {
            assert_eq!(resolve(Some(value), language), value);
        }
    }
}

#[test]
fn test_resolve_withArrayJson_shouldNotBeTreatedAsMap() {
    let raw = r#"[{"en": "Jade"}]"#;
    assert_eq!(resolve(Some(raw), "en"), raw);
    assert!(!TranslatableField::decode(raw).is_multilingual());
}

#[test]
fn test_resolve_shouldNotMutateInput() {
    let raw = encode(&[("en", "Jade"), ("zh", "玉")]);
    let copy = raw.clone();
    let _ = resolve(Some(&raw), "fr");
    assert_eq!(raw, copy);
}

#[test]
fn test_fieldResolver_sharedAcrossThreads_shouldResolveConsistently() {
    let resolver = std::sync::Arc::new(FieldResolver::default());
    let raw = encode(&[("ja", "翡翠"), ("en", "Jade")]);

    let handles: Vec<_> = ["ja", "en", "ko", "ja-JP"]
        .into_iter()
        .map(|language| {
            let resolver = resolver.clone();
            let raw = raw.clone();
            std::thread::spawn(move || resolver.resolve(Some(&raw), language))
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["翡翠", "Jade", "Jade", "翡翠"]);
}

#[test]
fn test_resolveField_withDecodedValue_shouldMatchRawResolution() {
    let raw = encode(&[("es", "Pulsera"), ("zh", "玉手镯")]);
    let field = TranslatableField::decode(&raw);
    let resolver = FieldResolver::default();

    assert_eq!(resolver.resolve_field(&field, "es-MX"), resolver.resolve(Some(&raw), "es-MX"));
}
