//! Language utilities for catalog language codes
//!
//! Catalog languages are short ISO 639-1 codes, optionally carrying a
//! region or script suffix at runtime (`zh-CN`, `zh-Hant`).

use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Languages with a catalog in the storefront, in rollout order
pub const SUPPORTED_LANGUAGES: [&str; 15] = [
    "zh", "en", "de", "fr", "es", "it", "pt", "ru", "ja", "ko", "ar", "hi", "th", "vi", "id",
];

/// Primary default language for resolution
pub const DEFAULT_LANGUAGE: &str = "en";

/// Secondary default language for resolution
pub const SECONDARY_DEFAULT_LANGUAGE: &str = "zh";

static LANGUAGE_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("language code pattern is valid")
});

/// Returns the segment before the first `-` (`zh-CN` -> `zh`)
pub fn base_language(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Validate the shape of a language code (`en`, `zh-CN`, `zh-Hant`)
pub fn validate_language_code(code: &str) -> Result<()> {
    if LANGUAGE_CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(anyhow!("Invalid language code: '{}'", code))
    }
}

/// Whether the code's base language has a catalog in the supported set
pub fn is_supported_language(code: &str) -> bool {
    let base = base_language(code).to_lowercase();
    SUPPORTED_LANGUAGES.contains(&base.as_str())
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let base = base_language(code.trim()).to_lowercase();
    let lang = Language::from_639_1(&base)
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))?;

    Ok(lang.to_name().to_string())
}
