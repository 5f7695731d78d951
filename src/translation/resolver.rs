/*!
 * Display-string resolution for translatable fields.
 *
 * Resolution is pure: it never touches shared state, so a single
 * `FieldResolver` can serve any number of concurrent render contexts.
 */

use log::trace;

use super::field::{MultilingualText, TranslatableField};
use crate::language_utils::{DEFAULT_LANGUAGE, SECONDARY_DEFAULT_LANGUAGE, base_language};

/// Resolver holding the default-language fallback chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResolver {
    /// Language tried after the active and base languages
    default_language: String,

    /// Language tried after the default language
    secondary_default: String,
}

impl FieldResolver {
    /// Create a resolver with an explicit fallback chain
    pub fn new(default_language: impl Into<String>, secondary_default: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            secondary_default: secondary_default.into(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn secondary_default(&self) -> &str {
        &self.secondary_default
    }

    /// Resolve a raw stored value for the active language
    pub fn resolve(&self, raw: Option<&str>, active_language: &str) -> String {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return String::new(),
        };

        match TranslatableField::decode(raw) {
            TranslatableField::PlainText(text) => text,
            TranslatableField::Multilingual(text) => {
                self.select(&text, active_language).to_string()
            }
        }
    }

    /// Resolve an already decoded field
    pub fn resolve_field(&self, field: &TranslatableField, active_language: &str) -> String {
        match field {
            TranslatableField::PlainText(text) => text.clone(),
            TranslatableField::Multilingual(text) => {
                self.select(text, active_language).to_string()
            }
        }
    }

    /// Fallback chain: exact, base, default, secondary default, first stored
    ///
    /// Empty texts count as untranslated in the first four tiers, so `{"fr":""}` falls through for `fr`.
    pub fn select<'a>(&self, text: &'a MultilingualText, active_language: &str) -> &'a str {
        let base = base_language(active_language);
        let candidates = [
            active_language,
            base,
            self.default_language.as_str(),
            self.secondary_default.as_str(),
        ];

        for candidate in candidates {
            if let Some(found) = text.get_non_empty(candidate) {
                trace!("Resolved '{}' via '{}'", active_language, candidate);
                return found;
            }
        }

        text.first().map(|(_, first)| first).unwrap_or("")
    }
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, SECONDARY_DEFAULT_LANGUAGE)
    }
}

/// Resolve with the standard `en` -> `zh` fallback chain
pub fn resolve(raw: Option<&str>, active_language: &str) -> String {
    FieldResolver::default().resolve(raw, active_language)
}

/// Resolve with an explicit fallback chain
pub fn resolve_with_defaults(
    raw: Option<&str>,
    active_language: &str,
    default_language: &str,
    secondary_default: &str,
) -> String {
    FieldResolver::new(default_language, secondary_default).resolve(raw, active_language)
}
