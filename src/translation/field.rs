/*!
 * Stored representation of translatable fields.
 *
 * Decoding is speculative: anything that does not parse as a JSON object is a
 * plain string, so legacy data stays valid forever.
 */

use serde_json::{Map, Value};

/// Language-keyed texts in insertion order
///
/// Order matters: the last resolution tier picks the first stored language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultilingualText {
    entries: Vec<(String, String)>,
}

impl MultilingualText {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text stored for an exact language code
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, text)| text.as_str())
    }

    /// Text for the language, only when it is non-empty
    pub fn get_non_empty(&self, language: &str) -> Option<&str> {
        self.get(language).filter(|text| !text.is_empty())
    }

    /// First entry in insertion order
    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(code, text)| (code.as_str(), text.as_str()))
    }

    /// Set the text for a language, keeping its position if already present
    pub fn insert(&mut self, language: impl Into<String>, text: impl Into<String>) {
        let language = language.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(code, _)| *code == language) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((language, text)),
        }
    }

    /// Language codes in insertion order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact JSON object in insertion order, the form persisted by the store
    pub fn encode(&self) -> String {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(code, text)| (code.clone(), Value::String(text.clone())))
            .collect();
        Value::Object(map).to_string()
    }

    /// Members with non-string values cannot be displayed and are dropped
    fn from_json_object(object: Map<String, Value>) -> Self {
        let entries = object
            .into_iter()
            .filter_map(|(code, value)| match value {
                Value::String(text) => Some((code, text)),
                _ => None,
            })
            .collect();
        Self { entries }
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for MultilingualText {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut text = Self::new();
        for (language, value) in iter {
            text.insert(language, value);
        }
        text
    }
}

/// Raw value of a user-facing text attribute, decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatableField {
    /// Legacy unencoded text, displayed verbatim
    PlainText(String),
    /// JSON object keyed by language code
    Multilingual(MultilingualText),
}

impl TranslatableField {
    /// Decode a stored value; never fails
    ///
    /// Arrays, `null`, numbers and JSON strings are not objects and therefore
    /// decode as plain text, keeping the raw value untouched.
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(object)) => {
                Self::Multilingual(MultilingualText::from_json_object(object))
            }
            _ => Self::PlainText(raw.to_string()),
        }
    }

    /// Stored form of the field
    pub fn encode(&self) -> String {
        match self {
            Self::PlainText(text) => text.clone(),
            Self::Multilingual(text) => text.encode(),
        }
    }

    /// Convert legacy plain text into a multilingual map under `language`
    pub fn upgrade(self, language: &str) -> Self {
        match self {
            Self::PlainText(text) if text.is_empty() => Self::Multilingual(MultilingualText::new()),
            Self::PlainText(text) => {
                Self::Multilingual(std::iter::once((language, text)).collect())
            }
            multilingual @ Self::Multilingual(_) => multilingual,
        }
    }

    pub fn is_multilingual(&self) -> bool {
        matches!(self, Self::Multilingual(_))
    }
}
