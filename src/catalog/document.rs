/*!
 * In-memory catalog documents and dot-separated key paths.
 *
 * A catalog document is a tree of nested namespaces whose leaves are display
 * strings. Member order is the order read from disk (or inserted), so a
 * load/save cycle reproduces the file byte for byte.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::errors::CatalogError;

/// Dot-separated address of a value inside a catalog document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse `nav.fortune_services` style paths; empty segments are rejected
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidKeyPath {
            key_path: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.trim().is_empty() {
            return Err(invalid("key path is empty"));
        }

        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(invalid("key path contains an empty segment"));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment (the leaf name)
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Extend the path with one more segment
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Whether a slot can receive a new text without losing data
pub fn is_vacant(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

/// Translated strings for one language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogDocument {
    root: Map<String, Value>,
}

impl CatalogDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse persisted content; the root must be a JSON object
    pub fn parse(language: &str, content: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(content).map_err(|e| CatalogError::Parse {
            language: language.to_string(),
            message: e.to_string(),
        })?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(CatalogError::Parse {
                language: language.to_string(),
                message: format!("catalog root must be a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    /// Persisted form: two-space pretty JSON with a trailing newline
    pub fn to_pretty_string(&self) -> Result<String, serde_json::Error> {
        let mut content = serde_json::to_string_pretty(&self.root)?;
        content.push('\n');
        Ok(content)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Value stored at the path, leaf or namespace
    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.root.get(first)?;
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Non-empty string stored at the path
    pub fn leaf_text(&self, path: &KeyPath) -> Option<&str> {
        self.get(path)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Namespace stored at `subtree`; the empty path is the whole document
    pub fn subtree(&self, subtree: &str) -> Result<Option<&Map<String, Value>>, CatalogError> {
        if subtree.is_empty() {
            return Ok(Some(&self.root));
        }
        let path = KeyPath::parse(subtree)?;
        Ok(self.get(&path).and_then(Value::as_object))
    }

    /// Whether the path addresses a namespace
    pub fn has_namespace(&self, subtree: &str) -> Result<bool, CatalogError> {
        Ok(self.subtree(subtree)?.is_some())
    }

    /// Full key paths of every string leaf under `subtree`, depth first in document order
    ///
    /// Returns `None` when nothing is stored at `subtree`. A string stored
    /// directly at `subtree` yields that single path.
    pub fn string_leaves(&self, subtree: &str) -> Result<Option<Vec<KeyPath>>, CatalogError> {
        let mut leaves = Vec::new();

        if subtree.is_empty() {
            for (key, value) in &self.root {
                collect_string_leaves(&KeyPath { segments: vec![key.clone()] }, value, &mut leaves);
            }
            return Ok(Some(leaves));
        }

        let path = KeyPath::parse(subtree)?;
        match self.get(&path) {
            Some(value) => {
                collect_string_leaves(&path, value, &mut leaves);
                Ok(Some(leaves))
            }
            None => Ok(None),
        }
    }

    /// Store `text` at the path if the slot is vacant, creating parent namespaces
    ///
    /// Returns whether the document changed. A parent segment holding a
    /// non-object value is a conflict, reported before anything is modified.
    pub fn set_if_vacant(
        &mut self,
        language: &str,
        path: &KeyPath,
        text: &str,
    ) -> Result<bool, CatalogError> {
        if let Some(blocking) = self.blocking_prefix(path) {
            return Err(CatalogError::KeyPathConflict {
                language: language.to_string(),
                key_path: path.to_string(),
                blocking_segment: blocking,
            });
        }

        if !is_vacant(self.get(path)) {
            return Ok(false);
        }

        let Some((leaf, parents)) = path.segments().split_last() else {
            return Ok(false);
        };

        let mut current = &mut self.root;
        for segment in parents {
            let slot = current
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if slot.is_null() {
                *slot = Value::Object(Map::new());
            }
            current = match slot {
                Value::Object(map) => map,
                _ => return Ok(false),
            };
        }

        current.insert(leaf.clone(), Value::String(text.to_string()));
        Ok(true)
    }

    /// First parent prefix holding a value that cannot contain children
    fn blocking_prefix(&self, path: &KeyPath) -> Option<String> {
        let segments = path.segments();
        let mut current = &self.root;
        for (index, segment) in segments.iter().enumerate().take(segments.len().saturating_sub(1)) {
            match current.get(segment) {
                None | Some(Value::Null) => return None,
                Some(Value::Object(map)) => current = map,
                Some(_) => return Some(segments[..=index].join(".")),
            }
        }
        None
    }
}

fn collect_string_leaves(path: &KeyPath, value: &Value, leaves: &mut Vec<KeyPath>) {
    match value {
        Value::String(_) => leaves.push(path.clone()),
        Value::Object(map) => {
            for (key, child) in map {
                collect_string_leaves(&path.child(key), child, leaves);
            }
        }
        _ => {}
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
