/*!
 * Persistence of catalog documents, one document per language code.
 */

use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::document::CatalogDocument;
use crate::errors::CatalogError;
use crate::file_utils::FileManager;
use crate::language_utils::validate_language_code;

/// Loads and saves whole catalog documents addressed by language code
pub trait CatalogStore: Send + Sync {
    /// Load the document for a language
    fn load(&self, language: &str) -> Result<CatalogDocument, CatalogError>;

    /// Persist the full document for a language
    fn save(&self, language: &str, document: &CatalogDocument) -> Result<(), CatalogError>;

    /// Languages that currently have a persisted document, sorted
    fn available_languages(&self) -> Result<Vec<String>, CatalogError>;
}

fn checked_language(language: &str) -> Result<(), CatalogError> {
    validate_language_code(language)
        .map_err(|_| CatalogError::InvalidLanguageCode(language.to_string()))
}

/// Directory of `<code>.json` files
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    /// Directory holding the catalog files
    dir: PathBuf,
}

impl JsonCatalogStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of a language's catalog file
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{}.json", language))
    }
}

impl CatalogStore for JsonCatalogStore {
    fn load(&self, language: &str) -> Result<CatalogDocument, CatalogError> {
        checked_language(language)?;
        let path = self.path_for(language);

        if !FileManager::file_exists(&path) {
            return Err(CatalogError::NotFound {
                language: language.to_string(),
                path,
            });
        }

        let content = FileManager::read_to_string(&path).map_err(|e| CatalogError::Io {
            language: language.to_string(),
            message: format!("{:#}", e),
        })?;

        let document = CatalogDocument::parse(language, &content)?;
        debug!("Loaded catalog '{}' from {:?}", language, path);
        Ok(document)
    }

    fn save(&self, language: &str, document: &CatalogDocument) -> Result<(), CatalogError> {
        checked_language(language)?;
        let path = self.path_for(language);

        let content = document.to_pretty_string().map_err(|e| CatalogError::Io {
            language: language.to_string(),
            message: e.to_string(),
        })?;

        FileManager::write_atomically(&path, &content).map_err(|e| CatalogError::Io {
            language: language.to_string(),
            message: format!("{:#}", e),
        })?;

        debug!("Saved catalog '{}' to {:?}", language, path);
        Ok(())
    }

    fn available_languages(&self) -> Result<Vec<String>, CatalogError> {
        let files = FileManager::find_files(&self.dir, "json").map_err(|e| CatalogError::Io {
            language: "*".to_string(),
            message: format!("{:#}", e),
        })?;

        let mut languages: Vec<String> = files
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().to_string())
            .filter(|stem| validate_language_code(stem).is_ok())
            .collect();
        languages.sort();
        Ok(languages)
    }
}

/// Catalog documents kept in memory
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    documents: RwLock<HashMap<String, CatalogDocument>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document, replacing any existing one
    pub fn insert(&self, language: &str, document: CatalogDocument) {
        self.documents.write().insert(language.to_string(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load(&self, language: &str) -> Result<CatalogDocument, CatalogError> {
        checked_language(language)?;
        self.documents
            .read()
            .get(language)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                language: language.to_string(),
                path: PathBuf::from(format!("memory://{}", language)),
            })
    }

    fn save(&self, language: &str, document: &CatalogDocument) -> Result<(), CatalogError> {
        checked_language(language)?;
        self.insert(language, document.clone());
        Ok(())
    }

    fn available_languages(&self) -> Result<Vec<String>, CatalogError> {
        let mut languages: Vec<String> = self.documents.read().keys().cloned().collect();
        languages.sort();
        Ok(languages)
    }
}
