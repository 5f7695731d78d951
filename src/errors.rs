/*!
 * Error types for the polycat application.
 *
 * This module contains custom error types for catalog handling and the
 * application layer, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving, reconciling or auditing catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No persisted catalog exists for the language
    #[error("Catalog not found for language '{language}': {path:?}")]
    NotFound {
        /// Requested language code
        language: String,
        /// Location that was probed
        path: PathBuf,
    },

    /// The persisted catalog is not well-formed
    #[error("Failed to parse catalog for language '{language}': {message}")]
    Parse {
        /// Language whose catalog is broken
        language: String,
        /// Parser message
        message: String,
    },

    /// Reading or writing the catalog failed
    #[error("I/O error on catalog for language '{language}': {message}")]
    Io {
        /// Language whose catalog was being accessed
        language: String,
        /// Underlying error message
        message: String,
    },

    /// Language code does not have the expected shape
    #[error("Invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    /// Key path is empty or contains empty segments
    #[error("Invalid key path '{key_path}': {reason}")]
    InvalidKeyPath {
        /// Offending key path
        key_path: String,
        /// Why it was rejected
        reason: String,
    },

    /// A parent segment of the key path holds a value that is not a namespace
    #[error("Key path '{key_path}' in catalog '{language}' is blocked by non-namespace value at '{blocking_segment}'")]
    KeyPathConflict {
        /// Language of the catalog being modified
        language: String,
        /// Key path that could not be created
        key_path: String,
        /// Prefix holding the non-object value
        blocking_segment: String,
    },

    /// The baseline catalog lacks the subtree that defines the required leaves
    #[error("Baseline catalog '{language}' has no subtree at '{subtree}'")]
    MissingBaselineSubtree {
        /// Baseline language code
        language: String,
        /// Requested subtree path
        subtree: String,
    },
}

impl CatalogError {
    /// Language code the error refers to, if any
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::NotFound { language, .. }
            | Self::Parse { language, .. }
            | Self::Io { language, .. }
            | Self::KeyPathConflict { language, .. }
            | Self::MissingBaselineSubtree { language, .. } => Some(language),
            Self::InvalidLanguageCode(_) | Self::InvalidKeyPath { .. } => None,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from catalog processing
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
