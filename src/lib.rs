/*!
 * # polycat - multilingual content catalogs
 *
 * A Rust library for storing, resolving and maintaining translated text.
 *
 * ## Features
 *
 * - Resolve stored multilingual fields (`{"en": "...", "zh": "..."}`) to a
 *   display string for the active locale, with a deterministic fallback chain
 * - Keep legacy plain-string fields valid forever
 * - Load and atomically save one JSON catalog per language
 * - Roll out new UI keys across every catalog without overwriting existing text
 * - Audit catalogs against a baseline language
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: Multilingual field decoding and resolution:
 *   - `translation::field`: Typed decoding of stored values
 *   - `translation::resolver`: Display-string fallback chain
 * - `catalog`: Per-language catalogs:
 *   - `catalog::document`: Catalog documents and key paths
 *   - `catalog::store`: Catalog persistence
 *   - `catalog::reconcile`: Non-destructive key rollout
 *   - `catalog::rollout`: Rollout file format
 *   - `catalog::audit`: Completeness audits
 * - `file_utils`: File system operations
 * - `app_controller`: Batch harness driving catalogs from the configuration
 * - `language_utils`: Language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod catalog;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use catalog::{
    AuditReport, AuditRow, AuditStatus, CatalogDocument, CatalogKeyEntry, CatalogStore,
    JsonCatalogStore, ReconcileOutcome,
};
pub use errors::{AppError, CatalogError};
pub use language_utils::{base_language, get_language_name, SUPPORTED_LANGUAGES};
pub use translation::{resolve, FieldResolver, MultilingualText, TranslatableField};
