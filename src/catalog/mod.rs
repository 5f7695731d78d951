/*!
 * Per-language UI string catalogs.
 *
 * - `document`: catalog documents and key paths
 * - `store`: loading and saving one document per language
 * - `reconcile`: non-destructive merge of new keys into a document
 * - `rollout`: files describing the keys a feature introduces
 * - `audit`: completeness of catalogs against a baseline language
 */

// Re-export main types for easier usage
pub use self::audit::{AuditReport, AuditRow, AuditStatus, audit, audit_documents};
pub use self::document::{CatalogDocument, KeyPath};
pub use self::reconcile::{
    CatalogKeyEntry, ReconcileOptions, ReconcileOutcome, SkipReason, reconcile,
    reconcile_with_options,
};
pub use self::rollout::{NamespaceBundle, RolloutFile};
pub use self::store::{CatalogStore, JsonCatalogStore, MemoryCatalogStore};

// Submodules
pub mod audit;
pub mod document;
pub mod reconcile;
pub mod rollout;
pub mod store;
