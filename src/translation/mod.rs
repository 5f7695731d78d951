/*!
 * Multilingual field handling.
 *
 * Translatable attributes (product names, descriptions, ...) are stored either
 * as legacy plain strings or as JSON objects keyed by language code. This
 * module decodes the stored form into a typed value and picks the display
 * string for a runtime locale:
 *
 * - `field`: `TranslatableField` decoding and the ordered `MultilingualText` map
 * - `resolver`: the fallback chain that selects a display string
 */

// Re-export main types for easier usage
pub use self::field::{MultilingualText, TranslatableField};
pub use self::resolver::{FieldResolver, resolve, resolve_with_defaults};

// Submodules
pub mod field;
pub mod resolver;
