//! Core engine module - the assembled emoji index.
//!
//! Everything here is built once from a loaded catalog and read-only
//! afterwards:
//! - Shortcode lookup and skin-tone resolution
//! - `:shortcode:` replacement in free text
//! - Fuzzy search and category browsing

pub mod index;

pub use crate::services::catalog::{EmojiRecord, VariantRecord};
pub use crate::services::categories::CategoryTag;
pub use crate::services::skin_tone::{Glyph, Resolved, SkinTone};
pub use index::EmojiIndex;
