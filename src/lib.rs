//! Moji - emoji shortcode lookup, skin tones and fuzzy search.
//!
//! Moji indexes an emoji-datasource style catalog and answers the questions a
//! chat client asks about it: which glyph does `:thumbsup::skin-tone-2:` mean,
//! what does a message look like with its shortcodes rendered, and which
//! emoji match what the user typed into the picker.
//!
//! # Architecture
//!
//! - [`config`] - Configuration loading and management
//! - [`services`] - Catalog loading and the individual indexes
//! - [`core`] - [`EmojiIndex`], the immutable context object built from them
//!
//! # Example
//!
//! ```no_run
//! use moji::{Config, EmojiIndex};
//! use std::path::Path;
//!
//! let config = Config::load();
//! let index = EmojiIndex::from_path(Path::new("emoji.json"), &config)?;
//!
//! let rendered = index.replace("ship it :+1::skin-tone-3:");
//! let picks = index.search("thumb");
//! # Ok::<(), moji::MojiError>(())
//! ```

pub mod config;
pub mod core;
pub mod services;

mod error;

pub use crate::core::index::EmojiIndex;
pub use config::Config;
pub use error::{MojiError, MojiResult};
pub use services::catalog::{EmojiRecord, Platform, VariantRecord};
pub use services::categories::CategoryTag;
pub use services::search_index::{SearchKey, SearchOptions};
pub use services::skin_tone::{Glyph, Resolved, SkinTone};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{Config, EmojiIndex};

    /// Small emoji-datasource subset with malformed and unsupported entries
    pub const FIXTURE: &str = include_str!("../tests/fixtures/emoji.json");

    pub fn index() -> EmojiIndex {
        EmojiIndex::from_json(FIXTURE, &Config::default()).unwrap()
    }
}
