pub mod catalog;
pub mod categories;
pub mod codepoint;
pub mod images;
pub mod names;
pub mod search_index;
pub mod shortcodes;
pub mod skin_tone;

pub use catalog::{EmojiRecord, Platform, PlatformSupport, RawEmoji, VariantRecord};
pub use categories::{CategoryIndex, CategoryTag};
pub use images::ImageSource;
pub use names::NameIndex;
pub use search_index::{SearchIndex, SearchKey, SearchOptions};
pub use shortcodes::{ShortcodeLookup, Token};
pub use skin_tone::{Glyph, Resolved, SkinTone};
