//! Image references for rendered glyphs
//!
//! Only builds paths; fetching and decoding the files is left to the caller.

use serde::{Deserialize, Serialize};

use super::skin_tone::Glyph;

/// Where the per-platform image set lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSource {
    /// Directory or URL prefix holding one sub-directory per size
    pub root: String,
    /// Pixel size sub-directory
    pub size: u32,
}

impl Default for ImageSource {
    fn default() -> Self {
        Self {
            root: "node_modules/emoji-datasource-apple/img/apple".to_string(),
            size: 64,
        }
    }
}

impl ImageSource {
    /// Path of the image for a glyph, e.g. `<root>/64/1f44d.png`
    pub fn path_for<G: Glyph + ?Sized>(&self, glyph: &G) -> String {
        format!(
            "{}/{}/{}",
            self.root.trim_end_matches('/'),
            self.size,
            glyph.image()
        )
    }

    pub fn validate(&mut self) {
        self.size = self.size.clamp(16, 128);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::{PlatformSupport, VariantRecord};

    #[test]
    fn test_path_for() {
        let variant = VariantRecord {
            unified: "1F44D-1F3FB".to_string(),
            image: "1f44d-1f3fb.png".to_string(),
            support: PlatformSupport::default(),
        };
        let source = ImageSource {
            root: "https://cdn.example.com/apple/".to_string(),
            size: 32,
        };
        assert_eq!(
            source.path_for(&variant),
            "https://cdn.example.com/apple/32/1f44d-1f3fb.png"
        );
        assert_eq!(
            ImageSource::default().path_for(&variant),
            "node_modules/emoji-datasource-apple/img/apple/64/1f44d-1f3fb.png"
        );
    }

    #[test]
    fn test_validate_clamps_size() {
        let mut source = ImageSource {
            size: 1024,
            ..ImageSource::default()
        };
        source.validate();
        assert_eq!(source.size, 128);
    }
}
