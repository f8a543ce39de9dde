//! Icon styles.
//!
//! Four single-object icon looks, all available:
//!
//! | Key | Style | Subject leaf |
//! |-----|-------|--------------|
//! | 1 | Spot Illustration | `subject.type` |
//! | 2 | 3D Clay | `object` |
//! | 3 | Photo Realism | `subject.type` |
//! | 4 | Isometric Flat | `object` |
//!
//! Unknown keys fall back to a one-line plain-text prompt.
//!
//! # Example
//!
//! ```rust
//! use promptstyle::icon;
//!
//! let prompt = icon::generate_icon_prompt(1, "a red shoe");
//! assert!(prompt.starts_with("Create an image:\n"));
//!
//! assert_eq!(
//!     icon::generate_icon_prompt(99, "a red shoe"),
//!     "Icon of a red shoe, clean simple design, centered, high quality"
//! );
//! ```

mod templates;

use once_cell::sync::Lazy;

use crate::catalog::{Fallback, StyleCatalog};
use crate::kind::StyleKind;
use crate::style::{StyleMetadata, StyleRecord};

/// The built-in icon style table.
pub const STYLES: [StyleRecord; 4] = [
    StyleRecord::new(
        1,
        "Spot Illustration",
        "✏️",
        "Flat 2D geometric",
        "background: #FFFFFF; border: 2px solid #000B39;",
        templates::spot_illustration,
    ),
    StyleRecord::new(
        2,
        "3D Clay",
        "🏺",
        "Dark blue matte",
        "background: linear-gradient(135deg, #000F47, #001a5c);",
        templates::clay_3d,
    ),
    StyleRecord::new(
        3,
        "Photo Realism",
        "📷",
        "Hyperrealistic",
        "background: linear-gradient(135deg, #f5f5f5, #e0e0e0);",
        templates::photo_realism,
    ),
    StyleRecord::new(
        4,
        "Isometric Flat",
        "🔷",
        "Corporate geometric",
        "background: linear-gradient(135deg, #000F47, #163A78);",
        templates::isometric_flat,
    ),
];

static CATALOG: Lazy<StyleCatalog> = Lazy::new(|| {
    StyleCatalog::new(StyleKind::Icon, &STYLES).with_fallback(Fallback::Sentence(plain_prompt))
});

fn plain_prompt(subject: &str) -> String {
    format!("Icon of {subject}, clean simple design, centered, high quality")
}

/// Returns the icon style catalog.
pub fn catalog() -> &'static StyleCatalog {
    &CATALOG
}

/// Returns the number of icon styles.
pub fn style_count() -> usize {
    CATALOG.count()
}

/// Returns the display fields of an icon style, or `None` for unknown keys.
pub fn style_metadata(key: u32) -> Option<StyleMetadata> {
    CATALOG.metadata(key)
}

/// Builds the prompt for `subject` in the icon style at `key`.
pub fn generate_icon_prompt(key: u32, subject: &str) -> String {
    CATALOG.generate(key, subject)
}

pub fn is_valid_style(key: u32) -> bool {
    CATALOG.is_valid(key)
}
