//! Image styles.
//!
//! Key `0` is the "No Style" sentinel: the user's prompt is sent as-is.
//! Key `1` is Macro Close-up; keys `2` to `4` are placeholders that are
//! listed in pickers but are not available yet. Unavailable and unknown
//! keys also return the user's prompt unchanged.
//!
//! # Example
//!
//! ```rust
//! use promptstyle::image;
//!
//! assert_eq!(image::generate_image_prompt(0, "a fox in snow"), "a fox in snow");
//! assert_eq!(image::generate_image_prompt(2, "a fox in snow"), "a fox in snow");
//! assert!(image::generate_image_prompt(1, "a fox in snow").starts_with("Create an image:\n"));
//!
//! assert!(image::is_image_style_available(0));
//! assert!(!image::is_image_style_available(3));
//! ```

mod templates;

use once_cell::sync::Lazy;

use crate::catalog::{Fallback, StyleCatalog};
use crate::kind::StyleKind;
use crate::style::{StyleMetadata, StyleRecord};

/// Key that always means "no style".
pub const NO_STYLE_KEY: u32 = 0;

/// Display fields of the "no style" choice.
pub const NO_STYLE: StyleMetadata = StyleMetadata {
    name: "No Style",
    emoji: "✨",
    description: "Use prompt as-is",
    preview_style: "background: linear-gradient(135deg, #0078d4, #106ebe);",
};

const PLACEHOLDER_PREVIEW: &str = "background: linear-gradient(135deg, #e0e0e0, #9e9e9e);";

/// The built-in image style table.
pub const STYLES: [StyleRecord; 4] = [
    StyleRecord::new(
        1,
        "Macro Close-up",
        "🔬",
        "Extreme detail",
        "background: linear-gradient(135deg, #2d5016, #4a7c23);",
        templates::macro_close_up,
    ),
    StyleRecord::coming_soon(2, "Style 2", "🔜", "Coming soon", PLACEHOLDER_PREVIEW),
    StyleRecord::coming_soon(3, "Style 3", "🔜", "Coming soon", PLACEHOLDER_PREVIEW),
    StyleRecord::coming_soon(4, "Style 4", "🔜", "Coming soon", PLACEHOLDER_PREVIEW),
];

static CATALOG: Lazy<StyleCatalog> = Lazy::new(|| {
    StyleCatalog::new(StyleKind::Image, &STYLES)
        .with_fallback(Fallback::Passthrough)
        .with_no_style(NO_STYLE_KEY, NO_STYLE)
});

/// Returns the image style catalog.
pub fn catalog() -> &'static StyleCatalog {
    &CATALOG
}

/// Returns the number of image styles, not counting "No Style".
pub fn image_style_count() -> usize {
    CATALOG.count()
}

/// Returns the display fields of a registered image style.
///
/// `NO_STYLE_KEY` is not registered; see [`no_style`].
pub fn style_metadata(key: u32) -> Option<StyleMetadata> {
    CATALOG.metadata(key)
}

pub fn no_style() -> StyleMetadata {
    NO_STYLE
}

/// Builds the prompt sent to the API for `user_prompt` in the style at `key`.
pub fn generate_image_prompt(key: u32, user_prompt: &str) -> String {
    CATALOG.generate(key, user_prompt)
}

/// True for "No Style" and for styles that are not coming soon.
pub fn is_image_style_available(key: u32) -> bool {
    CATALOG.is_available(key)
}

/// True iff `key` is a registered image style, placeholders included.
pub fn is_valid_style(key: u32) -> bool {
    CATALOG.is_valid(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PROMPT_PREFIX;
    use serde_json::Value;

    #[test]
    fn test_catalog_is_consistent() {
        assert!(catalog().validate().is_ok());
        assert_eq!(catalog().no_style(), Some((NO_STYLE_KEY, NO_STYLE)));
    }

    #[test]
    fn test_image_style_count_excludes_no_style() {
        assert_eq!(image_style_count(), 4);
    }

    #[test]
    fn test_no_style_passthrough() {
        assert_eq!(generate_image_prompt(0, "anything"), "anything");
        assert_eq!(generate_image_prompt(0, ""), "");
        assert_eq!(style_metadata(0), None);
        assert!(!is_valid_style(0));
        assert_eq!(no_style().name, "No Style");
    }

    #[test]
    fn test_coming_soon_passthrough() {
        for key in 2..=4 {
            assert!(is_valid_style(key));
            assert!(!is_image_style_available(key));
            assert_eq!(generate_image_prompt(key, "anything"), "anything");
            assert_eq!(style_metadata(key).map(|m| m.description), Some("Coming soon"));
        }
    }

    #[test]
    fn test_unknown_key_passthrough() {
        assert!(!is_image_style_available(5));
        assert!(!is_valid_style(5));
        assert_eq!(style_metadata(5), None);
        assert_eq!(generate_image_prompt(5, "anything"), "anything");
    }

    #[test]
    fn test_macro_close_up_prompt() {
        assert!(is_image_style_available(1));

        let prompt = generate_image_prompt(1, "dew on a spider web");
        let body = prompt.strip_prefix(PROMPT_PREFIX).unwrap();
        let json: Value = serde_json::from_str(body).unwrap();

        assert_eq!(json["subject"]["type"], "dew on a spider web");
        assert_eq!(json["style_id"], "merged_close_up_macro_immersive");
        assert_eq!(json["camera"]["lens_profile"]["primary_lens_mm"], 90);
        assert_eq!(
            json["composition"]["subject_placement"]["safe_padding_ratio"],
            0.12
        );
        assert_eq!(json["output"]["recommended_resolution"], "2048x2048");
    }

    #[test]
    fn test_macro_close_up_starts_with_task_type() {
        let prompt = generate_image_prompt(1, "a moth wing");
        assert!(prompt.starts_with("Create an image:\n{\n  \"task_type\": \"generation\",\n"));
    }

    #[test]
    fn test_previews_parse() {
        for record in &STYLES {
            assert!(record.metadata().preview().unwrap().gradient);
        }
        assert!(NO_STYLE.preview().is_ok());
    }
}
