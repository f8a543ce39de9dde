//! # Promptstyle - Structured Prompt Templates for Image Generation
//!
//! Promptstyle holds a fixed set of visual styles for an image-generation API.
//! Each style has UI metadata (name, emoji, description, preview colors) and a
//! template that turns a subject into a structured JSON prompt.
//!
//! ## Core Concepts
//!
//! - [`StyleRecord`]: A named style with its template
//! - [`StyleRegistry`]: Records indexed by small integer keys
//! - [`StyleCatalog`]: A registry plus its fallback rules
//! - [`icon`] and [`image`]: The two built-in style sets
//!
//! ## Quick Start
//!
//! ```rust
//! use promptstyle::{icon, image};
//!
//! let prompt = icon::generate_icon_prompt(1, "a red shoe");
//! assert!(prompt.starts_with("Create an image:\n"));
//!
//! // Key 0 sends the user's prompt untouched
//! assert_eq!(image::generate_image_prompt(0, "a red shoe"), "a red shoe");
//! ```
//!
//! ## Fallbacks
//!
//! Nothing here returns an error to the caller. Unknown keys yield `None` or
//! `false` from the lookups, and prompt generation falls back to plain text:
//! a one-line description for icons, the raw prompt for images.
//!
//! ## Selecting a Style Set at Runtime
//!
//! ```rust
//! use promptstyle::{catalog, StyleKind};
//!
//! for kind in StyleKind::ALL {
//!     let styles = catalog(kind);
//!     assert_eq!(styles.count(), 4);
//! }
//! ```

#![recursion_limit = "512"]

mod catalog;
pub mod icon;
pub mod image;
mod kind;
mod preview;
mod prompt;
mod style;
mod util;

pub use catalog::{Fallback, StyleCatalog};
pub use kind::StyleKind;
pub use preview::{parse_preview, Preview, PreviewError, Rgb};
pub use prompt::{render_prompt, PROMPT_PREFIX};
pub use style::{RegistryError, StyleMetadata, StyleRecord, StyleRegistry, TemplateFn};
pub use util::{display_width, rgb_to_ansi256, truncate_to_width};

/// Returns the built-in catalog for a style set.
pub fn catalog(kind: StyleKind) -> &'static StyleCatalog {
    match kind {
        StyleKind::Icon => icon::catalog(),
        StyleKind::Image => image::catalog(),
    }
}
