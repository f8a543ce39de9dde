//! Style record and metadata types.

use serde::Serialize;
use serde_json::Value;

use crate::preview::{parse_preview, Preview, PreviewError};

/// Builds a prompt template for a subject.
///
/// The returned value always has the same shape; only the subject leaves vary.
pub type TemplateFn = fn(&str) -> Value;

/// The display fields of a style, as rendered by a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    /// CSS-like background descriptor used for preview tiles.
    pub preview_style: &'static str,
}

impl StyleMetadata {
    /// Parses [`preview_style`](Self::preview_style) into colors.
    pub fn preview(&self) -> Result<Preview, PreviewError> {
        parse_preview(self.preview_style)
    }
}

/// A named style: UI metadata plus the template that fills in a subject.
///
/// Records are declared as `const` tables and never change after startup.
///
/// # Example
///
/// ```rust
/// use promptstyle::StyleRecord;
/// use serde_json::json;
///
/// let sketch = StyleRecord::new(
///     7,
///     "Sketch",
///     "✏️",
///     "Pencil lines",
///     "background: #FFFFFF;",
///     |subject| json!({ "object": subject, "medium": "pencil" }),
/// );
/// assert_eq!(sketch.template("a kettle").unwrap()["object"], "a kettle");
///
/// let later = StyleRecord::coming_soon(8, "Style 8", "🔜", "Coming soon", "background: #9e9e9e;");
/// assert!(later.is_coming_soon());
/// ```
#[derive(Clone, Copy)]
pub struct StyleRecord {
    pub key: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub preview_style: &'static str,
    template: Option<TemplateFn>,
}

impl StyleRecord {
    /// Declares an available style.
    pub const fn new(
        key: u32,
        name: &'static str,
        emoji: &'static str,
        description: &'static str,
        preview_style: &'static str,
        template: TemplateFn,
    ) -> Self {
        Self {
            key,
            name,
            emoji,
            description,
            preview_style,
            template: Some(template),
        }
    }

    /// Declares a placeholder style that is listed but has no template yet.
    pub const fn coming_soon(
        key: u32,
        name: &'static str,
        emoji: &'static str,
        description: &'static str,
        preview_style: &'static str,
    ) -> Self {
        Self {
            key,
            name,
            emoji,
            description,
            preview_style,
            template: None,
        }
    }

    pub fn is_coming_soon(&self) -> bool {
        self.template.is_none()
    }

    /// Returns the display fields of this record.
    pub fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            name: self.name,
            emoji: self.emoji,
            description: self.description,
            preview_style: self.preview_style,
        }
    }

    /// Fills the template with `subject`.
    ///
    /// Returns `None` for coming-soon records.
    pub fn template(&self, subject: &str) -> Option<Value> {
        self.template.map(|build| build(subject))
    }
}

impl std::fmt::Debug for StyleRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRecord")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("emoji", &self.emoji)
            .field("description", &self.description)
            .field("preview_style", &self.preview_style)
            .field("coming_soon", &self.is_coming_soon())
            .finish()
    }
}
