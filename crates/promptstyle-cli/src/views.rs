//! Data behind each command's output.
//!
//! These are what the view templates render and what `--output json`
//! prints directly.

use promptstyle::{catalog, StyleCatalog, StyleKind, StyleMetadata, StyleRecord};
use serde::Serialize;

/// One row of `list`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRow {
    pub key: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub preview_style: &'static str,
    pub available: bool,
}

impl StyleRow {
    fn new(key: u32, meta: StyleMetadata, available: bool) -> Self {
        Self {
            key,
            name: meta.name,
            emoji: meta.emoji,
            description: meta.description,
            preview_style: meta.preview_style,
            available,
        }
    }

    fn from_record(record: &StyleRecord) -> Self {
        Self::new(record.key, record.metadata(), !record.is_coming_soon())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub kind: StyleKind,
    pub title: String,
    pub styles: Vec<StyleRow>,
}

impl Section {
    /// Lists a catalog in picker order: the no-style choice first, then by key.
    pub fn from_catalog(styles: &StyleCatalog) -> Self {
        let mut rows: Vec<StyleRow> = styles
            .no_style()
            .map(|(key, meta)| StyleRow::new(key, meta, true))
            .into_iter()
            .collect();
        rows.extend(styles.registry().iter().map(StyleRow::from_record));

        Self {
            kind: styles.kind(),
            title: format!("{} styles", capitalize(styles.kind().as_str())),
            styles: rows,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub sections: Vec<Section>,
}

impl ListView {
    /// Lists one style set, or both when `kind` is `None`.
    pub fn new(kind: Option<StyleKind>) -> Self {
        let kinds = match kind {
            Some(kind) => vec![kind],
            None => StyleKind::ALL.to_vec(),
        };
        Self {
            sections: kinds
                .into_iter()
                .map(|kind| Section::from_catalog(catalog(kind)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowView {
    pub kind: StyleKind,
    pub key: u32,
    pub available: bool,
    pub meta: StyleMetadata,
}

impl ShowView {
    /// Describes one style; `None` when the key is neither registered nor
    /// the set's no-style choice.
    pub fn new(kind: StyleKind, key: u32) -> Option<Self> {
        let styles = catalog(kind);
        let meta = match styles.no_style() {
            Some((sentinel, meta)) if sentinel == key => meta,
            _ => styles.metadata(key)?,
        };
        Some(Self {
            kind,
            key,
            available: styles.is_available(key),
            meta,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateView {
    pub kind: StyleKind,
    pub key: u32,
    /// Whether the prompt came from a style template rather than a fallback.
    pub styled: bool,
    pub prompt: String,
}

impl GenerateView {
    pub fn new(kind: StyleKind, key: u32, subject: &str) -> Self {
        let styles = catalog(kind);
        let styled = styles.registry().get(key).is_some_and(|r| !r.is_coming_soon());
        Self {
            kind,
            key,
            styled,
            prompt: styles.generate(key, subject),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_sections() {
        let view = ListView::new(None);
        let kinds: Vec<StyleKind> = view.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StyleKind::Icon, StyleKind::Image]);
        assert_eq!(view.sections[0].title, "Icon styles");
        assert_eq!(view.sections[0].styles.len(), 4);
    }

    #[test]
    fn test_image_section_starts_with_no_style() {
        let view = ListView::new(Some(StyleKind::Image));
        let section = &view.sections[0];
        let keys: Vec<u32> = section.styles.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);
        assert_eq!(section.styles[0].name, "No Style");
        assert!(section.styles[0].available);
        assert!(section.styles[1].available);
        assert!(!section.styles[2].available);
    }

    #[test]
    fn test_show_no_style_and_unknown() {
        let view = ShowView::new(StyleKind::Image, 0).unwrap();
        assert_eq!(view.meta.name, "No Style");
        assert!(view.available);

        assert!(ShowView::new(StyleKind::Icon, 0).is_none());
        assert!(ShowView::new(StyleKind::Image, 9).is_none());
    }

    #[test]
    fn test_generate_view_flags_fallbacks() {
        assert!(GenerateView::new(StyleKind::Icon, 3, "a vase").styled);

        let passthrough = GenerateView::new(StyleKind::Image, 0, "a vase");
        assert!(!passthrough.styled);
        assert_eq!(passthrough.prompt, "a vase");

        assert!(!GenerateView::new(StyleKind::Image, 2, "a vase").styled);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("icon"), "Icon");
        assert_eq!(capitalize(""), "");
    }
}
