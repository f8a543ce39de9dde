//! Style catalogs: a registry plus the rules for keys it cannot serve.
//!
//! Both built-in style sets share the same lookup-and-substitute path and
//! differ only in what happens around it:
//!
//! - the **fallback** used when a key is unknown or its style is coming soon
//! - an optional **no-style sentinel** key that bypasses the registry and
//!   returns the caller's text untouched
//!
//! # Example
//!
//! ```rust
//! use promptstyle::{Fallback, StyleCatalog, StyleKind, StyleMetadata, StyleRecord};
//! use serde_json::json;
//!
//! const RAW: StyleMetadata = StyleMetadata {
//!     name: "Raw",
//!     emoji: "✨",
//!     description: "Use prompt as-is",
//!     preview_style: "background: #0078d4;",
//! };
//!
//! let catalog = StyleCatalog::new(
//!     StyleKind::Image,
//!     &[StyleRecord::new(1, "Boxed", "📦", "", "", |s| json!({ "subject": s }))],
//! )
//! .with_fallback(Fallback::Passthrough)
//! .with_no_style(0, RAW);
//!
//! assert_eq!(catalog.generate(0, "a fox"), "a fox");
//! assert_eq!(catalog.generate(9, "a fox"), "a fox");
//! assert!(catalog.generate(1, "a fox").starts_with("Create an image:\n"));
//! ```

use crate::kind::StyleKind;
use crate::prompt::render_prompt;
use crate::style::{RegistryError, StyleMetadata, StyleRecord, StyleRegistry};

/// What [`StyleCatalog::generate`] returns when it has no template to fill.
#[derive(Clone, Copy)]
pub enum Fallback {
    /// Return the subject unchanged.
    Passthrough,
    /// Build a plain-text prompt around the subject.
    Sentence(fn(&str) -> String),
}

impl Fallback {
    pub fn apply(&self, subject: &str) -> String {
        match self {
            Fallback::Passthrough => subject.to_string(),
            Fallback::Sentence(build) => build(subject),
        }
    }
}

impl std::fmt::Debug for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fallback::Passthrough => f.write_str("Passthrough"),
            Fallback::Sentence(_) => f.write_str("Sentence(..)"),
        }
    }
}

/// A style set: its registry, fallback policy and optional sentinel.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    kind: StyleKind,
    registry: StyleRegistry,
    fallback: Fallback,
    no_style: Option<(u32, StyleMetadata)>,
}

impl StyleCatalog {
    /// Creates a catalog with a passthrough fallback and no sentinel.
    pub fn new(kind: StyleKind, records: &[StyleRecord]) -> Self {
        Self {
            kind,
            registry: StyleRegistry::new(records),
            fallback: Fallback::Passthrough,
            no_style: None,
        }
    }

    /// Sets the fallback policy, returning the catalog for chaining.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Reserves `key` as the "no style" choice described by `metadata`.
    pub fn with_no_style(mut self, key: u32, metadata: StyleMetadata) -> Self {
        self.no_style = Some((key, metadata));
        self
    }

    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Returns the number of registered styles, excluding the sentinel.
    pub fn count(&self) -> usize {
        self.registry.len()
    }

    /// Returns the display fields for a registered key.
    ///
    /// The sentinel is not a registry key and yields `None`; use
    /// [`no_style`](Self::no_style) for its metadata.
    pub fn metadata(&self, key: u32) -> Option<StyleMetadata> {
        self.registry.metadata(key)
    }

    /// Returns the sentinel key and metadata, if this catalog has one.
    pub fn no_style(&self) -> Option<(u32, StyleMetadata)> {
        self.no_style
    }

    /// True iff `key` is registered, coming-soon styles included.
    pub fn is_valid(&self, key: u32) -> bool {
        self.registry.contains(key)
    }

    /// True for the sentinel and for registered styles that have a template.
    pub fn is_available(&self, key: u32) -> bool {
        self.is_no_style(key)
            || self
                .registry
                .get(key)
                .is_some_and(|record| !record.is_coming_soon())
    }

    fn is_no_style(&self, key: u32) -> bool {
        matches!(self.no_style, Some((sentinel, _)) if sentinel == key)
    }

    /// Builds the prompt text for `subject` in the style at `key`.
    ///
    /// The sentinel returns `subject` as-is. Unknown keys and coming-soon
    /// styles go through the fallback. This never fails.
    pub fn generate(&self, key: u32, subject: &str) -> String {
        if self.is_no_style(key) {
            return subject.to_string();
        }

        match self.registry.get(key) {
            Some(record) => match record.template(subject) {
                Some(template) => render_prompt(&template),
                None => {
                    tracing::debug!(kind = %self.kind, key, style = record.name, "style is coming soon, using fallback");
                    self.fallback.apply(subject)
                }
            },
            None => {
                tracing::debug!(kind = %self.kind, key, "unknown style, using fallback");
                self.fallback.apply(subject)
            }
        }
    }

    /// Checks the registry and that the sentinel key is not also registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] or [`RegistryError::ReservedKey`].
    pub fn validate(&self) -> Result<(), RegistryError> {
        self.registry.validate()?;
        if let Some((key, _)) = self.no_style {
            if let Some(record) = self.registry.get(key) {
                return Err(RegistryError::ReservedKey {
                    key,
                    name: record.name,
                });
            }
        }
        Ok(())
    }
}
