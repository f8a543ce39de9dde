//! Style records and the registry that indexes them.
//!
//! This module provides the core primitives shared by the icon and image
//! style sets:
//!
//! - [`StyleRecord`]: A named style with UI metadata and an optional template
//! - [`StyleMetadata`]: The display-only fields of a record
//! - [`StyleRegistry`]: Key-ordered lookup of records
//! - [`RegistryError`]: Errors from registry validation
//!
//! A record without a template is "coming soon": it shows up in listings
//! but generating a prompt for it falls back to the owning catalog's policy.

mod error;
mod record;
mod registry;

pub use error::RegistryError;
pub use record::{StyleMetadata, StyleRecord, TemplateFn};
pub use registry::StyleRegistry;
