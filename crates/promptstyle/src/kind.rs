//! Style set selection.

use std::fmt;

/// Which style set a key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum StyleKind {
    /// Single-object icons on a transparent background.
    Icon,
    /// Full images built around the user's prompt.
    Image,
}

impl StyleKind {
    pub const ALL: [StyleKind; 2] = [StyleKind::Icon, StyleKind::Image];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKind::Icon => "icon",
            StyleKind::Image => "image",
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
