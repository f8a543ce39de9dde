//! Output mode selection.

use clap::ValueEnum;

/// How command output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout supports color, plain otherwise.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// The command's data as JSON instead of a rendered view.
    Json,
}

impl OutputMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    /// True when output is serialized data rather than a template.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_by_mode() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
    }

    #[test]
    fn test_structured_only_for_json() {
        assert!(OutputMode::Json.is_structured());
        assert!(!OutputMode::Auto.is_structured());
        assert!(!OutputMode::Text.is_structured());
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(OutputMode::default(), OutputMode::Auto);
    }
}
