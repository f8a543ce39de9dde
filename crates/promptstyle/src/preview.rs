//! Preview style parsing.
//!
//! Every style carries a small CSS declaration list, such as
//! `background: linear-gradient(135deg, #000F47, #001a5c);`, which a UI uses
//! to paint the style's picker tile. [`parse_preview`] extracts the colors
//! from it so non-browser front-ends can draw a comparable swatch.

use cssparser::{Delimiter, ParseError, ParseErrorKind, Parser, ParserInput, Token};
use serde::Serialize;

use crate::util::rgb_to_ansi256;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `RRGGBB` or `RGB` hex digits, with or without a leading `#`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use promptstyle::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#000B39"), Some(Rgb(0x00, 0x0B, 0x39)));
    /// assert_eq!(Rgb::from_hex("fff"), Some(Rgb(255, 255, 255)));
    /// assert_eq!(Rgb::from_hex("#12345"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        match hex.len() {
            6 => Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => Some(Rgb(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            _ => None,
        }
    }

    /// Formats as uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Returns the nearest ANSI 256-color palette index.
    pub fn to_ansi256(&self) -> u8 {
        rgb_to_ansi256((self.0, self.1, self.2))
    }
}

/// Colors extracted from a preview style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Background colors in declaration order (gradient stops included).
    pub background: Vec<Rgb>,
    /// Whether the background is a gradient rather than a solid fill.
    pub gradient: bool,
    pub border: Option<Rgb>,
}

/// Error returned when a preview style cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("invalid preview style at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },
    #[error("invalid color '#{0}'")]
    InvalidColor(String),
}

type CssError<'i> = ParseError<'i, PreviewError>;

/// Parses a preview style declaration list.
///
/// Only `background`/`background-color` and `border`/`border-color` are
/// read; other properties are skipped.
///
/// # Example
///
/// ```rust
/// use promptstyle::{parse_preview, Rgb};
///
/// let preview = parse_preview("background: #FFFFFF; border: 2px solid #000B39;").unwrap();
/// assert_eq!(preview.background, vec![Rgb(255, 255, 255)]);
/// assert_eq!(preview.border, Some(Rgb(0x00, 0x0B, 0x39)));
/// assert!(!preview.gradient);
/// ```
pub fn parse_preview(css: &str) -> Result<Preview, PreviewError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut preview = Preview::default();

    while !parser.is_exhausted() {
        parser
            .parse_until_after(Delimiter::Semicolon, |p| {
                parse_declaration(p, &mut preview)
            })
            .map_err(into_preview_error)?;
    }

    Ok(preview)
}

fn parse_declaration<'i, 't>(
    p: &mut Parser<'i, 't>,
    preview: &mut Preview,
) -> Result<(), CssError<'i>> {
    let name = p.expect_ident()?.clone();
    p.expect_colon()?;

    let mut colors = Vec::new();
    let gradient = collect_colors(p, &mut colors)?;

    match name.to_ascii_lowercase().as_str() {
        "background" | "background-color" => {
            preview.background = colors;
            preview.gradient = gradient;
        }
        "border" | "border-color" => preview.border = colors.first().copied(),
        other => tracing::trace!(property = other, "ignoring preview property"),
    }
    Ok(())
}

/// Collects hex colors until the end of the current block.
///
/// Returns whether a gradient function was seen.
fn collect_colors<'i, 't>(
    p: &mut Parser<'i, 't>,
    colors: &mut Vec<Rgb>,
) -> Result<bool, CssError<'i>> {
    let mut gradient = false;

    while !p.is_exhausted() {
        let token = p.next()?.clone();
        match token {
            Token::Hash(ref digits) | Token::IDHash(ref digits) => match Rgb::from_hex(digits) {
                Some(rgb) => colors.push(rgb),
                None => {
                    return Err(p.new_custom_error(PreviewError::InvalidColor(digits.to_string())))
                }
            },
            Token::Function(ref function) => {
                gradient |= function.to_ascii_lowercase().ends_with("gradient");
                p.parse_nested_block(|nested| collect_colors(nested, colors).map(|_| ()))?;
            }
            _ => {}
        }
    }

    Ok(gradient)
}

fn into_preview_error(err: CssError<'_>) -> PreviewError {
    match err.kind {
        ParseErrorKind::Custom(e) => e,
        ParseErrorKind::Basic(_) => PreviewError::Syntax {
            line: err.location.line + 1,
            column: err.location.column,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex_long_and_short() {
        assert_eq!(Rgb::from_hex("#FFBF00"), Some(Rgb(255, 191, 0)));
        assert_eq!(Rgb::from_hex("c4c4c4"), Some(Rgb(196, 196, 196)));
        assert_eq!(Rgb::from_hex("#0f0"), Some(Rgb(0, 255, 0)));
    }

    #[test]
    fn test_rgb_from_hex_rejects_garbage() {
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
        assert_eq!(Rgb::from_hex("+ff"), None);
        assert_eq!(Rgb::from_hex("#abcd"), None);
    }

    #[test]
    fn test_rgb_to_hex_is_uppercase() {
        assert_eq!(Rgb(0, 15, 71).to_hex(), "#000F47");
    }

    #[test]
    fn test_parse_solid_background_with_border() {
        let preview = parse_preview("background: #FFFFFF; border: 2px solid #000B39;").unwrap();
        assert_eq!(preview.background, vec![Rgb(255, 255, 255)]);
        assert!(!preview.gradient);
        assert_eq!(preview.border, Some(Rgb(0, 11, 57)));
    }

    #[test]
    fn test_parse_linear_gradient() {
        let preview =
            parse_preview("background: linear-gradient(135deg, #2d5016, #4a7c23);").unwrap();
        assert!(preview.gradient);
        assert_eq!(
            preview.background,
            vec![Rgb(0x2d, 0x50, 0x16), Rgb(0x4a, 0x7c, 0x23)]
        );
        assert_eq!(preview.border, None);
    }

    #[test]
    fn test_parse_without_trailing_semicolon() {
        let preview = parse_preview("background-color: #106ebe").unwrap();
        assert_eq!(preview.background, vec![Rgb(0x10, 0x6e, 0xbe)]);
    }

    #[test]
    fn test_parse_ignores_unknown_properties() {
        let preview = parse_preview("color: #000000; background: #e0e0e0;").unwrap();
        assert_eq!(preview.background, vec![Rgb(0xe0, 0xe0, 0xe0)]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_preview("").unwrap(), Preview::default());
    }

    #[test]
    fn test_parse_invalid_color() {
        let err = parse_preview("background: #12345;").unwrap_err();
        assert_eq!(err, PreviewError::InvalidColor("12345".to_string()));
    }

    #[test]
    fn test_parse_syntax_error() {
        let err = parse_preview("background #FFFFFF;").unwrap_err();
        assert!(matches!(err, PreviewError::Syntax { line: 1, .. }));
    }
}
