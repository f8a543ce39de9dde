//! Helpers for presenting style metadata in a terminal.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use promptstyle::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // The 3D Clay navy lands in the dark blue corner of the cube
/// assert_eq!(rgb_to_ansi256((0x00, 0x0F, 0x47)), 17);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Truncates a string to a maximum display width, ending with `…` when cut.
///
/// Emoji and CJK characters count as two columns.
///
/// # Example
///
/// ```rust
/// use promptstyle::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hyperrealistic", 20), "Hyperrealistic");
/// assert_eq!(truncate_to_width("Corporate geometric", 10), "Corporate…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

/// Returns the display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let light = rgb_to_ansi256((0xe0, 0xe0, 0xe0));
        assert!((232..=255).contains(&light));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
        assert_eq!(rgb_to_ansi256((0xFF, 0xBF, 0x00)), 214);
    }

    #[test]
    fn test_truncate_to_width_no_truncation() {
        assert_eq!(truncate_to_width("Extreme detail", 14), "Extreme detail");
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_to_width_with_truncation() {
        assert_eq!(truncate_to_width("Dark blue matte", 6), "Dark …");
        assert_eq!(truncate_to_width("123456", 5), "1234…");
    }

    #[test]
    fn test_truncate_to_width_wide_chars() {
        // "🔬" is two columns wide and does not fit in the one column left
        assert_eq!(truncate_to_width("a🔬b", 3), "a…");
    }

    #[test]
    fn test_truncate_to_width_zero_width() {
        assert_eq!(truncate_to_width("Hello", 0), "…");
        assert_eq!(truncate_to_width("Hello", 1), "…");
    }

    #[test]
    fn test_display_width_counts_emoji_as_two() {
        assert_eq!(display_width("🔷"), 2);
        assert_eq!(display_width("abc"), 3);
    }
}
