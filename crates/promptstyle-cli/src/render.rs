//! Template rendering for command views.

use std::collections::HashMap;

use console::Style;
use minijinja::{Environment, Error, Value};
use promptstyle::{display_width, parse_preview, truncate_to_width, Preview};
use serde::Serialize;

use crate::output::OutputMode;

/// Prefix shown in front of text styled with a name the palette lacks.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

const LIST_TEMPLATE: &str = r#"{% for section in sections %}
{{ section.title | style("heading") }}
{% for s in section.styles %}
{{ s.key | pad(4) | style("key") }}{{ s.emoji | pad(3) }}{{ s.name | pad(20) | style("name" if s.available else "muted") }}{{ s.description | truncate_at(24) | pad(26) | style("muted") }}{{ s.previewStyle | swatch }}{{ "  coming soon" | style("soon") if not s.available else "" }}
{% endfor %}
{% if not loop.last %}

{% endif %}
{% endfor %}
"#;

const SHOW_TEMPLATE: &str = r#"{{ meta.emoji }} {{ meta.name | style("heading") }}{{ "  (coming soon)" | style("soon") if not available else "" }}
{{ "kind" | pad(13) | style("label") }}{{ kind }}
{{ "key" | pad(13) | style("label") }}{{ key }}
{{ "description" | pad(13) | style("label") }}{{ meta.description }}
{{ "preview" | pad(13) | style("label") }}{{ meta.previewStyle | swatch }}
"#;

/// Named terminal styles used by the `style` filter.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: HashMap<&'static str, Style>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
            .add("heading", Style::new().bold().underlined())
            .add("key", Style::new().cyan())
            .add("name", Style::new().bold())
            .add("muted", Style::new().dim())
            .add("label", Style::new().dim())
            .add("soon", Style::new().yellow().italic())
    }
}

impl Palette {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies the named style, or returns `text` as-is when color is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(_) if !use_color => text.to_string(),
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{MISSING_STYLE_INDICATOR}{text}"),
        }
    }
}

/// Draws a preview style as colored blocks, or as hex codes without color.
pub fn swatch(preview: &Preview, use_color: bool) -> String {
    if use_color {
        let mut out: String = preview
            .background
            .iter()
            .map(|rgb| {
                Style::new()
                    .color256(rgb.to_ansi256())
                    .force_styling(true)
                    .apply_to("██")
                    .to_string()
            })
            .collect();
        if let Some(border) = preview.border {
            let edge = Style::new()
                .color256(border.to_ansi256())
                .force_styling(true)
                .apply_to("▐");
            out = format!("{edge}{out}{edge}");
        }
        out
    } else {
        let separator = if preview.gradient { "→" } else { " " };
        let mut out = preview
            .background
            .iter()
            .map(|rgb| rgb.to_hex())
            .collect::<Vec<_>>()
            .join(separator);
        if let Some(border) = preview.border {
            out.push_str(&format!(" (border {})", border.to_hex()));
        }
        out
    }
}

/// Registers the view filters on a minijinja environment.
fn register_filters(env: &mut Environment<'static>, palette: Palette, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        palette.apply(&name, &value.to_string(), use_color)
    });

    env.add_filter("swatch", move |value: Value| -> String {
        let css = value.to_string();
        match parse_preview(&css) {
            Ok(preview) => swatch(&preview, use_color),
            Err(err) => {
                tracing::warn!(preview = %css, error = %err, "unreadable preview style");
                "?".to_string()
            }
        }
    });

    // Pads to a display width so rows with emoji stay aligned
    env.add_filter("pad", |value: Value, width: usize| -> String {
        let text = value.to_string();
        let fill = width.saturating_sub(display_width(&text));
        format!("{text}{}", " ".repeat(fill))
    });

    env.add_filter("truncate_at", |value: Value, width: usize| -> String {
        truncate_to_width(&value.to_string(), width)
    });
}

/// A renderer with the command views pre-registered.
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    /// Creates a renderer for the given output mode.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in view fails to compile.
    pub fn new(mode: OutputMode) -> Result<Self, Error> {
        Self::with_palette(mode, Palette::default())
    }

    pub fn with_palette(mode: OutputMode, palette: Palette) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, palette, mode.should_use_color());
        env.add_template("list", LIST_TEMPLATE)?;
        env.add_template("show", SHOW_TEMPLATE)?;
        Ok(Self { env, mode })
    }

    /// Renders a registered view with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    /// Renders a view, or serializes `data` as JSON in [`OutputMode::Json`].
    pub fn render_or_serialize<T: Serialize>(&self, name: &str, data: &T) -> anyhow::Result<String> {
        if self.mode.is_structured() {
            Ok(serde_json::to_string_pretty(data)?)
        } else {
            Ok(self.render(name, data)?)
        }
    }
}
