//! Command-line viewer for promptstyle's icon and image styles.
//!
//! ```text
//! promptstyle list [--kind icon|image]
//! promptstyle show <KIND> <KEY>
//! promptstyle generate <KIND> <KEY> <SUBJECT>...
//! ```
//!
//! Every command accepts `--output auto|term|text|json`, also read from
//! `PROMPTSTYLE_OUTPUT`. Log verbosity follows `PROMPTSTYLE_LOG`
//! (`tracing-subscriber` filter syntax).

mod output;
mod render;
mod views;

use anyhow::bail;
use clap::{Parser, Subcommand};
use promptstyle::StyleKind;

pub use output::OutputMode;
pub use render::{swatch, Palette, Renderer, MISSING_STYLE_INDICATOR};
pub use views::{GenerateView, ListView, Section, ShowView, StyleRow};

/// Browse icon and image styles and build prompts from them.
#[derive(Debug, Parser)]
#[command(name = "promptstyle", version)]
pub struct Cli {
    /// Output mode
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Auto,
        env = "PROMPTSTYLE_OUTPUT"
    )]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List styles with their keys and previews
    List {
        /// Only list this style set
        #[arg(long, value_enum)]
        kind: Option<StyleKind>,
    },
    /// Show the metadata of one style
    Show {
        #[arg(value_enum)]
        kind: StyleKind,
        key: u32,
    },
    /// Print the prompt for a subject in a style
    Generate {
        #[arg(value_enum)]
        kind: StyleKind,
        key: u32,
        /// What to depict; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        subject: Vec<String>,
    },
}

/// Runs a parsed command and returns what should be printed.
///
/// # Errors
///
/// Fails when `show` is given a key the style set does not have, or when a
/// view cannot be rendered.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let renderer = Renderer::new(cli.output)?;

    match &cli.command {
        Command::List { kind } => {
            let output = renderer.render_or_serialize("list", &ListView::new(*kind))?;
            Ok(output.trim_end().to_string())
        }
        Command::Show { kind, key } => {
            let Some(view) = ShowView::new(*kind, *key) else {
                bail!("no {kind} style with key {key}");
            };
            let output = renderer.render_or_serialize("show", &view)?;
            Ok(output.trim_end().to_string())
        }
        Command::Generate { kind, key, subject } => {
            let view = GenerateView::new(*kind, *key, &subject.join(" "));
            tracing::debug!(kind = %kind, key, styled = view.styled, "generated prompt");
            if cli.output.is_structured() {
                Ok(serde_json::to_string_pretty(&view)?)
            } else {
                Ok(view.prompt)
            }
        }
    }
}
