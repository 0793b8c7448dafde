//! Turn the nested bullet lists of an outline into markdown subheadings.
//!
//! Each bullet becomes a heading one level deeper than the heading above it,
//! plus one level per four spaces of indentation. Everything else is copied
//! through unchanged, so the output has exactly as many lines as the input.

mod config;
mod line;
mod parser;
mod render;

pub use config::{Config, ConfigError, ConvertConfig, MAX_HEADING_LEVEL};
pub use line::{Line, LineKind};
pub use render::subheading_level;

/// Classify every line of markdown text using the default indent width.
pub fn parse(markdown: &str) -> Vec<Line> {
    parser::parse(markdown, ConvertConfig::default().indent_width)
}

/// Convert bullets to subheadings using default config.
pub fn convert(markdown: &str) -> String {
    convert_with_config(markdown, &Config::compiled_default())
}

/// Convert bullets to subheadings with custom config.
pub fn convert_with_config(markdown: &str, config: &Config) -> String {
    let lines = parser::parse(markdown, config.convert.indent_width);
    render::lines_to_markdown(&lines, &config.convert)
}
