mod chunk;
mod config;
mod error;
mod html;
mod node;
mod parser;
mod surface;

pub use chunk::{ChunkPattern, MatchMode, chunk};
pub use config::{Config, HtmlConfig, TagsConfig};
pub use error::{Error, Result};
pub use html::{HtmlSurface, document_to_html};
pub use node::{Document, Item, Match, Segment, Style, StyledNode};
pub use parser::{DELETE_MARKER, build, classify, coalesce, strip};
pub use surface::{Surface, mount};

/// Parse overstruck man(1) output into a document of styled runs.
///
/// # Errors
///
/// Only fails if chunking rejects the overstrike pattern.
pub fn parse(text: &str) -> Result<Document> {
    parser::parse(text)
}

/// Convert overstruck text to HTML using default config.
///
/// # Errors
///
/// See [`parse`].
pub fn man_to_html(text: &str) -> Result<String> {
    man_to_html_with_config(text, &Config::compiled_default())
}

/// Convert overstruck text to HTML with custom config.
///
/// # Errors
///
/// See [`parse`].
pub fn man_to_html_with_config(text: &str, config: &Config) -> Result<String> {
    let document = parse(text)?;
    Ok(document_to_html(&document, config))
}

/// Convert overstruck text to a JSON array of strings and styled runs.
///
/// # Errors
///
/// See [`parse`]. Serialization failures surface as [`Error::Json`].
pub fn man_to_json(text: &str) -> Result<String> {
    let document = parse(text)?;
    Ok(serde_json::to_string_pretty(&document)?)
}
