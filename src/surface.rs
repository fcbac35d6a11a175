use crate::error::Result;
use crate::node::Document;
use crate::parser;

/// Somewhere a parsed document can be shown.
pub trait Surface {
    /// Replace whatever the surface currently shows with `document`.
    /// Applying the same document twice leaves the surface as after once.
    fn replace_content(&mut self, document: &Document);
}

/// Parse `text` and show the result on `surface`.
///
/// # Errors
///
/// Propagates parse errors; the surface is left untouched on failure.
pub fn mount<S: Surface + ?Sized>(surface: &mut S, text: &str) -> Result<()> {
    let document = parser::parse(text)?;
    surface.replace_content(&document);
    Ok(())
}
