use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::chunk::{ChunkPattern, chunk};
use crate::error::Result;
use crate::node::{Document, Item, Match, Segment, Style, StyledNode};

/// Backspace, the character man(1) uses to strike one glyph over another.
pub const DELETE_MARKER: char = '\x08';

/// `indicator` + backspace + `content`. Newlines are never overstruck.
static OVERSTRIKE: LazyLock<ChunkPattern> = LazyLock::new(|| {
    ChunkPattern::new(Regex::new("(.)\x08(.)").expect("overstrike pattern is valid"))
});

/// Parse overstruck terminal text into a document of styled runs.
///
/// # Errors
///
/// Only fails if chunking rejects the pattern, which cannot happen for the
/// built-in overstrike pattern.
pub fn parse(text: &str) -> Result<Document> {
    let segments = chunk(text, &OVERSTRIKE)?;
    debug!("Chunked {} bytes into {} segments", text.len(), segments.len());

    Ok(build(segments))
}

/// Turn chunked segments into a document, merging adjacent runs of one style.
pub fn build(segments: Vec<Segment>) -> Document {
    let mut document = Document::new();
    let mut offset = 0;

    for segment in segments {
        let len = segment.as_str().len();
        let item = match segment {
            Segment::Literal(text) => {
                warn_stray_markers(&text, offset);
                Item::Text(text)
            }
            Segment::Match(m) => Item::Styled(match_to_node(m)),
        };
        push_item(&mut document, item);
        offset += len;
    }

    document
}

/// Merge adjacent styled runs that share a style. Already merged documents
/// come back unchanged.
pub fn coalesce(document: Document) -> Document {
    document.into_iter().fold(Document::new(), |mut merged, item| {
        push_item(&mut merged, item);
        merged
    })
}

/// Style for a single overstrike pair.
pub fn classify(indicator: &str, content: &str) -> StyledNode {
    let style = if indicator == content {
        Style::Bold
    } else if indicator == "_" {
        Style::Underline
    } else {
        warn!("Unknown overstrike convention: {indicator:?} struck over {content:?}");
        Style::Unknown
    };

    StyledNode::new(style, content)
}

/// Plain text of the parsed document, with every overstrike collapsed to the
/// character it displays. Backspaces that could not be paired are dropped.
///
/// # Errors
///
/// See [`parse`].
pub fn strip(text: &str) -> Result<String> {
    Ok(parse(text)?
        .iter()
        .flat_map(|item| item.content().chars())
        .filter(|&c| c != DELETE_MARKER)
        .collect())
}

/// Markers left in literal text had no indicator before them (start of input,
/// after a newline) or no content after them.
fn warn_stray_markers(text: &str, offset: usize) {
    for (pos, _) in text.match_indices(DELETE_MARKER) {
        warn!(
            "Delete marker at offset {} has no style pair; leaving it unstyled",
            offset + pos
        );
    }
}

fn match_to_node(m: Match) -> StyledNode {
    match m.captures.as_slice() {
        [indicator, content, ..] => classify(indicator, content),
        _ => {
            warn!("Match at offset {} has no indicator/content captures", m.offset);
            StyledNode::new(Style::Unknown, m.text)
        }
    }
}

fn push_item(document: &mut Document, item: Item) {
    if let Item::Styled(node) = &item {
        if let Some(Item::Styled(last)) = document.last_mut() {
            if last.style == node.style {
                last.content.push_str(&node.content);
                return;
            }
        }
    }
    document.push(item);
}
