use serde::Serialize;

/// Style encoded by an overstrike pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// A character struck over itself (`a\x08a`).
    Bold,
    /// An underscore struck under a character (`_\x08a`).
    Underline,
    /// Any other pairing; kept as a generic span.
    Unknown,
}

/// A run of characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledNode {
    pub style: Style,
    pub content: String,
}

impl StyledNode {
    pub fn new(style: Style, content: impl Into<String>) -> Self {
        Self {
            style,
            content: content.into(),
        }
    }
}

/// One entry of a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Text(String),
    Styled(StyledNode),
}

impl Item {
    /// The visible text of this entry.
    pub fn content(&self) -> &str {
        match self {
            Item::Text(text) => text,
            Item::Styled(node) => &node.content,
        }
    }
}

/// Ordered literals and styled runs, ready for rendering.
pub type Document = Vec<Item>;

/// A single pattern match with its captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The full matched text.
    pub text: String,
    /// Capture groups in pattern order; groups that did not participate are empty.
    pub captures: Vec<String>,
    /// Byte offset of the match in the chunked input.
    pub offset: usize,
}

/// A piece of chunked input: either untouched text or a pattern match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Match(Match),
}

impl Segment {
    /// The source text covered by this segment.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Match(m) => &m.text,
        }
    }
}
