use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::node::{Match, Segment};

/// How a pattern is meant to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Find one match at a time; the chunker owns the repetition loop.
    #[default]
    Single,
    /// Pre-configured for repeated scanning. Rejected by [`chunk`].
    Global,
}

/// A pattern together with its matching mode.
#[derive(Debug, Clone)]
pub struct ChunkPattern {
    pub regex: Regex,
    pub mode: MatchMode,
}

impl ChunkPattern {
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            mode: MatchMode::Single,
        }
    }

    pub fn global(regex: Regex) -> Self {
        Self {
            regex,
            mode: MatchMode::Global,
        }
    }
}

/// Split `input` into literal text and pattern matches, in order.
///
/// The segments cover the whole input with no gaps or overlaps, so joining
/// their source text gives back `input`. An input without matches yields a
/// single literal, and an empty input yields no segments at all.
///
/// # Errors
///
/// Returns [`Error::Configuration`] before scanning anything when the pattern
/// is in [`MatchMode::Global`].
pub fn chunk(input: &str, pattern: &ChunkPattern) -> Result<Vec<Segment>> {
    if pattern.mode == MatchMode::Global {
        return Err(Error::Configuration(format!(
            "pattern `{}` must not be configured for global matching",
            pattern.regex.as_str()
        )));
    }

    let mut segments = Vec::new();
    let mut consumed = 0;

    loop {
        let remaining = &input[consumed..];
        let Some(caps) = next_match(&pattern.regex, remaining) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if whole.start() > 0 {
            segments.push(Segment::Literal(remaining[..whole.start()].to_string()));
        }

        let captures = caps
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |g| g.as_str().to_string()))
            .collect();

        segments.push(Segment::Match(Match {
            text: whole.as_str().to_string(),
            captures,
            offset: consumed + whole.start(),
        }));

        consumed += whole.end();
    }

    if consumed < input.len() {
        segments.push(Segment::Literal(input[consumed..].to_string()));
    }

    Ok(segments)
}

/// First non-empty match in `haystack`. Empty matches would never shrink the
/// remaining input, so they are passed over.
fn next_match<'h>(regex: &Regex, haystack: &'h str) -> Option<Captures<'h>> {
    regex
        .captures_iter(haystack)
        .find(|caps| caps.get(0).is_some_and(|m| !m.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &[&str] = &[
        "",
        "plain text",
        "a\x08a",
        "a\x08ab\x08bc\x08c",
        "hello_\x08x",
        "\x08a rest",
        "x\x08y tail",
        "N\x08NA\x08AM\x08ME\x08E\n     ls - list",
        "_\x08f_\x08i_\x08l_\x08e\n",
        "\x08\x08\x08",
        "ü\x08ü and ß",
        "trailing\x08",
    ];

    fn overstrike() -> ChunkPattern {
        ChunkPattern::new(Regex::new("(.)\x08(.)").unwrap())
    }

    fn matched(text: &str, captures: &[&str], offset: usize) -> Segment {
        Segment::Match(Match {
            text: text.to_string(),
            captures: captures.iter().map(|c| c.to_string()).collect(),
            offset,
        })
    }

    #[test]
    fn empty_input() {
        assert_eq!(chunk("", &overstrike()).unwrap(), vec![]);
    }

    #[test]
    fn no_matches_is_one_literal() {
        for input in ["plain text", "no markers here\nat all", " "] {
            assert_eq!(
                chunk(input, &overstrike()).unwrap(),
                vec![Segment::Literal(input.to_string())]
            );
        }
    }

    #[test]
    fn literals_between_matches() {
        assert_eq!(
            chunk("hello_\x08, n\x08no", &overstrike()).unwrap(),
            vec![
                Segment::Literal("hello".to_string()),
                matched("_\x08,", &["_", ","], 5),
                Segment::Literal(" ".to_string()),
                matched("n\x08n", &["n", "n"], 9),
                Segment::Literal("o".to_string()),
            ]
        );
    }

    #[test]
    fn match_at_start_has_no_leading_literal() {
        assert_eq!(
            chunk("a\x08ab\x08b", &overstrike()).unwrap(),
            vec![matched("a\x08a", &["a", "a"], 0), matched("b\x08b", &["b", "b"], 3)]
        );
    }

    #[test]
    fn offsets_are_byte_offsets_into_input() {
        let input = "ü\x08ü and _\x08ß";
        let segments = chunk(input, &overstrike()).unwrap();
        for segment in &segments {
            if let Segment::Match(m) = segment {
                assert_eq!(&input[m.offset..m.offset + m.text.len()], m.text);
            }
        }
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn segments_reconstruct_input() {
        for input in CORPUS {
            let joined: String = chunk(input, &overstrike())
                .unwrap()
                .iter()
                .map(Segment::as_str)
                .collect();
            assert_eq!(&joined, input);
        }
    }

    #[test]
    fn global_pattern_is_rejected() {
        let pattern = ChunkPattern::global(Regex::new("(.)\x08(.)").unwrap());
        let err = chunk("a\x08a", &pattern).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(matches!(chunk("", &pattern), Err(Error::Configuration(_))));
    }

    #[test]
    fn unparticipating_group_is_empty() {
        let pattern = ChunkPattern::new(Regex::new("(a)|(b)").unwrap());
        assert_eq!(
            chunk("xb", &pattern).unwrap(),
            vec![Segment::Literal("x".to_string()), matched("b", &["", "b"], 1)]
        );
    }

    #[test]
    fn empty_matches_are_skipped() {
        let pattern = ChunkPattern::new(Regex::new("a*").unwrap());
        assert_eq!(
            chunk("bab", &pattern).unwrap(),
            vec![
                Segment::Literal("b".to_string()),
                matched("a", &[], 1),
                Segment::Literal("b".to_string()),
            ]
        );
    }
}
