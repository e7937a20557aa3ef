//! Replacement templates.
//!
//! Two reference forms are recognised: `\N` (one or more ASCII digits, a
//! group index) and `\g<name>` (a group name, or digits for an index). Every other
//! backslash sequence, including `\\` and `\n`, is copied through as written.
//!
//! A reference to a group that exists but did not take part in the match
//! expands to the empty string. A reference to a group the pattern does not
//! have fails with [`RegexError::NoSuchGroup`](crate::RegexError::NoSuchGroup).

use crate::error::Result;
use crate::result::Match;
use regex::Regex;
use std::sync::OnceLock;

static REFERENCE: OnceLock<Regex> = OnceLock::new();

fn reference_regex() -> &'static Regex {
    REFERENCE.get_or_init(|| {
        Regex::new(r"\\(?:([0-9]+)|g<(.+?)>)").expect("group reference regex is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Index(usize),
    Name(String),
}

/// A parsed replacement template, reusable across matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

/// Parse an index reference; indices too large for `usize` can never name a
/// group, so they saturate and fail at expansion time.
fn parse_index(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

impl Template {
    pub fn parse(template: &str) -> Template {
        let mut pieces = Vec::new();
        let mut last = 0;

        for caps in reference_regex().captures_iter(template) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last {
                pieces.push(Piece::Literal(template[last..whole.start()].to_string()));
            }
            if let Some(digits) = caps.get(1) {
                pieces.push(Piece::Index(parse_index(digits.as_str())));
            } else if let Some(name) = caps.get(2) {
                let name = name.as_str();
                if name.bytes().all(|b| b.is_ascii_digit()) {
                    pieces.push(Piece::Index(parse_index(name)));
                } else {
                    pieces.push(Piece::Name(name.to_string()));
                }
            }
            last = whole.end();
        }
        if last < template.len() {
            pieces.push(Piece::Literal(template[last..].to_string()));
        }

        Template { pieces }
    }

    pub fn expand(&self, m: &Match<'_>) -> Result<String> {
        let mut dst = String::new();
        self.expand_into(m, &mut dst)?;
        Ok(dst)
    }

    /// Append the expansion to `dst`. On error `dst` may hold a partial
    /// expansion.
    pub fn expand_into(&self, m: &Match<'_>, dst: &mut String) -> Result<()> {
        for piece in &self.pieces {
            let value = match piece {
                Piece::Literal(text) => {
                    dst.push_str(text);
                    continue;
                }
                Piece::Index(index) => m.group(*index)?,
                Piece::Name(name) => m.group(name.as_str())?,
            };
            dst.push_str(value.unwrap_or(""));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegexError;
    use crate::pattern::Pattern;

    #[test]
    fn test_parse_pieces() {
        let template = Template::parse(r"<\1|\g<name>|\g<2>|\\n>");
        assert_eq!(
            template.pieces,
            vec![
                Piece::Literal("<".to_string()),
                Piece::Index(1),
                Piece::Literal("|".to_string()),
                Piece::Name("name".to_string()),
                Piece::Literal("|".to_string()),
                Piece::Index(2),
                Piece::Literal(r"|\\n>".to_string()),
            ]
        );
        assert_eq!(
            Template::parse("plain text").pieces,
            vec![Piece::Literal("plain text".to_string())]
        );
        assert!(Template::parse("").pieces.is_empty());
    }

    #[test]
    fn test_expand_numeric_and_named() {
        let pattern = Pattern::new(r"(a)(?P<name>b)").unwrap();
        let m = pattern.match_prefix("ab").unwrap().unwrap();
        assert_eq!(m.expand(r"\1-\g<name>").unwrap(), "a-b");
        assert_eq!(m.expand(r"\0\2\g<1>").unwrap(), "abba");
    }

    #[test]
    fn test_other_escapes_are_untouched() {
        let pattern = Pattern::new(r"(x)").unwrap();
        let m = pattern.match_prefix("x").unwrap().unwrap();
        assert_eq!(m.expand(r"\n\t\g\\").unwrap(), r"\n\t\g\\");
        assert_eq!(m.expand(r"\g<>").unwrap(), r"\g<>");
    }

    #[test]
    fn test_unmatched_group_expands_empty() {
        let pattern = Pattern::new(r"(a)|(b)").unwrap();
        let m = pattern.match_prefix("b").unwrap().unwrap();
        assert_eq!(m.expand(r"[\1][\2]").unwrap(), "[][b]");
    }

    #[test]
    fn test_unknown_group_is_an_error() {
        let pattern = Pattern::new(r"(a)").unwrap();
        let m = pattern.match_prefix("a").unwrap().unwrap();

        assert_eq!(
            m.expand(r"\2"),
            Err(RegexError::NoSuchGroup("2".to_string()))
        );
        assert_eq!(
            m.expand(r"\g<missing>"),
            Err(RegexError::NoSuchGroup("missing".to_string()))
        );
        assert!(m.expand(r"\99999999999999999999999").is_err());
    }

    #[test]
    fn test_non_ascii_digits_are_not_references() {
        let pattern = Pattern::new(r"(\d)").unwrap();
        let m = pattern.match_prefix("1").unwrap().unwrap();
        assert_eq!(m.expand("\\\u{0661}").unwrap(), "\\\u{0661}");
        assert_eq!(
            pattern.sub("\\\u{0661}", "a1").unwrap(),
            "a\\\u{0661}"
        );
    }
}
