//! Splitting a string at pattern matches.
//!
//! The text between matches becomes [`Segment::Text`]. When the pattern has
//! capturing groups their values are kept as well: as one
//! [`Segment::Groups`] per match, or spliced in as one [`Segment::Group`] per
//! group value when flattening.

use crate::iter::Matches;

/// One element of a split result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'h> {
    /// Subject text between two delimiters.
    Text(&'h str),
    /// All group values of one delimiter match.
    Groups(Vec<Option<&'h str>>),
    /// A single group value, produced when flattening.
    Group(Option<&'h str>),
}

impl<'h> Segment<'h> {
    /// The text of a [`Segment::Text`].
    pub fn as_text(&self) -> Option<&'h str> {
        match self {
            Segment::Text(text) => Some(*text),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text(_))
    }
}

/// Split `haystack` at the matches produced by `matches`, stopping after
/// `max_splits` matches when it is non-zero.
///
/// The first segment starts at the beginning of `haystack` even when the
/// search window starts later, and the last segment runs to the end of
/// `haystack`.
pub(crate) fn split<'h>(
    matches: Matches<'h>,
    haystack: &'h str,
    max_splits: usize,
    flatten: bool,
) -> Vec<Segment<'h>> {
    let has_groups = matches.pattern().group_len() > 0;
    let limit = if max_splits == 0 { usize::MAX } else { max_splits };

    let mut segments = Vec::new();
    let mut last = 0;

    for m in matches.take(limit) {
        segments.push(Segment::Text(&haystack[last..m.start()]));
        if has_groups {
            let groups = m.groups();
            if flatten {
                segments.extend(groups.into_iter().map(Segment::Group));
            } else {
                segments.push(Segment::Groups(groups));
            }
        }
        last = m.end();
    }

    segments.push(Segment::Text(&haystack[last..]));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    fn texts(segments: &[Segment<'_>]) -> Vec<String> {
        segments
            .iter()
            .filter_map(|segment| segment.as_text().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_split_without_groups() {
        let pattern = Pattern::new(r",\s*").unwrap();
        let segments = pattern.split("a, b,c");
        assert_eq!(
            segments,
            vec![Segment::Text("a"), Segment::Text("b"), Segment::Text("c")]
        );
    }

    #[test]
    fn test_split_keeps_groups_as_tuples() {
        let pattern = Pattern::new(r"(-)|(\+)").unwrap();
        let segments = pattern.split("1-2+3");
        assert_eq!(
            segments,
            vec![
                Segment::Text("1"),
                Segment::Groups(vec![Some("-"), None]),
                Segment::Text("2"),
                Segment::Groups(vec![None, Some("+")]),
                Segment::Text("3"),
            ]
        );
    }

    #[test]
    fn test_split_flattened() {
        let pattern = Pattern::new(r"(-)|(\+)").unwrap();
        let segments = pattern.split_at("1-2", 0, 0, None, true).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Text("1"),
                Segment::Group(Some("-")),
                Segment::Group(None),
                Segment::Text("2"),
            ]
        );
    }

    #[test]
    fn test_max_splits() {
        let pattern = Pattern::new(":").unwrap();
        assert_eq!(texts(&pattern.splitn("a:b:c:d", 2)), vec!["a", "b", "c:d"]);
        assert_eq!(texts(&pattern.splitn("a:b:c:d", 0)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_delimiters_at_edges() {
        let pattern = Pattern::new(":").unwrap();
        assert_eq!(texts(&pattern.split(":a:")), vec!["", "a", ""]);
        assert_eq!(texts(&pattern.split("")), vec![""]);
        assert_eq!(texts(&pattern.split("abc")), vec!["abc"]);
    }

    #[test]
    fn test_empty_matches_do_not_loop() {
        let pattern = Pattern::new("x*").unwrap();
        assert_eq!(texts(&pattern.split("ab")), vec!["", "a", "b", ""]);
    }

    #[test]
    fn test_text_before_pos_joins_first_segment() {
        let pattern = Pattern::new(":").unwrap();
        let segments = pattern.split_at("a:b:c", 0, 2, None, false).unwrap();
        assert_eq!(texts(&segments), vec!["a:b", "c"]);

        // the tail runs past endpos to the end of the string
        let segments = pattern.split_at("a:b:c:d", 0, 0, Some(4), false).unwrap();
        assert_eq!(texts(&segments), vec!["a", "b", "c:d"]);
    }

    #[test]
    fn test_segment_helpers() {
        assert_eq!(Segment::Text("x").as_text(), Some("x"));
        assert!(Segment::Text("x").is_text());
        assert_eq!(Segment::Group(None).as_text(), None);
        assert!(!Segment::Groups(vec![]).is_text());
    }
}
