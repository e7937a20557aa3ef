//! Match results.
//!
//! A [`Match`] is an immutable view over one successful match attempt: the
//! span of the whole match and of every capturing group, plus the search
//! window it was produced in. It borrows the subject string for `'h` and
//! keeps its [`Pattern`] alive through a shared handle, so group names can be
//! resolved for as long as the match exists.
//!
//! Derived properties are computed once, when the match is built.

use crate::error::{RegexError, Result};
use crate::ops::template::Template;
use crate::pattern::Pattern;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

/// Byte offsets of a matched substring. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Selects a group by index or by name.
///
/// Implemented for `usize` and `i32` indices (so integer literals work
/// without a suffix) and for names given as `&str` or `String`.
pub trait GroupRef {
    /// Resolve to a group index of `pattern`, or fail with `NoSuchGroup`.
    fn resolve(&self, pattern: &Pattern) -> Result<usize>;
}

impl GroupRef for usize {
    fn resolve(&self, pattern: &Pattern) -> Result<usize> {
        if *self < pattern.group_len() + 1 {
            Ok(*self)
        } else {
            Err(RegexError::no_such_group(self))
        }
    }
}

impl GroupRef for i32 {
    fn resolve(&self, pattern: &Pattern) -> Result<usize> {
        usize::try_from(*self)
            .map_err(|_| RegexError::no_such_group(self))?
            .resolve(pattern)
    }
}

impl GroupRef for &str {
    fn resolve(&self, pattern: &Pattern) -> Result<usize> {
        pattern
            .group_index(self)
            .ok_or_else(|| RegexError::no_such_group(self))
    }
}

impl GroupRef for String {
    fn resolve(&self, pattern: &Pattern) -> Result<usize> {
        self.as_str().resolve(pattern)
    }
}

/// The haystack-independent part of a match.
///
/// The scanner keeps one of these as its match register while its string
/// keeps growing, and re-attaches the string on access.
#[derive(Debug, Clone)]
pub(crate) struct MatchState {
    pattern: Pattern,
    spans: Vec<Option<Span>>,
    pos: usize,
    endpos: usize,
    lastindex: Option<usize>,
}

impl MatchState {
    pub(crate) fn new(pattern: Pattern, spans: Vec<Option<Span>>, pos: usize, endpos: usize) -> Self {
        let lastindex = last_index(&spans);
        MatchState {
            pattern,
            spans,
            pos,
            endpos,
            lastindex,
        }
    }

    pub(crate) fn whole(&self) -> Span {
        self.spans
            .first()
            .copied()
            .flatten()
            .unwrap_or(Span { start: self.pos, end: self.pos })
    }
}

/// Index of the group with the greatest end offset. Ties go to the group
/// declared first.
fn last_index(spans: &[Option<Span>]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, span) in spans.iter().enumerate().skip(1) {
        if let Some(span) = span {
            if best.map_or(true, |(_, end)| span.end > end) {
                best = Some((index, span.end));
            }
        }
    }
    best.map(|(index, _)| index)
}

/// One successful match of a [`Pattern`] against a subject string.
#[derive(Clone)]
pub struct Match<'h> {
    haystack: &'h str,
    state: MatchState,
}

impl<'h> Match<'h> {
    pub(crate) fn new(haystack: &'h str, state: MatchState) -> Self {
        Match { haystack, state }
    }

    /// The pattern that produced this match.
    pub fn pattern(&self) -> &Pattern {
        &self.state.pattern
    }

    /// The whole subject string, not just the matched part.
    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// Start of the search window the match was produced in.
    pub fn pos(&self) -> usize {
        self.state.pos
    }

    /// End of the search window the match was produced in.
    pub fn endpos(&self) -> usize {
        self.state.endpos
    }

    /// Spans of group 0 and every capturing group, in declaration order.
    /// `None` marks a group that did not take part in the match.
    pub fn spans(&self) -> &[Option<Span>] {
        &self.state.spans
    }

    /// Name to index table of the pattern's named groups.
    pub fn group_names(&self) -> &HashMap<String, usize> {
        self.state.pattern.group_names()
    }

    /// Number of capturing groups, not counting group 0.
    pub fn group_len(&self) -> usize {
        self.state.spans.len() - 1
    }

    pub fn span(&self) -> Span {
        self.state.whole()
    }

    pub fn start(&self) -> usize {
        self.span().start
    }

    pub fn end(&self) -> usize {
        self.span().end
    }

    pub fn range(&self) -> Range<usize> {
        self.span().range()
    }

    pub fn len(&self) -> usize {
        self.span().len()
    }

    /// True for a zero-width match.
    pub fn is_empty(&self) -> bool {
        self.span().is_empty()
    }

    /// The matched text of group 0.
    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.range()]
    }

    /// Span of a group. `Ok(None)` means the group exists but did not match.
    pub fn span_of<G: GroupRef>(&self, group: G) -> Result<Option<Span>> {
        let index = group.resolve(&self.state.pattern)?;
        self.state
            .spans
            .get(index)
            .copied()
            .ok_or_else(|| RegexError::no_such_group(index))
    }

    pub fn start_of<G: GroupRef>(&self, group: G) -> Result<Option<usize>> {
        Ok(self.span_of(group)?.map(|span| span.start))
    }

    pub fn end_of<G: GroupRef>(&self, group: G) -> Result<Option<usize>> {
        Ok(self.span_of(group)?.map(|span| span.end))
    }

    /// Text of a group, `Ok(None)` if it did not participate.
    pub fn group<G: GroupRef>(&self, group: G) -> Result<Option<&'h str>> {
        Ok(self.span_of(group)?.map(|span| &self.haystack[span.range()]))
    }

    /// Text of each capturing group, group 0 excluded.
    pub fn groups(&self) -> Vec<Option<&'h str>> {
        self.state.spans[1..]
            .iter()
            .map(|span| span.map(|span| &self.haystack[span.range()]))
            .collect()
    }

    /// Like [`groups`](Self::groups) with `default` standing in for groups
    /// that did not participate.
    pub fn groups_or<'a>(&self, default: &'a str) -> Vec<&'a str>
    where
        'h: 'a,
    {
        self.groups()
            .into_iter()
            .map(|value| value.unwrap_or(default))
            .collect()
    }

    /// Text of every named group, keyed by name.
    pub fn groupdict(&self) -> HashMap<&str, Option<&'h str>> {
        self.group_names()
            .iter()
            .map(|(name, &index)| {
                let value = self.state.spans[index].map(|span| &self.haystack[span.range()]);
                (name.as_str(), value)
            })
            .collect()
    }

    pub fn groupdict_or<'a>(&'a self, default: &'a str) -> HashMap<&'a str, &'a str>
    where
        'h: 'a,
    {
        self.groupdict()
            .into_iter()
            .map(|(name, value)| (name, value.unwrap_or(default)))
            .collect()
    }

    /// Index of the last matched capturing group, i.e. the one whose match
    /// ends furthest right. `(a)(b)` against `"ab"` gives 2 while
    /// `((a)(b))` gives 1.
    pub fn lastindex(&self) -> Option<usize> {
        self.state.lastindex
    }

    /// Name of the [`lastindex`](Self::lastindex) group, if it has one.
    pub fn lastgroup(&self) -> Option<&str> {
        self.state
            .lastindex
            .and_then(|index| self.state.pattern.group_name(index))
    }

    /// Expand `\N` and `\g<name>` references in `template` against this match.
    pub fn expand(&self, template: &str) -> Result<String> {
        Template::parse(template).expand(self)
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("groups", &self.group_len())
            .field("span", &self.range())
            .field("text", &self.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pairs: &[Option<(usize, usize)>]) -> Vec<Option<Span>> {
        pairs
            .iter()
            .map(|pair| pair.map(|(start, end)| Span::new(start, end)))
            .collect()
    }

    #[test]
    fn test_last_index() {
        // (a)(b) on "ab"
        assert_eq!(last_index(&spans(&[Some((0, 2)), Some((0, 1)), Some((1, 2))])), Some(2));
        // ((a)(b)) on "ab"
        assert_eq!(
            last_index(&spans(&[Some((0, 2)), Some((0, 2)), Some((0, 1)), Some((1, 2))])),
            Some(1)
        );
        // (a)b on "ab"
        assert_eq!(last_index(&spans(&[Some((0, 2)), Some((0, 1))])), Some(1));
        // no groups, or none matched
        assert_eq!(last_index(&spans(&[Some((0, 2))])), None);
        assert_eq!(last_index(&spans(&[Some((0, 0)), None, None])), None);
        // an unmatched group never wins
        assert_eq!(last_index(&spans(&[Some((0, 1)), None, Some((0, 1))])), Some(2));
    }

    #[test]
    fn test_span_helpers() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.range(), 2..5);
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn test_group_access() {
        let pattern = Pattern::new(r"(?P<key>\w+)=(?P<value>\w+)?(;)?").unwrap();
        let m = pattern.search("x key= y").unwrap().unwrap();

        assert_eq!(m.as_str(), "key=");
        assert_eq!(m.span(), Span::new(2, 6));
        assert_eq!(m.group_len(), 3);
        assert_eq!(m.group(0).unwrap(), Some("key="));
        assert_eq!(m.group("key").unwrap(), Some("key"));
        assert_eq!(m.group(1).unwrap(), Some("key"));
        assert_eq!(m.group("value").unwrap(), None);
        assert_eq!(m.span_of(2).unwrap(), None);
        assert_eq!(m.start_of("key").unwrap(), Some(2));
        assert_eq!(m.end_of(String::from("key")).unwrap(), Some(5));
        assert_eq!(m.groups(), vec![Some("key"), None, None]);
        assert_eq!(m.groups_or(""), vec!["key", "", ""]);
    }

    #[test]
    fn test_unknown_groups() {
        let pattern = Pattern::new(r"(?P<a>x)").unwrap();
        let m = pattern.match_prefix("x").unwrap().unwrap();

        assert_eq!(m.group("b"), Err(RegexError::NoSuchGroup("b".to_string())));
        assert_eq!(m.group(2), Err(RegexError::NoSuchGroup("2".to_string())));
        assert_eq!(m.group(-1), Err(RegexError::NoSuchGroup("-1".to_string())));
        assert!(m.span_of(7usize).is_err());
    }

    #[test]
    fn test_groupdict() {
        let pattern = Pattern::new(r"(?P<first>\w+) (?P<last>\w+)?").unwrap();
        let m = pattern.match_prefix("Ada ").unwrap().unwrap();

        let dict = m.groupdict();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["first"], Some("Ada"));
        assert_eq!(dict["last"], None);

        let dict = m.groupdict_or("?");
        assert_eq!(dict["last"], "?");
    }

    #[test]
    fn test_lastgroup() {
        let pattern = Pattern::new(r"(?P<a>x)(?P<b>y)").unwrap();
        let m = pattern.match_prefix("xy").unwrap().unwrap();
        assert_eq!(m.lastindex(), Some(2));
        assert_eq!(m.lastgroup(), Some("b"));

        let pattern = Pattern::new(r"(?P<a>x)(y)").unwrap();
        let m = pattern.match_prefix("xy").unwrap().unwrap();
        assert_eq!(m.lastindex(), Some(2));
        assert_eq!(m.lastgroup(), None);

        let pattern = Pattern::new(r"xy").unwrap();
        let m = pattern.match_prefix("xy").unwrap().unwrap();
        assert_eq!(m.lastindex(), None);
        assert_eq!(m.lastgroup(), None);
    }

    #[test]
    fn test_window_is_recorded() {
        let pattern = Pattern::new("b").unwrap();
        let m = pattern.search_at("abcabc", 2, Some(5)).unwrap().unwrap();
        assert_eq!(m.span(), Span::new(4, 5));
        assert_eq!(m.pos(), 2);
        assert_eq!(m.endpos(), 5);
        assert_eq!(m.haystack(), "abcabc");
        assert_eq!(m.pattern().as_str(), "b");
    }

    #[test]
    fn test_display_and_debug() {
        let pattern = Pattern::new(r"(\d+)").unwrap();
        let m = pattern.search("abc 123").unwrap().unwrap();
        assert_eq!(m.to_string(), "123");
        assert_eq!(
            format!("{m:?}"),
            r#"Match { groups: 1, span: 4..7, text: "123" }"#
        );
    }
}
