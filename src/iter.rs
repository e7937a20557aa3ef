//! Lazy iteration over non-overlapping matches.

use crate::pattern::{Pattern, Window};
use crate::result::Match;
use std::iter::FusedIterator;

/// Length in bytes of the character starting at `at`, or `None` at the end.
pub(crate) fn char_len_at(haystack: &str, at: usize) -> Option<usize> {
    haystack[at..].chars().next().map(char::len_utf8)
}

/// Iterator over successive non-overlapping matches of a pattern.
///
/// Each search resumes where the previous match ended. After a zero-width
/// match the next search starts one character further on, so a pattern that
/// matches the empty string yields at most `len + 1` matches. An empty match
/// directly after a non-empty one is still reported.
///
/// Created by [`Pattern::find_iter`] and [`Pattern::find_iter_at`].
#[derive(Debug, Clone)]
pub struct Matches<'h> {
    pattern: Pattern,
    haystack: &'h str,
    /// Where the next search starts. `None` once the window is exhausted.
    next_pos: Option<usize>,
    endpos: usize,
}

impl<'h> Matches<'h> {
    pub(crate) fn new(pattern: Pattern, haystack: &'h str, window: Window) -> Self {
        Matches {
            pattern,
            haystack,
            next_pos: Some(window.pos),
            endpos: window.endpos,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn haystack(&self) -> &'h str {
        self.haystack
    }
}

impl<'h> Iterator for Matches<'h> {
    type Item = Match<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.next_pos.take()?;
        let window = Window {
            pos,
            endpos: self.endpos,
        };
        let state = self.pattern.attempt_in(self.haystack, window, false)?;
        let m = Match::new(self.haystack, state);

        self.next_pos = if m.is_empty() {
            char_len_at(self.haystack, m.end())
                .map(|len| m.end() + len)
                .filter(|next| *next <= self.endpos)
        } else {
            Some(m.end())
        };

        Some(m)
    }
}

impl FusedIterator for Matches<'_> {}

/// Iterator over the matched text of successive matches.
///
/// Created by [`Pattern::find_strings`].
#[derive(Debug, Clone)]
pub struct FindStrings<'h> {
    matches: Matches<'h>,
}

impl<'h> FindStrings<'h> {
    pub(crate) fn new(matches: Matches<'h>) -> Self {
        FindStrings { matches }
    }
}

impl<'h> Iterator for FindStrings<'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| m.as_str())
    }
}

impl FusedIterator for FindStrings<'_> {}
