//! Compiled patterns.
//!
//! [`Pattern`] is the handle every other component works through. It owns
//! the compiled engine regex behind an `Arc`, so cloning it is cheap and
//! matches can keep the pattern alive without borrowing it.
//!
//! The only primitive is [`Pattern::attempt`]; `match_at`, `search_at`,
//! iteration, substitution and splitting are all built from it.

use crate::config::CompileConfig;
use crate::engine::{self, CompiledRegex};
use crate::error::{RegexError, Result};
use crate::iter::{FindStrings, Matches};
use crate::ops::split::{self, Segment};
use crate::ops::substitute::{self, Replacer};
use crate::result::{Match, MatchState};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Pattern {
    inner: Arc<PatternInner>,
}

struct PatternInner {
    text: String,
    config: CompileConfig,
    compiled: CompiledRegex,
}

/// A search window resolved against a concrete haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub(crate) pos: usize,
    pub(crate) endpos: usize,
}

impl Window {
    /// Clamp `pos` and `endpos` to the haystack and check they fall on
    /// character boundaries. `None` for `endpos` means the end of the string.
    pub(crate) fn resolve(haystack: &str, pos: usize, endpos: Option<usize>) -> Result<Window> {
        let len = haystack.len();
        let pos = pos.min(len);
        let endpos = endpos.map_or(len, |endpos| endpos.min(len));
        if !haystack.is_char_boundary(pos) {
            return Err(RegexError::not_char_boundary(pos));
        }
        if !haystack.is_char_boundary(endpos) {
            return Err(RegexError::not_char_boundary(endpos));
        }
        Ok(Window { pos, endpos })
    }
}

impl Pattern {
    /// Compile `text` with the default configuration.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, CompileConfig::default())
    }

    pub fn with_config(text: &str, config: CompileConfig) -> Result<Self> {
        let compiled = engine::compile(text, &config)?;
        Ok(Pattern {
            inner: Arc::new(PatternInner {
                text: text.to_string(),
                config,
                compiled,
            }),
        })
    }

    /// A constructor that compiles every pattern with the same configuration.
    pub fn factory(config: CompileConfig) -> impl Fn(&str) -> Result<Pattern> {
        move |text: &str| Pattern::with_config(text, config)
    }

    /// The pattern text as given.
    pub fn as_str(&self) -> &str {
        &self.inner.text
    }

    pub fn config(&self) -> &CompileConfig {
        &self.inner.config
    }

    /// Number of capturing groups, not counting group 0.
    pub fn group_len(&self) -> usize {
        self.inner.compiled.group_len() - 1
    }

    pub fn group_names(&self) -> &HashMap<String, usize> {
        self.inner.compiled.names()
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.group_names().get(name).copied()
    }

    pub fn group_name(&self, index: usize) -> Option<&str> {
        self.inner.compiled.name_of(index)
    }

    /// Attempt one match within `haystack[pos..endpos]`.
    ///
    /// With `anchored` the match must start exactly at `pos`; otherwise the
    /// first position at or after `pos` that matches is used. `Ok(None)` is a
    /// legitimate non-match; errors are reserved for invalid positions.
    pub fn attempt<'h>(
        &self,
        haystack: &'h str,
        pos: usize,
        endpos: Option<usize>,
        anchored: bool,
    ) -> Result<Option<Match<'h>>> {
        let window = Window::resolve(haystack, pos, endpos)?;
        Ok(self
            .attempt_in(haystack, window, anchored)
            .map(|state| Match::new(haystack, state)))
    }

    /// Attempt over an already resolved window.
    pub(crate) fn attempt_in(&self, haystack: &str, window: Window, anchored: bool) -> Option<MatchState> {
        if window.pos > window.endpos {
            return None;
        }
        let spans = self
            .inner
            .compiled
            .attempt(haystack, window.pos, window.endpos, anchored)?;
        Some(MatchState::new(self.clone(), spans, window.pos, window.endpos))
    }

    /// Match anchored at `pos`.
    pub fn match_at<'h>(&self, haystack: &'h str, pos: usize, endpos: Option<usize>) -> Result<Option<Match<'h>>> {
        self.attempt(haystack, pos, endpos, true)
    }

    /// Match anchored at the start of `haystack`.
    pub fn match_prefix<'h>(&self, haystack: &'h str) -> Result<Option<Match<'h>>> {
        self.match_at(haystack, 0, None)
    }

    /// First match at or after `pos`.
    pub fn search_at<'h>(&self, haystack: &'h str, pos: usize, endpos: Option<usize>) -> Result<Option<Match<'h>>> {
        self.attempt(haystack, pos, endpos, false)
    }

    pub fn search<'h>(&self, haystack: &'h str) -> Result<Option<Match<'h>>> {
        self.search_at(haystack, 0, None)
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        let window = Window {
            pos: 0,
            endpos: haystack.len(),
        };
        self.attempt_in(haystack, window, false).is_some()
    }

    /// All non-overlapping matches in `haystack`.
    pub fn find_iter<'h>(&self, haystack: &'h str) -> Matches<'h> {
        Matches::new(
            self.clone(),
            haystack,
            Window {
                pos: 0,
                endpos: haystack.len(),
            },
        )
    }

    /// All non-overlapping matches within `haystack[pos..endpos]`.
    pub fn find_iter_at<'h>(&self, haystack: &'h str, pos: usize, endpos: Option<usize>) -> Result<Matches<'h>> {
        let window = Window::resolve(haystack, pos, endpos)?;
        Ok(Matches::new(self.clone(), haystack, window))
    }

    /// The matched text of every non-overlapping match.
    pub fn find_strings<'h>(&self, haystack: &'h str) -> FindStrings<'h> {
        FindStrings::new(self.find_iter(haystack))
    }

    /// Replace every match. See [`subn_at`](Self::subn_at).
    pub fn sub<R: Replacer>(&self, replacement: R, haystack: &str) -> Result<String> {
        Ok(self.subn(replacement, haystack, 0)?.0)
    }

    /// Replace up to `count` matches (all when `count` is 0) and report how
    /// many were replaced.
    pub fn subn<R: Replacer>(&self, replacement: R, haystack: &str, count: usize) -> Result<(String, usize)> {
        self.subn_at(replacement, haystack, count, 0, None)
    }

    /// Replace matches found within `haystack[pos..endpos]`. Text outside the
    /// window is copied through unchanged.
    pub fn subn_at<R: Replacer>(
        &self,
        replacement: R,
        haystack: &str,
        count: usize,
        pos: usize,
        endpos: Option<usize>,
    ) -> Result<(String, usize)> {
        let window = Window::resolve(haystack, pos, endpos)?;
        substitute::substitute(self, replacement, haystack, count, window)
    }

    /// Split `haystack` on every match, keeping group values.
    pub fn split<'h>(&self, haystack: &'h str) -> Vec<Segment<'h>> {
        split::split(self.find_iter(haystack), haystack, 0, false)
    }

    /// Split on at most `max_splits` matches (all when 0).
    pub fn splitn<'h>(&self, haystack: &'h str, max_splits: usize) -> Vec<Segment<'h>> {
        split::split(self.find_iter(haystack), haystack, max_splits, false)
    }

    /// Split on matches within `haystack[pos..endpos]`. With `flatten`, group
    /// values are spliced into the result one by one instead of as a single
    /// [`Segment::Groups`].
    pub fn split_at<'h>(
        &self,
        haystack: &'h str,
        max_splits: usize,
        pos: usize,
        endpos: Option<usize>,
        flatten: bool,
    ) -> Result<Vec<Segment<'h>>> {
        let matches = self.find_iter_at(haystack, pos, endpos)?;
        Ok(split::split(matches, haystack, max_splits, flatten))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.as_str())
    }
}
