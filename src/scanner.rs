//! Incremental scanning over a growing string.
//!
//! A [`Scanner`] keeps a cursor into its string. `scan`, `skip` and `check`
//! try an anchored match at the cursor; `search` looks forward from it.
//! Successful `scan`, `skip`, `search` and `getch` calls save the previous
//! cursor so that exactly one of them can be undone with [`Scanner::rewind`].
//!
//! ```
//! use regex_scan::Scanner;
//!
//! let mut scanner = Scanner::new("Hello World");
//! assert!(scanner.scan("World").unwrap().is_none());
//! assert_eq!(scanner.scan("Hello").unwrap().unwrap().as_str(), "Hello");
//! assert!(scanner.skip(r"\s+").unwrap());
//! assert_eq!(scanner.pos(), 6);
//! scanner.rewind().unwrap();
//! assert_eq!(scanner.pos(), 5);
//! ```

use crate::cache::PatternCache;
use crate::config::CompileConfig;
use crate::error::{RegexError, Result, RewindFailure};
use crate::pattern::Window;
use crate::result::{Match, MatchState};
use std::fmt;

/// Matches any single character, newline included.
const ANY_CHAR: &str = "(?s:.)";

#[derive(Debug)]
pub struct Scanner {
    string: String,
    pos: usize,
    old_pos: Option<usize>,
    last_match: Option<MatchState>,
    config: CompileConfig,
    cache: PatternCache,
}

impl Scanner {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, CompileConfig::default())
    }

    /// A scanner whose patterns are compiled with `config`.
    pub fn with_config(text: impl Into<String>, config: CompileConfig) -> Self {
        Scanner {
            string: text.into(),
            pos: 0,
            old_pos: None,
            last_match: None,
            config,
            cache: PatternCache::new(),
        }
    }

    pub fn string(&self) -> &str {
        &self.string
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor. The saved rewind position is left alone.
    pub fn set_pos(&mut self, pos: usize) -> Result<()> {
        if pos > self.string.len() {
            return Err(RegexError::InvalidPosition {
                position: pos,
                reason: "past the end of the string",
            });
        }
        if !self.string.is_char_boundary(pos) {
            return Err(RegexError::not_char_boundary(pos));
        }
        self.pos = pos;
        Ok(())
    }

    /// The cursor before the last successful scan, if a rewind is available.
    pub fn old_pos(&self) -> Option<usize> {
        self.old_pos
    }

    /// Length of the string, the upper bound for the cursor.
    pub fn end(&self) -> usize {
        self.string.len()
    }

    pub fn eos(&self) -> bool {
        self.pos >= self.string.len()
    }

    /// The unscanned remainder of the string.
    pub fn rest(&self) -> &str {
        &self.string[self.pos..]
    }

    /// The part of the string before the cursor.
    pub fn scanned(&self) -> &str {
        &self.string[..self.pos]
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// The most recent successful match.
    pub fn last_match(&self) -> Option<Match<'_>> {
        self.last_match
            .as_ref()
            .map(|state| Match::new(&self.string, state.clone()))
    }

    fn attempt(&mut self, pattern: &str, config: CompileConfig, anchored: bool) -> Result<Option<MatchState>> {
        let pattern = self.cache.get_or_compile(pattern, &config)?;
        let window = Window {
            pos: self.pos,
            endpos: self.string.len(),
        };
        Ok(pattern.attempt_in(&self.string, window, anchored))
    }

    /// Record a successful match and move the cursor to its end.
    fn advance(&mut self, state: MatchState) -> MatchState {
        self.old_pos = Some(self.pos);
        self.pos = state.whole().end;
        self.last_match = Some(state.clone());
        state
    }

    /// Try `pattern` anchored at the cursor without moving it.
    pub fn check(&mut self, pattern: &str) -> Result<Option<Match<'_>>> {
        let state = self.attempt(pattern, self.config, true)?;
        Ok(state.map(|state| Match::new(&self.string, state)))
    }

    /// Match `pattern` anchored at the cursor and move past the match.
    ///
    /// On failure nothing changes.
    pub fn scan(&mut self, pattern: &str) -> Result<Option<Match<'_>>> {
        let Some(state) = self.attempt(pattern, self.config, true)? else {
            return Ok(None);
        };
        let state = self.advance(state);
        Ok(Some(Match::new(&self.string, state)))
    }

    /// Like [`scan`](Self::scan), reporting only whether it matched.
    pub fn skip(&mut self, pattern: &str) -> Result<bool> {
        Ok(self.scan(pattern)?.is_some())
    }

    /// Find the next match of `pattern` at or after the cursor and move past
    /// it. Returns the text from the old cursor to the end of the match.
    pub fn search(&mut self, pattern: &str) -> Result<Option<&str>> {
        let Some(state) = self.attempt(pattern, self.config, false)? else {
            return Ok(None);
        };
        let start = self.pos;
        self.advance(state);
        Ok(Some(&self.string[start..self.pos]))
    }

    /// Consume one character.
    pub fn getch(&mut self) -> Result<Option<&str>> {
        let Some(state) = self.attempt(ANY_CHAR, CompileConfig::default(), true)? else {
            return Ok(None);
        };
        let span = self.advance(state).whole();
        Ok(Some(&self.string[span.range()]))
    }

    /// Undo the last successful scan. Only one step can be undone.
    pub fn rewind(&mut self) -> Result<()> {
        match self.old_pos.take() {
            Some(old_pos) => {
                debug!("scanner rewind {} -> {}", self.pos, old_pos);
                self.pos = old_pos;
                Ok(())
            }
            None if self.pos == 0 => Err(RegexError::IllegalRewind(RewindFailure::AtStart)),
            None => Err(RegexError::IllegalRewind(RewindFailure::AlreadyRewound)),
        }
    }

    /// Append text to the end of the string.
    pub fn feed(&mut self, text: &str) {
        self.string.push_str(text);
    }

    /// Move the cursor back to the start and forget the last match. The
    /// string is kept.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.old_pos = None;
        self.last_match = None;
    }
}

impl fmt::Display for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Scanner {}/{}>", self.pos, self.end())
    }
}
