//! Error types for the regex-scan crate.
//!
//! A failed match is not an error: every matching operation reports it as
//! `Ok(None)` (or an empty iterator). The variants here cover the
//! exceptional cases only.

use std::fmt;

pub type Result<T> = std::result::Result<T, RegexError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegexError {
    /// The engine refused the pattern or its configuration. The message is
    /// the engine's own.
    #[error("Engine error: {0}")]
    Engine(String),

    /// An unknown group name or an out-of-range group index was requested.
    #[error("No such group: {0}")]
    NoSuchGroup(String),

    /// `Scanner::rewind` was called with no saved position.
    #[error("Illegal rewind: {0}")]
    IllegalRewind(RewindFailure),

    /// A cursor does not fall on a UTF-8 character boundary.
    #[error("Invalid position {position}: {reason}")]
    InvalidPosition {
        position: usize,
        reason: &'static str,
    },

    /// A serialized configuration could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a rewind was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewindFailure {
    /// Nothing has been consumed yet.
    AtStart,
    /// The single saved position was already used.
    AlreadyRewound,
}

impl fmt::Display for RewindFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewindFailure::AtStart => write!(f, "cannot rewind beyond start position"),
            RewindFailure::AlreadyRewound => {
                write!(f, "cannot rewind more than one position back")
            }
        }
    }
}

impl RegexError {
    pub(crate) fn no_such_group(group: impl fmt::Display) -> Self {
        RegexError::NoSuchGroup(group.to_string())
    }

    pub(crate) fn not_char_boundary(position: usize) -> Self {
        RegexError::InvalidPosition {
            position,
            reason: "not on a character boundary",
        }
    }
}
