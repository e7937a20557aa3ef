//! Compile-time configuration for patterns and pattern caches.
//!
//! A [`CompileConfig`] bundles the three selectors the engine is compiled
//! with: option bits, subject encoding and syntax dialect. It is `Copy` and
//! hashable so it can form part of a cache key, and serde-derived so an
//! embedding application can load it from its own configuration files.
//!
//! # Examples
//!
//! ```rust
//! use regex_scan::{CompileConfig, Options, Pattern};
//!
//! let config = CompileConfig::new().with_options(Options::IGNORECASE | Options::MULTILINE);
//! let pattern = Pattern::with_config(r"^hello$", config)?;
//! assert!(pattern.is_match("greeting:\nHELLO\n"));
//! # Ok::<(), regex_scan::RegexError>(())
//! ```

use crate::error::{RegexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Option bitset, using Oniguruma's bit order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(u32);

impl Options {
    pub const NONE: Options = Options(0);
    pub const IGNORECASE: Options = Options(1);
    /// Extended syntax: whitespace and `#` comments in the pattern are ignored.
    pub const EXTEND: Options = Options(1 << 1);
    /// `.` also matches `\n`. Oniguruma calls this bit "multiline".
    pub const DOTALL: Options = Options(1 << 2);
    pub const SINGLELINE: Options = Options(1 << 3);
    pub const FIND_LONGEST: Options = Options(1 << 4);
    pub const FIND_NOT_EMPTY: Options = Options(1 << 5);
    /// `^` and `$` match at line boundaries (negated single-line mode).
    pub const MULTILINE: Options = Options(1 << 6);
    pub const DONT_CAPTURE_GROUP: Options = Options(1 << 7);
    pub const CAPTURE_GROUP: Options = Options(1 << 8);
    pub const NOTBOL: Options = Options(1 << 9);
    pub const NOTEOL: Options = Options(1 << 10);
    pub const POSIX_REGION: Options = Options(1 << 11);

    pub const VERBOSE: Options = Options::EXTEND;

    const ALL: u32 = (1 << 12) - 1;

    const NAMES: [(Options, &'static str); 12] = [
        (Options::IGNORECASE, "IGNORECASE"),
        (Options::EXTEND, "EXTEND"),
        (Options::DOTALL, "DOTALL"),
        (Options::SINGLELINE, "SINGLELINE"),
        (Options::FIND_LONGEST, "FIND_LONGEST"),
        (Options::FIND_NOT_EMPTY, "FIND_NOT_EMPTY"),
        (Options::MULTILINE, "MULTILINE"),
        (Options::DONT_CAPTURE_GROUP, "DONT_CAPTURE_GROUP"),
        (Options::CAPTURE_GROUP, "CAPTURE_GROUP"),
        (Options::NOTBOL, "NOTBOL"),
        (Options::NOTEOL, "NOTEOL"),
        (Options::POSIX_REGION, "POSIX_REGION"),
    ];

    pub const fn empty() -> Self {
        Options::NONE
    }

    /// Build options from raw bits, rejecting bits the engine does not define.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::ALL == 0 {
            Some(Options(bits))
        } else {
            None
        }
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Options) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Options) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Options) {
        self.0 &= !other.0;
    }

    /// Iterate over the names of the bits that are set.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl BitOr for Options {
    type Output = Options;

    fn bitor(self, rhs: Options) -> Options {
        Options(self.0 | rhs.0)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Options) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Options(NONE)");
        }
        let names: Vec<&str> = self.names().collect();
        write!(f, "Options({})", names.join(" | "))
    }
}

/// Subject encodings Oniguruma knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Ascii,
    Iso8859_1,
    Iso8859_2,
    Iso8859_3,
    Iso8859_4,
    Iso8859_5,
    Iso8859_6,
    Iso8859_7,
    Iso8859_8,
    Iso8859_9,
    Iso8859_10,
    Iso8859_11,
    Iso8859_12,
    Iso8859_13,
    Iso8859_14,
    Iso8859_15,
    Iso8859_16,
    #[default]
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
    EucJp,
    EucTw,
    EucKr,
    EucCn,
    Sjis,
    Koi8,
    Koi8R,
    Cp1251,
    Big5,
    Gb18030,
}

impl Encoding {
    /// Whether subjects in this encoding can be handed to the engine as `&str`.
    pub fn is_supported(self) -> bool {
        matches!(self, Encoding::Ascii | Encoding::Utf8)
    }
}

/// Syntax dialects Oniguruma knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Syntax {
    /// The pattern text is a literal.
    Asis,
    PosixBasic,
    PosixExtended,
    Emacs,
    Grep,
    GnuRegex,
    Java,
    Perl,
    PerlNg,
    Ruby,
    #[default]
    Python,
}

impl Syntax {
    /// Dialects the engine's native Perl-style syntax can stand in for.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            Syntax::Asis | Syntax::Java | Syntax::Perl | Syntax::PerlNg | Syntax::Ruby | Syntax::Python
        )
    }
}

/// Everything a pattern is compiled with besides its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    pub options: Options,
    pub encoding: Encoding,
    pub syntax: Syntax,
}

impl CompileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RegexError::Config(format!("invalid compile configuration: {e}")))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| RegexError::Config(format!("cannot serialize compile configuration: {e}")))
    }
}

/// Sizing for a [`PatternCache`](crate::cache::PatternCache).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Number of compiled patterns kept before the cache is cleared.
    ///
    /// **Default**: 100
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_size: 100 }
    }
}
