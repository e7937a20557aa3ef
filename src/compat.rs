//! Module-level convenience functions.
//!
//! Each function compiles its pattern through the process-wide
//! [`PatternCache`](crate::cache::PatternCache), so calling them repeatedly
//! with the same pattern text compiles it once. Patterns compiled here use
//! the default syntax and encoding with the given [`Options`].
//!
//! ```
//! use regex_scan::compat;
//! use regex_scan::Options;
//!
//! let m = compat::search(r"\d+", "order 66", Options::NONE).unwrap().unwrap();
//! assert_eq!(m.as_str(), "66");
//! assert_eq!(compat::sub("o", "0", "foo", 0).unwrap(), "f00");
//! ```

use crate::cache::global_cache;
use crate::config::{CompileConfig, Options};
use crate::error::Result;
use crate::iter::Matches;
use crate::ops::split::Segment;
use crate::ops::substitute::Replacer;
use crate::pattern::Pattern;
use crate::result::Match;

/// Compile `pattern` with `options`, reusing a cached compilation.
pub fn compile(pattern: &str, options: Options) -> Result<Pattern> {
    let config = CompileConfig::new().with_options(options);
    global_cache().get_or_compile(pattern, &config)
}

pub fn search<'h>(pattern: &str, haystack: &'h str, options: Options) -> Result<Option<Match<'h>>> {
    compile(pattern, options)?.search(haystack)
}

/// Match anchored at the start of `haystack`.
pub fn match_prefix<'h>(pattern: &str, haystack: &'h str, options: Options) -> Result<Option<Match<'h>>> {
    compile(pattern, options)?.match_prefix(haystack)
}

/// Split on at most `max_splits` matches (all when 0). Group values are
/// flattened into the result.
pub fn split<'h>(pattern: &str, haystack: &'h str, max_splits: usize) -> Result<Vec<Segment<'h>>> {
    compile(pattern, Options::NONE)?.split_at(haystack, max_splits, 0, None, true)
}

/// The text of every non-overlapping match.
pub fn find_all<'h>(pattern: &str, haystack: &'h str, options: Options) -> Result<Vec<&'h str>> {
    Ok(compile(pattern, options)?.find_strings(haystack).collect())
}

pub fn find_iter<'h>(pattern: &str, haystack: &'h str, options: Options) -> Result<Matches<'h>> {
    Ok(compile(pattern, options)?.find_iter(haystack))
}

/// Replace up to `count` matches (all when 0).
pub fn sub<R: Replacer>(pattern: &str, replacement: R, haystack: &str, count: usize) -> Result<String> {
    Ok(subn(pattern, replacement, haystack, count)?.0)
}

pub fn subn<R: Replacer>(pattern: &str, replacement: R, haystack: &str, count: usize) -> Result<(String, usize)> {
    compile(pattern, Options::NONE)?.subn(replacement, haystack, count)
}

/// Empty the process-wide pattern cache.
pub fn purge() {
    global_cache().clear();
}

/// Escape every regex metacharacter in `text`.
pub fn escape(text: &str) -> String {
    regex::escape(text)
}
