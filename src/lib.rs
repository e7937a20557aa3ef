//! # regex-scan
//!
//! Rich match results, substitution, splitting and incremental scanning on
//! top of the [`regex-automata`](https://docs.rs/regex-automata) meta regex
//! engine.
//!
//! A compiled [`Pattern`] is the entry point for one-shot matching, lazy
//! iteration over non-overlapping matches, template or callback substitution
//! and splitting. A [`Scanner`] walks a growing string with an anchored
//! cursor that can be rewound one step.
//!
//! ## Quick Start
//!
//! ### Matching
//!
//! ```rust
//! use regex_scan::Pattern;
//!
//! let pattern = Pattern::new(r"(?P<key>\w+)=(?P<value>\w+)")?;
//! let m = pattern.search("retries=3")?.expect("match");
//!
//! assert_eq!(m.group("key")?, Some("retries"));
//! assert_eq!(m.group(2)?, Some("3"));
//! assert_eq!(m.lastgroup(), Some("value"));
//! assert_eq!(m.expand(r"\g<value> \1")?, "3 retries");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Substitution and Splitting
//!
//! ```rust
//! use regex_scan::{Match, Pattern, Segment};
//!
//! let pattern = Pattern::new(r"(\d+)")?;
//! assert_eq!(pattern.sub(r"<\1>", "a1b22")?, "a<1>b<22>");
//!
//! let upper = pattern.sub(|m: &Match<'_>| format!("#{}", m.as_str()), "a1")?;
//! assert_eq!(upper, "a#1");
//!
//! let parts = Pattern::new(",")?.split("x,y");
//! assert_eq!(parts, vec![Segment::Text("x"), Segment::Text("y")]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use regex_scan::{CompileConfig, Options, Pattern, Syntax};
//!
//! let config = CompileConfig::new().with_options(Options::IGNORECASE | Options::MULTILINE);
//! let pattern = Pattern::with_config("^end$", config)?;
//! assert!(pattern.is_match("begin\nEND\n"));
//!
//! let literal = Pattern::with_config("a+b", CompileConfig::new().with_syntax(Syntax::Asis))?;
//! assert!(literal.is_match("a+b"));
//! assert!(!literal.is_match("aab"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Offsets
//!
//! Every position is a byte offset into the subject and must fall on a
//! character boundary. A failed match is `Ok(None)`, never an error.
//!
//! ## Features
//!
//! - `logging`: emit `debug`/`trace` records through the `log` crate.

#[macro_use]
mod macros;

pub mod cache;
pub mod compat;
pub mod config;
pub mod error;
pub mod iter;
pub mod ops;
pub mod pattern;
pub mod result;
pub mod scanner;

pub(crate) mod engine;

// Patterns and their results
pub use pattern::Pattern;
pub use result::{GroupRef, Match, Span};

// Iteration, substitution and splitting
pub use iter::{FindStrings, Matches};
pub use ops::{Replacer, Segment, Template};

pub use scanner::Scanner;

// Caching and configuration
pub use cache::{global_cache, init_global_cache, CacheStats, PatternCache};
pub use config::{CacheConfig, CompileConfig, Encoding, Options, Syntax};

// Core types and errors
pub use error::{RegexError, Result, RewindFailure};
