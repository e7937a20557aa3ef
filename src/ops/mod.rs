//! Operations built on top of match iteration.
//!
//! - [`template`] parses replacement templates with `\N` and `\g<name>`
//!   references and expands them against a [`Match`](crate::Match).
//! - [`substitute`] replaces matches, by template or by callback.
//! - [`split`] cuts a string at every match, optionally keeping group values.

pub mod split;
pub mod substitute;
pub mod template;

pub use split::Segment;
pub use substitute::Replacer;
pub use template::Template;
