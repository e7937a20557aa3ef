//! Substitution of non-overlapping matches.
//!
//! The replacement for each match comes from a [`Replacer`]: a template
//! string with `\N` / `\g<name>` references, a pre-parsed [`Template`], or a
//! callback that receives the [`Match`].
//!
//! # Empty matches
//!
//! After a zero-width match the next search starts one character later, and
//! the character stepped over is emitted in front of the next replacement (or
//! with the remaining tail). Substitution therefore never drops or duplicates
//! subject text, and `x*` over `"ab"` gives `"-a-b-"` with a `"-"` template.
//! The loop stops once a match reaches `endpos`.

use crate::error::Result;
use crate::iter::char_len_at;
use crate::ops::template::Template;
use crate::pattern::{Pattern, Window};
use crate::result::Match;
use std::borrow::Cow;

/// Produces the replacement text for one match.
pub trait Replacer {
    /// Append the replacement for `m` to `dst`.
    fn replace_append(&mut self, m: &Match<'_>, dst: &mut String) -> Result<()>;

    /// The replacement when it does not depend on the match at all.
    ///
    /// Used as a fast path; returning `None` is always correct.
    fn no_expansion(&mut self) -> Option<Cow<'_, str>> {
        None
    }

    /// A parsed template to use for every match in place of this replacer.
    fn template(&self) -> Option<Template> {
        None
    }
}

impl Replacer for &str {
    fn replace_append(&mut self, m: &Match<'_>, dst: &mut String) -> Result<()> {
        Template::parse(self).expand_into(m, dst)
    }

    fn template(&self) -> Option<Template> {
        Some(Template::parse(self))
    }

    fn no_expansion(&mut self) -> Option<Cow<'_, str>> {
        if self.contains('\\') {
            None
        } else {
            Some(Cow::Borrowed(*self))
        }
    }
}

impl Replacer for &String {
    fn replace_append(&mut self, m: &Match<'_>, dst: &mut String) -> Result<()> {
        Template::parse(self).expand_into(m, dst)
    }

    fn template(&self) -> Option<Template> {
        Some(Template::parse(self))
    }

    fn no_expansion(&mut self) -> Option<Cow<'_, str>> {
        if self.contains('\\') {
            None
        } else {
            Some(Cow::Borrowed(self.as_str()))
        }
    }
}

impl Replacer for Template {
    fn replace_append(&mut self, m: &Match<'_>, dst: &mut String) -> Result<()> {
        self.expand_into(m, dst)
    }
}

impl Replacer for &Template {
    fn replace_append(&mut self, m: &Match<'_>, dst: &mut String) -> Result<()> {
        self.expand_into(m, dst)
    }
}

impl<F, T> Replacer for F
where
    F: FnMut(&Match<'_>) -> T,
    T: AsRef<str>,
{
    fn replace_append(&mut self, m: &Match<'_>, dst: &mut String) -> Result<()> {
        dst.push_str((*self)(m).as_ref());
        Ok(())
    }
}

/// Replace up to `count` matches (all when 0) of `pattern` found inside
/// `window`. Returns the new string and the number of replacements made.
pub(crate) fn substitute<R: Replacer>(
    pattern: &Pattern,
    mut replacement: R,
    haystack: &str,
    count: usize,
    window: Window,
) -> Result<(String, usize)> {
    let literal = replacement.no_expansion().map(Cow::into_owned);
    if let Some(text) = literal {
        return substitute_with(pattern, |_: &Match<'_>| text.as_str(), haystack, count, window);
    }
    match replacement.template() {
        Some(template) => substitute_with(pattern, template, haystack, count, window),
        None => substitute_with(pattern, replacement, haystack, count, window),
    }
}

fn substitute_with<R: Replacer>(
    pattern: &Pattern,
    mut replacement: R,
    haystack: &str,
    count: usize,
    window: Window,
) -> Result<(String, usize)> {
    let mut out = String::with_capacity(haystack.len());
    let mut emitted = window.pos;
    let mut search_pos = window.pos;
    let mut replaced = 0;

    out.push_str(&haystack[..window.pos]);

    loop {
        let search = Window {
            pos: search_pos,
            endpos: window.endpos,
        };
        let Some(state) = pattern.attempt_in(haystack, search, false) else {
            break;
        };
        let m = Match::new(haystack, state);

        out.push_str(&haystack[emitted..m.start()]);
        replacement.replace_append(&m, &mut out)?;
        replaced += 1;
        emitted = m.end();

        if replaced == count || emitted >= window.endpos {
            break;
        }
        search_pos = if m.is_empty() {
            match char_len_at(haystack, emitted) {
                Some(len) => emitted + len,
                None => break,
            }
        } else {
            emitted
        };
    }

    out.push_str(&haystack[emitted..]);
    trace!("substituted {replaced} matches of {:?}", pattern.as_str());
    Ok((out, replaced))
}
