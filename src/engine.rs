//! Boundary with the external matching engine.
//!
//! Everything the rest of the crate knows about the engine goes through two
//! calls: [`compile`] turns pattern text and a [`CompileConfig`] into a
//! [`CompiledRegex`], and [`CompiledRegex::attempt`] runs one anchored or
//! unanchored match over a window of a subject string and reports the group
//! spans. The engine is the meta regex from `regex-automata`, which supports
//! anchored searches and bounded windows directly.

use crate::config::{CompileConfig, Options, Syntax};
use crate::error::{RegexError, Result};
use crate::result::Span;
use regex_automata::{meta, util::syntax, Anchored, Input, PatternID};
use std::borrow::Cow;
use std::collections::HashMap;

/// Option bits the engine cannot honour.
const UNSUPPORTED_OPTIONS: [Options; 4] = [
    Options::FIND_LONGEST,
    Options::FIND_NOT_EMPTY,
    Options::NOTBOL,
    Options::NOTEOL,
];

/// A compiled pattern together with its group layout.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRegex {
    regex: meta::Regex,
    /// Number of spans reported per match, including group 0.
    group_len: usize,
    names: HashMap<String, usize>,
    index_names: Vec<Option<String>>,
}

pub(crate) fn compile(text: &str, config: &CompileConfig) -> Result<CompiledRegex> {
    if !config.encoding.is_supported() {
        return Err(RegexError::Engine(format!(
            "unsupported encoding: {:?}",
            config.encoding
        )));
    }
    if !config.syntax.is_supported() {
        return Err(RegexError::Engine(format!(
            "unsupported syntax: {:?}",
            config.syntax
        )));
    }
    let options = config.options;
    if let Some(flag) = UNSUPPORTED_OPTIONS
        .iter()
        .find(|flag| options.contains(**flag))
    {
        return Err(RegexError::Engine(format!("unsupported option: {flag:?}")));
    }

    let source: Cow<'_, str> = match config.syntax {
        Syntax::Asis => Cow::Owned(regex::escape(text)),
        _ => Cow::Borrowed(text),
    };

    let syntax_config = syntax::Config::new()
        .case_insensitive(options.contains(Options::IGNORECASE))
        .ignore_whitespace(options.contains(Options::EXTEND))
        .dot_matches_new_line(options.contains(Options::DOTALL))
        .multi_line(options.contains(Options::MULTILINE));

    let regex = meta::Regex::builder()
        .syntax(syntax_config)
        .build(&source)
        .map_err(|e| RegexError::Engine(e.to_string()))?;

    let (group_len, index_names) = if options.contains(Options::DONT_CAPTURE_GROUP) {
        (1, vec![None])
    } else {
        let index_names: Vec<Option<String>> = regex
            .group_info()
            .pattern_names(PatternID::ZERO)
            .map(|name| name.map(str::to_string))
            .collect();
        (index_names.len(), index_names)
    };

    let names = index_names
        .iter()
        .enumerate()
        .filter_map(|(index, name)| name.as_ref().map(|name| (name.clone(), index)))
        .collect();

    debug!("compiled pattern {text:?} with {} groups", group_len - 1);

    Ok(CompiledRegex {
        regex,
        group_len,
        names,
        index_names,
    })
}

impl CompiledRegex {
    /// Number of spans per match, group 0 included.
    pub(crate) fn group_len(&self) -> usize {
        self.group_len
    }

    pub(crate) fn names(&self) -> &HashMap<String, usize> {
        &self.names
    }

    pub(crate) fn name_of(&self, index: usize) -> Option<&str> {
        self.index_names.get(index).and_then(|name| name.as_deref())
    }

    /// Run one match attempt over `haystack[pos..endpos]`.
    ///
    /// The subject is treated as ending at `endpos`, while the text before
    /// `pos` stays visible to look-behind assertions such as `^` and `\b`.
    /// Callers guarantee `pos <= endpos <= haystack.len()` and that both fall
    /// on character boundaries.
    pub(crate) fn attempt(
        &self,
        haystack: &str,
        pos: usize,
        endpos: usize,
        anchored: bool,
    ) -> Option<Vec<Option<Span>>> {
        let window = &haystack[..endpos];
        let input = Input::new(window)
            .range(pos..endpos)
            .anchored(if anchored { Anchored::Yes } else { Anchored::No });

        let mut caps = self.regex.create_captures();
        self.regex.search_captures(&input, &mut caps);
        if !caps.is_match() {
            return None;
        }

        let spans = (0..self.group_len)
            .map(|index| {
                caps.get_group(index)
                    .map(|span| Span::new(span.start, span.end))
            })
            .collect();
        Some(spans)
    }
}
