//! Ordered per-line rules.
//!
//! A line is offered to each filter rule in turn; the first one that
//! claims it decides the output. Lines nobody claims are content and go
//! through normalization and the configured rewrites.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::config::{
    CITATION_PLACEHOLDER, COMMENT_MARKER, LINE_TERMINATOR, NOMENCLATURE_TOKEN, Options,
    PARAGRAPH_BREAK,
};
use crate::transformer::State;

/// `\chapter{..}`, `\section{..}` or `\subsection{..}` with a title made of
/// word characters and spaces only.
static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(?:chapter|section|subsection)\{([\w ]+)\}").unwrap());

/// Greedy: two citations on one line collapse into a single match.
static CITATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\cite\{.+\}").unwrap());

/// What a filter rule decided for a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The rule claimed the line; this is its output
    Emit(String),
    /// Not this rule's business
    Pass,
}

/// Which kind of rule produced a line's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Blank,
    Comment,
    /// Label or another configured prefix
    Dropped,
    Content,
}

/// A rule that may claim a whole line before content processing.
pub trait LineRule {
    fn name(&self) -> &'static str;
    fn kind(&self) -> RuleKind;
    fn apply(&self, line: &str, state: &mut State) -> Verdict;
}

/// A transformation applied to a normalized content line.
pub trait Rewrite {
    fn name(&self) -> &'static str;
    fn rewrite(&self, line: String) -> String;
}

/// Collapses runs of blank lines into a single paragraph break.
pub struct BlankLine;

impl LineRule for BlankLine {
    fn name(&self) -> &'static str {
        "blank"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Blank
    }

    fn apply(&self, line: &str, state: &mut State) -> Verdict {
        let mut chars = line.chars();
        if chars.next() != Some(LINE_TERMINATOR) || chars.next().is_some() {
            return Verdict::Pass;
        }
        match *state {
            State::AfterBlank => Verdict::Emit(String::new()),
            State::AfterContent => {
                *state = State::AfterBlank;
                Verdict::Emit(PARAGRAPH_BREAK.to_string())
            }
        }
    }
}

pub struct CommentLine;

impl LineRule for CommentLine {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Comment
    }

    fn apply(&self, line: &str, _state: &mut State) -> Verdict {
        if line.starts_with(COMMENT_MARKER) {
            Verdict::Emit(String::new())
        } else {
            Verdict::Pass
        }
    }
}

/// Drops any line starting with `prefix` (e.g. `\label`).
pub struct DropPrefix {
    prefix: String,
}

impl DropPrefix {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl LineRule for DropPrefix {
    fn name(&self) -> &'static str {
        "drop-prefix"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Dropped
    }

    fn apply(&self, line: &str, _state: &mut State) -> Verdict {
        if line.starts_with(&self.prefix) {
            Verdict::Emit(String::new())
        } else {
            Verdict::Pass
        }
    }
}

/// Replaces a line containing a sectioning command with the bare title.
pub struct HeaderTitle;

impl Rewrite for HeaderTitle {
    fn name(&self) -> &'static str {
        "header"
    }

    fn rewrite(&self, line: String) -> String {
        match HEADER_REGEX.captures(&line) {
            Some(caps) => {
                let mut title = caps[1].to_string();
                title.push(LINE_TERMINATOR);
                title
            }
            None => line,
        }
    }
}

/// Puts a `\nomenclature` entry on a line of its own.
pub struct NomenclatureIsolation;

impl Rewrite for NomenclatureIsolation {
    fn name(&self) -> &'static str {
        "nomenclature"
    }

    fn rewrite(&self, line: String) -> String {
        if !line.starts_with(NOMENCLATURE_TOKEN) {
            return line;
        }
        let mut isolated = String::with_capacity(line.len() + 2);
        isolated.push(LINE_TERMINATOR);
        isolated.push_str(&line);
        if !isolated.ends_with(LINE_TERMINATOR) {
            isolated.push(LINE_TERMINATOR);
        }
        isolated
    }
}

pub struct CitationScrub;

impl Rewrite for CitationScrub {
    fn name(&self) -> &'static str {
        "citation"
    }

    fn rewrite(&self, line: String) -> String {
        match CITATION_REGEX.replace_all(&line, NoExpand(CITATION_PLACEHOLDER)) {
            Cow::Borrowed(_) => line,
            Cow::Owned(scrubbed) => scrubbed,
        }
    }
}

/// Joins a wrapped content line onto its paragraph: drop the terminator,
/// drop exactly one leading space, end with exactly one separator space.
pub fn normalize(line: &str) -> String {
    let line = line.strip_suffix(LINE_TERMINATOR).unwrap_or(line);
    let line = line.strip_prefix(' ').unwrap_or(line);
    let mut joined = String::with_capacity(line.len() + 1);
    joined.push_str(line);
    if !joined.ends_with(' ') {
        joined.push(' ');
    }
    joined
}

/// Result of running a line through the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub kind: RuleKind,
    /// Name of the filter that claimed the line, or `"content"`
    pub rule: &'static str,
    pub output: String,
}

/// Filters followed by the content rewrites.
pub struct RuleChain {
    filters: Vec<Box<dyn LineRule>>,
    rewrites: Vec<Box<dyn Rewrite>>,
}

impl RuleChain {
    pub fn new(filters: Vec<Box<dyn LineRule>>, rewrites: Vec<Box<dyn Rewrite>>) -> Self {
        Self { filters, rewrites }
    }

    pub fn from_options(opts: &Options) -> Self {
        let mut filters: Vec<Box<dyn LineRule>> = vec![Box::new(BlankLine), Box::new(CommentLine)];
        for prefix in opts.dropped_prefixes() {
            filters.push(Box::new(DropPrefix::new(prefix)));
        }

        let mut rewrites: Vec<Box<dyn Rewrite>> = vec![Box::new(HeaderTitle)];
        if opts.isolate_nomenclature {
            rewrites.push(Box::new(NomenclatureIsolation));
        }
        if opts.scrub_citations {
            rewrites.push(Box::new(CitationScrub));
        }

        Self::new(filters, rewrites)
    }

    #[cfg(test)]
    fn rule_names(&self) -> Vec<&'static str> {
        self.filters
            .iter()
            .map(|r| r.name())
            .chain(self.rewrites.iter().map(|r| r.name()))
            .collect()
    }

    pub fn apply(&self, line: &str, state: &mut State) -> Applied {
        for filter in &self.filters {
            if let Verdict::Emit(output) = filter.apply(line, state) {
                return Applied {
                    kind: filter.kind(),
                    rule: filter.name(),
                    output,
                };
            }
        }

        *state = State::AfterContent;
        let output = self
            .rewrites
            .iter()
            .fold(normalize(line), |line, rewrite| rewrite.rewrite(line));
        Applied {
            kind: RuleKind::Content,
            rule: "content",
            output,
        }
    }
}
