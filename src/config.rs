//! Configuration constants and options for tex2text.

/// Crate version, reported by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line terminator used for both input and output
pub const LINE_TERMINATOR: char = '\n';

/// Separator emitted for a run of blank input lines
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// TeX comment marker
pub const COMMENT_MARKER: char = '%';

/// Cross-reference label command
pub const LABEL_TOKEN: &str = "\\label";

/// Nomenclature (glossary) command
pub const NOMENCLATURE_TOKEN: &str = "\\nomenclature";

/// Replacement for a scrubbed citation
pub const CITATION_PLACEHOLDER: &str = "X";

/// Named rule sets, from the plain comment stripper up to the full cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSet {
    /// Blank-line collapsing, comments and headers only
    CommentsOnly,
    /// Also drop `\label` lines
    Labels,
    /// Also isolate nomenclature entries and scrub citations
    #[default]
    Full,
}

/// Conversion options
#[derive(Debug, Clone)]
pub struct Options {
    /// Drop lines starting with `\label`
    pub strip_labels: bool,
    /// Put `\nomenclature` entries on their own line
    pub isolate_nomenclature: bool,
    /// Replace `\cite{...}` with a placeholder
    pub scrub_citations: bool,
    /// Additional line prefixes whose lines are dropped like labels
    pub drop_prefixes: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self::from_rule_set(RuleSet::default())
    }
}

impl Options {
    /// Options enabling exactly the rules of `rule_set`
    pub fn from_rule_set(rule_set: RuleSet) -> Self {
        let (strip_labels, full) = match rule_set {
            RuleSet::CommentsOnly => (false, false),
            RuleSet::Labels => (true, false),
            RuleSet::Full => (true, true),
        };
        Self {
            strip_labels,
            isolate_nomenclature: full,
            scrub_citations: full,
            drop_prefixes: Vec::new(),
        }
    }

    /// Add an extra drop prefix
    pub fn with_drop_prefix(mut self, prefix: &str) -> Self {
        if !prefix.is_empty() {
            self.drop_prefixes.push(prefix.to_string());
        }
        self
    }

    /// All prefixes whose lines are dropped, labels first
    pub fn dropped_prefixes(&self) -> Vec<&str> {
        let mut prefixes = Vec::with_capacity(self.drop_prefixes.len() + 1);
        if self.strip_labels {
            prefixes.push(LABEL_TOKEN);
        }
        prefixes.extend(self.drop_prefixes.iter().map(String::as_str));
        prefixes
    }
}
