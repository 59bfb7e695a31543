//! Line state machine and the conversion driver.

use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::config::{Options, PARAGRAPH_BREAK};
use crate::error::{Error, Result};
use crate::file_handler::{LineSource, read_all, read_source, write_output};
use crate::rules::{Applied, RuleChain, RuleKind};

/// Whether the last paragraph break has already been emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// A paragraph break was just emitted; further blank lines are swallowed
    AfterBlank,
    #[default]
    AfterContent,
}

/// Turns raw TeX lines into plain-text fragments, one call per line.
pub struct LineTransformer {
    rules: RuleChain,
    state: State,
}

impl LineTransformer {
    pub fn new(opts: &Options) -> Self {
        Self {
            rules: RuleChain::from_options(opts),
            state: State::default(),
        }
    }

    /// Feed the next input line, terminator included. Lines must arrive
    /// in document order, none skipped.
    pub fn process_line(&mut self, line: &str) -> String {
        self.apply_line(line).output
    }

    /// Like [`process_line`](Self::process_line), also reporting which
    /// kind of rule handled the line.
    pub fn apply_line(&mut self, line: &str) -> Applied {
        self.rules.apply(line, &mut self.state)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn pending_blank_line(&self) -> bool {
        self.state == State::AfterBlank
    }
}

/// Counters for one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub lines_read: usize,
    /// Comment, label and other dropped lines
    pub lines_dropped: usize,
    pub paragraph_breaks: usize,
    pub bytes_written: usize,
}

/// Runs a whole document through a fresh [`LineTransformer`] and writes the
/// concatenated result to `output` in one go.
pub struct Converter<W: Write> {
    opts: Options,
    output: W,
}

impl<W: Write> Converter<W> {
    pub fn new(opts: Options, output: W) -> Self {
        Self { opts, output }
    }

    /// Convert a file
    pub fn convert_file(&mut self, path: &Path) -> Result<ConversionStats> {
        let content = read_source(path)?;
        self.convert_content(content, path)
    }

    /// Convert everything readable from `reader`
    pub fn convert_reader<R: Read>(&mut self, reader: &mut R) -> Result<ConversionStats> {
        let name = Path::new("<reader>");
        let content = read_all(reader, name)?;
        self.convert_content(content, name)
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn convert_content(&mut self, content: String, name: &Path) -> Result<ConversionStats> {
        let (text, mut stats) = transform(content, &self.opts);

        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|source| Error::Output { source })?;
        stats.bytes_written = text.len();

        info!(
            source = %name.display(),
            lines = stats.lines_read,
            dropped = stats.lines_dropped,
            paragraphs = stats.paragraph_breaks,
            bytes = stats.bytes_written,
            "converted"
        );
        Ok(stats)
    }
}

/// Main processing loop
fn transform(content: String, opts: &Options) -> (String, ConversionStats) {
    let mut transformer = LineTransformer::new(opts);
    let mut stats = ConversionStats::default();
    let mut text = String::with_capacity(content.len());
    let mut source = LineSource::new(content);

    while let Some(line) = source.next() {
        stats.lines_read += 1;
        let applied = transformer.apply_line(&line);
        match applied.kind {
            RuleKind::Comment | RuleKind::Dropped => {
                stats.lines_dropped += 1;
                debug!(line = source.line, rule = applied.rule, "dropped line");
            }
            RuleKind::Blank if applied.output == PARAGRAPH_BREAK => stats.paragraph_breaks += 1,
            RuleKind::Blank | RuleKind::Content => {}
        }
        text.push_str(&applied.output);
    }

    (text, stats)
}

/// Convert TeX text held in memory
pub fn convert_str(tex: &str, opts: &Options) -> String {
    transform(tex.to_string(), opts).0
}

/// Read `input` completely, convert it, then overwrite `output`.
pub fn convert_path(input: &Path, output: &Path, opts: &Options) -> Result<ConversionStats> {
    let content = read_source(input)?;
    let (text, mut stats) = transform(content, opts);
    write_output(output, &text)?;
    stats.bytes_written = text.len();

    info!(
        input = %input.display(),
        output = %output.display(),
        lines = stats.lines_read,
        dropped = stats.lines_dropped,
        paragraphs = stats.paragraph_breaks,
        bytes = stats.bytes_written,
        "converted"
    );
    Ok(stats)
}
