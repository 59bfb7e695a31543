//! File handling for tex2text - reading source lines and writing the result.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::config::LINE_TERMINATOR;
use crate::error::{Error, Result};

/// Read a whole TeX source into memory.
pub fn read_source(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_all(&mut file, path)
}

/// Read everything from `reader`; `path` only names the source in errors.
pub fn read_all<R: Read>(reader: &mut R, path: &Path) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content)
}

/// Write `text` to `path`, replacing whatever was there.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Splits text into lines that keep their terminator, like reading a
/// file in text mode. `\r\n` comes out as `\n`; the final line has no
/// terminator if the source did not end with one.
pub struct LineSource {
    buffer: String,
    pos: usize,
    /// 1-based number of the line most recently returned
    pub(crate) line: usize,
}

impl LineSource {
    pub fn new(content: String) -> Self {
        Self {
            buffer: content,
            pos: 0,
            line: 0,
        }
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.buffer.len()
    }
}

impl Iterator for LineSource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_eof() {
            return None;
        }

        let rest = &self.buffer[self.pos..];
        let (raw, consumed) = match rest.find(LINE_TERMINATOR) {
            Some(idx) => (&rest[..=idx], idx + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        self.line += 1;

        let line = match raw.strip_suffix("\r\n") {
            Some(body) => {
                let mut line = String::with_capacity(body.len() + 1);
                line.push_str(body);
                line.push(LINE_TERMINATOR);
                line
            }
            None => raw.to_string(),
        };
        Some(line)
    }
}
