use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a conversion run. Malformed TeX is never an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("can't read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("can't write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The writer handed to a `Converter` failed
    #[error("can't write output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
