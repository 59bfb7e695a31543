//! tex2text - Convert TeX documents into readable plain text
//!
//! Lines are cleaned one at a time: comments and labels are dropped,
//! wrapped lines are joined into paragraphs, runs of blank lines collapse
//! into a single paragraph break, sectioning commands are reduced to their
//! titles and citations are replaced with a placeholder.
//!
//! # Example
//!
//! ```
//! use tex2text::{LineTransformer, Options};
//!
//! let mut transformer = LineTransformer::new(&Options::default());
//! assert_eq!(transformer.process_line("\\section{Introduction}\n"), "Introduction\n");
//! assert_eq!(transformer.process_line("% a comment\n"), "");
//! assert_eq!(transformer.process_line("Hello\n"), "Hello ");
//! ```

mod config;
mod error;
mod file_handler;
pub mod rules;
mod transformer;

pub use config::{Options, RuleSet, VERSION};
pub use error::{Error, Result};
pub use transformer::{
    ConversionStats, Converter, LineTransformer, State, convert_path, convert_str,
};
