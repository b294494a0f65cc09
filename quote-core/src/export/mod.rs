//! Quote export: line items laid out onto pages through a document writer.
//!
//! Layout code draws only through [`DocumentWriter`]. Which document
//! format gets drawn is picked by name from a [`WriterRegistry`].

pub mod document;
pub mod factory;
pub mod filename;
pub mod wrap;
pub mod writer;

use thiserror::Error;

pub use document::{QuoteDocument, render_quote};
pub use factory::{WriterConfig, WriterFactory, WriterRegistry};
pub use filename::{default_prefix, quote_filename};
pub use writer::{DocumentWriter, PageSetup, TextStyle};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// Nothing with a price was selected; no document is produced.
    #[error("make a selection first")]
    EmptySelection,

    #[error("export configuration error: {0}")]
    Configuration(String),

    #[error("document writer error: {0}")]
    Writer(String),

    #[error("I/O error: {0}")]
    Io(String),
}
