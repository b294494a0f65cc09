//! PDF backend for quote export.
//!
//! [`PdfDocumentWriter`] implements `quote_core`'s drawing capability on
//! top of `printpdf` using the built-in Helvetica faces, and
//! [`PdfWriterFactory`] registers it under the `"pdf"` format.

pub mod factory;
pub mod metrics;
pub mod writer;

pub use factory::PdfWriterFactory;
pub use writer::PdfDocumentWriter;
