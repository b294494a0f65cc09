use quote_core::export::{DocumentWriter, ExportError, PageSetup, WriterFactory};

use crate::writer::PdfDocumentWriter;

/// [`WriterFactory`] for PDF output.
///
/// Register this with a [`quote_core::export::WriterRegistry`] to make the
/// `"pdf"` format available:
///
/// ```rust,no_run
/// use quote_core::export::WriterRegistry;
/// use quote_pdf::PdfWriterFactory;
///
/// let mut registry = WriterRegistry::new();
/// registry.register(Box::new(PdfWriterFactory));
/// ```
pub struct PdfWriterFactory;

impl WriterFactory for PdfWriterFactory {
    fn format_name(&self) -> &'static str {
        "pdf"
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }

    fn create(
        &self,
        setup: &PageSetup,
        title: &str,
    ) -> Result<Box<dyn DocumentWriter>, ExportError> {
        Ok(Box::new(PdfDocumentWriter::new(setup, title)?))
    }
}

#[cfg(test)]
mod tests {
    use quote_core::export::{PageSetup, WriterFactory};

    use super::PdfWriterFactory;

    #[test]
    fn format_name_is_pdf() {
        assert_eq!(PdfWriterFactory.format_name(), "pdf");
        assert_eq!(PdfWriterFactory.file_extension(), "pdf");
    }

    #[test]
    fn creates_blank_document() {
        let result = PdfWriterFactory.create(&PageSetup::letter(), "Quote");

        assert!(result.is_ok(), "failed to create pdf writer: {:#?}", result.err());
    }
}
