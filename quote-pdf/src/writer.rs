use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use quote_core::export::wrap::wrap_words;
use quote_core::export::{DocumentWriter, ExportError, PageSetup, TextStyle};
use tracing::{debug, info};

use crate::metrics::text_width;

const LAYER_NAME: &str = "Quote";

/// Converts PostScript points to millimetres.
fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// A `printpdf` document being drawn page by page.
pub struct PdfDocumentWriter {
    doc: PdfDocumentReference,
    setup: PageSetup,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    layer: PdfLayerReference,
    pages: usize,
}

impl PdfDocumentWriter {
    /// Creates a document holding one blank page.
    pub fn new(
        setup: &PageSetup,
        title: &str,
    ) -> Result<Self, ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            mm(setup.width),
            mm(setup.height),
            LAYER_NAME,
        );

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Writer(format!("cannot load Helvetica: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Writer(format!("cannot load Helvetica-Bold: {e}")))?;

        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            setup: *setup,
            regular,
            bold,
            layer,
            pages: 1,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }
}

impl DocumentWriter for PdfDocumentWriter {
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: TextStyle,
    ) {
        let font = if style.bold { &self.bold } else { &self.regular };
        // PDF user space grows upwards from the bottom-left corner.
        self.layer.use_text(
            text,
            style.size,
            mm(x),
            mm(self.setup.height - y),
            font,
        );
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            mm(self.setup.width),
            mm(self.setup.height),
            LAYER_NAME,
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
        debug!(page = self.pages, "started new pdf page");
    }

    fn measure_wrapped_lines(
        &self,
        text: &str,
        max_width: f32,
        style: TextStyle,
    ) -> Vec<String> {
        wrap_words(text, max_width, |s| text_width(s, style))
    }

    fn save(
        self: Box<Self>,
        path: &Path,
    ) -> Result<(), ExportError> {
        let file = File::create(path)
            .map_err(|e| ExportError::Io(format!("cannot create '{}': {e}", path.display())))?;

        let pages = self.pages;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| ExportError::Writer(format!("cannot write '{}': {e}", path.display())))?;

        info!(path = %path.display(), pages, "pdf saved");
        Ok(())
    }
}
