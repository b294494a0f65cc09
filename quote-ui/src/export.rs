//! Export orchestration: selection in, saved document out.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use quote_core::export::{
    PageSetup, QuoteDocument, WriterConfig, WriterRegistry, default_prefix, quote_filename,
    render_quote,
};
use quote_core::{CalculatorSchema, ExportError, SelectionState};
use tracing::{error, info};

use crate::config::AppConfig;

/// Everything needed to turn a selection into a file on disk.
pub struct QuoteExporter {
    registry: WriterRegistry,
    writer: WriterConfig,
    page: PageSetup,
    output_dir: PathBuf,
    filename_prefix: Option<String>,
    closing_note: String,
}

impl QuoteExporter {
    pub fn new(
        registry: WriterRegistry,
        config: &AppConfig,
    ) -> Self {
        Self {
            registry,
            writer: config.writer_config(),
            page: PageSetup::letter(),
            output_dir: config.output_dir.clone(),
            filename_prefix: config
                .filename_prefix
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            closing_note: config.closing_note.clone(),
        }
    }

    /// Filename prefix used for quotes of `schema`.
    pub fn prefix_for(
        &self,
        schema: &CalculatorSchema,
    ) -> String {
        self.filename_prefix
            .clone()
            .unwrap_or_else(|| default_prefix(&schema.name))
    }

    /// Renders and saves the quote for `selection`, returning the file path.
    ///
    /// Nothing touches the filesystem when the selection is rejected or the
    /// configured format is unknown.
    ///
    /// # Errors
    /// * [`ExportError::EmptySelection`]: nothing priced is selected.
    /// * [`ExportError::Configuration`]: the configured format is not registered.
    /// * [`ExportError::Io`] / [`ExportError::Writer`]: the file could not be produced.
    pub fn export(
        &self,
        schema: &CalculatorSchema,
        selection: &SelectionState,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, ExportError> {
        let doc = QuoteDocument::prepare(schema, selection, now, self.closing_note.as_str())?;
        let factory = self.registry.select(&self.writer)?;

        let mut writer = factory.create(&self.page, &doc.title)?;
        let pages = render_quote(writer.as_mut(), &doc, &self.page);

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            ExportError::Io(format!(
                "cannot create output directory '{}': {e}",
                self.output_dir.display()
            ))
        })?;

        let path = self.output_dir.join(quote_filename(
            &self.prefix_for(schema),
            now,
            factory.file_extension(),
        ));

        writer.save(&path).inspect_err(|e| {
            error!(path = %path.display(), error = %e, "quote export failed");
        })?;

        info!(
            path = %path.display(),
            items = doc.items.len(),
            pages,
            total = %doc.total,
            "quote exported"
        );
        Ok(path)
    }
}
