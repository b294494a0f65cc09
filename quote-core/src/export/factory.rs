//! Output formats for quote export.
//!
//! A format is a name (`"pdf"`), the extension of the files it writes and a
//! way to start a blank document. The exporter asks [`WriterRegistry`] for
//! the format named in [`WriterConfig`] and never sees a concrete backend.

use super::ExportError;
use super::writer::{DocumentWriter, PageSetup};

/// The export format chosen by the user's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    pub format: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            format: "pdf".to_string(),
        }
    }
}

/// Starts documents of one output format.
pub trait WriterFactory: Send + Sync {
    /// Lowercase name the format is selected by.
    fn format_name(&self) -> &'static str;

    /// Extension given to exported files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// A document titled `title` holding one blank page of `setup`.
    fn create(
        &self,
        setup: &PageSetup,
        title: &str,
    ) -> Result<Box<dyn DocumentWriter>, ExportError>;
}

/// Output formats known to this build, in registration order.
#[derive(Default)]
pub struct WriterRegistry {
    formats: Vec<Box<dyn WriterFactory>>,
}

impl WriterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a format. A format registered under an existing name takes
    /// that name's place.
    pub fn register(
        &mut self,
        factory: Box<dyn WriterFactory>,
    ) {
        let name = factory.format_name();
        match self.formats.iter_mut().find(|f| f.format_name() == name) {
            Some(slot) => *slot = factory,
            None => self.formats.push(factory),
        }
    }

    pub fn formats(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.format_name()).collect()
    }

    /// The format named by `config`, ignoring case and surrounding blanks.
    ///
    /// # Errors
    /// [`ExportError::Configuration`] naming the requested format and the
    /// known ones when nothing matches.
    pub fn select(
        &self,
        config: &WriterConfig,
    ) -> Result<&dyn WriterFactory, ExportError> {
        let wanted = config.format.trim();
        self.formats
            .iter()
            .find(|f| f.format_name().eq_ignore_ascii_case(wanted))
            .map(|f| &**f)
            .ok_or_else(|| {
                ExportError::Configuration(format!(
                    "unknown export format '{wanted}' (known: {})",
                    self.formats().join(", ")
                ))
            })
    }
}
