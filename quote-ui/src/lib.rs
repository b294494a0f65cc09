pub mod config;
pub mod export;
pub mod logging;
pub mod state;
pub mod views;

use quote_core::export::WriterRegistry;
use quote_pdf::PdfWriterFactory;

/// Registry holding every writer backend this build ships with.
pub fn build_registry() -> WriterRegistry {
    let mut registry = WriterRegistry::new();
    registry.register(Box::new(PdfWriterFactory));
    registry
}
