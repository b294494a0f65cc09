//! Application state kept in cursive's user data.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use quote_core::calculations::compute_total;
use quote_core::form::FormEvent;
use quote_core::{CalculatorSchema, ExportError, SchemaError, SelectionState};
use rust_decimal::Decimal;

use crate::export::QuoteExporter;

/// The loaded calculator, the user's current choices and the exporter.
///
/// A schema that failed to load is kept as its error so the UI can show
/// why there is nothing to fill in.
pub struct AppState {
    schema: Result<Arc<CalculatorSchema>, SchemaError>,
    selection: SelectionState,
    exporter: QuoteExporter,
}

impl AppState {
    pub fn new(
        schema: Result<CalculatorSchema, SchemaError>,
        exporter: QuoteExporter,
    ) -> Self {
        Self {
            schema: schema.map(Arc::new),
            selection: SelectionState::new(),
            exporter,
        }
    }

    pub fn schema(&self) -> Option<Arc<CalculatorSchema>> {
        self.schema.as_ref().ok().cloned()
    }

    pub fn load_error(&self) -> Option<&SchemaError> {
        self.schema.as_ref().err()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Applies a form event. Always `false` without a schema.
    pub fn apply(
        &mut self,
        event: &FormEvent,
    ) -> bool {
        match &self.schema {
            Ok(schema) => self.selection.apply(schema, event),
            Err(_) => false,
        }
    }

    /// Running total of the current selection.
    pub fn total(&self) -> Decimal {
        match &self.schema {
            Ok(schema) => compute_total(schema, &self.selection),
            Err(_) => Decimal::ZERO,
        }
    }

    pub fn export(
        &self,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, ExportError> {
        match &self.schema {
            Ok(schema) => self.exporter.export(schema, &self.selection, now),
            Err(e) => Err(ExportError::Configuration(format!(
                "no calculator loaded: {e}"
            ))),
        }
    }

    /// Forget every selection.
    pub fn reset(&mut self) {
        self.selection.clear();
    }
}
