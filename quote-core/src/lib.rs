pub mod calculations;
pub mod export;
pub mod form;
pub mod loader;
pub mod models;
pub mod selection;

pub use export::ExportError;
pub use loader::SchemaError;
pub use models::*;
pub use selection::SelectionState;
