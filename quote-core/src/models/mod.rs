mod calculator_schema;
mod field;
mod line_item;
mod price_option;

pub use calculator_schema::CalculatorSchema;
pub use field::{Field, FieldVariant};
pub use line_item::LineItem;
pub use price_option::PriceOption;
