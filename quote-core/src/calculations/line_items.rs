//! Itemized rows for an exported quote.

use crate::export::ExportError;
use crate::models::{CalculatorSchema, FieldVariant, LineItem};
use crate::selection::SelectionState;

/// Builds the quote rows for the current selection, in schema field order.
///
/// A dropdown yields one row when its amount is non-zero and its label is
/// non-empty; a zero amount is never exported, since it cannot be told apart
/// from the placeholder. A toggle/checkbox field yields one row per flagged
/// option, in declared option order.
pub fn build_line_items(
    schema: &CalculatorSchema,
    selection: &SelectionState,
) -> Vec<LineItem> {
    let mut items = Vec::new();

    for field in &schema.fields {
        match field.variant {
            FieldVariant::Dropdown => {
                let value = selection.value(&field.alias).unwrap_or_default();
                let label = selection.label(&field.alias).unwrap_or_default();
                if !value.is_zero() && !label.is_empty() {
                    items.push(LineItem {
                        section: field.label.clone(),
                        item: label.to_string(),
                        price: value,
                    });
                }
            }
            FieldVariant::Toggle | FieldVariant::Checkbox => {
                items.extend(
                    field
                        .options
                        .iter()
                        .filter(|o| selection.is_flagged(&field.alias, &o.option_text))
                        .map(|o| LineItem {
                            section: field.label.clone(),
                            item: o.option_text.clone(),
                            price: o.amount(),
                        }),
                );
            }
            FieldVariant::Divider => {}
        }
    }

    items
}

/// Builds the line items and applies the export guard.
///
/// # Errors
///
/// Returns [`ExportError::EmptySelection`] when there are no line items and
/// no dropdown holds a positive amount.
pub fn prepare_line_items(
    schema: &CalculatorSchema,
    selection: &SelectionState,
) -> Result<Vec<LineItem>, ExportError> {
    let items = build_line_items(schema, selection);
    if items.is_empty() && !selection.has_positive_dropdown() {
        return Err(ExportError::EmptySelection);
    }
    Ok(items)
}
