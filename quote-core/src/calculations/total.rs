//! Running total of a calculator session.

use rust_decimal::Decimal;

use crate::models::CalculatorSchema;
use crate::selection::SelectionState;

/// Computes the running total for the current selection.
///
/// The total is every dropdown amount held in `selection` plus the price of
/// every toggle/checkbox option whose flag is set. Each dropdown contributes
/// at most its single selected amount. Negative prices lower the total.
/// A sum beyond the range of `Decimal` is clamped to `Decimal::MAX` (or
/// `Decimal::MIN` for credits) rather than overflowing.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::compute_total;
/// use quote_core::{CalculatorSchema, Field, FieldVariant, PriceOption, SelectionState};
///
/// let schema = CalculatorSchema::new(
///     "Trip",
///     vec![
///         Field::new(1, FieldVariant::Dropdown, "Travel")
///             .with_alias("travel")
///             .with_options(vec![
///                 PriceOption::new("Economy", "0"),
///                 PriceOption::new("Business", "500"),
///             ]),
///         Field::new(2, FieldVariant::Checkbox, "Extras")
///             .with_alias("insurance")
///             .with_options(vec![PriceOption::new("Insurance", "75")]),
///     ],
/// );
///
/// let mut selection = SelectionState::new();
/// selection.choose(&schema.fields[0], "500");
/// selection.set_flag("insurance", "Insurance", true);
///
/// assert_eq!(compute_total(&schema, &selection), dec!(575));
/// ```
pub fn compute_total(
    schema: &CalculatorSchema,
    selection: &SelectionState,
) -> Decimal {
    let flagged = schema.flag_groups().flat_map(|field| {
        field
            .options
            .iter()
            .filter(|o| selection.is_flagged(&field.alias, &o.option_text))
            .map(|o| o.amount())
    });

    saturating_total(selection.chosen_values().chain(flagged))
}

/// Sums `amounts`, clamping at `Decimal::MAX` / `Decimal::MIN` instead of
/// overflowing.
///
/// Credits and charges are summed apart so the clamped result does not
/// depend on the order of the amounts.
fn saturating_total(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    let (charges, credits) = amounts.fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(charges, credits), amount| {
            if amount.is_sign_negative() {
                (charges, credits.checked_add(amount).unwrap_or(Decimal::MIN))
            } else {
                (charges.checked_add(amount).unwrap_or(Decimal::MAX), credits)
            }
        },
    );

    // Opposite signs: this addition cannot overflow.
    charges + credits
}
