//! In-memory selection state for one running form session.
//!
//! The state is created empty when a form opens, changed only by form
//! events and dropped when the form closes. Nothing here is persisted.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::parse_amount;
use crate::form::FormEvent;
use crate::models::{CalculatorSchema, Field, FieldVariant};

/// The user's current choices, keyed by field alias.
///
/// Dropdown selections live in two maps kept in step: the chosen amount and
/// the chosen option's display text. Toggle and checkbox selections are one
/// independent flag per `(alias, option_text)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    chosen_values: HashMap<String, Decimal>,
    chosen_labels: HashMap<String, String>,
    chosen_flags: HashMap<(String, String), bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dropdown choice for `field`.
    ///
    /// The amount is parsed from `raw_value`; the label is the text of the
    /// first option carrying that raw value, or empty when none does (the
    /// placeholder entry). Any earlier value/label pair for the alias is
    /// replaced.
    pub fn choose(
        &mut self,
        field: &Field,
        raw_value: &str,
    ) {
        let label = field
            .option_by_value(raw_value)
            .map(|o| o.option_text.clone())
            .unwrap_or_default();
        let amount = parse_amount(raw_value);

        debug!(alias = %field.alias, %amount, label = %label, "dropdown selection changed");
        self.chosen_values.insert(field.alias.clone(), amount);
        self.chosen_labels.insert(field.alias.clone(), label);
    }

    /// Sets or clears the flag of one toggle/checkbox option.
    pub fn set_flag(
        &mut self,
        alias: &str,
        option_text: &str,
        checked: bool,
    ) {
        debug!(%alias, option = %option_text, checked, "option flag changed");
        let key = (alias.to_string(), option_text.to_string());
        if checked {
            self.chosen_flags.insert(key, true);
        } else {
            self.chosen_flags.remove(&key);
        }
    }

    /// Applies a renderer event against `schema`.
    ///
    /// Returns `false` when the event names a field the schema does not have
    /// or a field of the wrong kind; the state is left untouched then.
    pub fn apply(
        &mut self,
        schema: &CalculatorSchema,
        event: &FormEvent,
    ) -> bool {
        match event {
            FormEvent::DropdownChanged { alias, raw_value } => {
                match schema.field(alias) {
                    Some(field) if field.variant == FieldVariant::Dropdown => {
                        self.choose(field, raw_value);
                        true
                    }
                    _ => {
                        warn!(%alias, "dropdown event for unknown field ignored");
                        false
                    }
                }
            }
            FormEvent::FlagToggled {
                alias,
                option_text,
                checked,
            } => match schema.field(alias) {
                Some(field) if field.variant.is_flag_group() => {
                    self.set_flag(alias, option_text, *checked);
                    true
                }
                _ => {
                    warn!(%alias, "flag event for unknown field ignored");
                    false
                }
            },
        }
    }

    /// Selected amount of a dropdown, if it was ever changed.
    pub fn value(
        &self,
        alias: &str,
    ) -> Option<Decimal> {
        self.chosen_values.get(alias).copied()
    }

    /// Display text of the selected dropdown option, if it was ever changed.
    pub fn label(
        &self,
        alias: &str,
    ) -> Option<&str> {
        self.chosen_labels.get(alias).map(String::as_str)
    }

    pub fn is_flagged(
        &self,
        alias: &str,
        option_text: &str,
    ) -> bool {
        self.chosen_flags
            .get(&(alias.to_string(), option_text.to_string()))
            .copied()
            .unwrap_or(false)
    }

    /// Every dropdown amount currently held, in no particular order.
    pub fn chosen_values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.chosen_values.values().copied()
    }

    /// True when at least one dropdown holds an amount above zero.
    pub fn has_positive_dropdown(&self) -> bool {
        self.chosen_values().any(|v| v > Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.chosen_values.is_empty() && self.chosen_flags.is_empty()
    }

    /// Clear every selection for starting fresh.
    pub fn clear(&mut self) {
        self.chosen_values.clear();
        self.chosen_labels.clear();
        self.chosen_flags.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::PriceOption;

    fn test_schema() -> CalculatorSchema {
        CalculatorSchema::new(
            "Trip",
            vec![
                Field::new(1, FieldVariant::Dropdown, "Travel")
                    .with_alias("travel")
                    .with_options(vec![
                        PriceOption::new("Economy", "0"),
                        PriceOption::new("Business", "500"),
                    ]),
                Field::new(2, FieldVariant::Checkbox, "Extras")
                    .with_alias("insurance")
                    .with_options(vec![
                        PriceOption::new("Insurance", "75"),
                        PriceOption::new("Lounge", "40"),
                    ]),
            ],
        )
    }

    fn dropdown(alias: &str, raw_value: &str) -> FormEvent {
        FormEvent::DropdownChanged {
            alias: alias.to_string(),
            raw_value: raw_value.to_string(),
        }
    }

    fn flag(alias: &str, option_text: &str, checked: bool) -> FormEvent {
        FormEvent::FlagToggled {
            alias: alias.to_string(),
            option_text: option_text.to_string(),
            checked,
        }
    }

    // =========================================================================
    // dropdown tests
    // =========================================================================

    #[test]
    fn choose_sets_value_and_label_together() {
        let schema = test_schema();
        let mut state = SelectionState::new();

        assert!(state.apply(&schema, &dropdown("travel", "500")));

        assert_eq!(state.value("travel"), Some(dec!(500)));
        assert_eq!(state.label("travel"), Some("Business"));
    }

    #[test]
    fn choose_replaces_previous_pair() {
        let schema = test_schema();
        let mut state = SelectionState::new();

        state.apply(&schema, &dropdown("travel", "500"));
        state.apply(&schema, &dropdown("travel", "0"));

        assert_eq!(state.value("travel"), Some(dec!(0)));
        assert_eq!(state.label("travel"), Some("Economy"));
        assert_eq!(state.chosen_values().count(), 1);
    }

    #[test]
    fn placeholder_choice_has_zero_value_and_empty_label() {
        let schema = test_schema();
        let mut state = SelectionState::new();

        state.apply(&schema, &dropdown("travel", "500"));
        state.apply(&schema, &dropdown("travel", ""));

        assert_eq!(state.value("travel"), Some(Decimal::ZERO));
        assert_eq!(state.label("travel"), Some(""));
        assert!(!state.has_positive_dropdown());
    }

    #[test]
    fn dropdown_event_for_checkbox_field_is_ignored() {
        let schema = test_schema();
        let mut state = SelectionState::new();

        assert!(!state.apply(&schema, &dropdown("insurance", "75")));
        assert!(state.is_empty());
    }

    // =========================================================================
    // flag tests
    // =========================================================================

    #[test]
    fn toggling_one_option_leaves_others_alone() {
        let schema = test_schema();
        let mut state = SelectionState::new();

        state.apply(&schema, &flag("insurance", "Insurance", true));

        assert!(state.is_flagged("insurance", "Insurance"));
        assert!(!state.is_flagged("insurance", "Lounge"));
    }

    #[test]
    fn unchecking_clears_the_flag() {
        let schema = test_schema();
        let mut state = SelectionState::new();

        state.apply(&schema, &flag("insurance", "Insurance", true));
        state.apply(&schema, &flag("insurance", "Insurance", false));

        assert!(!state.is_flagged("insurance", "Insurance"));
        assert!(state.is_empty());
    }

    #[test]
    fn flag_event_for_unknown_alias_is_ignored() {
        let schema = test_schema();
        let mut state = SelectionState::new();

        assert!(!state.apply(&schema, &flag("nope", "Insurance", true)));
        assert!(state.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let schema = test_schema();
        let mut state = SelectionState::new();
        state.apply(&schema, &dropdown("travel", "500"));
        state.apply(&schema, &flag("insurance", "Lounge", true));

        state.clear();

        assert_eq!(state, SelectionState::new());
    }
}
