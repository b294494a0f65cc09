use rust_decimal::Decimal;

use crate::calculations::common::parse_amount;

/// One selectable choice of a field.
///
/// `option_value` keeps the configured text exactly as written; it is only
/// turned into money through [`PriceOption::amount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceOption {
    pub option_text: String,
    pub option_value: String,
    pub option_hint: Option<String>,
}

impl PriceOption {
    pub fn new(
        option_text: impl Into<String>,
        option_value: impl Into<String>,
    ) -> Self {
        Self {
            option_text: option_text.into(),
            option_value: option_value.into(),
            option_hint: None,
        }
    }

    pub fn with_hint(
        mut self,
        hint: impl Into<String>,
    ) -> Self {
        self.option_hint = Some(hint.into());
        self
    }

    /// Parsed price of this option; 0 when the configured value is not a number.
    pub fn amount(&self) -> Decimal {
        parse_amount(&self.option_value)
    }
}
