use super::PriceOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldVariant {
    Dropdown,
    Toggle,
    Checkbox,
    Divider,
}

impl FieldVariant {
    /// Case-insensitive match on the configured `type` string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dropdown" => Some(Self::Dropdown),
            "toggle" => Some(Self::Toggle),
            "checkbox" => Some(Self::Checkbox),
            "divider" => Some(Self::Divider),
            _ => None,
        }
    }

    /// Prefix of the key used when a field has no configured alias.
    pub fn alias_prefix(&self) -> &'static str {
        match self {
            Self::Dropdown => "drop",
            Self::Toggle => "toggle",
            Self::Checkbox => "check",
            Self::Divider => "divider",
        }
    }

    /// Toggle and Checkbox fields behave identically: one flag per option.
    pub fn is_flag_group(&self) -> bool {
        matches!(self, Self::Toggle | Self::Checkbox)
    }
}

/// One schema-declared form element.
///
/// `alias` is always resolved: either the configured alias or the synthetic
/// key from [`Field::synthetic_alias`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: i64,
    pub variant: FieldVariant,
    pub label: String,
    pub description: Option<String>,
    pub alias: String,
    pub options: Vec<PriceOption>,
}

impl Field {
    pub fn new(
        id: i64,
        variant: FieldVariant,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            variant,
            label: label.into(),
            description: None,
            alias: Self::synthetic_alias(variant, id),
            options: Vec::new(),
        }
    }

    pub fn with_alias(
        mut self,
        alias: impl Into<String>,
    ) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_description(
        mut self,
        description: impl Into<String>,
    ) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_options(
        mut self,
        options: Vec<PriceOption>,
    ) -> Self {
        self.options = options;
        self
    }

    pub fn synthetic_alias(
        variant: FieldVariant,
        id: i64,
    ) -> String {
        format!("{}_{}", variant.alias_prefix(), id)
    }

    /// A field accepts input only when it is not a divider and has options.
    pub fn is_interactive(&self) -> bool {
        self.variant != FieldVariant::Divider && !self.options.is_empty()
    }

    /// First option whose raw `option_value` equals `raw_value`.
    pub fn option_by_value(
        &self,
        raw_value: &str,
    ) -> Option<&PriceOption> {
        self.options.iter().find(|o| o.option_value == raw_value)
    }
}
