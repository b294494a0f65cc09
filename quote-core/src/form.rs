//! Toolkit-independent description of the calculator form.
//!
//! [`controls`] projects a schema into the controls a renderer must draw,
//! and [`FormEvent`] is what a renderer sends back when the user acts on
//! one of them. The form itself holds no state and computes nothing.

use crate::models::{CalculatorSchema, Field, FieldVariant};

/// Text of the blank first entry of every dropdown.
pub const PLACEHOLDER_TEXT: &str = "Select an option";

/// One entry of a dropdown or flag group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
    pub raw_value: String,
    pub hint: Option<String>,
}

impl Choice {
    fn placeholder() -> Self {
        Self {
            text: PLACEHOLDER_TEXT.to_string(),
            raw_value: String::new(),
            hint: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.raw_value.is_empty() && self.text == PLACEHOLDER_TEXT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Visual separator for a divider field.
    Separator,
    /// Single-select control; `choices[0]` is always the placeholder.
    Dropdown {
        alias: String,
        label: String,
        description: Option<String>,
        choices: Vec<Choice>,
    },
    /// One independent boolean control per option.
    FlagGroup {
        alias: String,
        label: String,
        description: Option<String>,
        options: Vec<Choice>,
    },
    /// A non-divider field without options; shown but not selectable.
    Inert {
        label: String,
        description: Option<String>,
    },
}

/// A user action reported by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    DropdownChanged {
        alias: String,
        raw_value: String,
    },
    FlagToggled {
        alias: String,
        option_text: String,
        checked: bool,
    },
}

/// Controls for every field of `schema`, in schema order.
pub fn controls(schema: &CalculatorSchema) -> Vec<Control> {
    schema.fields.iter().map(control_for).collect()
}

fn control_for(field: &Field) -> Control {
    if field.variant == FieldVariant::Divider {
        return Control::Separator;
    }
    if !field.is_interactive() {
        return Control::Inert {
            label: field.label.clone(),
            description: field.description.clone(),
        };
    }

    let options = field.options.iter().map(|o| Choice {
        text: o.option_text.clone(),
        raw_value: o.option_value.clone(),
        hint: o.option_hint.clone(),
    });

    match field.variant {
        FieldVariant::Dropdown => Control::Dropdown {
            alias: field.alias.clone(),
            label: field.label.clone(),
            description: field.description.clone(),
            choices: std::iter::once(Choice::placeholder()).chain(options).collect(),
        },
        _ => Control::FlagGroup {
            alias: field.alias.clone(),
            label: field.label.clone(),
            description: field.description.clone(),
            options: options.collect(),
        },
    }
}
