use super::Field;

/// A loaded calculator: its display name and fields in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorSchema {
    pub name: String,
    pub fields: Vec<Field>,
}

impl CalculatorSchema {
    pub fn new(
        name: impl Into<String>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// First field registered under `alias`.
    pub fn field(
        &self,
        alias: &str,
    ) -> Option<&Field> {
        self.fields.iter().find(|f| f.alias == alias)
    }

    pub fn flag_groups(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.variant.is_flag_group())
    }
}
