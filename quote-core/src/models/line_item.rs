use rust_decimal::Decimal;

/// One exported row of a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub section: String,
    pub item: String,
    pub price: Decimal,
}
