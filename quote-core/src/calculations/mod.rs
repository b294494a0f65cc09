//! Pricing calculations over a calculator schema and the current selection.
//!
//! Everything here is a pure function of its inputs, so callers recompute
//! after every selection change instead of caching results.

pub mod common;
pub mod line_items;
pub mod total;

pub use common::{format_money, parse_amount, round_half_up};
pub use line_items::{build_line_items, prepare_line_items};
pub use total::compute_total;
