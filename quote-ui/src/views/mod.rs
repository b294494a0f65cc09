//! Terminal views of the quote calculator.
//!
//! - `calculator_form` - the form, running totals and export action
//! - `empty_state` - shown when the schema could not be loaded
//! - `status_bar` - key hints shared by both

mod calculator_form;
mod empty_state;
mod status_bar;

use cursive::Cursive;
use cursive::event::Event;

pub use calculator_form::{on_export, on_reset, show_calculator_form};
pub use empty_state::show_empty_state;

use crate::state::AppState;

/// Shows the form, or the empty state when no calculator is loaded, and
/// installs the global shortcuts.
pub fn show_root(siv: &mut Cursive) {
    siv.add_global_callback(Event::CtrlChar('q'), Cursive::quit);

    let load_error = siv
        .with_user_data(|state: &mut AppState| state.load_error().map(ToString::to_string))
        .flatten();

    match load_error {
        Some(reason) => show_empty_state(siv, &reason),
        None => {
            siv.add_global_callback(Event::CtrlChar('e'), on_export);
            siv.add_global_callback(Event::CtrlChar('r'), on_reset);
            show_calculator_form(siv);
        }
    }
}
