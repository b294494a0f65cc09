//! Shown instead of the form when no calculator could be loaded.

use cursive::Cursive;
use cursive::view::Resizable;
use cursive::views::{Dialog, DummyView, LinearLayout, TextView};

use super::status_bar::{build_status_bar, hints};

pub fn show_empty_state(
    siv: &mut Cursive,
    reason: &str,
) {
    let layout = LinearLayout::vertical()
        .child(TextView::new("No calculator available."))
        .child(DummyView.fixed_height(1))
        .child(TextView::new(reason))
        .child(DummyView.fixed_height(1))
        .child(TextView::new(
            "Check the schema path in quote.toml or pass --schema.",
        ))
        .child(DummyView.fixed_height(1))
        .child(build_status_bar(&[hints::CTRL_Q]));

    siv.add_layer(
        Dialog::around(layout)
            .title("Quote Calculator")
            .button("Quit", Cursive::quit)
            .padding_lrtb(1, 1, 1, 0)
            .max_width(72),
    );
}
