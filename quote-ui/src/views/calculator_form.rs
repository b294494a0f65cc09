//! The calculator form.
//!
//! One control per schema field between a header and a footer that both
//! show the running total. Every user action is turned into a
//! [`FormEvent`], applied to the [`AppState`], and followed by a refresh of
//! both totals.

use chrono::Utc;
use cursive::Cursive;
use cursive::align::HAlign;
use cursive::view::{Nameable, Resizable, Scrollable};
use cursive::views::{Button, Checkbox, Dialog, DummyView, LinearLayout, SelectView, TextView};
use quote_core::ExportError;
use quote_core::calculations::{format_money, parse_amount};
use quote_core::form::{Choice, Control, FormEvent, controls};
use tracing::{error, warn};

use super::status_bar::{build_status_bar, hints};
use crate::state::AppState;

// View names for accessing components
const HEADER_TOTAL: &str = "header_total";
const FOOTER_TOTAL: &str = "footer_total";
const FORM_LAYER: &str = "calculator_form";

const FORM_WIDTH: usize = 64;

/// Display the calculator form for the loaded schema.
pub fn show_calculator_form(siv: &mut Cursive) {
    let Some(schema) = siv.with_user_data(|state: &mut AppState| state.schema()).flatten() else {
        warn!("calculator form requested without a schema");
        return;
    };

    let header = LinearLayout::vertical()
        .child(
            TextView::new(schema.name.clone())
                .h_align(HAlign::Center)
                .full_width(),
        )
        .child(
            TextView::new(total_text(siv))
                .h_align(HAlign::Right)
                .with_name(HEADER_TOTAL),
        );

    let mut body = LinearLayout::vertical();
    for control in controls(&schema) {
        body.add_child(control_view(control));
        body.add_child(DummyView.fixed_height(1));
    }

    let footer = LinearLayout::horizontal()
        .child(Button::new("Export quote", on_export))
        .child(DummyView.full_width())
        .child(TextView::new(total_text(siv)).with_name(FOOTER_TOTAL));

    let status = build_status_bar(&[
        hints::TAB,
        hints::SHIFT_TAB,
        hints::ENTER,
        hints::SPACE,
        hints::CTRL_E,
        hints::CTRL_R,
        hints::CTRL_Q,
    ]);

    let layout = LinearLayout::vertical()
        .child(header)
        .child(TextView::new("─".repeat(FORM_WIDTH)))
        .child(body.scrollable().full_height())
        .child(TextView::new("─".repeat(FORM_WIDTH)))
        .child(footer)
        .child(DummyView.fixed_height(1))
        .child(status);

    let dialog = Dialog::around(layout)
        .title("Quote Calculator")
        .padding_lrtb(1, 1, 0, 0)
        .with_name(FORM_LAYER)
        .fixed_width(FORM_WIDTH + 4);

    siv.add_layer(dialog);
}

fn control_view(control: Control) -> LinearLayout {
    match control {
        Control::Separator => LinearLayout::vertical().child(TextView::new("─".repeat(FORM_WIDTH))),
        Control::Dropdown {
            alias,
            label,
            description,
            choices,
        } => {
            let mut select = SelectView::<String>::new().popup();
            for choice in &choices {
                select.add_item(choice_label(choice), choice.raw_value.clone());
            }
            let select = select.on_submit(move |s, raw_value: &String| {
                dispatch(
                    s,
                    FormEvent::DropdownChanged {
                        alias: alias.clone(),
                        raw_value: raw_value.clone(),
                    },
                );
            });

            labelled(&label, description.as_deref()).child(select)
        }
        Control::FlagGroup {
            alias,
            label,
            description,
            options,
        } => {
            let mut group = labelled(&label, description.as_deref());
            for option in options {
                let alias = alias.clone();
                let text = choice_label(&option);
                let checkbox = Checkbox::new().on_change(move |s, checked| {
                    dispatch(
                        s,
                        FormEvent::FlagToggled {
                            alias: alias.clone(),
                            option_text: option.text.clone(),
                            checked,
                        },
                    );
                });
                group.add_child(
                    LinearLayout::horizontal()
                        .child(checkbox)
                        .child(TextView::new(format!(" {text}"))),
                );
            }
            group
        }
        Control::Inert { label, description } => labelled(&label, description.as_deref()),
    }
}

/// Field label followed by its description, if any.
fn labelled(
    label: &str,
    description: Option<&str>,
) -> LinearLayout {
    let mut layout = LinearLayout::vertical().child(TextView::new(label));
    if let Some(description) = description {
        layout.add_child(TextView::new(format!("  {description}")));
    }
    layout
}

/// "Business  $500.00  (lounge access)"; the placeholder shows its text only.
fn choice_label(choice: &Choice) -> String {
    if choice.is_placeholder() {
        return choice.text.clone();
    }
    let price = format_money(parse_amount(&choice.raw_value));
    match choice.hint.as_deref() {
        Some(hint) => format!("{}  {price}  ({hint})", choice.text),
        None => format!("{}  {price}", choice.text),
    }
}

fn total_text(siv: &mut Cursive) -> String {
    let total = siv
        .with_user_data(|state: &mut AppState| state.total())
        .unwrap_or_default();
    format!("Total: {}", format_money(total))
}

/// Apply `event` and refresh both totals.
fn dispatch(
    siv: &mut Cursive,
    event: FormEvent,
) {
    siv.with_user_data(|state: &mut AppState| state.apply(&event));
    refresh_totals(siv);
}

fn refresh_totals(siv: &mut Cursive) {
    let text = total_text(siv);
    for name in [HEADER_TOTAL, FOOTER_TOTAL] {
        siv.call_on_name(name, |v: &mut TextView| v.set_content(text.clone()));
    }
}

/// Export the current selection and report the outcome in a dialog.
pub fn on_export(siv: &mut Cursive) {
    let Some(result) = siv.with_user_data(|state: &mut AppState| state.export(Utc::now())) else {
        return;
    };

    let dialog = match result {
        Ok(path) => Dialog::text(format!("Quote saved to\n{}", path.display())).title("Quote exported"),
        Err(ExportError::EmptySelection) => {
            Dialog::text(ExportError::EmptySelection.to_string()).title("Nothing to export")
        }
        Err(e) => {
            error!(error = %e, "export failed");
            Dialog::text(format!("Error: {e}")).title("Export failed")
        }
    };

    siv.add_layer(dialog.button("OK", |s| {
        s.pop_layer();
    }));
}

/// Clear the selection and rebuild the form from scratch.
pub fn on_reset(siv: &mut Cursive) {
    let Some(position) = siv.screen_mut().find_layer_from_name(FORM_LAYER) else {
        return;
    };
    siv.screen_mut().remove_layer(position);
    siv.with_user_data(|state: &mut AppState| state.reset());
    show_calculator_form(siv);
}
