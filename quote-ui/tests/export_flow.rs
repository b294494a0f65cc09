//! End-to-end flow: config and schema from fixtures, events applied to the
//! app state, quote exported through the PDF backend.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use quote_core::ExportError;
use quote_core::form::FormEvent;
use quote_core::loader::load_from_file;
use quote_ui::build_registry;
use quote_ui::config::{AppConfig, Overrides};
use quote_ui::export::QuoteExporter;
use quote_ui::state::AppState;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn scratch_dir(test: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quote-ui-{}-{test}", std::process::id()))
}

fn app(output_dir: &Path) -> AppState {
    let mut config = AppConfig::load(Some(&fixture("workshop.toml"))).unwrap();
    config.apply_overrides(Overrides {
        schema_path: Some(fixture("workshop.json")),
        output_dir: Some(output_dir.to_path_buf()),
        ..Overrides::default()
    });

    let schema = load_from_file(&config.schema_path);
    AppState::new(schema, QuoteExporter::new(build_registry(), &config))
}

fn choose(raw_value: &str) -> FormEvent {
    FormEvent::DropdownChanged {
        alias: "service".to_string(),
        raw_value: raw_value.to_string(),
    }
}

fn toggle(
    option_text: &str,
    checked: bool,
) -> FormEvent {
    FormEvent::FlagToggled {
        alias: "parts".to_string(),
        option_text: option_text.to_string(),
        checked,
    }
}

// ============================================================================
// config fixture
// ============================================================================

#[test]
fn config_fixture_parses() {
    let config = AppConfig::load(Some(&fixture("workshop.toml"))).unwrap();

    assert_eq!(config.output_dir, PathBuf::from("quotes"));
    assert_eq!(config.closing_note, "Quote valid for 30 days.");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.filename_prefix, None);
    assert_eq!(config.format, "pdf");
}

// ============================================================================
// totals
// ============================================================================

#[test]
fn totals_follow_events() {
    let mut state = app(&scratch_dir("totals"));

    assert!(state.apply(&choose("85")));
    assert!(state.apply(&toggle("Chain", true)));
    assert!(state.apply(&toggle("Tyres", true)));
    assert_eq!(state.total(), dec!(180));

    assert!(state.apply(&choose("1,250.00")));
    assert!(state.apply(&toggle("Tyres", false)));
    assert_eq!(state.total(), dec!(1285));
}

// ============================================================================
// export
// ============================================================================

#[test]
fn export_writes_pdf_named_after_calculator() {
    let dir = scratch_dir("export");
    let mut state = app(&dir);
    state.apply(&choose("85"));
    state.apply(&toggle("Chain", true));

    let now = Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap();
    let path = state.export(now).expect("export should succeed");

    assert_eq!(
        path,
        dir.join("Bike_Workshop_Quote_2026-10-14-09-30-00.000Z.pdf")
    );
    let bytes = fs::read(&path).expect("exported file should exist");
    assert!(bytes.starts_with(b"%PDF"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn zero_priced_dropdown_alone_is_rejected_without_creating_files() {
    let dir = scratch_dir("rejected");
    let mut state = app(&dir);
    state.apply(&choose("0"));

    assert_eq!(state.export(Utc::now()), Err(ExportError::EmptySelection));
    assert!(!dir.exists(), "rejected export must not create the output dir");
}

#[test]
fn missing_schema_degrades_instead_of_failing() {
    let config = AppConfig {
        schema_path: fixture("does-not-exist.json"),
        ..AppConfig::default()
    };
    let schema = load_from_file(&config.schema_path);
    let state = AppState::new(schema, QuoteExporter::new(build_registry(), &config));

    assert!(state.schema().is_none());
    assert!(state.load_error().is_some());
}
