use chrono::{DateTime, SecondsFormat, Utc};

/// File name of an exported quote.
///
/// The timestamp is ISO-8601 UTC with milliseconds, with `:` and `T`
/// replaced by `-` so the name is valid on every platform.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use quote_core::export::quote_filename;
///
/// let at = Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap();
/// assert_eq!(
///     quote_filename("Trip", at, "pdf"),
///     "Trip_Quote_2026-10-14-09-30-00.000Z.pdf"
/// );
/// ```
pub fn quote_filename(
    prefix: &str,
    generated_at: DateTime<Utc>,
    extension: &str,
) -> String {
    let stamp = generated_at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', 'T'], "-");
    format!("{prefix}_Quote_{stamp}.{extension}")
}

/// File name prefix derived from a calculator name.
///
/// Every run of characters other than ASCII letters and digits becomes one
/// `_`; leading and trailing separators are dropped. An empty result falls
/// back to `Quote`.
pub fn default_prefix(calculator_name: &str) -> String {
    let mut prefix = String::with_capacity(calculator_name.len());
    for ch in calculator_name.chars() {
        if ch.is_ascii_alphanumeric() {
            prefix.push(ch);
        } else if !prefix.is_empty() && !prefix.ends_with('_') {
            prefix.push('_');
        }
    }

    let trimmed = prefix.trim_end_matches('_');
    if trimmed.is_empty() {
        "Quote".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filename_keeps_milliseconds_and_zone() {
        let at = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(678))
            .unwrap();

        assert_eq!(
            quote_filename("Acme", at, "pdf"),
            "Acme_Quote_2024-01-02-03-04-05.678Z.pdf"
        );
    }

    #[test]
    fn filename_has_no_colons() {
        let name = quote_filename("Acme", Utc::now(), "pdf");

        assert!(!name.contains(':'));
        assert!(name.starts_with("Acme_Quote_"));
        assert!(name.ends_with("Z.pdf"));
    }

    #[test]
    fn default_prefix_collapses_separators() {
        assert_eq!(default_prefix("Home Renovation (2026)"), "Home_Renovation_2026");
        assert_eq!(default_prefix("  Trip  "), "Trip");
        assert_eq!(default_prefix("Trip"), "Trip");
    }

    #[test]
    fn default_prefix_falls_back_when_nothing_usable() {
        assert_eq!(default_prefix(""), "Quote");
        assert_eq!(default_prefix("***"), "Quote");
    }
}
