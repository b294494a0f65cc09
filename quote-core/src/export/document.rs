//! Page layout of an exported quote.
//!
//! The layout is a header (title and generation time), a three-column
//! Section / Item / Price table and a footer with the total and a closing
//! note. Rows that would cross the bottom margin move to a new page, and
//! the table header is printed again at the top of that page.

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;

use super::ExportError;
use super::writer::{DocumentWriter, PageSetup, TextStyle};
use crate::calculations::{compute_total, format_money, prepare_line_items};
use crate::models::{CalculatorSchema, LineItem};
use crate::selection::SelectionState;

// Column offsets and widths, in points from the left margin.
const SECTION_X: f32 = 0.0;
const SECTION_WIDTH: f32 = 150.0;
const ITEM_X: f32 = 160.0;
const ITEM_WIDTH: f32 = 250.0;
const PRICE_X: f32 = 420.0;

const ROW_GAP: f32 = 4.0;

/// Everything needed to draw one quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDocument {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub closing_note: String,
}

impl QuoteDocument {
    /// Collects the line items and total for the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptySelection`] when the export guard rejects
    /// the selection.
    pub fn prepare(
        schema: &CalculatorSchema,
        selection: &SelectionState,
        generated_at: DateTime<Utc>,
        closing_note: impl Into<String>,
    ) -> Result<Self, ExportError> {
        let items = prepare_line_items(schema, selection)?;

        Ok(Self {
            title: Self::title_for(&schema.name),
            generated_at,
            items,
            total: compute_total(schema, selection),
            closing_note: closing_note.into(),
        })
    }

    pub fn title_for(calculator_name: &str) -> String {
        let name = calculator_name.trim();
        if name.is_empty() {
            "Quote".to_string()
        } else {
            format!("{name} Quote")
        }
    }
}

/// Draws `doc` through `writer` and returns the number of pages used.
///
/// The writer must already hold one blank page.
pub fn render_quote(
    writer: &mut dyn DocumentWriter,
    doc: &QuoteDocument,
    setup: &PageSetup,
) -> usize {
    let mut layout = Layout {
        writer,
        setup,
        y: setup.margin,
        pages: 1,
    };

    layout.header(doc);
    layout.table_header();
    for item in &doc.items {
        layout.row(item);
    }
    layout.footer(doc);

    layout.pages
}

/// Drawing cursor; `y` is the top of the next line.
struct Layout<'w, 's> {
    writer: &'w mut dyn DocumentWriter,
    setup: &'s PageSetup,
    y: f32,
    pages: usize,
}

impl Layout<'_, '_> {
    fn header(
        &mut self,
        doc: &QuoteDocument,
    ) {
        let generated = doc
            .generated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M");

        self.text_line(&doc.title, TextStyle::TITLE);
        self.text_line(&format!("Generated: {generated}"), TextStyle::SMALL);
        self.y += TextStyle::SMALL.line_height();
    }

    fn table_header(&mut self) {
        let style = TextStyle::TABLE_HEADER;
        let baseline = self.y + style.size;
        let left = self.setup.margin;

        self.writer.draw_text("Section", left + SECTION_X, baseline, style);
        self.writer.draw_text("Item", left + ITEM_X, baseline, style);
        self.writer.draw_text("Price", left + PRICE_X, baseline, style);
        self.y += style.line_height() + ROW_GAP;
    }

    fn row(
        &mut self,
        item: &LineItem,
    ) {
        let style = TextStyle::BODY;
        let section_lines = self
            .writer
            .measure_wrapped_lines(&item.section, SECTION_WIDTH, style);
        let item_lines = self
            .writer
            .measure_wrapped_lines(&item.item, ITEM_WIDTH, style);
        let line_count = section_lines.len().max(item_lines.len()).max(1);
        let height = line_count as f32 * style.line_height() + ROW_GAP;

        if self.ensure_room(height) {
            self.table_header();
        }

        let left = self.setup.margin;
        let first_baseline = self.y + style.size;
        for (i, line) in section_lines.iter().enumerate() {
            let baseline = first_baseline + i as f32 * style.line_height();
            self.writer.draw_text(line, left + SECTION_X, baseline, style);
        }
        for (i, line) in item_lines.iter().enumerate() {
            let baseline = first_baseline + i as f32 * style.line_height();
            self.writer.draw_text(line, left + ITEM_X, baseline, style);
        }
        self.writer
            .draw_text(&format_money(item.price), left + PRICE_X, first_baseline, style);

        self.y += height;
    }

    fn footer(
        &mut self,
        doc: &QuoteDocument,
    ) {
        let note_lines = self.writer.measure_wrapped_lines(
            &doc.closing_note,
            self.setup.content_width(),
            TextStyle::SMALL,
        );
        let height = ROW_GAP
            + TextStyle::TOTAL.line_height()
            + TextStyle::SMALL.line_height() * (note_lines.len() + 1) as f32;
        self.ensure_room(height);

        self.y += ROW_GAP;
        let left = self.setup.margin;
        let baseline = self.y + TextStyle::TOTAL.size;
        self.writer
            .draw_text("Total:", left + ITEM_X, baseline, TextStyle::TOTAL);
        self.writer.draw_text(
            &format_money(doc.total),
            left + PRICE_X,
            baseline,
            TextStyle::TOTAL,
        );
        self.y += TextStyle::TOTAL.line_height() + TextStyle::SMALL.line_height();

        for line in &note_lines {
            self.text_line(line, TextStyle::SMALL);
        }
    }

    fn text_line(
        &mut self,
        text: &str,
        style: TextStyle,
    ) {
        self.writer
            .draw_text(text, self.setup.margin, self.y + style.size, style);
        self.y += style.line_height();
    }

    /// Starts a new page when `height` does not fit below the cursor.
    /// A block taller than a whole page is drawn where it is.
    fn ensure_room(
        &mut self,
        height: f32,
    ) -> bool {
        let at_page_top = self.y <= self.setup.margin;
        if at_page_top || self.y + height <= self.setup.bottom_limit() {
            return false;
        }

        self.writer.new_page();
        self.pages += 1;
        self.y = self.setup.margin;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::export::wrap::wrap_words;
    use crate::models::{Field, FieldVariant, PriceOption};

    /// One recorded `draw_text` call.
    #[derive(Debug, Clone, PartialEq)]
    struct Drawn {
        page: usize,
        text: String,
        x: f32,
        y: f32,
    }

    /// Writer that records drawing and measures 5pt per character.
    #[derive(Default)]
    struct RecordingWriter {
        page: usize,
        drawn: Vec<Drawn>,
    }

    impl RecordingWriter {
        fn texts_on(&self, page: usize) -> Vec<&str> {
            self.drawn
                .iter()
                .filter(|d| d.page == page)
                .map(|d| d.text.as_str())
                .collect()
        }

        fn count(&self, text: &str) -> usize {
            self.drawn.iter().filter(|d| d.text == text).count()
        }
    }

    impl DocumentWriter for RecordingWriter {
        fn draw_text(&mut self, text: &str, x: f32, y: f32, _style: TextStyle) {
            self.drawn.push(Drawn {
                page: self.page,
                text: text.to_string(),
                x,
                y,
            });
        }

        fn new_page(&mut self) {
            self.page += 1;
        }

        fn measure_wrapped_lines(
            &self,
            text: &str,
            max_width: f32,
            _style: TextStyle,
        ) -> Vec<String> {
            wrap_words(text, max_width, |s| s.chars().count() as f32 * 5.0)
        }

        fn save(self: Box<Self>, _path: &Path) -> Result<(), ExportError> {
            Ok(())
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap()
    }

    fn document(items: Vec<LineItem>) -> QuoteDocument {
        let total = items.iter().map(|i| i.price).sum();
        QuoteDocument {
            title: "Trip Quote".to_string(),
            generated_at: fixed_time(),
            items,
            total,
            closing_note: "Prices valid for 30 days.".to_string(),
        }
    }

    fn item(n: usize) -> LineItem {
        LineItem {
            section: "Extras".to_string(),
            item: format!("Item {n}"),
            price: dec!(10),
        }
    }

    // =========================================================================
    // QuoteDocument::prepare tests
    // =========================================================================

    #[test]
    fn prepare_collects_items_and_total() {
        let schema = CalculatorSchema::new(
            "Trip",
            vec![Field::new(1, FieldVariant::Checkbox, "Extras")
                .with_alias("extras")
                .with_options(vec![
                    PriceOption::new("Insurance", "75"),
                    PriceOption::new("Meals", "30"),
                ])],
        );
        let mut selection = SelectionState::new();
        selection.set_flag("extras", "Meals", true);

        let doc = QuoteDocument::prepare(&schema, &selection, fixed_time(), "Thanks").unwrap();

        assert_eq!(doc.title, "Trip Quote");
        assert_eq!(doc.total, dec!(30));
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.closing_note, "Thanks");
    }

    #[test]
    fn prepare_rejects_empty_selection() {
        let schema = CalculatorSchema::new("Trip", Vec::new());

        assert_eq!(
            QuoteDocument::prepare(&schema, &SelectionState::new(), fixed_time(), ""),
            Err(ExportError::EmptySelection)
        );
    }

    #[test]
    fn title_falls_back_for_unnamed_calculator() {
        assert_eq!(QuoteDocument::title_for("  "), "Quote");
        assert_eq!(QuoteDocument::title_for("Trip"), "Trip Quote");
    }

    // =========================================================================
    // render_quote tests
    // =========================================================================

    #[test]
    fn single_page_quote_has_header_table_and_footer() {
        let mut writer = RecordingWriter::default();
        let doc = document(vec![item(1), item(2)]);

        let pages = render_quote(&mut writer, &doc, &PageSetup::letter());

        assert_eq!(pages, 1);
        let texts = writer.texts_on(0);
        assert_eq!(texts[0], "Trip Quote");
        assert!(texts[1].starts_with("Generated: "));
        assert_eq!(&texts[2..5], &["Section", "Item", "Price"]);
        assert!(texts.contains(&"Item 2"));
        assert!(texts.contains(&"$20.00"));
        assert_eq!(texts.last(), Some(&"Prices valid for 30 days."));
    }

    #[test]
    fn rows_move_down_the_page() {
        let mut writer = RecordingWriter::default();
        render_quote(&mut writer, &document(vec![item(1), item(2)]), &PageSetup::letter());

        let first = writer.drawn.iter().find(|d| d.text == "Item 1").unwrap();
        let second = writer.drawn.iter().find(|d| d.text == "Item 2").unwrap();
        assert_eq!(first.x, second.x);
        assert!(second.y > first.y);
    }

    #[test]
    fn long_item_text_wraps_within_its_row() {
        let mut writer = RecordingWriter::default();
        let long = LineItem {
            section: "Extras".to_string(),
            // 5pt per char, 250pt column -> 50 chars per line
            item: "Comprehensive travel insurance including cancellation and baggage cover"
                .to_string(),
            price: dec!(75),
        };
        render_quote(&mut writer, &document(vec![long, item(2)]), &PageSetup::letter());

        let first_line = writer
            .drawn
            .iter()
            .find(|d| d.text.starts_with("Comprehensive"))
            .unwrap();
        let second_line = writer
            .drawn
            .iter()
            .find(|d| d.text.ends_with("baggage cover"))
            .unwrap();
        let next_row = writer.drawn.iter().find(|d| d.text == "Item 2").unwrap();

        assert!(second_line.y > first_line.y);
        assert!(next_row.y > second_line.y);
    }

    #[test]
    fn overflow_starts_new_page_and_reprints_table_header() {
        let mut writer = RecordingWriter::default();
        let items: Vec<LineItem> = (1..=60).map(item).collect();

        let pages = render_quote(&mut writer, &document(items), &PageSetup::letter());

        assert_eq!(pages, 2);
        assert_eq!(writer.count("Section"), 2);
        assert_eq!(writer.count("Trip Quote"), 1);

        let second_page = writer.texts_on(1);
        assert_eq!(&second_page[0..3], &["Section", "Item", "Price"]);
        assert!(second_page.contains(&"Item 60"));
        assert!(second_page.contains(&"$600.00"));

        let bottom = PageSetup::letter().bottom_limit();
        assert!(writer.drawn.iter().all(|d| d.y <= bottom));
    }
}
