//! Glyph widths of the standard Helvetica faces.
//!
//! Built-in PDF fonts carry no metrics inside the document, so line
//! wrapping measures text against the published AFM advance widths
//! (units of 1/1000 em) for printable ASCII. Other characters use the
//! width of a digit.

use quote_core::export::TextStyle;

const FIRST_CHAR: u32 = 32;
const FALLBACK_WIDTH: u16 = 556;

// Helvetica, codes 32..=126
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584,
    278, 333, 278, 278, 556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 278, 278, 584, 584, 584, 556, 1015, 667, 667, 722,
    722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278,
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, 278, 556,
    556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

// Helvetica-Bold, codes 32..=126
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584,
    278, 333, 278, 278, 556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 333, 333, 584, 584, 584, 611, 975, 722, 722, 722,
    722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333,
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556, 333, 611,
    611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn glyph_width(
    ch: char,
    bold: bool,
) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    (ch as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Rendered width of `text` in points.
pub fn text_width(
    text: &str,
    style: TextStyle,
) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, style.bold))).sum();
    units as f32 * style.size / 1000.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn digits_are_half_an_em_wide() {
        assert_eq!(text_width("00", TextStyle::new(10.0, false)), 11.12);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let text = "Business class";
        let bold = text_width(text, TextStyle::new(10.0, true));
        let regular = text_width(text, TextStyle::new(10.0, false));

        assert!(bold > regular);
    }

    #[test]
    fn narrow_and_wide_letters_differ() {
        let style = TextStyle::new(10.0, false);
        assert!(text_width("iiii", style) < text_width("WWWW", style));
    }

    #[test]
    fn non_ascii_uses_fallback_width() {
        assert_eq!(
            text_width("\u{e9}", TextStyle::new(10.0, false)),
            text_width("0", TextStyle::new(10.0, false))
        );
    }

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(text_width("", TextStyle::BODY), 0.0);
    }
}
