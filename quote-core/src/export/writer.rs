use std::path::Path;

use super::ExportError;

/// Font settings for one run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const TITLE: Self = Self::new(18.0, true);
    pub const TABLE_HEADER: Self = Self::new(11.0, true);
    pub const BODY: Self = Self::new(10.0, false);
    pub const TOTAL: Self = Self::new(12.0, true);
    pub const SMALL: Self = Self::new(9.0, false);

    pub const fn new(
        size: f32,
        bold: bool,
    ) -> Self {
        Self { size, bold }
    }

    /// Baseline-to-baseline distance for this style.
    pub fn line_height(&self) -> f32 {
        self.size * 1.4
    }
}

/// Page geometry in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageSetup {
    /// US Letter with 50pt margins.
    pub const fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 50.0,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest baseline a line may use on a page.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter()
    }
}

/// Low-level drawing capability of a document backend.
///
/// Coordinates are in points measured from the top-left corner of the
/// current page; `y` is the text baseline.
pub trait DocumentWriter {
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: TextStyle,
    );

    /// Starts a new page; later drawing goes to it.
    fn new_page(&mut self);

    /// Splits `text` into lines that fit `max_width` in `style`.
    /// Blank text yields no lines.
    fn measure_wrapped_lines(
        &self,
        text: &str,
        max_width: f32,
        style: TextStyle,
    ) -> Vec<String>;

    /// Writes the finished document to `path`.
    fn save(
        self: Box<Self>,
        path: &Path,
    ) -> Result<(), ExportError>;
}
