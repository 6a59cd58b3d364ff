use unicode_width::UnicodeWidthStr;

/// Estimates the unrotated glyph footprint of a single word at a font size.
///
/// Implementations must be pure: the layout engine calls this repeatedly per
/// word across retry attempts and expects identical answers.
pub trait TextMeasurer {
    /// Returns `(width, height)` in px.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Terminal-column based measurer: CJK glyphs count as two columns, so
/// Japanese text comes out roughly square per glyph the way real font
/// rendering does.
#[derive(Debug, Clone, Copy)]
pub struct DeterministicTextMeasurer {
    /// Width of one column as a fraction of the font size.
    pub column_width_factor: f64,
    /// Line height as a fraction of the font size.
    pub line_height_factor: f64,
}

impl Default for DeterministicTextMeasurer {
    fn default() -> Self {
        Self {
            column_width_factor: 0.55,
            line_height_factor: 1.2,
        }
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let columns = UnicodeWidthStr::width(text).max(1);
        let font_size = font_size.max(1.0);
        (
            columns as f64 * font_size * self.column_width_factor,
            font_size * self.line_height_factor,
        )
    }
}
