//! Text metrics abstraction for label fitting.
//!
//! Rendered text width depends on the active render surface and font, so the
//! layout engine measures through this trait instead of caching widths across
//! passes. Backends with real font machinery (Pango, etc.) provide their own
//! implementation; the default estimates from character count.

/// Render-surface text metrics.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, font_size_px: f64) -> f64;

    fn line_height(&self, font_size_px: f64) -> f64 {
        font_size_px * 1.2
    }
}

/// Width estimate from character count and an average glyph ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharWidthMeasurer {
    pub char_width_ratio: f64,
}

impl Default for CharWidthMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
        }
    }
}

impl TextMeasurer for CharWidthMeasurer {
    fn text_width(&self, text: &str, font_size_px: f64) -> f64 {
        text.chars().count() as f64 * self.char_width_ratio * font_size_px
    }
}

/// Truncates `text` to fit `max_width_px`, appending an ellipsis.
///
/// Characters are dropped from the end one at a time until the measured width
/// of the candidate (including the ellipsis) fits. A text that fits as-is is
/// returned unchanged; a width budget that cannot hold any character yields
/// an empty label.
#[must_use]
pub fn fit_label(
    measurer: &dyn TextMeasurer,
    text: &str,
    font_size_px: f64,
    max_width_px: f64,
) -> String {
    if max_width_px <= 0.0 || text.is_empty() {
        return String::new();
    }

    if measurer.text_width(text, font_size_px) <= max_width_px {
        return text.to_owned();
    }

    let mut kept: String = text.to_owned();
    while !kept.is_empty() {
        kept.pop();
        if kept.is_empty() {
            break;
        }
        let candidate_width = measurer.text_width(&format!("{kept}..."), font_size_px);
        if candidate_width <= max_width_px {
            return format!("{kept}...");
        }
    }

    String::new()
}
