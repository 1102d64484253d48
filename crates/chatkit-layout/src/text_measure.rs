//! Text measurement used by the calculators.
//!
//! Sizes must come from the same measurer the rendering label uses, or the
//! computed cell and the drawn text disagree.

use chatkit_graphics::{Font, Size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of lines after wrapping
    pub line_count: usize,
}

impl TextMetrics {
    pub const EMPTY: TextMetrics = TextMetrics {
        width: 0.0,
        height: 0.0,
        line_height: 0.0,
        line_count: 0,
    };

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

pub trait TextMeasurer {
    /// Measures `text` wrapped to `max_width` with unbounded height.
    fn measure(&self, text: &str, font: &Font, max_width: f32) -> TextMetrics;
}

/// Fixed-advance measurer: every column is half the font size wide.
///
/// Wraps greedily at spaces, breaks words longer than a line, and rounds
/// the result up to whole units the way a native label reports its fitting
/// size.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    const ADVANCE_RATIO: f32 = 0.5;

    pub fn column_width(font: &Font) -> f32 {
        font.size * Self::ADVANCE_RATIO
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font: &Font, max_width: f32) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::EMPTY;
        }

        let column_width = Self::column_width(font);
        let max_columns = if max_width.is_finite() && column_width > 0.0 {
            ((max_width / column_width).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        let mut widest = 0;
        let mut line_count = 0;
        for paragraph in text.split('\n') {
            for columns in wrap_columns(paragraph, max_columns) {
                widest = widest.max(columns);
                line_count += 1;
            }
        }

        let line_height = font.line_height();
        TextMetrics {
            width: (widest as f32 * column_width).ceil(),
            height: (line_count as f32 * line_height).ceil(),
            line_height,
            line_count,
        }
    }
}

/// Greedy word wrap. Returns the column count of every produced line.
fn wrap_columns(paragraph: &str, max_columns: usize) -> Vec<usize> {
    let mut lines = Vec::new();
    let mut current = 0usize;

    for word in paragraph.split(' ') {
        let word_columns = word.width();
        let needed = if current == 0 {
            word_columns
        } else {
            current + 1 + word_columns
        };
        if needed <= max_columns {
            current = needed;
            continue;
        }

        if current > 0 {
            lines.push(current);
            current = 0;
        }
        for ch in word.chars() {
            let ch_columns = ch.width().unwrap_or(0);
            if current > 0 && current + ch_columns > max_columns {
                lines.push(current);
                current = 0;
            }
            current += ch_columns;
        }
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_extent() {
        let metrics = MonospacedTextMeasurer.measure("", &Font::body(), 200.0);
        assert_eq!(metrics, TextMetrics::EMPTY);
    }

    #[test]
    fn single_line_rounds_up() {
        // 17pt body font: 8.5 per column, 20.4 per line.
        let metrics = MonospacedTextMeasurer.measure("Hello", &Font::body(), 236.0);
        assert_eq!(metrics.line_count, 1);
        assert_eq!(metrics.size(), Size::new(43.0, 21.0));
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let font = Font::system(10.0).with_line_height(12.0);
        // 5 units per column, so 50 units fit 10 columns.
        let metrics = MonospacedTextMeasurer.measure("hello there world", &font, 50.0);
        assert_eq!(metrics.line_count, 3);
        assert_eq!(metrics.size(), Size::new(25.0, 36.0));
    }

    #[test]
    fn breaks_words_longer_than_a_line() {
        let font = Font::system(10.0).with_line_height(12.0);
        let metrics = MonospacedTextMeasurer.measure("abcdefghijkl", &font, 25.0);
        assert_eq!(metrics.line_count, 3);
        assert_eq!(metrics.width, 25.0);
    }

    #[test]
    fn explicit_newlines_start_new_lines() {
        let font = Font::system(10.0).with_line_height(12.0);
        let metrics = MonospacedTextMeasurer.measure("a\nbb\n", &font, f32::INFINITY);
        assert_eq!(metrics.line_count, 3);
        assert_eq!(metrics.size(), Size::new(10.0, 36.0));
    }

    #[test]
    fn wide_characters_take_two_columns() {
        let font = Font::system(10.0).with_line_height(12.0);
        let metrics = MonospacedTextMeasurer.measure("日本", &font, f32::INFINITY);
        assert_eq!(metrics.width, 20.0);
    }
}
