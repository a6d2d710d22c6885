//! # Page Capacity
//!
//! A page holds as much text as fits its editing surface, bounded two ways:
//!
//! - **Pixel height**: the laid-out text must not be taller than the surface
//!   (`RenderBox::height`, the client height, padding included).
//! - **Line count**: the text must not have more newline-delimited lines than
//!   `RenderBox::max_lines`, however short those lines are.
//!
//! How tall a piece of text is depends on fonts and layout, which only the
//! presentation layer knows. It answers through the [`Measure`] trait. The engine
//! never holds a measurement; it asks again on every edit against the box the
//! page is being rendered in right now.
//!
//! [`MonospaceMeasurer`] is a deterministic measurer for terminals and tests: each
//! display column has the same width and text wraps like `white-space: pre-wrap;
//! word-wrap: break-word`.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::splitter::{self, Split};

const TAB_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BoxSizing {
    ContentBox,
    #[default]
    BorderBox,
}

/// Geometry of a page's editing surface, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBox {
    pub width: f32,
    /// Client height; text taller than this overflows.
    pub height: f32,
    pub padding: f32,
    pub line_height: f32,
    #[serde(default)]
    pub box_sizing: BoxSizing,
    pub max_lines: usize,
}

impl Default for RenderBox {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 570.0,
            padding: 15.0,
            line_height: 30.0,
            box_sizing: BoxSizing::BorderBox,
            max_lines: 18,
        }
    }
}

impl RenderBox {
    /// Width available to text once padding is accounted for.
    pub fn inner_width(&self) -> f32 {
        match self.box_sizing {
            BoxSizing::BorderBox => self.width - 2.0 * self.padding,
            BoxSizing::ContentBox => self.width,
        }
    }

    /// A box that cannot hold a single character.
    pub fn is_degenerate(&self) -> bool {
        self.height <= 0.0
            || self.line_height <= 0.0
            || self.max_lines == 0
            || self.inner_width() <= 0.0
    }
}

/// Answers how tall `text` would be if laid out in `render_box`.
pub trait Measure {
    fn content_height(&self, text: &str, render_box: &RenderBox) -> f32;
}

/// Fixed-advance measurer: every display column is `char_width` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub char_width: f32,
}

impl MonospaceMeasurer {
    pub fn new(char_width: f32) -> Self {
        Self { char_width }
    }

    fn columns(&self, render_box: &RenderBox) -> usize {
        if self.char_width <= 0.0 {
            return 0;
        }
        let cols = (render_box.inner_width() / self.char_width).floor();
        if cols < 1.0 {
            0
        } else {
            cols as usize
        }
    }

    /// Number of visual rows `text` occupies at `columns` wide.
    pub fn rows(&self, text: &str, columns: usize) -> usize {
        if text.is_empty() {
            return 0;
        }
        text.split('\n').map(|line| wrap_rows(line, columns)).sum()
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(9.0)
    }
}

impl Measure for MonospaceMeasurer {
    fn content_height(&self, text: &str, render_box: &RenderBox) -> f32 {
        let columns = self.columns(render_box);
        let rows = self.rows(text, columns);
        rows as f32 * render_box.line_height + 2.0 * render_box.padding
    }
}

fn column_width(c: char) -> usize {
    if c == '\t' {
        TAB_COLUMNS
    } else {
        c.width().unwrap_or(0)
    }
}

// Greedy wrap of one newline-free line. Whitespace may hang past the edge; a word
// that does not fit moves to the next row, and a word wider than a row is broken.
fn wrap_rows(line: &str, columns: usize) -> usize {
    if columns == 0 {
        return line.chars().count().max(1);
    }
    let mut rows = 1;
    let mut used = 0;
    for token in splitter::tokens(line) {
        let width: usize = token.chars().map(column_width).sum();
        if token.starts_with(char::is_whitespace) {
            used += width;
            continue;
        }
        if used + width <= columns {
            used += width;
            continue;
        }
        if used > 0 {
            rows += 1;
            used = 0;
        }
        if width <= columns {
            used = width;
            continue;
        }
        for c in token.chars() {
            let w = column_width(c);
            if used + w > columns && used > 0 {
                rows += 1;
                used = 0;
            }
            used += w;
        }
    }
    rows
}

/// A page's capacity as seen through a measurer and the live render box.
#[derive(Clone, Copy)]
pub struct Capacity<'a> {
    measurer: &'a dyn Measure,
    render_box: &'a RenderBox,
}

impl<'a> Capacity<'a> {
    pub fn new(measurer: &'a dyn Measure, render_box: &'a RenderBox) -> Self {
        Self {
            measurer,
            render_box,
        }
    }

    pub fn render_box(&self) -> &RenderBox {
        self.render_box
    }

    pub fn max_lines(&self) -> usize {
        self.render_box.max_lines
    }

    pub fn overflows_height(&self, text: &str) -> bool {
        if self.render_box.is_degenerate() {
            return !text.is_empty();
        }
        self.measurer.content_height(text, self.render_box) > self.render_box.height
    }

    /// Newline-delimited line count.
    pub fn line_count(text: &str) -> usize {
        text.split('\n').count()
    }

    pub fn overflows_lines(&self, text: &str) -> bool {
        if self.render_box.is_degenerate() {
            return !text.is_empty();
        }
        Self::line_count(text) > self.render_box.max_lines
    }

    pub fn fits(&self, text: &str) -> bool {
        !self.overflows_height(text) && !self.overflows_lines(text)
    }

    pub fn split(&self, text: &str) -> Split {
        splitter::split(text, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow_box(columns: usize, rows: usize) -> RenderBox {
        RenderBox {
            width: columns as f32 * 10.0,
            height: rows as f32 * 20.0,
            padding: 0.0,
            line_height: 20.0,
            box_sizing: BoxSizing::BorderBox,
            max_lines: 100,
        }
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let m = MonospaceMeasurer::new(10.0);
        assert_eq!(m.rows("hello world", 11), 1);
        assert_eq!(m.rows("hello world", 8), 2);
        assert_eq!(m.rows("hello world again", 11), 2);
    }

    #[test]
    fn breaks_overlong_words() {
        let m = MonospaceMeasurer::new(10.0);
        assert_eq!(m.rows("abcdefghij", 4), 3);
    }

    #[test]
    fn counts_newlines_and_empty_lines() {
        let m = MonospaceMeasurer::new(10.0);
        assert_eq!(m.rows("", 10), 0);
        assert_eq!(m.rows("a\n\nb", 10), 3);
    }

    #[test]
    fn trailing_spaces_hang() {
        let m = MonospaceMeasurer::new(10.0);
        assert_eq!(m.rows("abcd      ", 4), 1);
    }

    #[test]
    fn wide_characters_take_two_columns() {
        let m = MonospaceMeasurer::new(10.0);
        assert_eq!(m.rows("日本語", 4), 2);
    }

    #[test]
    fn content_height_includes_padding() {
        let m = MonospaceMeasurer::new(10.0);
        let mut b = narrow_box(10, 5);
        b.padding = 5.0;
        b.width = 110.0; // 100px inner
        assert_eq!(m.content_height("abc", &b), 20.0 + 10.0);
    }

    #[test]
    fn content_box_ignores_padding_for_width() {
        let mut b = narrow_box(10, 5);
        b.padding = 20.0;
        assert_eq!(b.inner_width(), 60.0);
        b.box_sizing = BoxSizing::ContentBox;
        assert_eq!(b.inner_width(), 100.0);
    }

    #[test]
    fn capacity_checks_both_constraints() {
        let m = MonospaceMeasurer::new(10.0);
        let mut b = narrow_box(10, 3);
        b.max_lines = 2;
        let cap = Capacity::new(&m, &b);

        assert!(cap.fits("one\ntwo"));
        assert!(cap.overflows_lines("one\ntwo\nthree"));
        assert!(!cap.overflows_height("one\ntwo\nthree"));
        assert!(cap.overflows_height("a b c d e f g h i j k l m n o p"));
    }

    #[test]
    fn degenerate_box_fits_only_empty_text() {
        let m = MonospaceMeasurer::new(10.0);
        let b = narrow_box(10, 0);
        let cap = Capacity::new(&m, &b);
        assert!(b.is_degenerate());
        assert!(cap.fits(""));
        assert!(!cap.fits("a"));
    }

    #[test]
    fn default_box_holds_eighteen_rows() {
        let m = MonospaceMeasurer::default();
        let b = RenderBox::default();
        let cap = Capacity::new(&m, &b);
        let eighteen = vec!["line"; 18].join("\n");
        let nineteen = vec!["line"; 19].join("\n");
        assert!(cap.fits(&eighteen));
        assert!(cap.overflows_height(&nineteen));
    }
}
