//! # Overflow Splitting
//!
//! Given text that may not fit a page, [`split`] returns the part that stays on the
//! page (`visible`) and the part that must move to the next page (`overflow`).
//!
//! Rules, in order:
//!
//! 1. Text that fits is returned whole with an empty overflow.
//! 2. Text that is too tall is rebuilt token by token (a token is a word or a run
//!    of whitespace, so a cut never lands inside a word). The longest prefix that
//!    still fits becomes `visible` with trailing whitespace trimmed; the rest, with
//!    leading whitespace trimmed, is the overflow.
//! 3. If the very first token is already too big, that token is cut between
//!    characters instead. At least one character always stays, so the overflow is
//!    strictly shorter than the input and repeated splitting terminates even for a
//!    box that holds nothing.
//! 4. Text that is short enough in pixels but has more newline-delimited lines than
//!    the page allows is cut at the line boundary: the first `max_lines` lines stay,
//!    the remaining lines move.
//!
//! Nothing is invented or dropped except whitespace at the cut.

use crate::measure::Capacity;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Split {
    pub visible: String,
    pub overflow: String,
}

impl Split {
    fn whole(text: &str) -> Self {
        Self {
            visible: text.to_string(),
            overflow: String::new(),
        }
    }

    fn at(visible: &str, overflow: &str) -> Self {
        Self {
            visible: visible.to_string(),
            overflow: overflow.to_string(),
        }
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }
}

pub fn split(text: &str, capacity: &Capacity<'_>) -> Split {
    if capacity.fits(text) {
        return Split::whole(text);
    }
    if !capacity.overflows_height(text) {
        return split_lines(text, capacity.max_lines());
    }
    split_tokens(text, capacity)
}

/// Words and the whitespace runs between them, in order, covering all of `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let in_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != in_space)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some(token)
    })
}

fn split_tokens(text: &str, capacity: &Capacity<'_>) -> Split {
    let mut end = 0;
    for token in tokens(text) {
        let next = end + token.len();
        if !capacity.fits(&text[..next]) {
            if end == 0 {
                return split_chars(text, token, capacity);
            }
            return Split::at(text[..end].trim_end(), text[end..].trim_start());
        }
        end = next;
    }
    Split::whole(text)
}

// `token` is the leading token of `text`.
fn split_chars(text: &str, token: &str, capacity: &Capacity<'_>) -> Split {
    let mut cut = 0;
    for (i, c) in token.char_indices() {
        let next = i + c.len_utf8();
        if !capacity.fits(&text[..next]) {
            break;
        }
        cut = next;
    }
    if cut == 0 {
        cut = token.chars().next().map(char::len_utf8).unwrap_or(0);
    }
    Split::at(&text[..cut], &text[cut..])
}

fn split_lines(text: &str, max_lines: usize) -> Split {
    let lines: Vec<&str> = text.split('\n').collect();
    if max_lines == 0 || lines.len() <= max_lines {
        return Split::whole(text);
    }
    Split {
        visible: lines[..max_lines].join("\n"),
        overflow: lines[max_lines..].join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{BoxSizing, MonospaceMeasurer, RenderBox};
    use proptest::prelude::*;

    const MEASURER: MonospaceMeasurer = MonospaceMeasurer { char_width: 10.0 };

    fn grid(columns: usize, rows: usize, max_lines: usize) -> RenderBox {
        RenderBox {
            width: columns as f32 * 10.0,
            height: rows as f32 * 20.0,
            padding: 0.0,
            line_height: 20.0,
            box_sizing: BoxSizing::BorderBox,
            max_lines,
        }
    }

    fn split_in(text: &str, render_box: &RenderBox) -> Split {
        split(text, &Capacity::new(&MEASURER, render_box))
    }

    /// `visible` is a prefix, `overflow` a suffix, and only whitespace lies between.
    fn assert_preserved(text: &str, s: &Split) {
        assert!(text.starts_with(&s.visible), "{:?} not a prefix", s.visible);
        assert!(text.ends_with(&s.overflow), "{:?} not a suffix", s.overflow);
        assert!(s.visible.len() + s.overflow.len() <= text.len());
        let gap = &text[s.visible.len()..text.len() - s.overflow.len()];
        assert!(gap.chars().all(char::is_whitespace), "dropped {:?}", gap);
    }

    #[test]
    fn tokens_alternate_words_and_whitespace() {
        let t: Vec<&str> = tokens("  hi there\n\nyou").collect();
        assert_eq!(t, vec!["  ", "hi", " ", "there", "\n\n", "you"]);
        assert_eq!(tokens("").count(), 0);
    }

    #[test]
    fn text_that_fits_is_returned_whole() {
        let b = grid(20, 3, 18);
        let s = split_in("short note", &b);
        assert_eq!(s, Split::whole("short note"));
        assert!(!s.has_overflow());
    }

    #[test]
    fn splits_between_words() {
        let b = grid(10, 2, 18);
        let text = "hello world foo bar";
        let s = split_in(text, &b);
        assert_eq!(s.visible, "hello world foo");
        assert_eq!(s.overflow, "bar");
        assert_preserved(text, &s);
    }

    #[test]
    fn overlong_first_word_is_cut_between_characters() {
        let b = grid(4, 1, 18);
        let text = "abcdefgh more words";
        let s = split_in(text, &b);
        assert_eq!(s.visible, "abcd");
        assert_eq!(s.overflow, "efgh more words");
        assert_preserved(text, &s);
    }

    #[test]
    fn line_limit_splits_at_newline() {
        let b = grid(20, 50, 3);
        let text = "a\nb\nc\nd\ne";
        let s = split_in(text, &b);
        assert_eq!(s.visible, "a\nb\nc");
        assert_eq!(s.overflow, "d\ne");
        assert_preserved(text, &s);
    }

    #[test]
    fn line_limit_keeps_blank_lines() {
        let b = grid(20, 50, 2);
        let text = "a\n\n\nb";
        let s = split_in(text, &b);
        assert_eq!(s.visible, "a\n");
        assert_eq!(s.overflow, "\nb");
        assert_preserved(text, &s);
    }

    #[test]
    fn nineteen_lines_leave_one_behind_on_default_page() {
        let b = RenderBox::default();
        let m = MonospaceMeasurer::default();
        let lines: Vec<String> = (1..=19).map(|i| format!("line {}", i)).collect();
        let text = lines.join("\n");
        let s = split(&text, &Capacity::new(&m, &b));
        assert_eq!(s.visible, lines[..18].join("\n"));
        assert_eq!(s.overflow, "line 19");
    }

    #[test]
    fn degenerate_box_still_makes_progress() {
        let b = grid(10, 0, 18);
        let text = "abc def";
        let s = split_in(text, &b);
        assert_eq!(s.visible, "a");
        assert_eq!(s.overflow, "bc def");
    }

    #[test]
    fn overflow_always_shrinks_until_empty() {
        let boxes = [grid(6, 2, 18), grid(3, 1, 18), grid(12, 4, 2), grid(10, 0, 5)];
        let texts = [
            "the quick brown fox jumps over the lazy dog",
            "supercalifragilisticexpialidocious and more",
            "one\ntwo\nthree\nfour\nfive\nsix",
            "   leading and trailing   ",
            "über straße café naïve résumé",
        ];
        for b in &boxes {
            for text in &texts {
                let mut remaining = text.to_string();
                let mut guard = 0;
                while !remaining.is_empty() {
                    let s = split_in(&remaining, b);
                    assert_preserved(&remaining, &s);
                    if s.has_overflow() {
                        assert!(s.overflow.len() < remaining.len());
                    }
                    remaining = s.overflow;
                    guard += 1;
                    assert!(guard < 200, "split did not terminate for {:?}", text);
                }
            }
        }
    }

    #[test]
    fn visible_part_fits_unless_box_is_degenerate() {
        let b = grid(8, 3, 2);
        let cap = Capacity::new(&MEASURER, &b);
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let s = split(text, &cap);
        assert!(s.has_overflow());
        assert!(cap.fits(&s.visible));
    }

    #[test]
    fn whitespace_only_prefix_is_trimmed_away() {
        let b = grid(5, 2, 18);
        let text = "\n   unbreakableword";
        let s = split_in(text, &b);
        assert_eq!(s.visible, "");
        assert_eq!(s.overflow, "unbreakableword");
        assert_preserved(text, &s);
    }

    proptest! {
        #[test]
        fn repeated_splitting_preserves_text_and_terminates(
            text in "[a-zé \n]{0,80}",
            columns in 0usize..12,
            rows in 0usize..6,
            max_lines in 0usize..5,
        ) {
            let b = grid(columns, rows, max_lines);
            let mut remaining = text.clone();
            let mut steps = 0;
            while !remaining.is_empty() {
                let s = split_in(&remaining, &b);
                assert_preserved(&remaining, &s);
                prop_assert!(s.overflow.len() < remaining.len());
                remaining = s.overflow;
                steps += 1;
                prop_assert!(steps <= text.len());
            }
        }
    }
}
