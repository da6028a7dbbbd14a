use super::shaper::{Alignment, TextBlock, TextShaper, WrapParams};
use crate::config::SideStyle;
use crate::geometry::{char_width, str_width};
use crate::style::Color;
use std::convert::TryFrom;

/// A [`TextShaper`] for character-cell displays, like terminals. One pixel is one cell, so the
/// font size is ignored: every half-width character is 1 wide, every full-width character is 2
/// wide, and every line is `round(spacing_multiplier + spacing_add)` rows tall (at least 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceShaper;

/// A paragraph broken into lines of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoBlock {
    pub lines: Vec<MonoLine>,
    /// The width the paragraph was wrapped to.
    pub width: u32,
    /// Rows per line.
    pub line_height: u32,
    pub color: Color,
}

/// One line of a [`MonoBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoLine {
    pub text: String,
    /// Columns between the left edge of the block and the start of the line.
    pub offset: u32,
}

impl TextShaper for MonospaceShaper {
    type Block = MonoBlock;

    fn measure_width(&self, _style: &SideStyle, text: &str) -> f32 {
        text.split('\n').map(str_width).max().unwrap_or(0) as f32
    }

    fn wrap(&self, style: &SideStyle, text: &str, width: u32, params: &WrapParams) -> MonoBlock {
        let lines = break_lines(text, width)
            .into_iter()
            .map(|text| {
                let offset = match params.alignment {
                    Alignment::Start => 0,
                    Alignment::End => width.saturating_sub(str_width(&text)),
                };
                MonoLine { text, offset }
            })
            .collect();
        let line_height = (params.spacing_multiplier + params.spacing_add).round();
        MonoBlock {
            lines,
            width,
            line_height: if line_height >= 1.0 {
                line_height as u32
            } else {
                1
            },
            color: style.color,
        }
    }
}

impl TextBlock for MonoBlock {
    fn height(&self) -> u32 {
        u32::try_from(self.lines.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.line_height)
    }
}

/// Greedily break `text` into lines at most `width` columns wide. Hard newlines are kept, words
/// are separated by single spaces, and words too long for a line are split between characters.
/// Every line holds at least one character, even if that character is wider than `width`.
fn break_lines(text: &str, width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = str_width(word);
            let needed = if line.is_empty() {
                word_width
            } else {
                line_width + 1 + word_width
            };
            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_width = needed;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }
            // The word doesn't fit on a line by itself.
            for ch in word.chars() {
                let ch_width = char_width(ch);
                if line_width + ch_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(alignment: Alignment) -> WrapParams {
        WrapParams {
            alignment,
            spacing_multiplier: 1.0,
            spacing_add: 0.0,
        }
    }

    #[test]
    fn test_break_lines() {
        assert_eq!(break_lines("hello world", 20), vec!["hello world"]);
        assert_eq!(break_lines("hello world", 11), vec!["hello world"]);
        assert_eq!(break_lines("hello world", 10), vec!["hello", "world"]);
        assert_eq!(
            break_lines("the quick brown fox", 9),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(break_lines("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(break_lines("ab cdefgh", 4), vec!["ab", "cdef", "gh"]);
        assert_eq!(break_lines("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn test_break_lines_narrow() {
        assert_eq!(break_lines("abc", 0), vec!["a", "b", "c"]);
        assert_eq!(break_lines("一二", 1), vec!["一", "二"]);
        assert_eq!(break_lines("一二三", 4), vec!["一二", "三"]);
    }

    #[test]
    fn test_measure_width() {
        let style = SideStyle::default();
        assert_eq!(MonospaceShaper.measure_width(&style, "hello"), 5.0);
        assert_eq!(MonospaceShaper.measure_width(&style, "一1"), 3.0);
        assert_eq!(MonospaceShaper.measure_width(&style, "ab\nabcd"), 4.0);
    }

    #[test]
    fn test_wrap_alignment() {
        let style = SideStyle::default();
        let block = MonospaceShaper.wrap(&style, "ab cdef", 5, &params(Alignment::End));
        assert_eq!(
            block.lines,
            vec![
                MonoLine {
                    text: "ab".to_owned(),
                    offset: 3
                },
                MonoLine {
                    text: "cdef".to_owned(),
                    offset: 1
                },
            ]
        );
        assert_eq!(block.height(), 2);

        let block = MonospaceShaper.wrap(&style, "ab cdef", 5, &params(Alignment::Start));
        assert!(block.lines.iter().all(|line| line.offset == 0));
    }

    #[test]
    fn test_line_spacing() {
        let style = SideStyle::default();
        let spaced = WrapParams {
            spacing_multiplier: 1.5,
            spacing_add: 1.0,
            ..params(Alignment::Start)
        };
        let block = MonospaceShaper.wrap(&style, "a b c", 1, &spaced);
        assert_eq!(block.line_height, 3);
        assert_eq!(block.height(), 9);

        let squashed = WrapParams {
            spacing_multiplier: 0.2,
            ..params(Alignment::Start)
        };
        let block = MonospaceShaper.wrap(&style, "a", 1, &squashed);
        assert_eq!(block.line_height, 1);

        let towering = WrapParams {
            spacing_multiplier: 5e9,
            ..params(Alignment::Start)
        };
        let block = MonospaceShaper.wrap(&style, "a b", 1, &towering);
        assert_eq!(block.line_height, u32::MAX);
        assert_eq!(block.height(), u32::MAX);
    }
}
