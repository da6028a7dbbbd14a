use super::canvas::Canvas;
use super::monospace::MonoBlock;
use crate::geometry::{char_width, is_char_full_width, Point, Size};
use crate::style::Color;
use std::fmt;

/// Errors from drawing to a [`PlainText`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlainTextError {
    #[error("plain text can only draw horizontal and vertical lines, not {from} to {to}")]
    DiagonalLine { from: Point, to: Point },
}

/// A simple [`Canvas`] that draws [`MonoBlock`]s into a grid of characters. Use [`fmt::Display`]
/// to view the text. Colors are ignored, zero-width characters are dropped, and anything drawn
/// outside of the canvas is clipped.
#[derive(Debug)]
pub struct PlainText {
    /// A line is stored as a vector of characters. Each element represents one column position, so
    /// a full-width unicode character will be followed by a `SENTINEL` value to indicate that it
    /// takes up the next column as well.
    lines: Vec<Vec<char>>,
    size: Size,
    origin: Point,
    saved: Vec<Point>,
}

// Follows each full-width char.
const SENTINEL: char = '\0';

const HORZ_LINE: char = '─';
const VERT_LINE: char = '│';

impl fmt::Display for PlainText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.lines {
            for ch in line {
                if *ch != SENTINEL {
                    write!(f, "{}", ch)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl PlainText {
    /// Construct a canvas with the given size. Usually this is the size a layout measured to.
    pub fn new(size: Size) -> PlainText {
        PlainText {
            lines: vec![Vec::new(); size.height as usize],
            size,
            origin: Point::zero(),
            saved: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// How many transforms have been saved and not yet restored.
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    /// The text of each row, with trailing spaces removed.
    pub fn rows(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .filter(|ch| **ch != SENTINEL)
                    .collect::<String>()
                    .trim_end()
                    .to_owned()
            })
            .collect()
    }

    /// Convert a point relative to the current origin into a (row, col) cell, if it's on the
    /// canvas.
    fn cell(&self, point: Point) -> Option<(usize, usize)> {
        let x = (self.origin.x + point.x).floor();
        let y = (self.origin.y + point.y).floor();
        if x < 0.0 || y < 0.0 || x >= self.size.width as f32 || y >= self.size.height as f32 {
            return None;
        }
        Some((y as usize, x as usize))
    }

    fn put_char(&mut self, row: usize, col: usize, ch: char) {
        let full_width = is_char_full_width(ch);
        let width = if full_width { 2 } else { 1 };
        if col + width > self.size.width as usize {
            return;
        }
        let line = &mut self.lines[row];
        if line.len() < col + width {
            line.resize(col + width, ' ');
        }
        line[col] = ch;
        if full_width {
            line[col + 1] = SENTINEL;
        }
    }

    fn put_str(&mut self, point: Point, string: &str) {
        let (row, mut col) = match self.cell(point) {
            Some(cell) => cell,
            None => return,
        };
        for ch in string.chars() {
            let width = char_width(ch) as usize;
            // A cell holds a single char, so combining marks and other zero-width chars are dropped.
            if width == 0 {
                continue;
            }
            self.put_char(row, col, ch);
            col += width;
        }
    }
}

impl Canvas for PlainText {
    type Error = PlainTextError;
    type Block = MonoBlock;

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        _color: Color,
        _stroke: f32,
    ) -> Result<(), PlainTextError> {
        if from.y == to.y {
            let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
            let mut x = x0;
            while x < x1 {
                if let Some((row, col)) = self.cell(Point::new(x, from.y)) {
                    self.put_char(row, col, HORZ_LINE);
                }
                x += 1.0;
            }
            Ok(())
        } else if from.x == to.x {
            let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
            let mut y = y0;
            while y < y1 {
                if let Some((row, col)) = self.cell(Point::new(from.x, y)) {
                    self.put_char(row, col, VERT_LINE);
                }
                y += 1.0;
            }
            Ok(())
        } else {
            Err(PlainTextError::DiagonalLine { from, to })
        }
    }

    fn draw_block(&mut self, block: &MonoBlock) -> Result<(), PlainTextError> {
        let mut y: u32 = 0;
        for line in &block.lines {
            self.put_str(Point::new(line.offset as f32, y as f32), &line.text);
            y = y.saturating_add(block.line_height);
        }
        Ok(())
    }

    fn save(&mut self) {
        self.saved.push(self.origin);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin + Point::new(dx, dy);
    }

    fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }
}
