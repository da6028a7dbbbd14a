#![allow(unused)]

use justify_text::{
    Alignment, Canvas, Color, JustifyConfig, Point, SideStyle, TextBlock, TextShaper, WidthIntent,
    WrapParams,
};
use std::fmt;

/// A shaper where every character is `char_width` pixels wide and every line is
/// `font_size * spacing_multiplier + spacing_add` pixels tall.
#[derive(Debug, Clone, Copy)]
pub struct FakeShaper {
    pub char_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeBlock {
    pub text: String,
    pub width: u32,
    pub lines: u32,
    pub line_height: u32,
    pub alignment: Alignment,
}

impl FakeShaper {
    pub fn new(char_width: f32) -> FakeShaper {
        FakeShaper { char_width }
    }
}

impl TextShaper for FakeShaper {
    type Block = FakeBlock;

    fn measure_width(&self, _style: &SideStyle, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn wrap(&self, style: &SideStyle, text: &str, width: u32, params: &WrapParams) -> FakeBlock {
        let per_line = ((width as f32 / self.char_width) as u32).max(1);
        let chars = text.chars().count() as u32;
        let lines = (chars + per_line - 1) / per_line;
        let line_height = (style.font_size * params.spacing_multiplier + params.spacing_add) as u32;
        FakeBlock {
            text: text.to_owned(),
            width,
            lines,
            line_height,
            alignment: params.alignment,
        }
    }
}

impl TextBlock for FakeBlock {
    fn height(&self) -> u32 {
        self.lines * self.line_height
    }
}

/// Everything a [`RecordingCanvas`] was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Line {
        from: Point,
        to: Point,
        color: Color,
        stroke: f32,
    },
    /// A block was drawn, with the canvas origin at `origin`.
    Block { text: String, origin: Point },
    Save,
    Translate(f32, f32),
    Restore,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("refused to draw {0:?}")]
pub struct Refused(pub String);

/// A canvas that records every call, and optionally refuses to draw one block.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    pub refuse: Option<String>,
    origin: Point,
    saved: Vec<Point>,
}

impl RecordingCanvas {
    pub fn new() -> RecordingCanvas {
        RecordingCanvas::default()
    }

    pub fn refusing(text: &str) -> RecordingCanvas {
        RecordingCanvas {
            refuse: Some(text.to_owned()),
            ..RecordingCanvas::default()
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn lines(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line { .. }))
            .collect()
    }

    /// The origin each block was drawn at, by text.
    pub fn block_origin(&self, text: &str) -> Option<Point> {
        self.ops.iter().find_map(|op| match op {
            Op::Block { text: t, origin } if t == text => Some(*origin),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    type Error = Refused;
    type Block = FakeBlock;

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        stroke: f32,
    ) -> Result<(), Refused> {
        self.ops.push(Op::Line {
            from,
            to,
            color,
            stroke,
        });
        Ok(())
    }

    fn draw_block(&mut self, block: &FakeBlock) -> Result<(), Refused> {
        if self.refuse.as_deref() == Some(block.text.as_str()) {
            return Err(Refused(block.text.clone()));
        }
        self.ops.push(Op::Block {
            text: block.text.clone(),
            origin: self.origin,
        });
        Ok(())
    }

    fn save(&mut self) {
        self.saved.push(self.origin);
        self.ops.push(Op::Save);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin + Point::new(dx, dy);
        self.ops.push(Op::Translate(dx, dy));
    }

    fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
        self.ops.push(Op::Restore);
    }
}

/// A side with the given text and width intent, with 20px lines.
pub fn side(text: &str, width: WidthIntent) -> SideStyle {
    SideStyle {
        text: if text.is_empty() {
            None
        } else {
            Some(text.to_owned())
        },
        font_size: 20.0,
        width,
        ..SideStyle::default()
    }
}

/// A config with no spacing, insets, icons, or lines, so the usable width is the full width.
pub fn bare_config(left: SideStyle, right: SideStyle) -> JustifyConfig {
    JustifyConfig {
        left,
        right,
        spacing: 0.0,
        ..JustifyConfig::default()
    }
}
