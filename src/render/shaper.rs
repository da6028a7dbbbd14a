use crate::config::SideStyle;

/// Where each line sits within the width of its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Flush against the leading edge. Used for the left block.
    Start,
    /// Flush against the trailing edge. Used for the right block.
    End,
}

/// Paragraph settings for wrapping one side's text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapParams {
    pub alignment: Alignment,
    pub spacing_multiplier: f32,
    pub spacing_add: f32,
}

/// Text measurement and line breaking.
pub trait TextShaper {
    /// The result of wrapping a paragraph.
    type Block: TextBlock;

    /// The natural (unwrapped) width of `text` in the given style, in pixels.
    fn measure_width(&self, style: &SideStyle, text: &str) -> f32;

    /// Break `text` into lines no wider than `width` pixels. `text` is never empty.
    fn wrap(&self, style: &SideStyle, text: &str, width: u32, params: &WrapParams) -> Self::Block;
}

/// A wrapped paragraph, ready to draw.
pub trait TextBlock {
    /// Total height of all lines, in pixels.
    fn height(&self) -> u32;
}

impl WrapParams {
    pub fn for_style(style: &SideStyle, alignment: Alignment) -> WrapParams {
        WrapParams {
            alignment,
            spacing_multiplier: style.spacing_multiplier,
            spacing_add: style.spacing_add,
        }
    }
}
