use super::measure::ResolvedLayout;
use crate::config::LineDecoration;
use crate::geometry::Point;
use crate::infra::span;
use crate::render::{Canvas, CanvasGuard, TextBlock};

/// Errors that can occur while drawing a [`ResolvedLayout`].
#[derive(thiserror::Error, Debug)]
pub enum DrawError<C: Canvas> {
    #[error("canvas error: {0}")]
    Canvas(#[source] C::Error),
}

impl<B: TextBlock> ResolvedLayout<B> {
    /// Paint the divider lines and both blocks of text. The canvas transform is the same afterwards
    /// as it was before, even if drawing fails.
    pub fn draw<C>(&self, canvas: &mut C) -> Result<(), DrawError<C>>
    where
        C: Canvas<Block = B>,
    {
        span!("draw");

        let width = self.size.width as f32;
        let height = self.size.height as f32;
        if self.top_line.is_visible() {
            draw_divider(canvas, &self.top_line, 0.0, width)?;
        }
        if self.bottom_line.is_visible() {
            draw_divider(canvas, &self.bottom_line, height - self.bottom_line.stroke, width)?;
        }

        if let (Some(block), Some(origin)) = (&self.left_block, self.left_origin()) {
            draw_block(canvas, block, origin)?;
        }
        if let (Some(block), Some(origin)) = (&self.right_block, self.right_origin()) {
            draw_block(canvas, block, origin)?;
        }
        Ok(())
    }
}

fn draw_divider<C: Canvas>(
    canvas: &mut C,
    line: &LineDecoration,
    y: f32,
    width: f32,
) -> Result<(), DrawError<C>> {
    canvas
        .draw_line(Point::new(0.0, y), Point::new(width, y), line.color, line.stroke)
        .map_err(DrawError::Canvas)
}

fn draw_block<C: Canvas>(
    canvas: &mut C,
    block: &C::Block,
    origin: Point,
) -> Result<(), DrawError<C>>
where
    C::Block: TextBlock,
{
    tracing::trace!(%origin, height = block.height(), "drawing block");
    let mut canvas = CanvasGuard::translated(canvas, origin);
    canvas.draw_block(block).map_err(DrawError::Canvas)?;
    Ok(())
}
