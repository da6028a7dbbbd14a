use crate::geometry::Point;
use crate::style::Color;
use std::ops::{Deref, DerefMut};

/// A surface that a [`ResolvedLayout`](crate::ResolvedLayout) can be drawn to.
///
/// The canvas keeps a stack of transforms: `save` pushes the current origin, `translate` moves
/// it, and `restore` pops back to the last saved origin. Prefer [`CanvasGuard`] over calling
/// `save` and `restore` by hand.
pub trait Canvas {
    /// An error that can happen while drawing. It may not borrow from the canvas.
    type Error: std::error::Error + 'static;

    /// A pre-wrapped block of text, as produced by a [`TextShaper`](crate::TextShaper).
    type Block;

    /// Draw a straight line between two points (relative to the current origin).
    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        stroke: f32,
    ) -> Result<(), Self::Error>;

    /// Draw a block with its top-left corner at the current origin.
    fn draw_block(&mut self, block: &Self::Block) -> Result<(), Self::Error>;

    /// Push the current transform.
    fn save(&mut self);

    /// Move the origin by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Pop back to the most recently saved transform.
    fn restore(&mut self);
}

/// A saved canvas transform. The transform is restored when the guard is dropped, including when
/// a draw call through the guard fails part-way.
pub struct CanvasGuard<'c, C: Canvas> {
    canvas: &'c mut C,
}

impl<'c, C: Canvas> CanvasGuard<'c, C> {
    pub fn new(canvas: &'c mut C) -> CanvasGuard<'c, C> {
        canvas.save();
        CanvasGuard { canvas }
    }

    /// Save the transform, then move the origin to `origin`.
    pub fn translated(canvas: &'c mut C, origin: Point) -> CanvasGuard<'c, C> {
        let mut guard = CanvasGuard::new(canvas);
        guard.canvas.translate(origin.x, origin.y);
        guard
    }
}

impl<'c, C: Canvas> Deref for CanvasGuard<'c, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<'c, C: Canvas> DerefMut for CanvasGuard<'c, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<'c, C: Canvas> Drop for CanvasGuard<'c, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
