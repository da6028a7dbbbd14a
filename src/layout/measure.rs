use super::resolve::{choose_policy, resolve_widths, ResolvedWidths, WidthPolicy};
use crate::config::{JustifyConfig, LineDecoration, SideStyle};
use crate::geometry::{BoxInsets, IconGeometry, Point, Size};
use crate::infra::span;
use crate::render::{Alignment, TextBlock, TextShaper, WrapParams};

/// How the host constrains one dimension of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The widget must be exactly `size` pixels.
    Exactly,
    /// The widget may be at most `size` pixels. The widget sizes itself to its content.
    AtMost,
    /// No constraint. The widget sizes itself to its content.
    Unspecified,
}

/// A constraint on one dimension of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

/// The result of measuring the widget: its final size, and everything needed to draw it.
///
/// A `ResolvedLayout` is never updated. Measure again to get a new one.
#[derive(Debug, Clone)]
pub struct ResolvedLayout<B> {
    pub(super) size: Size,
    pub(super) widths: ResolvedWidths,
    pub(super) policy: WidthPolicy,
    pub(super) insets: BoxInsets,
    pub(super) icons: IconGeometry,
    pub(super) spacing: f32,
    pub(super) top_line: LineDecoration,
    pub(super) bottom_line: LineDecoration,
    pub(super) left_block: Option<B>,
    pub(super) right_block: Option<B>,
}

impl MeasureSpec {
    pub fn exactly(size: u32) -> MeasureSpec {
        MeasureSpec {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    pub fn at_most(size: u32) -> MeasureSpec {
        MeasureSpec {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    pub fn unspecified() -> MeasureSpec {
        MeasureSpec {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    fn is_exact(self) -> bool {
        self.mode == MeasureMode::Exactly
    }
}

/// Measure the widget: divide the width between the two blocks, wrap each block's text, and pick
/// the widget's size.
///
/// `icons` is the space taken by the widget's icons, and `shaper` measures and wraps text. The
/// returned size is final; the host should not negotiate further.
pub fn measure<S: TextShaper>(
    config: &JustifyConfig,
    icons: &IconGeometry,
    shaper: &S,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> ResolvedLayout<S::Block> {
    span!("measure");

    let insets = config.insets;
    let reserved_width =
        insets.horizontal().saturating_add(icons.horizontal()) as f32 + config.spacing;

    // Truncate to whole pixels before dividing it up.
    let usable = (width_spec.size as f32 - reserved_width) as i64;
    let usable = usable.max(0) as f32;

    let widths = resolve_widths(
        usable,
        &config.left,
        &config.right,
        config.weighted_free_side,
        |style| natural_width(shaper, style),
    );

    let width = if width_spec.is_exact() {
        width_spec.size
    } else {
        (widths.left + widths.right + reserved_width) as u32
    };

    let left_block = wrap_side(shaper, &config.left, widths.left, Alignment::Start);
    let right_block = wrap_side(shaper, &config.right, widths.right, Alignment::End);

    let height = if height_spec.is_exact() {
        height_spec.size
    } else {
        let content_height = block_height(&left_block)
            .max(block_height(&right_block))
            .max(icons.left.height)
            .max(icons.right.height);
        let constraints = config.constraints;
        let clamped = (content_height as f32)
            .max(constraints.min_height)
            .min(constraints.max_height - insets.vertical() as f32);
        (clamped as u32)
            .saturating_add(insets.vertical())
            .saturating_add(icons.vertical())
    };

    let size = Size { width, height };
    tracing::debug!(%size, usable, "measured");

    ResolvedLayout {
        size,
        widths,
        policy: choose_policy(&config.left, &config.right),
        insets,
        icons: *icons,
        spacing: config.spacing,
        top_line: config.top_line,
        bottom_line: config.bottom_line,
        left_block,
        right_block,
    }
}

fn natural_width<S: TextShaper>(shaper: &S, style: &SideStyle) -> f32 {
    match style.visible_text() {
        Some(text) => shaper.measure_width(style, text),
        None => 0.0,
    }
}

fn wrap_side<S: TextShaper>(
    shaper: &S,
    style: &SideStyle,
    width: f32,
    alignment: Alignment,
) -> Option<S::Block> {
    let text = style.visible_text()?;
    let params = WrapParams::for_style(style, alignment);
    Some(shaper.wrap(style, text, width as u32, &params))
}

fn block_height<B: TextBlock>(block: &Option<B>) -> u32 {
    block.as_ref().map(B::height).unwrap_or(0)
}

impl<B> ResolvedLayout<B> {
    /// The final size of the widget.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The widths given to the two blocks.
    pub fn widths(&self) -> ResolvedWidths {
        self.widths
    }

    /// The sizing policy that produced [`widths`](Self::widths).
    pub fn policy(&self) -> WidthPolicy {
        self.policy
    }

    /// The wrapped left text, or `None` if the left side has no text.
    pub fn left_block(&self) -> Option<&B> {
        self.left_block.as_ref()
    }

    /// The wrapped right text, or `None` if the right side has no text.
    pub fn right_block(&self) -> Option<&B> {
        self.right_block.as_ref()
    }
}

impl<B: TextBlock> ResolvedLayout<B> {
    /// Where the top-left corner of the left block is drawn.
    pub fn left_origin(&self) -> Option<Point> {
        let block = self.left_block.as_ref()?;
        let x = self.insets.left.saturating_add(self.icons.left.width);
        Some(Point::new(x as f32, self.block_top(block)))
    }

    /// Where the top-left corner of the right block is drawn. The right block hugs the right edge,
    /// but never starts before the end of the left block plus the spacing.
    pub fn right_origin(&self) -> Option<Point> {
        let block = self.right_block.as_ref()?;
        let flush_right = self.size.width as f32
            - self.widths.right
            - self.insets.right.saturating_add(self.icons.right.width) as f32;
        let after_left = self.insets.left.saturating_add(self.icons.left.width) as f32
            + self.widths.left
            + self.spacing;
        Some(Point::new(flush_right.max(after_left), self.block_top(block)))
    }

    /// Center the block vertically in the space left by the insets and icons, but never let it
    /// start above that space.
    fn block_top(&self, block: &B) -> f32 {
        let vertical = i64::from(self.insets.vertical()) + i64::from(self.icons.vertical());
        let text_height = i64::from(self.size.height) - vertical;
        let offset = ((text_height - i64::from(block.height())) / 2).max(0);
        (offset + i64::from(self.insets.top) + i64::from(self.icons.top.height)) as f32
    }
}
