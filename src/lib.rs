//! Lay out and draw two independently wrapped blocks of text side by side: a left block, aligned
//! to its start, and a right block, aligned to its end. Each side asks for a width (exact, fill the
//! rest, or shrink to its text) or a weight, and the layout divides the available width between
//! them, wraps each block, and sizes the widget to fit.
//!
//! Text shaping and painting are supplied by the host through the [`TextShaper`] and [`Canvas`]
//! traits. [`MonospaceShaper`] and [`PlainText`] implement them for character-cell displays.

mod config;
mod geometry;
mod infra;
mod layout;
mod render;
mod style;

pub use config::{
    ConfigError, JustifyConfig, LineDecoration, Side, SideStyle, SizeConstraints, WidthIntent,
    FILL_RAW, SHRINK_RAW,
};
pub use geometry::{str_width, BoxInsets, Density, IconGeometry, Point, Size};
pub use layout::{
    choose_policy, measure, resolve_widths, DrawError, MeasureMode, MeasureSpec, ResolvedLayout,
    ResolvedWidths, WidthPolicy,
};
pub use render::{
    Alignment, Canvas, CanvasGuard, MonoBlock, MonoLine, MonospaceShaper, PlainText,
    PlainTextError, TextBlock, TextShaper, WrapParams,
};
pub use style::Color;

#[doc(hidden)]
pub use tracing;
