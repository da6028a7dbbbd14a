//! Lay out the two blocks of text.
//!
//! Laying out happens in two passes. [`measure()`] decides how wide each block is (see
//! [`resolve_widths()`] for the rules), wraps the text, and picks the size of the widget. The
//! [`ResolvedLayout`] it returns is then drawn with [`ResolvedLayout::draw`], as many times as
//! needed. Measure again whenever the configuration, the text, or the available space changes.

mod draw;
mod measure;
mod resolve;

pub use draw::DrawError;
pub use measure::{measure, MeasureMode, MeasureSpec, ResolvedLayout};
pub use resolve::{choose_policy, resolve_widths, ResolvedWidths, WidthPolicy};
