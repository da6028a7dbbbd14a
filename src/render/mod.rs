//! The two capabilities a layout needs from its host: measuring and wrapping text
//! ([`TextShaper`]), and painting ([`Canvas`]).
//!
//! This library supplies character-cell implementations of both, [`MonospaceShaper`] and
//! [`PlainText`], which are enough to display a layout in a terminal or to test one. To display to
//! a real graphics surface, implement the two traits over your text engine and renderer.

mod canvas;
mod monospace;
mod plain_text;
mod shaper;

pub use canvas::{Canvas, CanvasGuard};
pub use monospace::{MonoBlock, MonoLine, MonospaceShaper};
pub use plain_text::{PlainText, PlainTextError};
pub use shaper::{Alignment, TextBlock, TextShaper, WrapParams};
