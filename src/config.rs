use crate::geometry::{BoxInsets, Density};
use crate::style::Color;
use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Raw encoding of [`WidthIntent::Fill`].
pub const FILL_RAW: f32 = -1.0;
/// Raw encoding of [`WidthIntent::Shrink`].
pub const SHRINK_RAW: f32 = -2.0;

/// Errors in a [`JustifyConfig`] handed to the layout by whoever ingested the widget's attributes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid width {0}: expected a positive width, -1 (fill) or -2 (shrink)")]
    InvalidWidthIntent(f32),

    #[error("invalid width weight {weight} on the {side} side: must be finite and non-negative")]
    InvalidWeight { side: Side, weight: f32 },

    #[error("invalid font size {size} on the {side} side: must be finite and positive")]
    InvalidFontSize { side: Side, size: f32 },

    #[error("invalid spacing between blocks: {0}")]
    InvalidSpacing(f32),

    #[error("min height {min} is larger than max height {max}")]
    InvalidHeightRange { min: f32, max: f32 },
}

/// One of the two text blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// How a side asks to be sized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(Serialize, Deserialize),
    serde(try_from = "f32", into = "f32")
)]
pub enum WidthIntent {
    /// Exactly this many pixels. Always positive.
    Exact(f32),
    /// Take all of the width the other side leaves over.
    Fill,
    /// Take the natural width of the text, but no more than what is left over.
    Shrink,
}

/// The styling and sizing of one side's text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize), serde(default))]
pub struct SideStyle {
    /// The text to display. `None` and `""` both mean "draw nothing on this side".
    pub text: Option<String>,
    pub color: Color,
    /// Font size, in pixels.
    pub font_size: f32,
    /// Line height, as a multiple of the font's natural line height.
    pub spacing_multiplier: f32,
    /// Extra line height, in pixels.
    pub spacing_add: f32,
    pub width: WidthIntent,
    /// Proportional sizing factor. Only used when both sides have a positive weight.
    pub weight: f32,
}

/// A horizontal divider line along the top or bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize), serde(default))]
pub struct LineDecoration {
    /// Thickness in pixels. Zero disables the line.
    pub stroke: f32,
    pub color: Color,
}

/// Bounds on the height of the text content (not counting insets and icons).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize), serde(default))]
pub struct SizeConstraints {
    pub min_height: f32,
    /// `f32::MAX` for unbounded.
    pub max_height: f32,
}

/// Everything the layout needs to know about the widget, already resolved to pixels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize), serde(default))]
pub struct JustifyConfig {
    pub left: SideStyle,
    pub right: SideStyle,
    pub top_line: LineDecoration,
    pub bottom_line: LineDecoration,
    pub insets: BoxInsets,
    pub constraints: SizeConstraints,
    /// Horizontal gap between the left and right blocks, in pixels.
    pub spacing: f32,
    /// When both sides are weighted, the side whose width is measured from its text. The other
    /// side's width is derived from it by the ratio of their weights.
    pub weighted_free_side: Side,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl WidthIntent {
    /// The raw signed encoding: the width itself if exact, otherwise a reserved negative value.
    pub fn raw(self) -> f32 {
        match self {
            WidthIntent::Exact(px) => px,
            WidthIntent::Fill => FILL_RAW,
            WidthIntent::Shrink => SHRINK_RAW,
        }
    }

    /// The exact width, if this intent asks for one.
    pub fn exact(self) -> Option<f32> {
        match self {
            WidthIntent::Exact(px) => Some(px),
            WidthIntent::Fill | WidthIntent::Shrink => None,
        }
    }
}

impl TryFrom<f32> for WidthIntent {
    type Error = ConfigError;

    fn try_from(raw: f32) -> Result<WidthIntent, ConfigError> {
        if raw == FILL_RAW {
            Ok(WidthIntent::Fill)
        } else if raw == SHRINK_RAW {
            Ok(WidthIntent::Shrink)
        } else if raw.is_finite() && raw > 0.0 {
            Ok(WidthIntent::Exact(raw))
        } else {
            Err(ConfigError::InvalidWidthIntent(raw))
        }
    }
}

impl From<WidthIntent> for f32 {
    fn from(intent: WidthIntent) -> f32 {
        intent.raw()
    }
}

impl SideStyle {
    /// The text to lay out, or `None` if there is nothing to draw.
    pub fn visible_text(&self) -> Option<&str> {
        match self.text.as_deref() {
            None | Some("") => None,
            Some(text) => Some(text),
        }
    }

    pub fn is_weighted(&self) -> bool {
        self.weight > 0.0
    }

    pub fn with_text(mut self, text: impl Into<String>) -> SideStyle {
        self.text = Some(text.into());
        self
    }

    pub fn with_width(mut self, width: WidthIntent) -> SideStyle {
        self.width = width;
        self
    }

    pub fn with_weight(mut self, weight: f32) -> SideStyle {
        self.weight = weight;
        self
    }

    fn validate(&self, side: Side) -> Result<(), ConfigError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ConfigError::InvalidWeight {
                side,
                weight: self.weight,
            });
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::InvalidFontSize {
                side,
                size: self.font_size,
            });
        }
        if let WidthIntent::Exact(px) = self.width {
            WidthIntent::try_from(px)?;
        }
        Ok(())
    }
}

impl Default for SideStyle {
    fn default() -> Self {
        SideStyle {
            text: None,
            color: Color::BLACK,
            font_size: 16.0,
            spacing_multiplier: 1.0,
            spacing_add: 0.0,
            width: WidthIntent::Shrink,
            weight: 0.0,
        }
    }
}

impl LineDecoration {
    pub fn new(stroke: f32, color: Color) -> LineDecoration {
        LineDecoration { stroke, color }
    }

    pub fn is_visible(&self) -> bool {
        self.stroke != 0.0
    }
}

impl SizeConstraints {
    pub fn unbounded() -> SizeConstraints {
        SizeConstraints {
            min_height: 0.0,
            max_height: f32::MAX,
        }
    }
}

impl Default for SizeConstraints {
    fn default() -> Self {
        SizeConstraints::unbounded()
    }
}

impl JustifyConfig {
    /// The default configuration on a screen with the given density: 16dp text on both sides, the
    /// left side shrinking to its text and the right side filling the rest, with 10dp between them.
    pub fn with_density(density: Density) -> JustifyConfig {
        let side = SideStyle {
            font_size: density.dp_to_px(16.0) as f32,
            ..SideStyle::default()
        };
        JustifyConfig {
            left: side.clone().with_width(WidthIntent::Shrink),
            right: side.with_width(WidthIntent::Fill),
            top_line: LineDecoration::default(),
            bottom_line: LineDecoration::default(),
            insets: BoxInsets::default(),
            constraints: SizeConstraints::unbounded(),
            spacing: density.dp_to_px(10.0) as f32,
            weighted_free_side: Side::Left,
        }
    }

    /// Check that every value is in range. Layout never fails, but out-of-range values produce
    /// meaningless geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.left.validate(Side::Left)?;
        self.right.validate(Side::Right)?;
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        let SizeConstraints {
            min_height,
            max_height,
        } = self.constraints;
        if min_height.is_nan() || max_height.is_nan() || min_height > max_height {
            return Err(ConfigError::InvalidHeightRange {
                min: min_height,
                max: max_height,
            });
        }
        Ok(())
    }
}

impl Default for JustifyConfig {
    fn default() -> Self {
        JustifyConfig::with_density(Density::default())
    }
}
