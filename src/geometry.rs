use std::fmt;
use std::ops::Add;
use unicode_width::UnicodeWidthChar;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A position on the canvas, in pixels.
///
/// The origin is in the upper left, and is `(0, 0)`.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A size, in whole pixels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Padding between the edge of the widget and its content, in pixels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct BoxInsets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// The space reserved for the four icon slots around the text.
///
/// `left` and `right` widths, and `top` and `bottom` heights, already include `padding` for
/// every slot that holds an icon. Empty slots are zero-sized.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct IconGeometry {
    pub left: Size,
    pub top: Size,
    pub right: Size,
    pub bottom: Size,
    /// Gap between an icon and the text, in pixels.
    pub padding: u32,
}

/// Pixels per density-independent pixel.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Density(pub f32);

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    pub fn zero() -> Point {
        Point { x: 0.0, y: 0.0 }
    }
}

impl Size {
    pub fn new(width: u32, height: u32) -> Size {
        Size { width, height }
    }
}

impl BoxInsets {
    pub fn uniform(px: u32) -> BoxInsets {
        BoxInsets {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }

    pub fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

impl IconGeometry {
    /// Measure the icon slots, given the natural size of the icon in each slot (in the order left,
    /// top, right, bottom) and the icon-to-text padding. Side icons are widened by the padding, and
    /// top/bottom icons are heightened by it.
    pub fn from_icons(icons: [Option<Size>; 4], padding: u32) -> IconGeometry {
        let [left, top, right, bottom] = icons;
        let widen = |icon: Option<Size>| match icon {
            Some(size) => Size::new(size.width.saturating_add(padding), size.height),
            None => Size::default(),
        };
        let heighten = |icon: Option<Size>| match icon {
            Some(size) => Size::new(size.width, size.height.saturating_add(padding)),
            None => Size::default(),
        };
        IconGeometry {
            left: widen(left),
            top: heighten(top),
            right: widen(right),
            bottom: heighten(bottom),
            padding,
        }
    }

    /// Horizontal space taken by the side icons.
    pub fn horizontal(&self) -> u32 {
        self.left.width.saturating_add(self.right.width)
    }

    /// Vertical space taken by the top and bottom icons.
    pub fn vertical(&self) -> u32 {
        self.top.height.saturating_add(self.bottom.height)
    }
}

impl Density {
    /// Convert density-independent pixels to device pixels, rounding to nearest.
    pub fn dp_to_px(self, dp: f32) -> u32 {
        (dp * self.0 + 0.5) as u32
    }
}

impl Default for Density {
    fn default() -> Self {
        Density(1.0)
    }
}

/// Is this char full width (2 columns wide), as opposed to half width (1 column wide)?
pub fn is_char_full_width(ch: char) -> bool {
    char_width(ch) == 2
}

/// The number of columns this char takes up. Control characters count as zero.
pub fn char_width(ch: char) -> u32 {
    ch.width().unwrap_or(0) as u32
}

/// The number of columns this string takes up.
pub fn str_width(s: &str) -> u32 {
    s.chars().map(char_width).sum()
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_padding_only_applies_to_present_icons() {
        let icons = IconGeometry::from_icons(
            [Some(Size::new(16, 20)), None, Some(Size::new(8, 8)), Some(Size::new(30, 4))],
            5,
        );
        assert_eq!(icons.left, Size::new(21, 20));
        assert_eq!(icons.top, Size::new(0, 0));
        assert_eq!(icons.right, Size::new(13, 8));
        assert_eq!(icons.bottom, Size::new(30, 9));
        assert_eq!(icons.horizontal(), 34);
        assert_eq!(icons.vertical(), 9);
    }

    #[test]
    fn test_no_icons() {
        let icons = IconGeometry::from_icons([None; 4], 12);
        assert_eq!(icons.horizontal(), 0);
        assert_eq!(icons.vertical(), 0);
        assert_eq!(icons.padding, 12);
    }

    #[test]
    fn test_dp_to_px() {
        assert_eq!(Density(1.0).dp_to_px(16.0), 16);
        assert_eq!(Density(2.0).dp_to_px(10.0), 20);
        assert_eq!(Density(1.5).dp_to_px(3.0), 5);
        assert_eq!(Density(2.75).dp_to_px(1.0), 3);
        assert_eq!(Density(3.0).dp_to_px(0.0), 0);
    }

    #[test]
    fn test_str_width() {
        assert_eq!(str_width(""), 0);
        assert_eq!(str_width("abc"), 3);
        assert_eq!(str_width("一1"), 3);
        assert!(is_char_full_width('一'));
        assert!(!is_char_full_width('a'));
    }

    #[test]
    fn test_insets() {
        let insets = BoxInsets {
            left: 1,
            top: 2,
            right: 3,
            bottom: 4,
        };
        assert_eq!(insets.horizontal(), 4);
        assert_eq!(insets.vertical(), 6);
        assert_eq!(BoxInsets::uniform(2).horizontal(), 4);
        assert_eq!(BoxInsets::uniform(u32::MAX).vertical(), u32::MAX);
    }

    #[test]
    fn test_huge_icons_saturate() {
        let huge = Some(Size::new(u32::MAX, u32::MAX));
        let icons = IconGeometry::from_icons([huge; 4], 5);
        assert_eq!(icons.left.width, u32::MAX);
        assert_eq!(icons.top.height, u32::MAX);
        assert_eq!(icons.horizontal(), u32::MAX);
        assert_eq!(icons.vertical(), u32::MAX);
    }
}
