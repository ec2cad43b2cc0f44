//! Anchor-based placement.
//!
//! Anchor discriminants encode the two axes: `index % 3` selects the
//! vertical position (top, center, bottom) and `index / 3` the horizontal
//! one (left, center, right). Centered axes ignore padding.

use crate::UiError;
use crate::geom::{Point, Rect, Size, half_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    CenterLeft,
    BottomLeft,
    TopCenter,
    Center,
    BottomCenter,
    TopRight,
    CenterRight,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::CenterLeft,
        Anchor::BottomLeft,
        Anchor::TopCenter,
        Anchor::Center,
        Anchor::BottomCenter,
        Anchor::TopRight,
        Anchor::CenterRight,
        Anchor::BottomRight,
    ];

    #[inline]
    fn vertical(self) -> u8 {
        self as u8 % 3
    }

    #[inline]
    fn horizontal(self) -> u8 {
        self as u8 / 3
    }
}

/// Horizontal placement of text inside a label's declared width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Column offset of a `len`-wide run inside `width` columns. Center and
    /// right fall back to left when the run is wider than the field.
    pub fn offset(self, len: i32, width: i32) -> i32 {
        match self {
            TextAlign::Left => 0,
            _ if len > width => 0,
            TextAlign::Center => width / 2 - len / 2,
            TextAlign::Right => width - len,
        }
    }
}

/// Where an element goes relative to its layout parent, and its z-layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub anchor: Anchor,
    pub padding: Size,
    pub z: i32,
}

impl Placement {
    pub const fn new(anchor: Anchor, pad_x: i32, pad_y: i32) -> Self {
        Self {
            anchor,
            padding: Size::new(pad_x, pad_y),
            z: 0,
        }
    }

    pub const fn at(anchor: Anchor) -> Self {
        Self::new(anchor, 0, 0)
    }

    pub const fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }
}

/// Absolute position of an `own`-sized element anchored inside `parent`.
///
/// Fails when padding is negative or larger than the free space on its
/// axis (`parent - own`); within those bounds the element never leaves the
/// parent rectangle.
pub fn resolve_position(
    parent: Rect,
    own: Size,
    anchor: Anchor,
    padding: Size,
) -> Result<Point, UiError> {
    if padding.width < 0 || padding.height < 0 {
        return Err(UiError::NegativePadding { padding });
    }
    let free = Size::new(parent.width - own.width, parent.height - own.height);
    if padding.width > free.width || padding.height > free.height {
        return Err(UiError::PaddingOutOfBounds { padding, free });
    }

    let y = match anchor.vertical() {
        0 => parent.y + padding.height,
        1 => parent.y + half_up(parent.height) - half_up(own.height),
        _ => parent.y + parent.height - own.height - padding.height,
    };
    let x = match anchor.horizontal() {
        0 => parent.x + padding.width,
        1 => parent.x + half_up(parent.width) - half_up(own.width),
        _ => parent.x + parent.width - own.width - padding.width,
    };
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Rect = Rect::new(10, 5, 20, 9);

    #[test]
    fn corners_respect_padding() {
        let own = Size::new(4, 3);
        let pad = Size::new(2, 1);
        assert_eq!(
            resolve_position(PARENT, own, Anchor::TopLeft, pad).unwrap(),
            Point::new(12, 6)
        );
        assert_eq!(
            resolve_position(PARENT, own, Anchor::BottomRight, pad).unwrap(),
            Point::new(10 + 20 - 4 - 2, 5 + 9 - 3 - 1)
        );
    }

    #[test]
    fn center_rounds_up_and_ignores_padding() {
        // ceil(9/2)=5, ceil(3/2)=2; ceil(20/2)=10, ceil(5/2)=3
        let p = resolve_position(PARENT, Size::new(5, 3), Anchor::Center, Size::new(3, 3)).unwrap();
        assert_eq!(p, Point::new(10 + 10 - 3, 5 + 5 - 2));
    }

    #[test]
    fn negative_padding_is_rejected() {
        let err = resolve_position(PARENT, Size::new(1, 1), Anchor::TopLeft, Size::new(-1, 0))
            .unwrap_err();
        assert!(matches!(err, UiError::NegativePadding { .. }));
    }

    #[test]
    fn padding_larger_than_free_space_is_rejected() {
        let err = resolve_position(PARENT, Size::new(18, 1), Anchor::TopRight, Size::new(3, 0))
            .unwrap_err();
        assert!(matches!(err, UiError::PaddingOutOfBounds { .. }));
        assert!(resolve_position(PARENT, Size::new(18, 1), Anchor::TopRight, Size::new(2, 0)).is_ok());
    }

    #[test]
    fn text_offset_degrades_to_left() {
        assert_eq!(TextAlign::Center.offset(4, 10), 3);
        assert_eq!(TextAlign::Right.offset(4, 10), 6);
        assert_eq!(TextAlign::Center.offset(12, 10), 0);
        assert_eq!(TextAlign::Right.offset(12, 10), 0);
    }
}
