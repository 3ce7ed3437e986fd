//! Geometry and color primitives shared by the overlay system.

use serde::Serialize;

/// A point with integer coordinates (client or screen space).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle with integer coordinates.
///
/// Uses left/top/right/bottom format where right and bottom are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from left, top, right, bottom coordinates.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from x, y, width, height.
    pub fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width as i32,
            bottom: y + height as i32,
        }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }

    /// Check if a point is inside the rectangle (exclusive of right/bottom edges).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Normalize so left < right and top < bottom.
    pub fn normalize(&self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Offset the rectangle by dx, dy.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Convert to D2D_RECT_F for Direct2D rendering.
    #[cfg(windows)]
    pub fn to_d2d_rect(&self) -> windows::Win32::Graphics::Direct2D::Common::D2D_RECT_F {
        windows::Win32::Graphics::Direct2D::Common::D2D_RECT_F {
            left: self.left as f32,
            top: self.top as f32,
            right: self.right as f32,
            bottom: self.bottom as f32,
        }
    }
}

/// An RGBA color with float components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to D2D1_COLOR_F for brush creation.
    #[cfg(windows)]
    pub fn to_d2d(&self) -> windows::Win32::Graphics::Direct2D::Common::D2D1_COLOR_F {
        windows::Win32::Graphics::Direct2D::Common::D2D1_COLOR_F {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_xywh() {
        let r = Rect::from_xywh(10, 20, 100, 50);
        assert_eq!(r.left, 10);
        assert_eq!(r.top, 20);
        assert_eq!(r.right, 110);
        assert_eq!(r.bottom, 70);
    }

    #[test]
    fn rect_dimensions() {
        let r = Rect::new(10, 20, 110, 70);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
    }

    #[test]
    fn rect_dimensions_clamp_to_zero_when_inverted() {
        let r = Rect::new(100, 100, 0, 0);
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(10, 10, 100, 100);

        assert!(r.contains(50, 50));
        assert!(r.contains(10, 10)); // Left-top corner (inclusive)

        // Outside (right/bottom are exclusive)
        assert!(!r.contains(100, 100));
        assert!(!r.contains(5, 50));
    }

    #[test]
    fn rect_normalize() {
        let r = Rect::new(100, 100, 0, 0);
        let n = r.normalize();
        assert_eq!(n, Rect::new(0, 0, 100, 100));

        let already = Rect::new(0, 0, 100, 100);
        assert_eq!(already.normalize(), already);
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(0, 0, 100, 50);
        assert_eq!(r.center(), (50, 25));
    }

    #[test]
    fn rect_offset() {
        let r = Rect::new(10, 10, 20, 20);
        assert_eq!(r.offset(5, -5), Rect::new(15, 5, 25, 15));
    }
}
