//! Axis-aligned geometry crossing the engine boundary.
//!
//! The engine never decides window geometry. Extents and pointer
//! positions arrive from the presentation layer as plain values; the
//! engine only needs point containment for hit tests and overlap area
//! for target resolution.

use serde::{Deserialize, Serialize};

/// A point in presentation-layer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// This point translated by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle: origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Is `point` inside this rectangle (edges inclusive)?
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }

    /// Area of the intersection with `other`; 0.0 when disjoint.
    #[must_use]
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        let w = (self.x + self.w).min(other.x + other.w) - self.x.max(other.x);
        let h = (self.y + self.h).min(other.y + other.h) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(60.0, 45.0)));
        assert!(rect.contains(Point::new(110.0, 70.0)));
        assert!(!rect.contains(Point::new(9.9, 45.0)));
        assert!(!rect.contains(Point::new(60.0, 70.1)));
    }

    #[test]
    fn test_overlap_area_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert_eq!(a.overlap_area(&b), 0.0);
        assert_eq!(a.overlap_area(&touching), 0.0);
    }

    #[test]
    fn test_overlap_area_partial() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);

        assert_eq!(a.overlap_area(&b), 25.0);
        assert_eq!(b.overlap_area(&a), 25.0);
    }

    #[test]
    fn test_overlap_area_nested() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 20.0, 30.0);

        assert_eq!(outer.overlap_area(&inner), 600.0);
    }

    #[test]
    fn test_offset_and_center() {
        let p = Point::new(3.0, 4.0).offset(-1.0, 2.0);
        assert_eq!(p, Point::new(2.0, 6.0));

        assert_eq!(
            Rect::new(0.0, 0.0, 10.0, 20.0).center(),
            Point::new(5.0, 10.0)
        );
    }
}
