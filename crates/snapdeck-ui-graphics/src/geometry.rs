//! Geometric primitives: Point, Size

use std::ops::{Add, AddAssign, Neg, Sub};

/// A position or a 2D displacement in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean length when the point is read as a displacement.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// A size is usable for gesture math only when both extents are finite
    /// and strictly positive.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(10.0, -4.0);
        let b = Point::new(3.0, 2.0);
        assert_eq!(a - b, Point::new(7.0, -6.0));
        assert_eq!(a + b, Point::new(13.0, -2.0));
        assert_eq!(-b, Point::new(-3.0, -2.0));
        assert_eq!(Point::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn zero_or_nan_size_is_not_measured() {
        assert!(!Size::ZERO.is_measured());
        assert!(!Size::new(320.0, 0.0).is_measured());
        assert!(!Size::new(f32::NAN, 100.0).is_measured());
        assert!(Size::new(320.0, 640.0).is_measured());
    }
}
