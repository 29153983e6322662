//! Geometric types for canvas-space drawing

use std::ops::{Add, Mul, Neg, Sub};

/// A position on the canvas, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point from coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.dx, self.y + v.dy)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, v: Vector) -> Point {
        self + -v
    }
}

/// An offset between two points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub dx: f32,
    pub dy: f32,
}

impl Vector {
    /// Create a new vector from offsets
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Vector pointing from `from` to `to`
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    /// Euclidean length
    pub fn length(self) -> f32 {
        self.dx.hypot(self.dy)
    }

    /// Unit vector with the same direction, or `None` for a zero vector
    pub fn normalize(self) -> Option<Self> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(Self::new(self.dx / length, self.dy / length))
    }

    /// The vector rotated a quarter turn: `(-dy, dx)`
    pub fn perpendicular(self) -> Self {
        Self::new(-self.dy, self.dx)
    }

    /// Dot product
    #[cfg(test)]
    pub fn dot(self, other: Vector) -> f32 {
        self.dx * other.dx + self.dy * other.dy
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, k: f32) -> Vector {
        Vector::new(self.dx * k, self.dy * k)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

/// Closed filled region described by its outline.
///
/// Vertex order defines the boundary; the shape does not need to be convex.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Minimum number of vertices that encloses an area
    pub const MIN_VERTICES: usize = 3;

    /// Create a polygon, or `None` if there are too few vertices
    pub fn new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < Self::MIN_VERTICES {
            return None;
        }
        Some(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(1.0, 2.0);
        let v = Vector::new(3.0, -4.0);
        assert_eq!(p + v, Point::new(4.0, -2.0));
        assert_eq!(p - v, Point::new(-2.0, 6.0));
    }

    #[test]
    fn test_vector_length_and_normalize() {
        let v = Vector::between(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(v.length(), 5.0);

        let u = v.normalize().unwrap();
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert!((u.dx - 0.6).abs() < 1e-6);
        assert!((u.dy - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_has_no_direction() {
        assert!(Vector::new(0.0, 0.0).normalize().is_none());
    }

    #[test]
    fn test_perpendicular_is_orthogonal() {
        let v = Vector::new(0.6, 0.8);
        let p = v.perpendicular();
        assert_eq!(p, Vector::new(-0.8, 0.6));
        assert!(v.dot(p).abs() < 1e-6);
        assert_eq!(-p * 2.0, Vector::new(1.6, -1.2));
    }

    #[test]
    fn test_polygon_needs_three_vertices() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert!(Polygon::new(vec![a, b]).is_none());

        let triangle = Polygon::new(vec![a, b, c]).unwrap();
        assert_eq!(triangle.vertices(), &[a, b, c]);
    }
}
