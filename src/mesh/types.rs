//! Core mesh data structures

use nalgebra::Point3;

/// 3D point type
pub type Point = Point3<f64>;

/// Triangle with three vertices in winding order (pt0 -> pt1 -> pt2 -> pt0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub pt0: Point,
    pub pt1: Point,
    pub pt2: Point,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(pt0: Point, pt1: Point, pt2: Point) -> Self {
        Self { pt0, pt1, pt2 }
    }

    /// Get the three vertices in winding order
    pub fn vertices(&self) -> [Point; 3] {
        [self.pt0, self.pt1, self.pt2]
    }

    /// Get the three directed edges in winding order:
    /// (pt0, pt1), (pt1, pt2), (pt2, pt0)
    pub fn edges(&self) -> [(Point, Point); 3] {
        [
            (self.pt0, self.pt1),
            (self.pt1, self.pt2),
            (self.pt2, self.pt0),
        ]
    }

    /// Lowest Z of the three vertices
    pub fn min_z(&self) -> f64 {
        self.pt0.z.min(self.pt1.z).min(self.pt2.z)
    }

    /// Highest Z of the three vertices
    pub fn max_z(&self) -> f64 {
        self.pt0.z.max(self.pt1.z).max(self.pt2.z)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Create the inverted sentinel box: min at +inf, max at -inf.
    /// Expanding it by any point yields that point's degenerate box.
    pub fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// True while no point has been added
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to include a point
    pub fn expand(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Extent along each axis (zero vector for an empty box)
    pub fn size(&self) -> [f64; 3] {
        if self.is_empty() {
            return [0.0; 3];
        }
        [
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        ]
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_edges_follow_winding() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 2.0),
        );
        let edges = tri.edges();

        assert_eq!(edges[0], (tri.pt0, tri.pt1));
        assert_eq!(edges[1], (tri.pt1, tri.pt2));
        assert_eq!(edges[2], (tri.pt2, tri.pt0));
        assert_eq!(tri.min_z(), 0.0);
        assert_eq!(tri.max_z(), 2.0);
    }

    #[test]
    fn test_empty_box_is_sentinel() {
        let bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        assert_eq!(bbox.min.z, f64::INFINITY);
        assert_eq!(bbox.max.z, f64::NEG_INFINITY);
        assert_eq!(bbox.size(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_box_expand() {
        let mut bbox = BoundingBox::empty();
        bbox.expand(&Point::new(1.0, 2.0, 3.0));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.min, bbox.max);

        bbox.expand(&Point::new(-1.0, 4.0, 0.5));
        assert_eq!(bbox.min, Point::new(-1.0, 2.0, 0.5));
        assert_eq!(bbox.max, Point::new(1.0, 4.0, 3.0));
        assert_eq!(bbox.size(), [2.0, 2.0, 2.5]);
    }
}
