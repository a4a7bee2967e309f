//! Geometric operations on triangles and edges

use crate::mesh::types::{BoundingBox, Point, Triangle};

/// Compute the axis-aligned bounding box of all triangle vertices.
/// Returns the sentinel (empty) box for an empty slice.
pub fn compute_bounding_box(triangles: &[Triangle]) -> BoundingBox {
    let mut bbox = BoundingBox::empty();

    for tri in triangles {
        for vertex in tri.vertices() {
            bbox.expand(&vertex);
        }
    }

    bbox
}

/// Interpolate the point at height `z` on the segment `low -> high`.
/// `low.z` must differ from `high.z`; the returned point has exactly `z` as Z.
pub fn interpolate_at_z(low: &Point, high: &Point, z: f64) -> Point {
    let rate = (z - low.z) / (high.z - low.z);
    let x = low.x + rate * (high.x - low.x);
    let y = low.y + rate * (high.y - low.y);
    Point::new(x, y, z)
}

/// Distance between two points projected onto the XY plane
pub fn planar_distance(p1: &Point, p2: &Point) -> f64 {
    (p2.xy() - p1.xy()).norm()
}
