//! Edge / horizontal plane intersection

use crate::contour::types::IntersectionPoint;
use crate::mesh::adjacency::Edge;
use crate::mesh::geometry::interpolate_at_z;
use crate::mesh::types::Point;

/// Intersect a segment with the plane at height `z`
///
/// Horizontal segments never intersect, even when they lie in the plane.
/// Both endpoints count as on the segment.
pub fn intersect_segment(a: &Point, b: &Point, z: f64) -> Option<Point> {
    let (low, high) = if a.z <= b.z { (a, b) } else { (b, a) };

    if low.z != high.z && z >= low.z && z <= high.z {
        Some(interpolate_at_z(low, high, z))
    } else {
        None
    }
}

/// Intersect every edge with the plane at height `z`, in edge order
pub fn intersect_edges(edges: &[Edge], z: f64) -> Vec<IntersectionPoint> {
    edges
        .iter()
        .enumerate()
        .filter_map(|(edge_idx, edge)| {
            intersect_segment(&edge.start, &edge.end, z).map(|point| IntersectionPoint {
                point,
                edge: edge_idx,
            })
        })
        .collect()
}
