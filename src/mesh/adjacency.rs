//! Edge-to-triangle adjacency for triangle soups

use crate::error::{Result, TinContourError};
use crate::mesh::types::{Point, Triangle};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How two vertex positions are decided to be the same vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VertexIdentity {
    /// Coordinates must be exactly equal
    #[default]
    Exact,

    /// Coordinates are snapped to a grid of `tolerance` before comparing.
    /// Positions closer than `tolerance` usually, but not always, merge:
    /// two points straddling a grid boundary stay distinct.
    Quantized { tolerance: f64 },
}

impl VertexIdentity {
    /// Check that the tolerance of a quantized identity is usable
    pub fn validate(&self) -> Result<()> {
        match *self {
            VertexIdentity::Exact => Ok(()),
            VertexIdentity::Quantized { tolerance } => {
                if tolerance.is_finite() && tolerance > 0.0 {
                    Ok(())
                } else {
                    Err(TinContourError::InvalidParameter(format!(
                        "Vertex tolerance must be positive and finite, got {}",
                        tolerance
                    )))
                }
            }
        }
    }

    /// Compute the hashable identity key of a vertex position
    pub fn key(&self, point: &Point) -> VertexKey {
        match *self {
            VertexIdentity::Exact => {
                VertexKey::Exact([exact_bits(point.x), exact_bits(point.y), exact_bits(point.z)])
            }
            VertexIdentity::Quantized { tolerance } => VertexKey::Quantized([
                (point.x / tolerance).round() as i64,
                (point.y / tolerance).round() as i64,
                (point.z / tolerance).round() as i64,
            ]),
        }
    }
}

/// Bit pattern of a coordinate, with -0.0 folded into +0.0 so the key
/// agrees with float `==`
fn exact_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Hashable vertex identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKey {
    Exact([u64; 3]),
    Quantized([i64; 3]),
}

/// Directed edge identity: (from, to)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EdgeKey(VertexKey, VertexKey);

impl EdgeKey {
    fn reversed(&self) -> Self {
        EdgeKey(self.1, self.0)
    }
}

/// Mesh edge with the triangles that own it
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Start point, following the winding of the first owning triangle
    pub start: Point,

    /// End point
    pub end: Point,

    /// Indices of owning triangles (1 for boundary edges, 2 for shared edges)
    pub triangles: Vec<usize>,
}

impl Edge {
    /// Create a new edge owned by a single triangle
    pub fn new(start: Point, end: Point, triangle: usize) -> Self {
        Self {
            start,
            end,
            triangles: vec![triangle],
        }
    }

    /// Boundary edges have exactly one owning triangle
    pub fn is_boundary(&self) -> bool {
        self.triangles.len() == 1
    }
}

/// Counters describing the edge structure of a mesh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjacencyStats {
    /// Edges with one owning triangle
    pub boundary_edges: usize,

    /// Edges with two owning triangles
    pub shared_edges: usize,

    /// Directed edges that hit an already resolved edge and were
    /// registered as new edges instead (more than two owners)
    pub non_manifold_edges: usize,

    /// Directed edges that repeat a pending edge in the same direction
    /// (neighbouring triangles with inconsistent winding)
    pub inconsistent_edges: usize,
}

/// Unique mesh edges and their owning triangles
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacency {
    pub edges: Vec<Edge>,
    pub stats: AdjacencyStats,
}

impl EdgeAdjacency {
    /// Get total number of edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over indices of boundary edges
    pub fn boundary_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.is_boundary())
            .map(|(idx, _)| idx)
    }
}

/// Build the edge adjacency of a triangle list
///
/// Each directed edge is matched against the reverse direction of edges
/// registered by earlier triangles. A match resolves the edge with its
/// second owner; an edge is never matched a third time. Unmatched edges
/// are registered in their own direction and remain boundary edges unless
/// a later triangle matches them.
pub fn build_edge_adjacency(triangles: &[Triangle], identity: &VertexIdentity) -> EdgeAdjacency {
    log::info!("Building edge adjacency for {} triangles", triangles.len());

    let mut edges: Vec<Edge> = Vec::with_capacity(triangles.len() * 3 / 2 + 3);
    let mut pending: HashMap<EdgeKey, usize> = HashMap::new();
    let mut resolved: HashSet<EdgeKey> = HashSet::new();
    let mut stats = AdjacencyStats::default();

    for (tri_idx, tri) in triangles.iter().enumerate() {
        for (start, end) in tri.edges() {
            let forward = EdgeKey(identity.key(&start), identity.key(&end));
            let reverse = forward.reversed();

            if let Some(edge_idx) = pending.remove(&reverse) {
                edges[edge_idx].triangles.push(tri_idx);
                resolved.insert(reverse);
                continue;
            }

            if resolved.contains(&forward) || resolved.contains(&reverse) {
                stats.non_manifold_edges += 1;
            } else if pending.contains_key(&forward) {
                stats.inconsistent_edges += 1;
            }

            edges.push(Edge::new(start, end, tri_idx));
            // A repeated direction replaces the earlier registration, which
            // stays a boundary edge
            pending.insert(forward, edges.len() - 1);
        }
    }

    for edge in &edges {
        match edge.triangles.len() {
            1 => stats.boundary_edges += 1,
            _ => stats.shared_edges += 1,
        }
    }

    log::info!(
        "Found {} edges ({} boundary, {} shared)",
        edges.len(),
        stats.boundary_edges,
        stats.shared_edges
    );

    if stats.non_manifold_edges > 0 {
        log::warn!(
            "{} edges are shared by more than two triangles; extra owners were registered as boundary edges",
            stats.non_manifold_edges
        );
    }
    if stats.inconsistent_edges > 0 {
        log::warn!(
            "{} edges are shared by triangles with inconsistent winding and were not linked",
            stats.inconsistent_edges
        );
    }

    EdgeAdjacency { edges, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> Vec<Triangle> {
        vec![Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        )]
    }

    fn tetrahedron() -> Vec<Triangle> {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(0.0, 1.0, 0.0);
        let d = Point::new(0.0, 0.0, 1.0);

        // Outward-facing, consistently wound
        vec![
            Triangle::new(a, c, b),
            Triangle::new(a, b, d),
            Triangle::new(b, c, d),
            Triangle::new(c, a, d),
        ]
    }

    #[test]
    fn test_single_triangle_all_boundary() {
        let adjacency = build_edge_adjacency(&single_triangle(), &VertexIdentity::Exact);

        assert_eq!(adjacency.num_edges(), 3);
        for edge in &adjacency.edges {
            assert!(edge.is_boundary());
            assert_eq!(edge.triangles, vec![0]);
        }
        assert_eq!(adjacency.stats.boundary_edges, 3);
        assert_eq!(adjacency.boundary_edges().count(), 3);
    }

    #[test]
    fn test_closed_mesh_edge_count() {
        let triangles = tetrahedron();
        let adjacency = build_edge_adjacency(&triangles, &VertexIdentity::Exact);

        // 3T/2 edges for a closed manifold mesh
        assert_eq!(adjacency.num_edges(), triangles.len() * 3 / 2);
        for edge in &adjacency.edges {
            assert_eq!(edge.triangles.len(), 2);
        }
        assert_eq!(adjacency.stats.shared_edges, 6);
        assert_eq!(adjacency.stats.boundary_edges, 0);
    }

    #[test]
    fn test_edge_direction_follows_first_owner() {
        let triangles = tetrahedron();
        let adjacency = build_edge_adjacency(&triangles, &VertexIdentity::Exact);

        // First edge registered is (a, c) of triangle 0
        assert_eq!(adjacency.edges[0].start, triangles[0].pt0);
        assert_eq!(adjacency.edges[0].end, triangles[0].pt1);
        assert_eq!(adjacency.edges[0].triangles, vec![0, 3]);
    }

    #[test]
    fn test_two_triangles_share_one_edge() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(1.0, 1.0, 0.0);
        let d = Point::new(0.0, 1.0, 0.0);
        let triangles = vec![Triangle::new(a, b, c), Triangle::new(a, c, d)];

        let adjacency = build_edge_adjacency(&triangles, &VertexIdentity::Exact);

        assert_eq!(adjacency.num_edges(), 5);
        assert_eq!(adjacency.stats.shared_edges, 1);
        assert_eq!(adjacency.stats.boundary_edges, 4);
    }

    #[test]
    fn test_third_owner_becomes_boundary_edge() {
        // Three fins sharing the edge (a, b)
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(0.0, 0.0, 1.0);
        let triangles = vec![
            Triangle::new(a, b, Point::new(1.0, 0.0, 0.5)),
            Triangle::new(b, a, Point::new(0.0, 1.0, 0.5)),
            Triangle::new(a, b, Point::new(-1.0, 0.0, 0.5)),
        ];

        let adjacency = build_edge_adjacency(&triangles, &VertexIdentity::Exact);

        assert_eq!(adjacency.stats.non_manifold_edges, 1);
        let ab_edges: Vec<_> = adjacency
            .edges
            .iter()
            .filter(|e| (e.start == a && e.end == b) || (e.start == b && e.end == a))
            .collect();
        assert_eq!(ab_edges.len(), 2);
        assert_eq!(ab_edges[0].triangles, vec![0, 1]);
        assert_eq!(ab_edges[1].triangles, vec![2]);
    }

    #[test]
    fn test_inconsistent_winding_not_linked() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let triangles = vec![
            Triangle::new(a, b, Point::new(0.0, 1.0, 0.0)),
            Triangle::new(a, b, Point::new(0.0, -1.0, 0.0)),
        ];

        let adjacency = build_edge_adjacency(&triangles, &VertexIdentity::Exact);

        assert_eq!(adjacency.num_edges(), 6);
        assert_eq!(adjacency.stats.inconsistent_edges, 1);
        assert_eq!(adjacency.stats.shared_edges, 0);
    }

    #[test]
    fn test_repeated_direction_latest_registration_matches() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let triangles = vec![
            Triangle::new(a, b, Point::new(0.0, 1.0, 0.0)),
            Triangle::new(a, b, Point::new(0.0, -1.0, 0.0)),
            Triangle::new(b, a, Point::new(0.0, 0.0, 1.0)),
        ];

        let adjacency = build_edge_adjacency(&triangles, &VertexIdentity::Exact);

        assert_eq!(adjacency.stats.inconsistent_edges, 1);
        assert_eq!(adjacency.stats.non_manifold_edges, 0);
        let ab_owners: Vec<Vec<usize>> = adjacency
            .edges
            .iter()
            .filter(|e| (e.start == a && e.end == b) || (e.start == b && e.end == a))
            .map(|e| e.triangles.clone())
            .collect();
        assert_eq!(ab_owners, vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn test_exact_identity_keeps_near_duplicates_apart() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let b_near = Point::new(1.0 + 1e-9, 0.0, 0.0);
        let triangles = vec![
            Triangle::new(a, b, Point::new(0.0, 1.0, 0.0)),
            Triangle::new(b_near, a, Point::new(0.0, -1.0, 0.0)),
        ];

        let exact = build_edge_adjacency(&triangles, &VertexIdentity::Exact);
        assert_eq!(exact.stats.shared_edges, 0);

        let quantized =
            build_edge_adjacency(&triangles, &VertexIdentity::Quantized { tolerance: 1e-6 });
        assert_eq!(quantized.stats.shared_edges, 1);
        assert_eq!(quantized.num_edges(), 5);
    }

    #[test]
    fn test_negative_zero_matches_positive_zero() {
        let identity = VertexIdentity::Exact;
        assert_eq!(
            identity.key(&Point::new(0.0, 1.0, 2.0)),
            identity.key(&Point::new(-0.0, 1.0, 2.0))
        );
    }

    #[test]
    fn test_validate_tolerance() {
        assert!(VertexIdentity::Exact.validate().is_ok());
        assert!(VertexIdentity::Quantized { tolerance: 0.01 }.validate().is_ok());
        assert!(VertexIdentity::Quantized { tolerance: 0.0 }.validate().is_err());
        assert!(VertexIdentity::Quantized { tolerance: -1.0 }.validate().is_err());
        assert!(VertexIdentity::Quantized { tolerance: f64::NAN }
            .validate()
            .is_err());
    }

    #[test]
    fn test_empty_input() {
        let adjacency = build_edge_adjacency(&[], &VertexIdentity::Exact);
        assert_eq!(adjacency.num_edges(), 0);
        assert_eq!(adjacency.stats, AdjacencyStats::default());
    }
}
