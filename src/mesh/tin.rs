//! Triangulated irregular network: triangles plus derived indices

use crate::error::Result;
use crate::mesh::adjacency::{build_edge_adjacency, AdjacencyStats, Edge, EdgeAdjacency, VertexIdentity};
use crate::mesh::geometry::compute_bounding_box;
use crate::mesh::types::{BoundingBox, Triangle};

/// Triangle mesh with its bounding box and edge adjacency
///
/// The bounding box and adjacency are computed once on construction and
/// are read-only afterwards, so a `Tin` can be shared across threads while
/// levels are sliced.
#[derive(Debug, Clone)]
pub struct Tin {
    triangles: Vec<Triangle>,
    bounds: BoundingBox,
    adjacency: EdgeAdjacency,
    identity: VertexIdentity,
}

impl Tin {
    /// Build a TIN using exact vertex identity
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self::assemble(triangles, VertexIdentity::Exact)
    }

    /// Build a TIN with an explicit vertex identity policy
    pub fn build(triangles: Vec<Triangle>, identity: VertexIdentity) -> Result<Self> {
        identity.validate()?;
        Ok(Self::assemble(triangles, identity))
    }

    fn assemble(triangles: Vec<Triangle>, identity: VertexIdentity) -> Self {
        let bounds = compute_bounding_box(&triangles);
        let adjacency = build_edge_adjacency(&triangles, &identity);

        Self {
            triangles,
            bounds,
            adjacency,
            identity,
        }
    }

    /// All triangles in input order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Axis-aligned extent of the mesh (sentinel box if empty)
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Unique edges with their owning triangles
    pub fn edges(&self) -> &[Edge] {
        &self.adjacency.edges
    }

    /// Edge structure counters
    pub fn stats(&self) -> &AdjacencyStats {
        &self.adjacency.stats
    }

    /// Vertex identity policy used to build the adjacency
    pub fn identity(&self) -> &VertexIdentity {
        &self.identity
    }

    /// Get total number of triangles
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Get total number of unique edges
    pub fn num_edges(&self) -> usize {
        self.adjacency.num_edges()
    }

    /// Get number of boundary edges
    pub fn num_boundary_edges(&self) -> usize {
        self.adjacency.stats.boundary_edges
    }

    /// Count horizontal triangles; a level through one yields no points
    pub fn num_flat_triangles(&self) -> usize {
        self.triangles()
            .iter()
            .filter(|tri| tri.min_z() == tri.max_z())
            .count()
    }

    /// True if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// A closed surface has no boundary edges
    pub fn is_watertight(&self) -> bool {
        !self.is_empty() && self.adjacency.boundary_edges().next().is_none()
    }
}
