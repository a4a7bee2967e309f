//! Contour tracing: chaining intersection points into polylines

use crate::contour::types::{IntersectionPoint, Polyline};
use crate::mesh::adjacency::Edge;
use std::collections::HashMap;

/// Chain of intersection point indices produced by one walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointChain {
    /// Point indices in walk order, without the closing duplicate
    pub indices: Vec<usize>,

    /// True if the chain was traced as a loop
    pub closed: bool,
}

/// Trace the intersection points of one level into polylines
///
/// `points` must come from [`intersect_edges`](crate::contour::intersect_edges)
/// over the same `edges`. Open chains are traced first, each starting from a
/// point on a boundary edge; the remaining points are traced as loops.
pub fn trace_contours(points: &[IntersectionPoint], edges: &[Edge]) -> Vec<Polyline> {
    trace_chains(points, edges)
        .into_iter()
        .map(|chain| {
            let coords = chain.indices.iter().map(|&idx| points[idx].point).collect();
            if chain.closed {
                Polyline::closed(coords)
            } else {
                Polyline::open(coords)
            }
        })
        .collect()
}

/// Trace the intersection points of one level into index chains
pub fn trace_chains(points: &[IntersectionPoint], edges: &[Edge]) -> Vec<PointChain> {
    let mut walker = Walker::new(points, edges);
    let mut chains = Vec::new();

    // Open contours: start from points on boundary edges
    let mut cursor = 0;
    while let Some(start) = walker.next_unvisited(&mut cursor, |p| edges[p.edge].is_boundary()) {
        chains.push(PointChain {
            indices: walker.walk(start),
            closed: false,
        });
    }

    // Closed contours: everything left is on shared edges
    let mut cursor = 0;
    while let Some(start) = walker.next_unvisited(&mut cursor, |_| true) {
        let indices = walker.walk(start);
        if indices.len() < 3 {
            log::debug!(
                "Loop starting at point {} has only {} points",
                start,
                indices.len()
            );
        }
        chains.push(PointChain {
            indices,
            closed: true,
        });
    }

    chains
}

struct Walker<'a> {
    points: &'a [IntersectionPoint],
    edges: &'a [Edge],
    /// Triangle index -> indices of points on its edges, in point order
    by_triangle: HashMap<usize, Vec<usize>>,
    visited: Vec<bool>,
}

impl<'a> Walker<'a> {
    fn new(points: &'a [IntersectionPoint], edges: &'a [Edge]) -> Self {
        let mut by_triangle: HashMap<usize, Vec<usize>> = HashMap::new();
        for (point_idx, point) in points.iter().enumerate() {
            for &tri in &edges[point.edge].triangles {
                by_triangle.entry(tri).or_default().push(point_idx);
            }
        }

        Self {
            points,
            edges,
            by_triangle,
            visited: vec![false; points.len()],
        }
    }

    /// First unvisited point at or after `cursor` accepted by `filter`.
    /// Visited flags only ever get set, so the cursor never needs to rewind.
    fn next_unvisited<F>(&self, cursor: &mut usize, filter: F) -> Option<usize>
    where
        F: Fn(&IntersectionPoint) -> bool,
    {
        while *cursor < self.points.len() {
            let idx = *cursor;
            if !self.visited[idx] && filter(&self.points[idx]) {
                return Some(idx);
            }
            *cursor += 1;
        }
        None
    }

    /// Next point: the first unvisited point on another edge of a triangle
    /// owning the current point's edge, checking owners in order
    fn next_point(&self, current: usize) -> Option<usize> {
        let edge = &self.edges[self.points[current].edge];
        edge.triangles.iter().find_map(|tri| {
            self.by_triangle
                .get(tri)?
                .iter()
                .copied()
                .find(|&candidate| !self.visited[candidate])
        })
    }

    fn walk(&mut self, start: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = start;

        loop {
            self.visited[current] = true;
            chain.push(current);

            match self.next_point(current) {
                Some(next) => current = next,
                None => break,
            }
        }

        log::trace!("Walked {} steps from point {}", chain.len(), start);
        chain
    }
}
