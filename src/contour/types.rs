//! Contour data types

use crate::mesh::geometry::planar_distance;
use crate::mesh::types::Point;

/// Point where a mesh edge crosses a slicing plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPoint {
    /// Intersection position (z equals the plane height)
    pub point: Point,

    /// Index of the originating edge
    pub edge: usize,
}

/// Ordered contour polyline
///
/// Closed polylines repeat their first point as the last point.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    /// Create an open polyline
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Create a closed polyline, appending the first point again
    pub fn closed(mut points: Vec<Point>) -> Self {
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Self {
            points,
            closed: true,
        }
    }

    /// Number of points, including the closing duplicate
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Length of the polyline measured in the XY plane
    pub fn length_2d(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| planar_distance(&pair[0], &pair[1]))
            .sum()
    }
}

/// All polylines at a single Z level
#[derive(Debug, Clone, PartialEq)]
pub struct ContourLevel {
    pub z: f64,
    pub polylines: Vec<Polyline>,
}

impl ContourLevel {
    pub fn new(z: f64, polylines: Vec<Polyline>) -> Self {
        Self { z, polylines }
    }

    pub fn num_closed(&self) -> usize {
        self.polylines.iter().filter(|p| p.is_closed()).count()
    }

    pub fn num_open(&self) -> usize {
        self.polylines.len() - self.num_closed()
    }

    pub fn total_points(&self) -> usize {
        self.polylines.iter().map(Polyline::len).sum()
    }
}

/// Contours for every generated level, in ascending Z order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContourSet {
    pub levels: Vec<ContourLevel>,
}

impl ContourSet {
    /// Get number of levels (including levels without contours)
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Find the level at an exact Z value
    pub fn level_at(&self, z: f64) -> Option<&ContourLevel> {
        self.levels.iter().find(|level| level.z == z)
    }

    pub fn num_polylines(&self) -> usize {
        self.levels.iter().map(|level| level.polylines.len()).sum()
    }

    pub fn num_closed(&self) -> usize {
        self.levels.iter().map(ContourLevel::num_closed).sum()
    }

    pub fn num_open(&self) -> usize {
        self.levels.iter().map(ContourLevel::num_open).sum()
    }

    pub fn total_points(&self) -> usize {
        self.levels.iter().map(ContourLevel::total_points).sum()
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("CONTOUR RESULTS");
        println!("{}", "=".repeat(60));
        println!();
        println!("  Levels:     {}", self.num_levels());
        println!("  Polylines:  {}", self.num_polylines());
        println!("  Closed:     {}", self.num_closed());
        println!("  Open:       {}", self.num_open());
        println!("  Points:     {}", self.total_points());
        println!();

        if !self.levels.is_empty() {
            println!(
                "  {:>12}  {:>8}  {:>8}  {:>10}  {:>14}",
                "Z", "Closed", "Open", "Points", "Length (XY)"
            );
            for level in &self.levels {
                let length: f64 = level.polylines.iter().map(Polyline::length_2d).sum();
                println!(
                    "  {:>12.3}  {:>8}  {:>8}  {:>10}  {:>14.3}",
                    level.z,
                    level.num_closed(),
                    level.num_open(),
                    level.total_points(),
                    length
                );
            }
            println!();
        }

        println!("{}", "=".repeat(60));
    }
}
