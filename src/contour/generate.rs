//! Contour set generation across Z levels

use crate::contour::intersect::intersect_edges;
use crate::contour::levels::z_levels;
use crate::contour::trace::trace_contours;
use crate::contour::types::{ContourLevel, ContourSet, Polyline};
use crate::mesh::tin::Tin;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Options controlling contour generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourOptions {
    /// Requested spacing between levels (rounded to a whole unit)
    pub interval: f64,

    /// Slice levels on the rayon thread pool when the `parallel` feature
    /// is enabled
    pub parallel: bool,
}

impl ContourOptions {
    /// Create options with parallel slicing enabled
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            parallel: true,
        }
    }

    /// Force slicing on the calling thread
    pub fn serial(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Generate contours at every whole multiple of `interval` within the
/// mesh's Z range
pub fn generate_contours(tin: &Tin, interval: f64) -> ContourSet {
    generate_contours_with(tin, &ContourOptions::new(interval))
}

/// Generate contours using explicit options
///
/// Levels are independent of each other and only read the TIN, so they can
/// be sliced concurrently; the result is always in ascending Z order.
pub fn generate_contours_with(tin: &Tin, options: &ContourOptions) -> ContourSet {
    let bounds = tin.bounds();
    let zs = z_levels(bounds.min.z, bounds.max.z, options.interval);

    log::info!(
        "Generating contours at {} levels (interval {})",
        zs.len(),
        options.interval
    );

    // Threshold for parallelization (below this, overhead isn't worth it)
    const PARALLEL_THRESHOLD: usize = 4;

    #[cfg(feature = "parallel")]
    let levels: Vec<ContourLevel> = if options.parallel && zs.len() >= PARALLEL_THRESHOLD {
        zs.par_iter().map(|&z| slice_level(tin, z)).collect()
    } else {
        zs.iter().map(|&z| slice_level(tin, z)).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let levels: Vec<ContourLevel> = {
        if options.parallel && zs.len() >= PARALLEL_THRESHOLD {
            log::debug!("Parallel slicing requested but the `parallel` feature is disabled");
        }
        zs.iter().map(|&z| slice_level(tin, z)).collect()
    };

    let set = ContourSet { levels };

    log::info!(
        "Traced {} polylines ({} closed, {} open)",
        set.num_polylines(),
        set.num_closed(),
        set.num_open()
    );

    set
}

/// Slice the TIN with a single horizontal plane
pub fn slice_at_z(tin: &Tin, z: f64) -> Vec<Polyline> {
    let points = intersect_edges(tin.edges(), z);
    trace_contours(&points, tin.edges())
}

fn slice_level(tin: &Tin, z: f64) -> ContourLevel {
    let polylines = slice_at_z(tin, z);
    log::debug!("Level z={}: {} polylines", z, polylines.len());
    ContourLevel::new(z, polylines)
}
