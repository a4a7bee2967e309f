//! TIN Contour Library
//!
//! Contour polyline extraction from triangulated irregular networks.

pub mod config;
pub mod contour;
pub mod error;
pub mod io;
pub mod mesh;

pub use contour::{generate_contours, generate_contours_with, ContourOptions, ContourSet};
pub use error::{Result, TinContourError};
pub use mesh::{Tin, Triangle};
