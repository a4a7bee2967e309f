//! Mesh data structures and operations

pub mod adjacency;
pub mod geometry;
pub mod tin;
pub mod types;

pub use adjacency::*;
pub use geometry::*;
pub use tin::*;
pub use types::*;
