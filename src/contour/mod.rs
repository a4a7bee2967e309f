//! Contour generation module

pub mod generate;
pub mod intersect;
pub mod levels;
pub mod trace;
pub mod types;

pub use generate::*;
pub use intersect::*;
pub use levels::*;
pub use trace::*;
pub use types::*;
