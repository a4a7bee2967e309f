//! I/O module for reading triangle meshes

pub mod json;
pub mod stl;

pub use json::{read_json_mesh, write_json_mesh};
pub use stl::{parse_ascii_stl, read_stl};

use crate::error::Result;
use crate::mesh::Triangle;
use std::path::Path;

/// Read a triangle mesh, choosing the format from the file extension
/// (`.json` for JSON meshes, anything else as ASCII STL)
pub fn read_mesh<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    log::info!("Reading mesh file: {}", path.display());

    let triangles = match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => read_json_mesh(path)?,
        _ => read_stl(path)?,
    };

    log::info!("Read {} triangles", triangles.len());
    Ok(triangles)
}
