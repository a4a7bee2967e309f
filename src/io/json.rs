//! Simple JSON triangle mesh format

use crate::error::{Result, TinContourError};
use crate::mesh::{Point, Triangle};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct JsonMesh {
    triangles: Vec<[[f64; 3]; 3]>,
}

pub fn read_json_mesh<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let file = File::open(path.as_ref())?;

    let reader = BufReader::new(file);
    let json_mesh: JsonMesh = serde_json::from_reader(reader).map_err(|e| {
        TinContourError::MeshFormatError(format!("Failed to parse JSON mesh: {}", e))
    })?;

    let to_point = |[x, y, z]: [f64; 3]| Point::new(x, y, z);

    Ok(json_mesh
        .triangles
        .into_iter()
        .map(|[p0, p1, p2]| Triangle::new(to_point(p0), to_point(p1), to_point(p2)))
        .collect())
}

pub fn write_json_mesh<P: AsRef<Path>>(triangles: &[Triangle], path: P) -> Result<()> {
    let json_mesh = JsonMesh {
        triangles: triangles
            .iter()
            .map(|tri| tri.vertices().map(|p| [p.x, p.y, p.z]))
            .collect(),
    };

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(&mut writer, &json_mesh).map_err(|e| {
        TinContourError::MeshFormatError(format!("Failed to write JSON mesh: {}", e))
    })?;
    writer.flush()?;

    Ok(())
}
