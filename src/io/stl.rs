//! ASCII STL reader
//!
//! Only the `outer loop` / `vertex` / `endloop` records matter; `solid`,
//! `facet normal` and other keywords are skipped.

use crate::error::{Result, TinContourError};
use crate::mesh::{Point, Triangle};
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read an ASCII STL file
pub fn read_stl<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let raw = std::fs::read(path.as_ref())?;
    let data = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw[..]);

    if data.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(TinContourError::MeshFormatError(format!(
            "STL file is empty: {}",
            path.as_ref().display()
        )));
    }

    if looks_binary(data) {
        return Err(TinContourError::MeshFormatError(
            "Binary STL is not supported, convert to ASCII STL".to_string(),
        ));
    }

    let text = std::str::from_utf8(data)
        .map_err(|e| TinContourError::MeshFormatError(format!("Invalid UTF-8 in STL: {}", e)))?;

    parse_ascii_stl(text)
}

/// Binary STL: 80-byte header, u32 triangle count, 50 bytes per triangle.
/// Some binary files also start with "solid", so the size check decides.
fn looks_binary(data: &[u8]) -> bool {
    if data.len() >= 84 {
        let count = u32::from_le_bytes([data[80], data[81], data[82], data[83]]) as usize;
        if count.checked_mul(50).and_then(|n| n.checked_add(84)) == Some(data.len()) {
            return true;
        }
    }
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    !data[start..].starts_with(b"solid")
}

/// Parse ASCII STL text into triangles
pub fn parse_ascii_stl(text: &str) -> Result<Vec<Triangle>> {
    let mut triangles = Vec::new();
    let mut vertices: Vec<Point> = Vec::with_capacity(3);
    let mut skipped = 0usize;

    for (line_idx, line) in text.lines().enumerate() {
        let line_no = line_idx + 1;
        let mut fields = line.split_whitespace();

        match fields.next() {
            Some("outer") => vertices.clear(),
            Some("vertex") => {
                let mut coords = [0.0f64; 3];
                for coord in coords.iter_mut() {
                    let field = fields.next().ok_or_else(|| TinContourError::StlParseError {
                        line: line_no,
                        message: "vertex needs three coordinates".to_string(),
                    })?;
                    *coord = field.parse().map_err(|e| TinContourError::StlParseError {
                        line: line_no,
                        message: format!("invalid coordinate '{}': {}", field, e),
                    })?;
                }
                vertices.push(Point::new(coords[0], coords[1], coords[2]));
            }
            Some("endloop") => {
                if let &[pt0, pt1, pt2] = vertices.as_slice() {
                    triangles.push(Triangle::new(pt0, pt1, pt2));
                } else {
                    log::warn!(
                        "Skipping loop ending at line {} with {} vertices",
                        line_no,
                        vertices.len()
                    );
                    skipped += 1;
                }
                vertices.clear();
            }
            _ => {}
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} non-triangular loops", skipped);
    }

    Ok(triangles)
}
