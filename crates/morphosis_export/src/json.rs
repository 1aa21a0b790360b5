//! JSON export
//!
//! Layout:
//! ```text
//! {
//!   "metadata": { "triangleCount", "vertexCount", "iterations",
//!                 "gridSize", "stepSize", "juliaC" },
//!   "vertices": [x0, y0, z0, x1, ...],
//!   "indices":  [0, 1, 2, 3, 4, 5, ...]
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Serialize, Deserialize};

use morphosis_core::FractalMesh;

use crate::error::ExportError;

/// Where the binary writes JSON output unless told otherwise
pub const DEFAULT_JSON_PATH: &str = "./fractal.json";

/// Build summary stored alongside the geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMetadata {
    pub triangle_count: usize,
    pub vertex_count: usize,
    pub iterations: u32,
    pub grid_size: u32,
    pub step_size: f32,
    pub julia_c: [f32; 4],
}

/// Serializable view of a mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonMesh {
    pub metadata: JsonMetadata,
    /// Flat `x, y, z` per vertex
    pub vertices: Vec<f32>,
    /// `[3i, 3i + 1, 3i + 2]` for triangle `i`
    pub indices: Vec<u32>,
}

/// Sequential indices `0..vertex_count`
fn index_buffer(vertex_count: usize) -> Result<Vec<u32>, ExportError> {
    let end = u32::try_from(vertex_count).map_err(|_| ExportError::TooManyVertices(vertex_count))?;
    Ok((0..end).collect())
}

impl JsonMesh {
    pub fn from_mesh(mesh: &FractalMesh) -> Result<Self, ExportError> {
        let params = mesh.params();
        let metadata = JsonMetadata {
            triangle_count: mesh.triangle_count(),
            vertex_count: mesh.vertex_count(),
            iterations: params.julia.max_iter,
            grid_size: mesh.grid_size().round() as u32,
            step_size: params.step_size,
            julia_c: params.julia.c.to_array(),
        };
        let indices = index_buffer(mesh.vertex_count())?;
        Ok(Self {
            metadata,
            vertices: mesh.triangles().as_flat().to_vec(),
            indices,
        })
    }
}

/// Write `mesh` as pretty-printed JSON to `writer`
pub fn write_json<W: Write>(mesh: &FractalMesh, writer: &mut W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, &JsonMesh::from_mesh(mesh)?)?;
    writeln!(writer)?;
    Ok(())
}

/// Write `mesh` to a JSON file at `path`
pub fn export_json<P: AsRef<Path>>(mesh: &FractalMesh, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(mesh, &mut writer)?;
    writer.flush()?;
    log::info!(
        "JSON export complete: {} triangles written to {}",
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}
