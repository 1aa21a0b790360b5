//! Wavefront OBJ export
//!
//! Vertices are not shared between triangles: triangle `i` owns vertices
//! `3i + 1 ..= 3i + 3` (OBJ indices are 1-based).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use morphosis_core::FractalMesh;

use crate::error::ExportError;

/// Where the binary writes OBJ output unless told otherwise
pub const DEFAULT_OBJ_PATH: &str = "./fractal.obj";
/// Decimal places per coordinate
pub const DEFAULT_PRECISION: usize = 3;

/// Write `mesh` as OBJ text to `writer`
pub fn write_obj<W: Write>(mesh: &FractalMesh, writer: &mut W, precision: usize) -> Result<(), ExportError> {
    let params = mesh.params();
    writeln!(writer, "# morphosis quaternion julia mesh")?;
    writeln!(
        writer,
        "# c = {:?}, w = {}, max_iter = {}, step = {}",
        params.julia.c.to_array(),
        params.julia.w,
        params.julia.max_iter,
        params.step_size
    )?;
    writeln!(writer, "# {} triangles", mesh.triangle_count())?;

    for v in mesh.triangles().vertices() {
        writeln!(writer, "v {:.p$} {:.p$} {:.p$}", v.x, v.y, v.z, p = precision)?;
    }
    for i in 0..mesh.triangle_count() {
        let base = i * 3 + 1;
        writeln!(writer, "f {} {} {}", base, base + 1, base + 2)?;
    }
    Ok(())
}

/// Write `mesh` to an OBJ file at `path`
pub fn export_obj<P: AsRef<Path>>(mesh: &FractalMesh, path: P, precision: usize) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer, precision)?;
    writer.flush()?;
    log::info!(
        "OBJ export complete: {} triangles written to {}",
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}
