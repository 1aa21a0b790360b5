//! Mesh export for Morphosis
//!
//! - [`export_obj`] / [`write_obj`] - Wavefront OBJ, one `v` line per vertex
//!   and one `f` line per triangle
//! - [`export_json`] / [`write_json`] - `{metadata, vertices, indices}` for
//!   web viewers

mod error;
mod obj;
mod json;

pub use error::ExportError;
pub use obj::{export_obj, write_obj, DEFAULT_OBJ_PATH, DEFAULT_PRECISION};
pub use json::{export_json, write_json, JsonMesh, JsonMetadata, DEFAULT_JSON_PATH};
