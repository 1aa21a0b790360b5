//! File-level export tests

use std::fs;
use std::path::PathBuf;

use morphosis_core::{FractalBuilder, FractalParams, Quaternion};
use morphosis_export::{export_json, export_obj, ExportError, JsonMesh, DEFAULT_PRECISION};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_export_both_formats() {
    let params = FractalParams::new(0.25, Quaternion::new(-0.4, 0.6, 0.0, 0.0), 8).unwrap();
    let mesh = FractalBuilder::new(params).build().unwrap();

    let dir = temp_dir("morphosis_export_both");
    let obj_path = dir.join("fractal.obj");
    let json_path = dir.join("fractal.json");

    export_obj(&mesh, &obj_path, DEFAULT_PRECISION).unwrap();
    export_json(&mesh, &json_path).unwrap();

    let obj = fs::read_to_string(&obj_path).unwrap();
    assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), mesh.triangle_count());

    let json: JsonMesh = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json.metadata.triangle_count, mesh.triangle_count());
    assert_eq!(json.metadata.julia_c, [-0.4, 0.6, 0.0, 0.0]);
    assert_eq!(json.vertices, mesh.triangles().as_flat());
    assert_eq!(json, JsonMesh::from_mesh(&mesh).unwrap());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_export_to_missing_directory_fails() {
    let params = FractalParams::new(0.5, Quaternion::ZERO, 2).unwrap();
    let mesh = FractalBuilder::new(params).build().unwrap();

    let path = std::env::temp_dir()
        .join("morphosis_export_does_not_exist")
        .join("nested")
        .join("out.obj");
    let err = export_obj(&mesh, &path, DEFAULT_PRECISION).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
    assert!(format!("{}", err).contains("IO error"));
}
