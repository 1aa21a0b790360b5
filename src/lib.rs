//! Morphosis - quaternion Julia set mesher
//!
//! The binary reads parameters from the command line, a preset or the
//! layered configuration, builds the mesh and writes OBJ/JSON files.

pub mod app;
pub mod cli;
pub mod config;
