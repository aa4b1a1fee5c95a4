//! # trimesh-grid
//!
//! `trimesh-grid` is a Rust library for procedural surface triangulation, designed to be used in
//! Rust as well as compiled to WebAssembly (WASM). It samples a jittered square grid of 3D points
//! and stitches them into a triangle mesh by growing a frontier of edges outward from a seed edge.
//!
//! ## Features
//!
//! - **WASM-first**: Built with `wasm-bindgen`, the vertex and normal buffers arrive in JavaScript
//!   as `Float32Array`s ready for a renderer.
//! - **Spatial Partitioning**: Points are binned by lattice cell so every probe only inspects a
//!   3x3 block of cells.
//! - **Deterministic**: A fixed seed and grid size always produce byte-identical buffers.
//! - **Parallel batches**: Independent surfaces can be generated concurrently with `rayon`.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Surface`] struct, which owns the grid and its triangulation.
//!
//! ```
//! use trimesh_grid::{Surface, SurfaceConfig};
//!
//! let surface = Surface::generate(SurfaceConfig::new(8).with_seed(42)).unwrap();
//! let buffers = surface.buffers();
//! assert_eq!(buffers.positions.len(), 9 * surface.triangle_count());
//! ```

mod algorithm;
mod config;
mod error;
mod grid;
mod mesh;
mod surface;
mod triangulation;
pub mod wasm;

pub use algorithm::bucket_grid::BucketIndex;
pub use algorithm::linear_scan::LinearScan;
pub use algorithm::SpatialIndex;
pub use algorithm::cell_of;
pub use config::SurfaceConfig;
pub use config::DEFAULT_GRID_SIZE;
pub use error::Result;
pub use error::SurfaceError;
pub use grid::Jitter;
pub use grid::PointGrid;
pub use grid::{MAX_XY_JITTER, MIN_GRID_SIZE};
pub use mesh::face_normal;
pub use mesh::MeshBuffers;
pub use mesh::MeshOptions;
pub use surface::generate_surfaces;
pub use surface::surface_buffers;
pub use surface::Surface;
pub use triangulation::probe::EdgeFrame;
pub use triangulation::probe::Probe;
pub use triangulation::probe::ProbeSettings;
pub use triangulation::probe::ProbeState;
pub use triangulation::probe::Side;
pub use triangulation::triangulate;
pub use triangulation::Edge;
pub use triangulation::EdgeKey;
pub use triangulation::Frontier;
pub use triangulation::Triangle;
pub use triangulation::Triangulation;
pub use triangulation::TriangulationStats;
pub use triangulation::Triangulator;
