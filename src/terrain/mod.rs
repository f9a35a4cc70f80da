//! Procedural terrain: grid mesh, collision geometry and exporters.

pub mod collider;
pub mod export;
pub mod mesh;

pub use collider::{ContactTracker, TerrainCollider};
pub use mesh::{build_from_params, build_grid, recalculate_normals, TerrainMesh, Vertex};
