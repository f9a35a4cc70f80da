//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers live here with:
//! - Physical units (meters, newtons, seconds, etc.)
//! - Documented ranges and meanings
//! - Serde support so a whole run can be described in one RON file

mod boat;
mod camera;
mod sim;
mod stroke;
mod terrain;

// Re-export all types
pub use boat::BoatParams;
pub use camera::{CameraConfig, FollowCameraParams};
pub use sim::SimConfig;
pub use stroke::StrokeParams;
pub use terrain::TerrainParams;
