//! Terrain grid dimensions and noise shaping.

use serde::{Deserialize, Serialize};

/// Terrain grid parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Number of cells along X
    pub x_size: usize,

    /// Number of cells along Z
    pub z_size: usize,

    /// Spacing between lattice points in world units (meters)
    pub grid_spacing_m: f32,

    /// Multiplier from lattice coordinate to noise coordinate
    pub noise_scale: f32,

    /// Height of a noise sample of 1.0 (meters)
    pub amplitude_m: f32,

    /// Perlin noise seed
    pub noise_seed: u32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            x_size: 9,
            z_size: 9,
            grid_spacing_m: 1.0,
            noise_scale: 0.3,
            amplitude_m: 2.0,
            noise_seed: 42,
        }
    }
}
