//! Noise generation for terrain heights.
//!
//! 2D Perlin noise remapped to [0, 1] so a grid sample multiplied by the
//! terrain amplitude is always a height above the base plane.

use noise::{NoiseFn, Perlin};

/// Seeded noise generator for terrain
#[derive(Clone)]
pub struct TerrainNoise {
    perlin: Perlin,
}

impl TerrainNoise {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Sample 2D noise at (x, z)
    ///
    /// Returns value in range [0, 1]
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let raw = self.perlin.get([x as f64, z as f64]) as f32;
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
