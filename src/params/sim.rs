//! Top-level simulation configuration.

use serde::{Deserialize, Serialize};

use super::{BoatParams, CameraConfig, FollowCameraParams, StrokeParams, TerrainParams};
use crate::error::{Error, Result};

/// Everything needed to run one headless simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub boat: BoatParams,
    pub follow_camera: FollowCameraParams,
    pub camera: CameraConfig,
    pub terrain: TerrainParams,
    pub stroke: StrokeParams,

    /// Fixed physics rate (ticks per second)
    pub tick_hz: f32,

    /// Simulated time to run (seconds)
    pub duration_s: f32,

    /// Place the terrain as a shore this far ahead of the start (meters) and
    /// report ground contacts; `None` keeps the boat in open water
    pub shore_ahead_m: Option<f32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            boat: BoatParams::default(),
            follow_camera: FollowCameraParams::default(),
            camera: CameraConfig::default(),
            terrain: TerrainParams::default(),
            stroke: StrokeParams::default(),
            tick_hz: 50.0, // Common fixed physics rate (20ms tick)
            duration_s: 30.0,
            shore_ahead_m: None,
        }
    }
}

impl SimConfig {
    /// Fixed tick duration (seconds)
    pub fn tick_s(&self) -> f32 {
        1.0 / self.tick_hz
    }

    /// Number of whole ticks covering `duration_s`
    pub fn total_ticks(&self) -> usize {
        (self.duration_s * self.tick_hz).ceil() as usize
    }

    /// Reject configurations the fixed-step model cannot run sensibly
    pub fn validate(&self) -> Result<()> {
        if !self.tick_hz.is_finite() || self.tick_hz <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tick rate must be finite and > 0 Hz, got {}",
                self.tick_hz
            )));
        }
        if !self.duration_s.is_finite() || self.duration_s < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "duration must be finite and >= 0 s, got {}",
                self.duration_s
            )));
        }

        for (name, drag) in self.boat.drag_factors() {
            if !drag.is_finite() || drag < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and >= 0, got {drag}"
                )));
            }
        }
        for (side, effort) in [
            ("port", self.stroke.port_effort),
            ("starboard", self.stroke.starboard_effort),
        ] {
            if !(0.0..=1.0).contains(&effort) {
                return Err(Error::InvalidConfig(format!(
                    "{side} effort must be within [0, 1], got {effort}"
                )));
            }
        }

        // Linear decay flips sign once a single tick removes more than all velocity
        let worst = self.tick_s() * self.boat.max_drag_per_second();
        if worst >= 1.0 {
            return Err(Error::InvalidConfig(format!(
                "tick of {:.4}s with drag {:.2}/s gives a decay factor of {:.3}; raise tick_hz",
                self.tick_s(),
                self.boat.max_drag_per_second(),
                1.0 - worst
            )));
        }

        if self.boat.outboard_length_m <= 0.0 {
            return Err(Error::InvalidConfig(
                "outboard length must be > 0".to_string(),
            ));
        }
        if self.boat.mass_kg <= 0.0 || self.boat.yaw_inertia_kg_m2 <= 0.0 {
            return Err(Error::InvalidConfig(
                "mass and yaw inertia must be > 0".to_string(),
            ));
        }

        let stroke = &self.stroke;
        if stroke.rate_spm.is_nan() || stroke.rate_spm <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "stroke rate must be > 0 spm, got {}",
                stroke.rate_spm
            )));
        }
        let fractions = [
            stroke.drive_fraction,
            stroke.release_fraction,
            stroke.catch_fraction,
        ];
        if fractions.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(Error::InvalidConfig(format!(
                "stroke phase fractions must be >= 0, got {fractions:?}"
            )));
        }
        let phases: f32 = fractions.iter().sum();
        if phases > 1.0 {
            return Err(Error::InvalidConfig(format!(
                "drive, release and catch fractions sum to {phases}, must leave room for recovery"
            )));
        }

        Ok(())
    }
}
