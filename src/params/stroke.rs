//! Scripted stroke cycle used to drive the boat without a live input device.

use serde::{Deserialize, Serialize};

/// Stroke cycle timing and per-side effort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeParams {
    /// Stroke rate (strokes per minute)
    pub rate_spm: f32,

    /// Fraction of the cycle spent on the drive (blade pulling)
    pub drive_fraction: f32,

    /// Fraction of the cycle spent at the release (blade in, past the end of the stroke)
    pub release_fraction: f32,

    /// Fraction of the cycle spent squaring the blade at the catch
    pub catch_fraction: f32,

    /// Port effort scaling (0 = no effort, 1 = full effort)
    pub port_effort: f32,

    /// Starboard effort scaling (0 = no effort, 1 = full effort)
    pub starboard_effort: f32,

    /// Rower rushes the slide on the recovery
    pub rushing: bool,
}

impl Default for StrokeParams {
    fn default() -> Self {
        Self {
            rate_spm: 24.0, // Steady state training rate
            drive_fraction: 0.4,
            release_fraction: 0.05,
            catch_fraction: 0.05,
            port_effort: 1.0,
            starboard_effort: 1.0,
            rushing: false,
        }
    }
}

impl StrokeParams {
    /// Duration of one full stroke (seconds)
    pub fn period_s(&self) -> f32 {
        60.0 / self.rate_spm
    }
}
