//! Follow-camera placement and projection settings.

use serde::{Deserialize, Serialize};

/// Where the follow camera sits relative to the boat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowCameraParams {
    /// Distance of the look-at point behind the boat origin (meters)
    pub look_behind_m: f32,

    /// Distance of the desired eye position ahead of the boat origin (meters).
    /// Rowers face the stern, so this keeps the camera in front of the rower.
    pub eye_ahead_m: f32,

    /// Height of both eye and look-at point above the boat origin (meters)
    pub height_m: f32,

    /// Approximate time for the eye to reach its desired position (seconds)
    pub smooth_time_s: f32,
}

impl Default for FollowCameraParams {
    fn default() -> Self {
        Self {
            look_behind_m: 6.0,
            eye_ahead_m: 8.0,
            height_m: 2.0,
            smooth_time_s: 0.05,
        }
    }
}

/// Projection configuration for building a view-projection matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Viewport width (pixels)
    pub viewport_width: u32,

    /// Viewport height (pixels)
    pub viewport_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 720,
            fov_degrees: 60.0,
            near_plane_m: 0.1,
            far_plane_m: 1000.0,
        }
    }
}

impl CameraConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.viewport_width as f32 / self.viewport_height as f32
    }
}
