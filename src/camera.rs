//! Follow camera that trails the boat with critically-damped smoothing.

use glam::{Mat4, Vec3};

use crate::params::{CameraConfig, FollowCameraParams};

/// Smallest smoothing time accepted (seconds); avoids dividing by zero
const MIN_SMOOTH_TIME_S: f32 = 1e-4;

/// Move `current` toward `target` like a critically damped spring.
///
/// Uses the polynomial approximation of `exp(-x)` from Game Programming
/// Gems 4 ("Critically Damped Ease-In/Ease-Out Smoothing"), so it is stable
/// for any `dt`. The result never overshoots `target`.
///
/// # Arguments
/// * `current` - Current position
/// * `target` - Desired position
/// * `velocity` - Smoothing velocity carried between calls
/// * `smooth_time_s` - Approximate time to reach the target (seconds)
/// * `dt` - Elapsed time (seconds); `0` returns `current` unchanged
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time_s: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time_s.max(MIN_SMOOTH_TIME_S);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Snap to the target instead of passing it
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }

    output
}

/// Camera that looks past the boat from a smoothed position
#[derive(Debug, Clone)]
pub struct FollowCamera {
    params: FollowCameraParams,
    pub eye: Vec3,
    pub target: Vec3,
    velocity: Vec3,
}

impl FollowCamera {
    pub fn new(params: FollowCameraParams) -> Self {
        Self {
            params,
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }

    /// Place the camera at its desired spot immediately (no smoothing)
    pub fn snap_to(&mut self, boat_position: Vec3, forward: Vec3, up: Vec3) {
        self.target = self.look_target(boat_position, forward, up);
        self.eye = self.desired_eye(boat_position, forward, up);
        self.velocity = Vec3::ZERO;
    }

    /// Point the camera looks at: behind and above the boat
    pub fn look_target(&self, boat_position: Vec3, forward: Vec3, up: Vec3) -> Vec3 {
        boat_position - forward * self.params.look_behind_m + up * self.params.height_m
    }

    /// Where the eye is heading: ahead of and above the boat
    pub fn desired_eye(&self, boat_position: Vec3, forward: Vec3, up: Vec3) -> Vec3 {
        boat_position + forward * self.params.eye_ahead_m + up * self.params.height_m
    }

    /// Track the boat for one tick
    pub fn update(&mut self, boat_position: Vec3, forward: Vec3, up: Vec3, dt: f32) {
        self.target = self.look_target(boat_position, forward, up);
        let desired = self.desired_eye(boat_position, forward, up);
        self.eye = smooth_damp(
            self.eye,
            desired,
            &mut self.velocity,
            self.params.smooth_time_s,
            dt,
        );
    }

    pub fn view_matrix(&self) -> Mat4 {
        // Always keep Y as up vector (camera never rolls)
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, config: &CameraConfig) -> Mat4 {
        let proj = Mat4::perspective_rh(
            config.fov_degrees.to_radians(),
            config.aspect_ratio(),
            config.near_plane_m,
            config.far_plane_m,
        );
        proj * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_damp_zero_dt_is_identity() {
        let mut velocity = Vec3::new(1.0, 2.0, 3.0);
        let out = smooth_damp(Vec3::ONE, Vec3::ZERO, &mut velocity, 0.05, 0.0);
        assert_eq!(out, Vec3::ONE);
        assert_eq!(velocity, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let target = Vec3::new(10.0, 0.0, 0.0);
        let mut current = Vec3::ZERO;
        let mut velocity = Vec3::ZERO;

        for _ in 0..200 {
            let next = smooth_damp(current, target, &mut velocity, 0.3, 0.02);
            assert!(next.x >= current.x, "moved away from target");
            assert!(next.x <= target.x, "overshot target: {}", next.x);
            current = next;
        }
        assert!((current - target).length() < 1e-2);
    }

    #[test]
    fn test_smooth_damp_zero_smooth_time_is_finite() {
        let mut velocity = Vec3::ZERO;
        let out = smooth_damp(Vec3::ZERO, Vec3::ONE, &mut velocity, 0.0, 0.02);
        assert!(out.is_finite());
        assert!(velocity.is_finite());
    }

    #[test]
    fn test_follow_camera_offsets() {
        let camera = FollowCamera::new(FollowCameraParams::default());
        let target = camera.look_target(Vec3::ZERO, Vec3::Z, Vec3::Y);
        let eye = camera.desired_eye(Vec3::ZERO, Vec3::Z, Vec3::Y);

        assert_eq!(target, Vec3::new(0.0, 2.0, -6.0));
        assert_eq!(eye, Vec3::new(0.0, 2.0, 8.0));
    }

    #[test]
    fn test_follow_camera_trails_moving_boat() {
        let mut camera = FollowCamera::new(FollowCameraParams::default());
        camera.snap_to(Vec3::ZERO, Vec3::Z, Vec3::Y);

        let boat = Vec3::new(0.0, 0.0, 5.0);
        camera.update(boat, Vec3::Z, Vec3::Y, 0.02);

        // Look target follows instantly, eye lags behind its desired spot
        assert_eq!(camera.target, Vec3::new(0.0, 2.0, -1.0));
        assert!(camera.eye.z > 8.0 && camera.eye.z < 13.0);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let mut camera = FollowCamera::new(FollowCameraParams::default());
        camera.snap_to(Vec3::ZERO, Vec3::Z, Vec3::Y);
        let view_proj = camera.view_proj(&CameraConfig::default());

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert!(view_proj.is_finite());
    }
}
