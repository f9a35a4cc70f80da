//! Fixed-tick boat controller: oar forces, drag and the follow camera.

use crate::boat::body::RigidBody;
use crate::boat::forces::{compute_tick_forces, TickForces};
use crate::camera::FollowCamera;
use crate::oar::TickInputs;
use crate::params::{BoatParams, FollowCameraParams};

/// Rowing boat driven once per physics tick
pub struct RowBoat {
    params: BoatParams,
    camera: FollowCamera,
}

impl RowBoat {
    /// Create a controller with its camera placed behind `body`
    pub fn new(params: BoatParams, camera_params: FollowCameraParams, body: &impl RigidBody) -> Self {
        let mut camera = FollowCamera::new(camera_params);
        camera.snap_to(body.position(), body.forward(), body.up());
        Self { params, camera }
    }

    pub fn params(&self) -> &BoatParams {
        &self.params
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    /// Apply one tick of rowing to `body`.
    ///
    /// Submits oar force and body-space torque to the body, decays its
    /// current velocity per world axis (per body axis with
    /// `body_frame_drag`), then moves the camera. The body integrates the
    /// submitted force afterwards.
    ///
    /// # Arguments
    /// * `body` - Boat rigid body
    /// * `inputs` - Oar snapshot for this tick
    /// * `dt` - Tick duration (seconds)
    pub fn fixed_update(
        &mut self,
        body: &mut impl RigidBody,
        inputs: &TickInputs,
        dt: f32,
    ) -> TickForces {
        let forward = body.forward();
        let up = body.up();

        let tick = compute_tick_forces(&self.params, inputs, forward);
        body.add_force(tick.force);
        body.add_relative_torque(tick.torque);

        let (linear_decay, angular_decay) = tick.drag.decay(dt);
        let velocity = if self.params.body_frame_drag {
            // Keel (x), heave (y), surge (z)
            let rotation = body.rotation();
            rotation * (rotation.inverse() * body.velocity() * linear_decay)
        } else {
            body.velocity() * linear_decay
        };
        body.set_velocity(velocity);
        body.set_angular_velocity(body.angular_velocity() * angular_decay);

        log::trace!(
            "force={:?} torque={:?} drag_z={:.3} drag_ang={:.3}",
            tick.force,
            tick.torque,
            tick.drag.z,
            tick.drag.angular
        );

        self.camera.update(body.position(), forward, up, dt);

        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boat::body::SimpleBody;
    use crate::oar::{OarInput, OarState, PullState};
    use glam::{Quat, Vec2, Vec3};
    use std::f32::consts::FRAC_PI_2;

    fn boat_and_body() -> (RowBoat, SimpleBody) {
        boat_and_body_with(BoatParams::default())
    }

    fn boat_and_body_with(params: BoatParams) -> (RowBoat, SimpleBody) {
        let body = SimpleBody::new(params.mass_kg, params.yaw_inertia_kg_m2);
        let boat = RowBoat::new(params, FollowCameraParams::default(), &body);
        (boat, body)
    }

    /// Spin axis after one port-only drive tick from rest with the given attitude
    fn port_spin_axis(rotation: Quat) -> (Vec3, Vec3) {
        let (mut boat, mut body) = boat_and_body();
        body.rotation = rotation;
        let inputs = TickInputs {
            port: stroke(1.0),
            starboard: OarInput::idle(),
        };

        boat.fixed_update(&mut body, &inputs, 0.02);
        body.integrate(0.02);

        (body.angular_velocity.normalize(), body.up())
    }

    fn stroke(effort: f32) -> OarInput {
        OarInput {
            state: OarState::InWater,
            pull_state: PullState::CanPull,
            effort_scaling: effort,
            stick: Vec2::new(0.0, -1.0),
            is_rowing: true,
            apply_recovery_force: false,
        }
    }

    #[test]
    fn test_velocity_decays_per_axis() {
        let (mut boat, mut body) = boat_and_body();
        body.velocity = Vec3::new(1.0, 1.0, 1.0);
        body.angular_velocity = Vec3::new(0.0, 2.0, 0.0);

        let dt = 0.02;
        boat.fixed_update(&mut body, &TickInputs::default(), dt);

        let p = boat.params().clone();
        let expected = Vec3::new(
            1.0 - dt * p.translational_x_drag,
            1.0 - dt * p.translational_y_drag,
            1.0 - dt * p.translational_z_drag,
        );
        assert!((body.velocity - expected).length() < 1e-5);
        assert!((body.angular_velocity.y - 2.0 * (1.0 - dt * p.angular_drag)).abs() < 1e-5);
    }

    #[test]
    fn test_zero_dt_leaves_velocity_unchanged() {
        let (mut boat, mut body) = boat_and_body();
        body.velocity = Vec3::new(0.3, -0.2, 1.5);
        body.angular_velocity = Vec3::new(0.0, 0.7, 0.0);

        boat.fixed_update(&mut body, &TickInputs::default(), 0.0);

        assert!((body.velocity - Vec3::new(0.3, -0.2, 1.5)).length() < 1e-6);
        assert_eq!(body.angular_velocity, Vec3::new(0.0, 0.7, 0.0));
    }

    #[test]
    fn test_decay_uses_world_axes_when_turned() {
        let (mut boat, mut body) = boat_and_body();
        // Boat turned 90 degrees: its forward axis is world +X
        body.rotation = Quat::from_rotation_y(FRAC_PI_2);
        body.velocity = Vec3::new(1.0, 0.0, 0.0);

        let dt = 0.02;
        boat.fixed_update(&mut body, &TickInputs::default(), dt);

        // World X decays with the X factor regardless of heading
        let world_x = 1.0 - dt * boat.params().translational_x_drag;
        assert!((body.velocity.x - world_x).abs() < 1e-5);
        assert!((body.velocity.x - 0.76).abs() < 1e-5);
    }

    #[test]
    fn test_body_frame_drag_follows_heading() {
        let (mut boat, mut body) = boat_and_body_with(BoatParams {
            body_frame_drag: true,
            ..BoatParams::default()
        });
        body.rotation = Quat::from_rotation_y(FRAC_PI_2);
        body.velocity = Vec3::new(1.0, 0.0, 0.0);

        let dt = 0.02;
        boat.fixed_update(&mut body, &TickInputs::default(), dt);

        // Motion along the boat's forward axis gets surge drag, not keel drag
        let surge = 1.0 - dt * boat.params().translational_z_drag;
        assert!((body.velocity.x - surge).abs() < 1e-5);
        assert!(body.velocity.z.abs() < 1e-5);
    }

    #[test]
    fn test_rolled_boat_spins_about_its_own_up() {
        // Rolled onto its side: body up is world -X
        let (spin, up) = port_spin_axis(Quat::from_rotation_z(FRAC_PI_2));
        assert!((up - Vec3::NEG_X).length() < 1e-3);
        assert!(spin.dot(up) > 0.999);
        assert!(spin.cross(up).length() < 1e-3);
    }

    #[test]
    fn test_pitched_boat_spins_about_its_own_up() {
        let rotation = Quat::from_rotation_x(0.6) * Quat::from_rotation_y(0.3);
        let (spin, up) = port_spin_axis(rotation);
        assert!(spin.dot(up) > 0.999);
        assert!(spin.cross(up).length() < 1e-3);
    }

    #[test]
    fn test_level_boat_spin_is_vertical() {
        let (spin, _) = port_spin_axis(Quat::IDENTITY);
        assert!((spin - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_stroke_moves_boat_forward() {
        let (mut boat, mut body) = boat_and_body();
        let inputs = TickInputs::symmetric(stroke(1.0));

        for _ in 0..50 {
            boat.fixed_update(&mut body, &inputs, 0.02);
            body.integrate(0.02);
        }

        assert!(body.position.z > 0.0);
        assert!(body.velocity.z > 0.0);
        assert!(body.heading_rad().abs() < 1e-4);
    }

    #[test]
    fn test_port_only_stroke_turns_boat() {
        let (mut boat, mut body) = boat_and_body();
        let inputs = TickInputs {
            port: stroke(1.0),
            starboard: OarInput::idle(),
        };

        for _ in 0..50 {
            let tick = boat.fixed_update(&mut body, &inputs, 0.02);
            assert!(tick.torque.y != 0.0);
            body.integrate(0.02);
        }

        assert!(body.heading_rad().abs() > 1e-3);
    }

    #[test]
    fn test_camera_tracks_boat() {
        let (mut boat, mut body) = boat_and_body();
        body.velocity = Vec3::new(0.0, 0.0, 2.0);

        for _ in 0..100 {
            boat.fixed_update(&mut body, &TickInputs::default(), 0.02);
            body.integrate(0.02);
        }

        let camera = boat.camera();
        assert!(camera.target.z < body.position.z);
        assert!(camera.eye.z > body.position.z);
    }
}
