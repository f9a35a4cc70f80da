//! Rigid body the boat controller pushes forces into.

use glam::{Quat, Vec3};

/// Read-modify-write access to a rigid body, as exposed by a physics host.
///
/// Forces and torques accumulate until the host integrates the body.
pub trait RigidBody {
    fn position(&self) -> Vec3;
    fn rotation(&self) -> Quat;

    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);

    /// World-space angular velocity (radians per second)
    fn angular_velocity(&self) -> Vec3;
    fn set_angular_velocity(&mut self, angular_velocity: Vec3);

    /// Add a world-space force for the next integration step
    fn add_force(&mut self, force: Vec3);

    /// Add a body-space torque for the next integration step
    fn add_relative_torque(&mut self, torque: Vec3);

    /// Body +Z in world space
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Body +Y in world space
    fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Body +X in world space
    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }
}

/// Point-mass body with a single scalar moment of inertia.
///
/// Semi-implicit Euler integration; enough to watch a boat respond to
/// strokes, not a general physics engine.
#[derive(Debug, Clone)]
pub struct SimpleBody {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    mass_kg: f32,
    inertia_kg_m2: f32,
    pending_force: Vec3,
    pending_torque: Vec3,
}

impl SimpleBody {
    /// Body at rest at the origin facing +Z
    pub fn new(mass_kg: f32, inertia_kg_m2: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass_kg,
            inertia_kg_m2,
            pending_force: Vec3::ZERO,
            pending_torque: Vec3::ZERO,
        }
    }

    /// Heading about the vertical axis (radians, 0 = +Z, positive turns toward +X)
    pub fn heading_rad(&self) -> f32 {
        let forward = self.forward();
        forward.x.atan2(forward.z)
    }

    /// Apply accumulated force and torque over `dt` seconds, then clear them
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.pending_force / self.mass_kg * dt;
        self.angular_velocity += self.pending_torque / self.inertia_kg_m2 * dt;

        self.position += self.velocity * dt;
        let spin = Quat::from_scaled_axis(self.angular_velocity * dt);
        self.rotation = (spin * self.rotation).normalize();

        self.pending_force = Vec3::ZERO;
        self.pending_torque = Vec3::ZERO;
    }
}

impl RigidBody for SimpleBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    fn add_force(&mut self, force: Vec3) {
        self.pending_force += force;
    }

    fn add_relative_torque(&mut self, torque: Vec3) {
        self.pending_torque += self.rotation * torque;
    }
}
