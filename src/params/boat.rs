//! Boat geometry, force limits and drag factors.

use serde::{Deserialize, Serialize};

/// Physical parameters of a single sculling boat.
///
/// Fixed for the lifetime of a [`RowBoat`](crate::boat::RowBoat).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoatParams {
    /// Lateral offset of each oarlock pivot from the centerline (meters).
    /// Torque arm for the pulling force.
    pub rigger_length_m: f32,

    /// Oar length from handle to oarlock pivot (meters)
    pub inboard_length_m: f32,

    /// Oar length from oarlock pivot to blade (meters)
    pub outboard_length_m: f32,

    /// Rower force at full effort on the drive (newtons)
    pub max_pull_force_n: f32,

    /// Rower force at full effort when pushing the handles away (newtons)
    pub max_push_force_n: f32,

    /// Lateral velocity decay per second (keel resistance)
    pub translational_x_drag: f32,

    /// Vertical velocity decay per second
    pub translational_y_drag: f32,

    /// Forward velocity decay per second (hull resistance)
    pub translational_z_drag: f32,

    /// Yaw rate decay per second
    pub angular_drag: f32,

    /// Extra forward decay per unit effort for each blade left dragging in the water
    pub oar_translational_z_drag: f32,

    /// Extra yaw decay per unit effort for each blade left dragging in the water
    pub oar_angular_drag: f32,

    /// Force per unit stick travel when the rower rushes the slide (newtons)
    pub rushing_force_multiplier: f32,

    /// Boat plus rower mass (kilograms)
    pub mass_kg: f32,

    /// Moment of inertia about the vertical axis (kg·m²)
    pub yaw_inertia_kg_m2: f32,

    /// Decay velocity along the boat's own axes (keel, heave, surge) instead
    /// of the world axes
    pub body_frame_drag: bool,
}

impl Default for BoatParams {
    fn default() -> Self {
        Self {
            rigger_length_m: 0.8,
            inboard_length_m: 0.88, // spread / 2 + 8cm
            outboard_length_m: 2.0,
            max_pull_force_n: 450.0,
            max_push_force_n: 200.0,
            translational_x_drag: 12.0,
            translational_y_drag: 0.1,
            translational_z_drag: 0.5,
            angular_drag: 15.0,
            oar_translational_z_drag: 3.0,
            oar_angular_drag: 0.5,
            rushing_force_multiplier: 0.3,
            mass_kg: 90.0,
            yaw_inertia_kg_m2: 30.0,
            body_frame_drag: false,
        }
    }
}

impl BoatParams {
    /// Mechanical advantage of the oar (force on the pin per unit handle force)
    pub fn lever_ratio(&self) -> f32 {
        self.inboard_length_m / self.outboard_length_m
    }

    /// Largest per-second decay any axis can reach with both blades dragging
    /// at full effort (effort is at most 1)
    pub fn max_drag_per_second(&self) -> f32 {
        let z = self.translational_z_drag + 2.0 * self.oar_translational_z_drag;
        let angular = self.angular_drag + 2.0 * self.oar_angular_drag;
        self.translational_x_drag
            .max(self.translational_y_drag)
            .max(z)
            .max(angular)
    }

    /// Named drag factors, for validation messages
    pub fn drag_factors(&self) -> [(&'static str, f32); 6] {
        [
            ("translational_x_drag", self.translational_x_drag),
            ("translational_y_drag", self.translational_y_drag),
            ("translational_z_drag", self.translational_z_drag),
            ("angular_drag", self.angular_drag),
            ("oar_translational_z_drag", self.oar_translational_z_drag),
            ("oar_angular_drag", self.oar_angular_drag),
        ]
    }
}
