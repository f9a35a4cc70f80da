//! Per-tick force, torque and drag computation for a sculling boat.
//!
//! Pure functions of the boat parameters, the tick's oar snapshot and the
//! boat's current axes. Nothing here touches the rigid body.

use glam::Vec3;

use crate::oar::{OarInput, OarSide, TickInputs};
use crate::params::BoatParams;

/// Velocity decay rates (per second) in effect for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFactors {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub angular: f32,
}

impl DragFactors {
    /// Hull drag alone, before any oar contribution
    pub fn base(params: &BoatParams) -> Self {
        Self {
            x: params.translational_x_drag,
            y: params.translational_y_drag,
            z: params.translational_z_drag,
            angular: params.angular_drag,
        }
    }

    /// Multiplicative decay for one tick of `dt` seconds.
    ///
    /// Linear approximation of `exp(-dt * drag)`; not clamped, so very long
    /// ticks can flip the sign (config validation rules those out).
    ///
    /// # Returns
    /// Tuple of (per-axis linear factor, angular factor)
    pub fn decay(&self, dt: f32) -> (Vec3, f32) {
        let linear = Vec3::new(1.0 - dt * self.x, 1.0 - dt * self.y, 1.0 - dt * self.z);
        (linear, 1.0 - dt * self.angular)
    }
}

/// Everything the controller submits to the rigid body for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickForces {
    /// World-space force (newtons)
    pub force: Vec3,

    /// Body-space torque (newton-meters), always about local Y
    pub torque: Vec3,

    pub drag: DragFactors,
}

/// Force and torque from a single oar pulling this tick.
///
/// Returns zeros unless the blade is in the water and the oarlock allows a
/// pull. The magnitude uses the push force for `stick.y > 0` and the pull
/// force otherwise, scaled by effort and the oar's lever ratio. The force is
/// along the world-space `forward` axis; the torque is about the boat's local
/// up axis.
pub fn pull_contribution(
    params: &BoatParams,
    side: OarSide,
    oar: &OarInput,
    forward: Vec3,
) -> (Vec3, Vec3) {
    if !oar.can_transfer_force() {
        return (Vec3::ZERO, Vec3::ZERO);
    }

    let input_force = if oar.stick.y > 0.0 {
        params.max_push_force_n
    } else {
        params.max_pull_force_n
    };
    // Force on the pin = rower force * (inboard / outboard)
    let boat_force = input_force * -oar.effort_scaling * params.lever_ratio();

    let force = forward * oar.stick.y * boat_force;
    let arm = side.torque_sign() * params.rigger_length_m;
    let torque = Vec3::Y * (arm * oar.stick.y * boat_force);
    (force, torque)
}

/// Forward force from rushing the slide. Never produces torque.
pub fn rushing_contribution(params: &BoatParams, oar: &OarInput, forward: Vec3) -> Vec3 {
    if oar.apply_recovery_force {
        forward * oar.stick.y * params.rushing_force_multiplier
    } else {
        Vec3::ZERO
    }
}

/// Accumulate force, torque and drag for one tick.
///
/// # Arguments
/// * `params` - Boat parameters
/// * `inputs` - Oar snapshot for this tick
/// * `forward` - Boat forward axis in world space
pub fn compute_tick_forces(params: &BoatParams, inputs: &TickInputs, forward: Vec3) -> TickForces {
    let mut drag = DragFactors::base(params);
    let mut force = Vec3::ZERO;
    let mut torque = Vec3::ZERO;

    // Blades left in the water slow the boat
    for (_, oar) in inputs.iter().filter(|(_, oar)| oar.drags()) {
        drag.z += params.oar_translational_z_drag * oar.effort_scaling;
        drag.angular += params.oar_angular_drag * oar.effort_scaling;
    }

    for (side, oar) in inputs.iter() {
        let (f, t) = pull_contribution(params, side, oar, forward);
        force += f;
        torque += t;
    }

    for (_, oar) in inputs.iter() {
        force += rushing_contribution(params, oar, forward);
    }

    // Drag does not yet depend on boat speed relative to the water

    TickForces {
        force,
        torque,
        drag,
    }
}
