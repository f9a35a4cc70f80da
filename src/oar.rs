//! Per-tick oar input snapshots.
//!
//! Whatever owns the input device and oarlock tracking produces one
//! [`TickInputs`] per physics tick; the boat controller only reads it.

use glam::Vec2;

/// Which side of the boat an oar is rigged on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OarSide {
    Port,
    Starboard,
}

impl OarSide {
    /// Sign of the yaw torque produced by a pull on this side (mirrored riggers)
    pub fn torque_sign(self) -> f32 {
        match self {
            OarSide::Port => 1.0,
            OarSide::Starboard => -1.0,
        }
    }
}

/// Where the blade is in the stroke cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OarState {
    /// Blade buried and able to transfer force
    InWater,
    /// Blade lifted clear of the water
    #[default]
    OutOfWater,
    /// Blade being squared or returned near the surface; it still drags
    Recovery,
}

/// Whether the oarlock allows force transfer at the current handle position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullState {
    CanPull,
    #[default]
    CannotPull,
}

/// Snapshot of one oar for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OarInput {
    pub state: OarState,
    pub pull_state: PullState,

    /// Partial effort multiplier (0 = none, 1 = full)
    pub effort_scaling: f32,

    /// Handle stick; `y > 0` pushes the handle away, `y <= 0` pulls it in
    pub stick: Vec2,

    /// Rower is actively working this oar
    pub is_rowing: bool,

    /// Rower is rushing the slide on this side's recovery
    pub apply_recovery_force: bool,
}

impl OarInput {
    /// Oar resting out of the water with no input
    pub fn idle() -> Self {
        Self::default()
    }

    /// Blade is buried and the oarlock allows a pull.
    ///
    /// Ignores `is_rowing`: a buried blade with `CanPull` transfers stick
    /// force even when the rower is not rowing that side (it drags as well).
    pub fn can_transfer_force(&self) -> bool {
        self.state == OarState::InWater && self.pull_state == PullState::CanPull
    }

    /// Blade touches the water without transferring a stroke, slowing the boat
    pub fn drags(&self) -> bool {
        self.state != OarState::OutOfWater
            && (!self.is_rowing || self.pull_state == PullState::CannotPull)
    }
}

/// Both oars for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInputs {
    pub port: OarInput,
    pub starboard: OarInput,
}

impl TickInputs {
    /// Same input on both sides
    pub fn symmetric(oar: OarInput) -> Self {
        Self {
            port: oar,
            starboard: oar,
        }
    }

    pub fn side(&self, side: OarSide) -> &OarInput {
        match side {
            OarSide::Port => &self.port,
            OarSide::Starboard => &self.starboard,
        }
    }

    /// Iterate sides in a fixed order (port, then starboard)
    pub fn iter(&self) -> impl Iterator<Item = (OarSide, &OarInput)> {
        [OarSide::Port, OarSide::Starboard]
            .into_iter()
            .map(move |side| (side, self.side(side)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_oar_neither_pulls_nor_drags() {
        let oar = OarInput::idle();
        assert!(!oar.can_transfer_force());
        assert!(!oar.drags());
    }

    #[test]
    fn test_blade_in_water_without_rowing_drags_and_transfers_force() {
        let oar = OarInput {
            state: OarState::InWater,
            pull_state: PullState::CanPull,
            is_rowing: false,
            ..OarInput::idle()
        };
        assert!(oar.can_transfer_force());
        assert!(oar.drags());
    }

    #[test]
    fn test_release_drags_while_rowing() {
        let oar = OarInput {
            state: OarState::InWater,
            pull_state: PullState::CannotPull,
            is_rowing: true,
            ..OarInput::idle()
        };
        assert!(!oar.can_transfer_force());
        assert!(oar.drags());
    }

    #[test]
    fn test_recovery_state_drags_but_never_pulls() {
        let oar = OarInput {
            state: OarState::Recovery,
            pull_state: PullState::CanPull,
            is_rowing: false,
            ..OarInput::idle()
        };
        assert!(!oar.can_transfer_force());
        assert!(oar.drags());
    }

    #[test]
    fn test_iter_order() {
        let sides: Vec<OarSide> = TickInputs::default().iter().map(|(s, _)| s).collect();
        assert_eq!(sides, vec![OarSide::Port, OarSide::Starboard]);
    }
}
