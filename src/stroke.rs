//! Scripted stroke cycle that stands in for live rower input.

use glam::Vec2;

use crate::oar::{OarInput, OarState, PullState, TickInputs};
use crate::params::StrokeParams;

/// Handle travel during the recovery (pushing the handles away)
const RECOVERY_STICK_Y: f32 = 0.5;

/// Part of the stroke cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokePhase {
    /// Blade buried, handle pulled in
    Drive,
    /// Past the end of the stroke, blade still in
    Release,
    /// Blade clear of the water, handles going away
    Recovery,
    /// Blade squared and dropping in
    Catch,
}

/// Periodic stroke generator
#[derive(Debug, Clone)]
pub struct StrokeScript {
    params: StrokeParams,
}

impl StrokeScript {
    pub fn new(params: StrokeParams) -> Self {
        Self { params }
    }

    /// Phase of the stroke at time `time_s`
    pub fn phase_at(&self, time_s: f32) -> StrokePhase {
        let p = &self.params;
        let cycle = (time_s / p.period_s()).rem_euclid(1.0);

        let release_start = p.drive_fraction;
        let recovery_start = release_start + p.release_fraction;
        let catch_start = 1.0 - p.catch_fraction;

        if cycle < release_start {
            StrokePhase::Drive
        } else if cycle < recovery_start {
            StrokePhase::Release
        } else if cycle < catch_start {
            StrokePhase::Recovery
        } else {
            StrokePhase::Catch
        }
    }

    fn oar(&self, phase: StrokePhase, effort: f32) -> OarInput {
        match phase {
            StrokePhase::Drive => OarInput {
                state: OarState::InWater,
                pull_state: PullState::CanPull,
                effort_scaling: effort,
                stick: Vec2::new(0.0, -1.0),
                is_rowing: true,
                apply_recovery_force: false,
            },
            StrokePhase::Release => OarInput {
                state: OarState::InWater,
                pull_state: PullState::CannotPull,
                effort_scaling: effort,
                stick: Vec2::ZERO,
                is_rowing: true,
                apply_recovery_force: false,
            },
            StrokePhase::Recovery => OarInput {
                state: OarState::OutOfWater,
                pull_state: PullState::CannotPull,
                effort_scaling: effort,
                stick: Vec2::new(0.0, RECOVERY_STICK_Y),
                is_rowing: false,
                apply_recovery_force: self.params.rushing,
            },
            StrokePhase::Catch => OarInput {
                state: OarState::Recovery,
                pull_state: PullState::CannotPull,
                effort_scaling: effort,
                stick: Vec2::ZERO,
                is_rowing: false,
                apply_recovery_force: false,
            },
        }
    }

    /// Oar inputs for the tick at `time_s`
    pub fn sample(&self, time_s: f32) -> TickInputs {
        let phase = self.phase_at(time_s);
        TickInputs {
            port: self.oar(phase, self.params.port_effort),
            starboard: self.oar(phase, self.params.starboard_effort),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> StrokeScript {
        // 30 spm = 2 s per stroke
        StrokeScript::new(StrokeParams {
            rate_spm: 30.0,
            ..StrokeParams::default()
        })
    }

    #[test]
    fn test_phase_sequence() {
        let s = script();
        assert_eq!(s.phase_at(0.0), StrokePhase::Drive);
        assert_eq!(s.phase_at(0.7), StrokePhase::Drive);
        assert_eq!(s.phase_at(0.85), StrokePhase::Release);
        assert_eq!(s.phase_at(1.2), StrokePhase::Recovery);
        assert_eq!(s.phase_at(1.95), StrokePhase::Catch);
        assert_eq!(s.phase_at(2.1), StrokePhase::Drive);
    }

    #[test]
    fn test_drive_pulls_and_recovery_does_not() {
        let s = script();
        let drive = s.sample(0.1);
        assert!(drive.port.can_transfer_force() && drive.starboard.can_transfer_force());
        assert!(drive.port.stick.y < 0.0);

        let recovery = s.sample(1.2);
        assert!(!recovery.port.can_transfer_force());
        assert!(!recovery.port.drags());
        assert!(!recovery.port.apply_recovery_force);
    }

    #[test]
    fn test_release_and_catch_drag() {
        let s = script();
        assert!(s.sample(0.85).port.drags());
        assert!(s.sample(1.95).starboard.drags());
    }

    #[test]
    fn test_rushing_flag_only_on_recovery() {
        let s = StrokeScript::new(StrokeParams {
            rate_spm: 30.0,
            rushing: true,
            ..StrokeParams::default()
        });
        assert!(s.sample(1.2).port.apply_recovery_force);
        assert!(!s.sample(0.1).port.apply_recovery_force);
        assert!(!s.sample(1.95).port.apply_recovery_force);
    }

    #[test]
    fn test_per_side_effort() {
        let s = StrokeScript::new(StrokeParams {
            port_effort: 1.0,
            starboard_effort: 0.25,
            ..StrokeParams::default()
        });
        let inputs = s.sample(0.0);
        assert_eq!(inputs.port.effort_scaling, 1.0);
        assert_eq!(inputs.starboard.effort_scaling, 0.25);
    }
}
