//! Headless fixed-step host: drives the boat controller with scripted strokes.

use glam::Vec3;

use crate::boat::{RigidBody, RowBoat, SimpleBody, TickForces};
use crate::error::Result;
use crate::params::SimConfig;
use crate::stroke::{StrokePhase, StrokeScript};
use crate::terrain::{build_from_params, ContactTracker, TerrainCollider};

/// Hull depth below the boat origin (meters); the point tested against the terrain
const HULL_DRAFT_M: f32 = 0.2;

/// What happened during one tick
#[derive(Debug, Clone, Copy)]
pub struct TickReport {
    pub tick: usize,
    pub time_s: f32,
    pub phase: StrokePhase,
    pub forces: TickForces,
    pub position: Vec3,
    pub velocity: Vec3,
    pub heading_deg: f32,
    pub ground_contact: bool,
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSummary {
    pub ticks: usize,
    pub simulated_s: f32,
    pub distance_m: f32,
    pub final_speed_m_per_s: f32,
    pub max_speed_m_per_s: f32,
    pub heading_deg: f32,
    pub ground_contacts: usize,
}

/// Boat, body, script and optional terrain advanced together at a fixed rate
pub struct Simulation {
    config: SimConfig,
    boat: RowBoat,
    body: SimpleBody,
    script: StrokeScript,
    terrain: Option<(TerrainCollider, ContactTracker)>,
    tick: usize,
    max_speed: f32,
}

impl Simulation {
    /// Create a simulation from a validated config
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;

        let body = SimpleBody::new(config.boat.mass_kg, config.boat.yaw_inertia_kg_m2);
        let boat = RowBoat::new(config.boat.clone(), config.follow_camera.clone(), &body);
        let script = StrokeScript::new(config.stroke.clone());

        let terrain = match config.shore_ahead_m {
            Some(ahead_m) => {
                let mesh = build_from_params(&config.terrain);
                // Terrain base plane at hull depth, centered across the boat's heading
                let width = mesh.x_size as f32 * mesh.grid_spacing;
                let origin = Vec3::new(-width / 2.0, -HULL_DRAFT_M, ahead_m);
                log::debug!(
                    "Shore collider: {} triangles, origin {:?}",
                    mesh.triangle_count(),
                    origin
                );
                Some((
                    TerrainCollider::from_mesh(&mesh).with_origin(origin),
                    ContactTracker::default(),
                ))
            }
            None => None,
        };

        Ok(Self {
            config,
            boat,
            body,
            script,
            terrain,
            tick: 0,
            max_speed: 0.0,
        })
    }

    pub fn body(&self) -> &SimpleBody {
        &self.body
    }

    pub fn boat(&self) -> &RowBoat {
        &self.boat
    }

    /// Simulated time at the start of the next tick (seconds)
    pub fn time_s(&self) -> f32 {
        self.tick as f32 * self.config.tick_s()
    }

    /// Advance one fixed tick
    pub fn step(&mut self) -> TickReport {
        let dt = self.config.tick_s();
        let time_s = self.time_s();

        let inputs = self.script.sample(time_s);
        let forces = self.boat.fixed_update(&mut self.body, &inputs, dt);
        self.body.integrate(dt);

        let ground_contact = match &mut self.terrain {
            Some((collider, tracker)) => {
                let hull = self.body.position() - self.body.up() * HULL_DRAFT_M;
                tracker.update(collider, hull)
            }
            None => false,
        };

        let speed = self.body.velocity().length();
        self.max_speed = self.max_speed.max(speed);

        let report = TickReport {
            tick: self.tick,
            time_s,
            phase: self.script.phase_at(time_s),
            forces,
            position: self.body.position(),
            velocity: self.body.velocity(),
            heading_deg: self.body.heading_rad().to_degrees(),
            ground_contact,
        };
        log::trace!("{:?}", report);

        self.tick += 1;
        report
    }

    /// Run for the configured duration, logging once per simulated second
    pub fn run(&mut self) -> SimSummary {
        let total = self.config.total_ticks();
        let ticks_per_log = (self.config.tick_hz.round() as usize).max(1);

        for _ in 0..total {
            let report = self.step();
            if (report.tick + 1) % ticks_per_log == 0 {
                log::info!(
                    "t={:6.2}s pos=({:7.2}, {:7.2}) speed={:5.2} m/s heading={:7.2}° phase={:?}",
                    report.time_s + self.config.tick_s(),
                    report.position.x,
                    report.position.z,
                    report.velocity.length(),
                    report.heading_deg,
                    report.phase
                );
            }
        }

        self.summary()
    }

    pub fn summary(&self) -> SimSummary {
        SimSummary {
            ticks: self.tick,
            simulated_s: self.time_s(),
            distance_m: self.body.position().length(),
            final_speed_m_per_s: self.body.velocity().length(),
            max_speed_m_per_s: self.max_speed,
            heading_deg: self.body.heading_rad().to_degrees(),
            ground_contacts: self
                .terrain
                .as_ref()
                .map_or(0, |(_, tracker)| tracker.contacts()),
        }
    }
}
