//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config;
use crate::error::Result;
use crate::params::SimConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "rowboat")]
#[command(about = "Headless sculling boat and terrain simulator", long_about = None)]
pub struct Args {
    /// RON config file (unspecified fields use defaults)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated time to run (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f32>,

    /// Fixed physics rate (ticks per second)
    #[arg(long, value_name = "HZ")]
    pub tick_hz: Option<f32>,

    /// Stroke rate (strokes per minute)
    #[arg(long, value_name = "SPM")]
    pub stroke_rate: Option<f32>,

    /// Port oar effort (0-1)
    #[arg(long, value_name = "EFFORT")]
    pub port_effort: Option<f32>,

    /// Starboard oar effort (0-1)
    #[arg(long, value_name = "EFFORT")]
    pub starboard_effort: Option<f32>,

    /// Rush the slide on every recovery
    #[arg(long)]
    pub rush: bool,

    /// Terrain cells along X
    #[arg(long, value_name = "CELLS")]
    pub x_size: Option<usize>,

    /// Terrain cells along Z
    #[arg(long, value_name = "CELLS")]
    pub z_size: Option<usize>,

    /// Terrain noise seed
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u32>,

    /// Place the terrain as a shore this far ahead and report groundings (meters)
    #[arg(long, value_name = "METERS")]
    pub shore: Option<f32>,

    /// Write the terrain heightmap as PNG
    #[arg(long, value_name = "PATH")]
    pub heightmap: Option<PathBuf>,

    /// Write raw terrain vertex and index buffers
    #[arg(long, value_name = "PATH")]
    pub mesh_out: Option<PathBuf>,

    /// Print the effective config as RON and exit
    #[arg(long)]
    pub dump_config: bool,
}

impl Args {
    /// Load the base config (file or defaults) and apply command-line overrides
    pub fn resolve_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => config::load(path)?,
            None => SimConfig::default(),
        };

        if let Some(duration) = self.duration {
            config.duration_s = duration;
        }
        if let Some(tick_hz) = self.tick_hz {
            config.tick_hz = tick_hz;
        }
        if let Some(rate) = self.stroke_rate {
            config.stroke.rate_spm = rate;
        }
        if let Some(effort) = self.port_effort {
            config.stroke.port_effort = effort;
        }
        if let Some(effort) = self.starboard_effort {
            config.stroke.starboard_effort = effort;
        }
        if self.rush {
            config.stroke.rushing = true;
        }
        if let Some(x_size) = self.x_size {
            config.terrain.x_size = x_size;
        }
        if let Some(z_size) = self.z_size {
            config.terrain.z_size = z_size;
        }
        if let Some(seed) = self.seed {
            config.terrain.noise_seed = seed;
        }
        if self.shore.is_some() {
            config.shore_ahead_m = self.shore;
        }

        config.validate()?;
        Ok(config)
    }
}
