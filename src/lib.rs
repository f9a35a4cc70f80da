//! Rowboat library - sculling boat physics and procedural terrain

pub mod boat;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod noise;
pub mod oar;
pub mod params;
pub mod sim;
pub mod stroke;
pub mod terrain;

pub use error::{Error, Result};
