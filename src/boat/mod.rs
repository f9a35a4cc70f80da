//! Sculling boat: force model, rigid body seam and the per-tick controller.

pub mod body;
pub mod controller;
pub mod forces;

pub use body::{RigidBody, SimpleBody};
pub use controller::RowBoat;
pub use forces::{compute_tick_forces, DragFactors, TickForces};
