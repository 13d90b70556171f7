pub mod config;
pub mod physics;
pub mod simulation;
pub mod time;
pub mod track;
pub mod utils;
pub mod vehicle;

pub use anyhow;
pub use fastrand;
pub use glam;
pub use log;
pub use nalgebra;
pub use rapier2d;
pub use serde;
