pub mod controller;
pub mod rig;
