pub mod context;
pub mod geometry;
