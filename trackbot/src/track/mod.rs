pub mod builder;
pub mod curve;
pub mod layout;
