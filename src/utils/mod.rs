//! Utility modules shared by loaders and generators.

pub mod date;
pub mod glob;
