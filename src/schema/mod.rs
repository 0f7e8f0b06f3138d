//! Schema module - Configuration types for cameras and scene runs.

mod config;

pub use config::*;
