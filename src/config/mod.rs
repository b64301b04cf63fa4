//! Configuration module for lego-ligo-motion.
//!
//! Provides the rig parameters loaded from TOML files (with `std` feature)
//! or built in code, plus their validation.

mod rig;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use rig::{JogConfig, JogProfile, MotorsConfig, RigConfig, SamplingConfig, ScalingConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Seconds};
