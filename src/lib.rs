//! # lego-ligo-motion
//!
//! Waveform-driven motion planning for the two-mirror Lego-LIGO
//! interferometer rig, with embedded-hal 1.0 motor support.
//!
//! A recorded strain waveform is resampled, rescaled to bounded mirror
//! angles and turned into a sequence of timed power commands for the two
//! DC motors that tilt the mirrors.
//!
//! ## Features
//!
//! - **Pure planner**: `compute_plan` is a deterministic function of the
//!   series, the sampling policy and the configuration
//! - **Speed warning**: flags waveforms the motors cannot follow
//! - **embedded-hal 1.0**: `SetDutyCycle` for power, `OutputPin` for
//!   direction, `DelayNs` for timing
//! - **Position tracking**: dead-reckoned mirror angles with return-to-zero
//! - **Configuration-driven**: every rig constant comes from a TOML file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lego_ligo_motion::{load_config, read_series, RecordingActuator, Rig};
//!
//! let config = lego_ligo_motion::load_config("rig.toml")?;
//! let series = lego_ligo_motion::read_series("waves/gw150914.csv", config.sampling.lines_to_skip)?;
//!
//! let mut rig = Rig::new(config, RecordingActuator::new());
//! let report = rig.replay(&series)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): file I/O, CSV and TOML parsing, `tracing` logs
//! - `alloc`: heap allocation for no_std with an allocator (required)
//! - `defmt`: defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(not(feature = "alloc"))]
compile_error!("lego-ligo-motion needs the `alloc` feature (enabled by `std`)");

extern crate alloc;

#[macro_use]
mod macros;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod rig;
pub mod waveform;

// Re-exports for ergonomic API
pub use config::{validate_config, RigConfig};
pub use error::{Error, Result};
pub use motion::{commands_for_plan, Axis, MotorCommand};
pub use motor::{Actuator, HalActuator, HalMotor, MirrorPosition, RecordingActuator};
pub use rig::{JogDirection, JogMode, JogReport, JogSpeed, ReplayReport, Rig};
pub use waveform::{
    check_speed, compute_plan, plot_series, MotionPlan, MotionStep, PlanOutcome, PlotPoint,
    RawSample, RawSeries, SamplingPolicy,
};

// File loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
#[cfg(feature = "std")]
pub use waveform::{list_waveform_files, parse_series, read_series};

// Unit types
pub use config::units::{Degrees, Seconds};
