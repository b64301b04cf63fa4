//! Motor module for lego-ligo-motion.
//!
//! Provides the actuator boundary, its hardware and recording
//! implementations, and dead-reckoned mirror position tracking.

mod actuator;
mod hal;
mod position;
mod recording;

pub use actuator::Actuator;
pub use hal::{HalActuator, HalMotor};
pub use position::MirrorPosition;
pub use recording::RecordingActuator;
