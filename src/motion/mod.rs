//! Motion module for lego-ligo-motion.
//!
//! Provides the tagged motor commands and their derivation from a motion plan.

mod command;
mod translate;

pub use command::{Axis, MotorCommand, MAX_POWER};
pub use translate::{board_power, commands_for_plan, step_power};
