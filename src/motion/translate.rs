//! Motion plan to motor command translation.

use alloc::vec::Vec;

use crate::config::RigConfig;
use crate::error::{CommandError, Result};
use crate::waveform::{MotionPlan, MotionStep};

use super::command::{MotorCommand, MAX_POWER};

/// Unrounded power that moves `step.degree_delta` in `step.time_delta`,
/// given `degrees = power * seconds * power_coefficient`.
#[inline]
pub fn step_power(step: &MotionStep, power_coefficient: f64) -> f64 {
    step.degree_delta / (step.time_delta * power_coefficient)
}

/// Round to the nearest board power (ties to even) and clamp to
/// `±MAX_POWER`. `None` for NaN or infinite input.
pub fn board_power(power: f64) -> Option<i16> {
    if !power.is_finite() {
        return None;
    }
    let limit = f64::from(MAX_POWER);
    Some(libm::rint(power).clamp(-limit, limit) as i16)
}

/// One dual-axis command per plan step, in plan order.
///
/// Axis A receives the step power and axis B its negation; the mirrors are
/// mounted facing opposite ways.
///
/// # Errors
///
/// [`CommandError::NonFinitePower`] for a step with a non-finite power,
/// e.g. a zero duration from repeated timestamps.
pub fn commands_for_plan(plan: &MotionPlan, config: &RigConfig) -> Result<Vec<MotorCommand>> {
    let coefficient = config.motors.power_coefficient;

    plan.iter()
        .enumerate()
        .map(|(index, step)| {
            let power = board_power(step_power(step, coefficient))
                .ok_or(CommandError::NonFinitePower { step: index })?;
            Ok(MotorCommand::DualAxisPreset {
                power_a: power,
                power_b: -power,
                duration: step.time_delta,
            })
        })
        .collect()
}
