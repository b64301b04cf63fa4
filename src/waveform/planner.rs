//! Waveform-to-motion planner.
//!
//! Turns a raw `(time, strain)` series into mirror waypoints: resample,
//! rescale strain to bounded degree positions, difference into per-step
//! durations and velocities, and flag waveforms the motors cannot follow.
//!
//! Everything here is a pure function of its arguments.

use alloc::vec::Vec;

use crate::config::RigConfig;
use crate::error::{PlanError, Result};

use super::plan::{MotionPlan, MotionStep, PlanOutcome, PlotPoint};
use super::sampling::{decimate, decimation_stride, sample, SamplingPolicy};
use super::series::{time_bounds, RawSample, RawSeries};

/// Fixed rig constant mapping a degree position back to a strain-like
/// display unit.
pub const STRAIN_DISPLAY_DIVISOR: f64 = 1800.0;

/// Raw samples needed before planning: the extrema scan looks one point
/// either side, and differencing needs two waypoints.
pub const MIN_RAW_SAMPLES: usize = 3;

/// Waypoints needed after sampling.
pub const MIN_SAMPLED_POINTS: usize = 2;

/// Advisory text shown when a waveform raises the speed warning.
pub const SPEED_WARNING_MESSAGE: &str =
    "Warning: The motor cannot achieve the required speed. Please choose another file.";

/// Compute the motion plan for `series` under `policy`.
///
/// The speed warning is always evaluated over the fixed-spacing view of the
/// series, whatever `policy` drives the motors. A waveform sampled at its
/// extrema can therefore move faster than the warning accounts for.
///
/// # Errors
///
/// - [`PlanError::InsufficientData`] when the raw series has fewer than
///   [`MIN_RAW_SAMPLES`] samples, or sampling leaves fewer than
///   [`MIN_SAMPLED_POINTS`] waypoints (e.g. no extrema were found).
/// - [`PlanError::DegenerateSignal`] when every sampled strain is zero.
pub fn compute_plan(
    series: &RawSeries,
    policy: SamplingPolicy,
    config: &RigConfig,
) -> Result<PlanOutcome> {
    require_raw_samples(series)?;

    let stride = stride_for(series, config);
    let sampled = sample(series, policy, stride);
    if sampled.len() < MIN_SAMPLED_POINTS {
        return Err(PlanError::InsufficientData {
            found: sampled.len(),
            required: MIN_SAMPLED_POINTS,
        }
        .into());
    }

    let amplitude = config.scaling.preset_amplitude().value();
    let degrees = rescale(&sampled, amplitude).ok_or(PlanError::DegenerateSignal)?;
    let times = running_times(&sampled, config.scaling.time_scale);

    let last = times.len() - 1;
    let final_delta = times[last] - times[last - 1];

    let steps: Vec<MotionStep> = degrees
        .iter()
        .enumerate()
        .map(|(i, &degree)| {
            let previous = if i == 0 { 0.0 } else { degrees[i - 1] };
            let time_delta = if i < last {
                times[i + 1] - times[i]
            } else {
                final_delta
            };
            let degree_delta = degree - previous;
            MotionStep {
                time: times[i],
                velocity: degree_delta / time_delta,
                degree,
                degree_delta,
                time_delta,
                strain_equivalent: degree / STRAIN_DISPLAY_DIVISOR,
            }
        })
        .collect();

    let speed_warning = speed_warning(&decimate(series, stride), config);

    debug!(
        "planned {} of {} samples with {} (stride {})",
        steps.len(),
        series.len(),
        policy.as_str(),
        stride
    );
    if speed_warning {
        warn!("waveform exceeds the motor speed limit");
    }

    Ok(PlanOutcome {
        plan: MotionPlan::new(policy, steps),
        speed_warning,
    })
}

/// Speed warning alone, without building a plan.
///
/// This is the check made before a replay starts.
///
/// # Errors
///
/// [`PlanError::InsufficientData`] when the raw series has fewer than
/// [`MIN_RAW_SAMPLES`] samples.
pub fn check_speed(series: &RawSeries, config: &RigConfig) -> Result<bool> {
    require_raw_samples(series)?;
    let stride = stride_for(series, config);
    Ok(speed_warning(&decimate(series, stride), config))
}

/// Plot feed: `(time, strain_equivalent)` over every raw point.
///
/// # Errors
///
/// Same as [`compute_plan`] with [`SamplingPolicy::AllPoints`].
pub fn plot_series(series: &RawSeries, config: &RigConfig) -> Result<Vec<PlotPoint>> {
    let outcome = compute_plan(series, SamplingPolicy::AllPoints, config)?;
    Ok(outcome.plan.plot_points())
}

fn require_raw_samples(series: &RawSeries) -> Result<()> {
    if series.len() < MIN_RAW_SAMPLES {
        return Err(PlanError::InsufficientData {
            found: series.len(),
            required: MIN_RAW_SAMPLES,
        }
        .into());
    }
    Ok(())
}

fn stride_for(series: &RawSeries, config: &RigConfig) -> usize {
    decimation_stride(
        series,
        config.sampling.desired_spacing.value(),
        config.scaling.time_scale,
    )
}

/// `strain * amplitude / max(|strain|)`; `None` when all strain is zero.
fn rescale(samples: &[RawSample], amplitude: f64) -> Option<Vec<f64>> {
    let strain_range = samples
        .iter()
        .fold(0.0, |range: f64, s| range.max(libm::fabs(s.strain)));
    if !(strain_range > 0.0) {
        return None;
    }
    Some(
        samples
            .iter()
            .map(|s| s.strain * amplitude / strain_range)
            .collect(),
    )
}

/// Sample times rebased to the earliest one and scaled to rig time.
fn running_times(samples: &[RawSample], time_scale: f64) -> Vec<f64> {
    let origin = time_bounds(samples).map(|(min, _)| min).unwrap_or(0.0);
    samples
        .iter()
        .map(|s| (s.time - origin) * time_scale)
        .collect()
}

/// Largest signed jump between consecutive waypoints, starting from the
/// zero position, against `speed_warning_coefficient * desired_spacing`.
fn speed_warning(samples: &[RawSample], config: &RigConfig) -> bool {
    let amplitude = config.scaling.preset_amplitude().value();
    let Some(degrees) = rescale(samples, amplitude) else {
        return false;
    };

    let mut previous = 0.0;
    let mut largest = f64::NEG_INFINITY;
    for degree in degrees {
        largest = largest.max(degree - previous);
        previous = degree;
    }

    let threshold =
        config.motors.speed_warning_coefficient * config.sampling.desired_spacing.value();
    largest > threshold
}
