//! Waveform module for lego-ligo-motion.
//!
//! Provides the raw strain series, its loading from CSV files, the
//! sampling policies, and the planner that turns a series into a
//! [`MotionPlan`].

mod plan;
mod planner;
#[cfg(feature = "std")]
mod reader;
mod sampling;
mod series;

pub use plan::{MotionPlan, MotionStep, PlanOutcome, PlotPoint};
pub use planner::{
    check_speed, compute_plan, plot_series, MIN_RAW_SAMPLES, MIN_SAMPLED_POINTS,
    SPEED_WARNING_MESSAGE, STRAIN_DISPLAY_DIVISOR,
};
pub use sampling::{decimate, decimation_stride, local_extrema_indices, sample, SamplingPolicy};
pub use series::{RawSample, RawSeries};

#[cfg(feature = "std")]
pub use reader::{list_waveform_files, parse_series, read_series, waveform_name};
