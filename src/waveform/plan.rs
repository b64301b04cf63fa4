//! Motion plan types produced by the planner.

use alloc::vec::Vec;

use super::sampling::SamplingPolicy;

/// One waypoint of a motion plan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionStep {
    /// Rig running time at which the step starts, from the first waypoint.
    pub time: f64,
    /// `degree_delta / time_delta`.
    pub velocity: f64,
    /// Target mirror position.
    pub degree: f64,
    /// Change from the previous waypoint's position (from 0 for the first).
    pub degree_delta: f64,
    /// Running time allotted to this step.
    pub time_delta: f64,
    /// Strain-like value for display, `degree / 1800`.
    pub strain_equivalent: f64,
}

/// A `(time, strain)` pair for the plot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotPoint {
    /// Rig running time.
    pub time: f64,
    /// Strain equivalent of the mirror position.
    pub strain: f64,
}

/// Ordered motion steps, one per sampled waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionPlan {
    policy: SamplingPolicy,
    steps: Vec<MotionStep>,
}

impl MotionPlan {
    pub(crate) fn new(policy: SamplingPolicy, steps: Vec<MotionStep>) -> Self {
        Self { policy, steps }
    }

    /// Sampling policy the plan was built with.
    #[inline]
    pub fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    /// The steps, in waypoint order.
    #[inline]
    pub fn steps(&self) -> &[MotionStep] {
        &self.steps
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps. Never true for a computed plan.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps.
    pub fn iter(&self) -> core::slice::Iter<'_, MotionStep> {
        self.steps.iter()
    }

    /// Sum of the step durations.
    pub fn total_duration(&self) -> f64 {
        self.steps.iter().map(|s| s.time_delta).sum()
    }

    /// Largest `|degree|` over the plan.
    pub fn peak_degree(&self) -> f64 {
        self.steps
            .iter()
            .fold(0.0, |peak: f64, s| peak.max(libm::fabs(s.degree)))
    }

    /// `(time, strain_equivalent)` pairs for the presentation layer.
    pub fn plot_points(&self) -> Vec<PlotPoint> {
        self.steps
            .iter()
            .map(|s| PlotPoint {
                time: s.time,
                strain: s.strain_equivalent,
            })
            .collect()
    }

    /// Unwrap into the step vector.
    pub fn into_steps(self) -> Vec<MotionStep> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a MotionPlan {
    type Item = &'a MotionStep;
    type IntoIter = core::slice::Iter<'a, MotionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A computed plan together with its speed warning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    /// The motion plan.
    pub plan: MotionPlan,
    /// The motors may not be able to keep up with this waveform.
    pub speed_warning: bool,
}
