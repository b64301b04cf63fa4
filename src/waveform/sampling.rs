//! Sampling policies: reduce a dense raw series to motion waypoints.

use alloc::vec::Vec;

use serde::Deserialize;

use super::series::{RawSample, RawSeries};

/// How a raw series is reduced to the waypoints the mirrors move through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplingPolicy {
    /// Every raw sample.
    AllPoints,
    /// Roughly one sample per desired spacing of running time.
    FixedSpacing,
    /// Interior peaks and troughs of the strain.
    #[default]
    LocalExtrema,
}

impl SamplingPolicy {
    /// Configuration name of the policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            SamplingPolicy::AllPoints => "all_points",
            SamplingPolicy::FixedSpacing => "fixed_spacing",
            SamplingPolicy::LocalExtrema => "local_extrema",
        }
    }
}

/// Index stride approximating one sample per `desired_spacing` seconds of
/// rig running time.
///
/// `floor(len * desired_spacing / ((max_t - min_t) * time_scale))`. A
/// result of 0 means "keep every sample"; this is also returned when the
/// series spans no time at all. The stride is index based and assumes
/// roughly uniform raw sampling.
pub fn decimation_stride(series: &RawSeries, desired_spacing: f64, time_scale: f64) -> usize {
    let time_total = series.time_span() * time_scale;
    let quotient = series.len() as f64 * desired_spacing / time_total;
    if quotient.is_finite() && quotient >= 1.0 {
        libm::floor(quotient) as usize
    } else {
        0
    }
}

/// Every `stride`-th sample starting with the first, or all samples when
/// `stride` is 0.
pub fn decimate(series: &RawSeries, stride: usize) -> Vec<RawSample> {
    if stride > 0 {
        series.iter().step_by(stride).copied().collect()
    } else {
        series.samples().to_vec()
    }
}

/// Indices of interior local maxima and minima.
///
/// A point qualifies when the strain strictly rises into it and strictly
/// falls after it, or the reverse. Flat neighbours disqualify it, and the
/// first and last points are never candidates.
pub fn local_extrema_indices(strain: &[f64]) -> Vec<usize> {
    strain
        .windows(3)
        .enumerate()
        .filter_map(|(i, w)| {
            let rise = w[1] - w[0];
            let next = w[2] - w[1];
            let peak = rise > 0.0 && next < 0.0;
            let trough = rise < 0.0 && next > 0.0;
            (peak || trough).then_some(i + 1)
        })
        .collect()
}

/// Apply `policy` to `series`.
///
/// `stride` is the value from [`decimation_stride`]; it is only used by
/// [`SamplingPolicy::FixedSpacing`]. The result is an order-preserving
/// subsequence of the raw samples.
pub fn sample(series: &RawSeries, policy: SamplingPolicy, stride: usize) -> Vec<RawSample> {
    match policy {
        SamplingPolicy::AllPoints => series.samples().to_vec(),
        SamplingPolicy::FixedSpacing => decimate(series, stride),
        SamplingPolicy::LocalExtrema => {
            let strain: Vec<f64> = series.iter().map(|s| s.strain).collect();
            local_extrema_indices(&strain)
                .into_iter()
                .map(|i| series.samples()[i])
                .collect()
        }
    }
}
