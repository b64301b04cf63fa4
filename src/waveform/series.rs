//! Raw `(time, strain)` series as read from a waveform file.

use alloc::vec::Vec;

/// One row of a waveform file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawSample {
    /// Dataset time (seconds, often negative before the merger).
    pub time: f64,
    /// Strain amplitude.
    pub strain: f64,
}

impl RawSample {
    /// Create a new sample.
    #[inline]
    pub const fn new(time: f64, strain: f64) -> Self {
        Self { time, strain }
    }
}

impl From<(f64, f64)> for RawSample {
    fn from((time, strain): (f64, f64)) -> Self {
        Self { time, strain }
    }
}

/// An ordered raw series.
///
/// Time ordering is expected but never checked; only the time extremes are
/// used downstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSeries {
    samples: Vec<RawSample>,
}

impl RawSeries {
    /// Wrap already-parsed samples.
    pub fn new(samples: Vec<RawSample>) -> Self {
        Self { samples }
    }

    /// Build a series from `(time, strain)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        pairs.iter().copied().map(RawSample::from).collect()
    }

    /// All samples in file order.
    #[inline]
    pub fn samples(&self) -> &[RawSample] {
        &self.samples
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> core::slice::Iter<'_, RawSample> {
        self.samples.iter()
    }

    /// `max(time) - min(time)`, or 0 for an empty series.
    pub fn time_span(&self) -> f64 {
        match time_bounds(&self.samples) {
            Some((min, max)) => max - min,
            None => 0.0,
        }
    }

    /// Unwrap into the sample vector.
    pub fn into_samples(self) -> Vec<RawSample> {
        self.samples
    }
}

impl FromIterator<RawSample> for RawSeries {
    fn from_iter<I: IntoIterator<Item = RawSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RawSeries {
    type Item = &'a RawSample;
    type IntoIter = core::slice::Iter<'a, RawSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Smallest and largest timestamp, `None` when empty.
pub(crate) fn time_bounds(samples: &[RawSample]) -> Option<(f64, f64)> {
    let first = samples.first()?.time;
    Some(
        samples
            .iter()
            .fold((first, first), |(lo, hi), s| (lo.min(s.time), hi.max(s.time))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_span_ignores_order() {
        let series = RawSeries::from_pairs(&[(3.0, 0.0), (-1.0, 0.5), (2.0, 0.1)]);
        assert_eq!(series.time_span(), 4.0);
    }

    #[test]
    fn test_empty_series() {
        let series = RawSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.time_span(), 0.0);
    }
}
