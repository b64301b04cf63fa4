//! Property tests for the waveform planner.

use lego_ligo_motion::error::PlanError;
use lego_ligo_motion::waveform::{decimation_stride, sample};
use lego_ligo_motion::{compute_plan, Error, RawSample, RawSeries, RigConfig, SamplingPolicy};
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = RawSeries> {
    (
        prop::collection::vec(-1.0e3f64..1.0e3, 3..80),
        -100.0f64..100.0,
        0.001f64..2.0,
    )
        .prop_map(|(strain, start, dt)| {
            strain
                .into_iter()
                .enumerate()
                .map(|(i, s)| RawSample::new(start + i as f64 * dt, s))
                .collect()
        })
}

fn config_strategy() -> impl Strategy<Value = RigConfig> {
    (1.0f64..360.0, 0.05f64..=1.0, 0.1f64..30.0).prop_map(|(degree_max, buffer, time_scale)| {
        let mut config = RigConfig::default();
        config.scaling.degree_max.0 = degree_max;
        config.scaling.preset_buffer = buffer;
        config.scaling.time_scale = time_scale;
        config
    })
}

fn has_signal(series: &RawSeries) -> bool {
    series.iter().any(|s| s.strain != 0.0)
}

proptest! {
    #[test]
    fn peak_degree_is_preset_amplitude(series in series_strategy(), config in config_strategy()) {
        prop_assume!(has_signal(&series));

        let plan = compute_plan(&series, SamplingPolicy::AllPoints, &config).unwrap().plan;
        let amplitude = config.scaling.preset_amplitude().value();

        prop_assert!((plan.peak_degree() - amplitude).abs() <= amplitude * 1e-9);
        for step in plan.iter() {
            prop_assert!(step.degree.abs() <= amplitude * (1.0 + 1e-9));
        }
    }

    #[test]
    fn all_points_keeps_every_sample(series in series_strategy(), config in config_strategy()) {
        prop_assume!(has_signal(&series));

        let plan = compute_plan(&series, SamplingPolicy::AllPoints, &config).unwrap().plan;
        prop_assert_eq!(plan.len(), series.len());
    }

    #[test]
    fn fixed_spacing_matches_decimation(series in series_strategy(), config in config_strategy()) {
        let stride = decimation_stride(
            &series,
            config.sampling.desired_spacing.value(),
            config.scaling.time_scale,
        );
        let sampled = sample(&series, SamplingPolicy::FixedSpacing, stride);

        match compute_plan(&series, SamplingPolicy::FixedSpacing, &config) {
            Ok(outcome) => {
                prop_assert_eq!(outcome.plan.len(), sampled.len());
                let times: Vec<f64> = outcome.plan.iter().map(|s| s.time).collect();
                prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));
            }
            Err(Error::Plan(PlanError::InsufficientData { found, .. })) => {
                prop_assert!(found < 2);
                prop_assert_eq!(found, sampled.len());
            }
            Err(Error::Plan(PlanError::DegenerateSignal)) => {
                prop_assert!(sampled.iter().all(|s| s.strain == 0.0));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
