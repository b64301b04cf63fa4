//! Rig configuration - root configuration structure.
//!
//! Every field has a default matching the rig as built, so an empty TOML
//! document is a complete configuration.

use serde::Deserialize;

use super::units::{Degrees, Seconds};
use crate::waveform::SamplingPolicy;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RigConfig {
    /// How raw waveform samples are reduced to motion waypoints.
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Conversion from the dataset's units to rig time and mirror angle.
    #[serde(default)]
    pub scaling: ScalingConfig,

    /// Motor power model and replay policy.
    #[serde(default)]
    pub motors: MotorsConfig,

    /// Manual jog settings.
    #[serde(default)]
    pub jog: JogConfig,
}

/// `[sampling]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SamplingConfig {
    /// Sampling policy used to drive the motors during replay.
    #[serde(default)]
    pub mode: SamplingPolicy,

    /// Desired running time between waypoints under fixed spacing.
    #[serde(default = "default_desired_spacing", rename = "desired_spacing_secs")]
    pub desired_spacing: Seconds,

    /// Header lines to skip at the top of each waveform file.
    #[serde(default = "default_lines_to_skip")]
    pub lines_to_skip: usize,
}

fn default_desired_spacing() -> Seconds {
    Seconds(0.2)
}

fn default_lines_to_skip() -> usize {
    1
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            mode: SamplingPolicy::default(),
            desired_spacing: default_desired_spacing(),
            lines_to_skip: default_lines_to_skip(),
        }
    }
}

/// `[scaling]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScalingConfig {
    /// Multiplier from dataset time to rig running time.
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,

    /// Greatest mirror excursion from the zero position.
    #[serde(default = "default_degree_max")]
    pub degree_max: Degrees,

    /// Fraction of `degree_max` used by waveform replay.
    #[serde(default = "default_preset_buffer")]
    pub preset_buffer: f64,

    /// Fraction of `degree_max` allowed under manual jogging.
    #[serde(default = "default_manual_buffer")]
    pub manual_buffer: f64,
}

fn default_time_scale() -> f64 {
    15.0
}

fn default_degree_max() -> Degrees {
    Degrees(180.0)
}

fn default_preset_buffer() -> f64 {
    0.5
}

fn default_manual_buffer() -> f64 {
    0.8
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            time_scale: default_time_scale(),
            degree_max: default_degree_max(),
            preset_buffer: default_preset_buffer(),
            manual_buffer: default_manual_buffer(),
        }
    }
}

impl ScalingConfig {
    /// Degree position the largest strain magnitude maps to during replay.
    #[inline]
    pub fn preset_amplitude(&self) -> Degrees {
        self.degree_max.scaled(self.preset_buffer)
    }

    /// Position beyond which a manually jogged mirror is sent home.
    #[inline]
    pub fn manual_limit(&self) -> Degrees {
        self.degree_max.scaled(self.manual_buffer)
    }
}

/// `[motors]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotorsConfig {
    /// Empirical travel per unit power per second: degrees / (power * s).
    #[serde(default = "default_power_coefficient")]
    pub power_coefficient: f64,

    /// A waypoint jump above `coefficient * desired_spacing` degrees raises
    /// the speed warning.
    #[serde(default = "default_speed_warning_coefficient")]
    pub speed_warning_coefficient: f64,

    /// Power used when returning a mirror to zero.
    #[serde(default = "default_return_power")]
    pub return_power: u8,

    /// Time the motors are held at zero power after each command.
    #[serde(default = "default_stop_buffer", rename = "stop_buffer_secs")]
    pub stop_buffer: Seconds,

    /// Zero-power hold between the end of a replay and the return home.
    #[serde(default = "default_settle", rename = "settle_secs")]
    pub settle: Seconds,

    /// Refuse to replay a waveform that raises the speed warning.
    #[serde(default = "default_block_on_speed_warning")]
    pub block_on_speed_warning: bool,
}

fn default_power_coefficient() -> f64 {
    4.5
}

fn default_speed_warning_coefficient() -> f64 {
    10_000.0
}

fn default_return_power() -> u8 {
    20
}

fn default_stop_buffer() -> Seconds {
    Seconds(0.02)
}

fn default_settle() -> Seconds {
    Seconds(2.0)
}

fn default_block_on_speed_warning() -> bool {
    true
}

impl Default for MotorsConfig {
    fn default() -> Self {
        Self {
            power_coefficient: default_power_coefficient(),
            speed_warning_coefficient: default_speed_warning_coefficient(),
            return_power: default_return_power(),
            stop_buffer: default_stop_buffer(),
            settle: default_settle(),
            block_on_speed_warning: default_block_on_speed_warning(),
        }
    }
}

/// A single jog preset: how hard and how long one button press drives.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct JogProfile {
    /// Motor power for a normal-speed jog.
    pub power: u8,

    /// Run time for a normal-speed jog.
    #[serde(rename = "run_time_secs")]
    pub run_time: Seconds,
}

/// `[jog]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JogConfig {
    /// Jogging in free self-movement mode.
    #[serde(default = "default_self_movement")]
    pub self_movement: JogProfile,

    /// Jogging while calibrating the zero position.
    #[serde(default = "default_calibrate")]
    pub calibrate: JogProfile,

    /// Power multiplier for fast jogs.
    #[serde(default = "default_fast_power_multiplier")]
    pub fast_power_multiplier: u8,

    /// Run-time multiplier for fast jogs.
    #[serde(default = "default_fast_time_multiplier")]
    pub fast_time_multiplier: u8,
}

fn default_self_movement() -> JogProfile {
    JogProfile {
        power: 30,
        run_time: Seconds(0.15),
    }
}

fn default_calibrate() -> JogProfile {
    JogProfile {
        power: 20,
        run_time: Seconds(0.1),
    }
}

fn default_fast_power_multiplier() -> u8 {
    2
}

fn default_fast_time_multiplier() -> u8 {
    3
}

impl Default for JogConfig {
    fn default() -> Self {
        Self {
            self_movement: default_self_movement(),
            calibrate: default_calibrate(),
            fast_power_multiplier: default_fast_power_multiplier(),
            fast_time_multiplier: default_fast_time_multiplier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rig() {
        let config = RigConfig::default();
        assert_eq!(config.sampling.mode, SamplingPolicy::LocalExtrema);
        assert_eq!(config.sampling.desired_spacing, Seconds(0.2));
        assert_eq!(config.scaling.time_scale, 15.0);
        assert_eq!(config.scaling.preset_amplitude(), Degrees(90.0));
        assert_eq!(config.scaling.manual_limit(), Degrees(144.0));
        assert_eq!(config.motors.power_coefficient, 4.5);
        assert_eq!(config.motors.settle, Seconds(2.0));
        assert_eq!(config.jog.self_movement.power, 30);
    }
}
