//! Manual jog presets.

use crate::config::units::Seconds;
use crate::config::{JogConfig, JogProfile};
use crate::motion::{Axis, MotorCommand, MAX_POWER};

/// Which preset a jog uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JogMode {
    /// Free movement; the manual limit is enforced afterwards.
    SelfMovement,
    /// Fine moves while finding the zero pose; no limit check.
    Calibrate,
}

/// Jog direction as labelled on the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JogDirection {
    /// Negative power.
    Forward,
    /// Positive power.
    Backward,
}

/// Normal or fast jog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JogSpeed {
    /// The preset as configured.
    #[default]
    Normal,
    /// Power and run time scaled by the fast multipliers.
    Fast,
}

impl JogConfig {
    /// Preset for `mode`.
    pub fn profile(&self, mode: JogMode) -> JogProfile {
        match mode {
            JogMode::SelfMovement => self.self_movement,
            JogMode::Calibrate => self.calibrate,
        }
    }
}

/// The single-axis command one jog press issues.
///
/// Fast jogs multiply power and run time; power saturates at
/// [`MAX_POWER`].
pub fn jog_command(
    config: &JogConfig,
    axis: Axis,
    mode: JogMode,
    direction: JogDirection,
    speed: JogSpeed,
) -> MotorCommand {
    let profile = config.profile(mode);
    let (power_factor, time_factor) = match speed {
        JogSpeed::Normal => (1, 1),
        JogSpeed::Fast => (config.fast_power_multiplier, config.fast_time_multiplier),
    };

    let magnitude = u16::from(profile.power)
        .saturating_mul(u16::from(power_factor))
        .min(MAX_POWER.unsigned_abs());
    // At most MAX_POWER, so the cast is lossless.
    let magnitude = magnitude as i16;
    let power = match direction {
        JogDirection::Forward => -magnitude,
        JogDirection::Backward => magnitude,
    };
    let Seconds(run_time) = profile.run_time;

    MotorCommand::SingleAxisTimed {
        axis,
        power,
        duration: run_time * f64::from(time_factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_jog() {
        let cmd = jog_command(
            &JogConfig::default(),
            Axis::A,
            JogMode::SelfMovement,
            JogDirection::Forward,
            JogSpeed::Normal,
        );
        assert_eq!(cmd.as_triple(), (-30, 0, 0.15));
    }

    #[test]
    fn test_fast_calibrate_jog() {
        let cmd = jog_command(
            &JogConfig::default(),
            Axis::B,
            JogMode::Calibrate,
            JogDirection::Backward,
            JogSpeed::Fast,
        );
        let (a, b, duration) = cmd.as_triple();
        assert_eq!((a, b), (0, 40));
        assert!((duration - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_fast_power_saturates() {
        let mut config = JogConfig::default();
        config.self_movement.power = 200;
        let cmd = jog_command(
            &config,
            Axis::A,
            JogMode::SelfMovement,
            JogDirection::Backward,
            JogSpeed::Fast,
        );
        assert_eq!(cmd.power_on(Axis::A), MAX_POWER);
    }

    #[test]
    fn test_largest_fast_jog_keeps_direction() {
        let mut config = JogConfig::default();
        config.self_movement.power = 200;
        config.fast_power_multiplier = 255;

        let backward = jog_command(
            &config,
            Axis::A,
            JogMode::SelfMovement,
            JogDirection::Backward,
            JogSpeed::Fast,
        );
        let forward = jog_command(
            &config,
            Axis::A,
            JogMode::SelfMovement,
            JogDirection::Forward,
            JogSpeed::Fast,
        );

        assert_eq!(backward.power_on(Axis::A), MAX_POWER);
        assert_eq!(forward.power_on(Axis::A), -MAX_POWER);
    }
}
