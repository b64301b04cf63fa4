//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::RigConfig;

/// Validate a rig configuration.
///
/// Checks:
/// - Scaling factors, spacing and motor coefficients are strictly positive
/// - Safety buffers are fractions in (0, 1]
/// - Jog and return powers are in 1-255, multipliers at least 1
pub fn validate_config(config: &RigConfig) -> Result<()> {
    positive("desired_spacing_secs", config.sampling.desired_spacing.0)?;
    positive("time_scale", config.scaling.time_scale)?;
    positive("degree_max", config.scaling.degree_max.0)?;
    buffer("preset_buffer", config.scaling.preset_buffer)?;
    buffer("manual_buffer", config.scaling.manual_buffer)?;

    positive("power_coefficient", config.motors.power_coefficient)?;
    positive("speed_warning_coefficient", config.motors.speed_warning_coefficient)?;
    power("return_power", config.motors.return_power)?;
    non_negative("stop_buffer_secs", config.motors.stop_buffer.0)?;
    non_negative("settle_secs", config.motors.settle.0)?;

    power("jog.self_movement.power", config.jog.self_movement.power)?;
    positive("jog.self_movement.run_time_secs", config.jog.self_movement.run_time.0)?;
    power("jog.calibrate.power", config.jog.calibrate.power)?;
    positive("jog.calibrate.run_time_secs", config.jog.calibrate.run_time.0)?;
    multiplier("fast_power_multiplier", config.jog.fast_power_multiplier)?;
    multiplier("fast_time_multiplier", config.jog.fast_time_multiplier)?;

    Ok(())
}

// Written as a negated comparison so NaN is rejected too.
fn positive(field: &'static str, value: f64) -> Result<()> {
    if !(value > 0.0) || value.is_infinite() {
        return Err(Error::Config(ConfigError::NonPositive { field, value }));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if !(value >= 0.0) || value.is_infinite() {
        return Err(Error::Config(ConfigError::NonPositive { field, value }));
    }
    Ok(())
}

fn buffer(field: &'static str, value: f64) -> Result<()> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(Error::Config(ConfigError::BufferOutOfRange { field, value }));
    }
    Ok(())
}

fn power(field: &'static str, value: u8) -> Result<()> {
    if value == 0 {
        return Err(Error::Config(ConfigError::InvalidPower { field, value }));
    }
    Ok(())
}

fn multiplier(field: &'static str, value: u8) -> Result<()> {
    if value == 0 {
        return Err(Error::Config(ConfigError::InvalidMultiplier { field, value }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Seconds;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RigConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_time_scale() {
        let mut config = RigConfig::default();
        config.scaling.time_scale = 0.0;

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::NonPositive { field: "time_scale", .. }))
        ));
    }

    #[test]
    fn test_nan_spacing_rejected() {
        let mut config = RigConfig::default();
        config.sampling.desired_spacing = Seconds(f64::NAN);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_buffer_above_one_rejected() {
        let mut config = RigConfig::default();
        config.scaling.preset_buffer = 1.5;

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::BufferOutOfRange { field: "preset_buffer", .. }))
        ));
    }

    #[test]
    fn test_zero_return_power_rejected() {
        let mut config = RigConfig::default();
        config.motors.return_power = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidPower { .. }))
        ));
    }

    #[test]
    fn test_settle_may_be_zero_but_not_negative() {
        let mut config = RigConfig::default();
        config.motors.settle = Seconds(0.0);
        assert!(validate_config(&config).is_ok());

        config.motors.settle = Seconds(-1.0);
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::NonPositive { field: "settle_secs", .. }))
        ));
    }
}
