//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{bounded, ConfigError, Error, Result};

use super::RigConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use lego_ligo_motion::load_config;
///
/// let config = load_config("rig.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RigConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::Config(ConfigError::IoError(bounded(&e.to_string())))
    })?;

    let config = parse_config(&content)?;
    info!("loaded rig configuration from {}", path.as_ref().display());
    Ok(config)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<RigConfig> {
    let config: RigConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(bounded(e.message()))))?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Degrees, Seconds};
    use crate::waveform::SamplingPolicy;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, RigConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[sampling]
mode = "fixed_spacing"
desired_spacing_secs = 0.5

[scaling]
time_scale = 1.0
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.sampling.mode, SamplingPolicy::FixedSpacing);
        assert_eq!(config.sampling.desired_spacing, Seconds(0.5));
        assert_eq!(config.sampling.lines_to_skip, 1);
        assert_eq!(config.scaling.time_scale, 1.0);
        assert_eq!(config.scaling.degree_max, Degrees(180.0));
    }

    #[test]
    fn test_parse_jog_profiles() {
        let toml = r#"
[jog]
fast_power_multiplier = 4

[jog.calibrate]
power = 10
run_time_secs = 0.05
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.jog.fast_power_multiplier, 4);
        assert_eq!(config.jog.calibrate.power, 10);
        assert_eq!(config.jog.calibrate.run_time, Seconds(0.05));
        assert_eq!(config.jog.self_movement.power, 30);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let toml = r#"
[sampling]
mode = "stationary_points"
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let toml = r#"
[scaling]
manual_buffer = 0.0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::BufferOutOfRange { .. }))
        ));
    }
}
