//! Error types for lego-ligo-motion.
//!
//! Provides unified error handling across configuration, waveform input,
//! motion planning, command translation, and actuation.

use core::fmt;

use crate::motion::Axis;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all lego-ligo-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Waveform file reading or parsing error
    Input(InputError),
    /// Motion plan computation error
    Plan(PlanError),
    /// Plan-to-command translation error
    Command(CommandError),
    /// Actuator failure while executing a command
    Actuator(ActuatorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A parameter that must be strictly positive is not
    NonPositive {
        /// Parameter name
        field: &'static str,
        /// Offending value
        value: f64,
    },
    /// A buffer fraction outside (0, 1]
    BufferOutOfRange {
        /// Parameter name
        field: &'static str,
        /// Offending value
        value: f64,
    },
    /// A motor power outside 1-255
    InvalidPower {
        /// Parameter name
        field: &'static str,
        /// Offending value
        value: u8,
    },
    /// A jog multiplier of zero
    InvalidMultiplier {
        /// Parameter name
        field: &'static str,
        /// Offending value
        value: u8,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Waveform input errors.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A row could not be read as a `time,strain` pair
    MalformedInput {
        /// 1-based line number in the source file
        line: u64,
        /// What was wrong with the row
        reason: heapless::String<64>,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    Io(heapless::String<128>),
}

/// Motion plan computation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Too few points to difference (raw series, or after sampling)
    InsufficientData {
        /// Points available
        found: usize,
        /// Points required
        required: usize,
    },
    /// Every sampled strain value is zero, so there is nothing to rescale
    DegenerateSignal,
}

/// Plan-to-command translation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The power computed for a plan step is NaN or infinite
    NonFinitePower {
        /// Index of the offending plan step
        step: usize,
    },
}

/// Actuator errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorError {
    /// Direction pin operation failed
    PinError {
        /// Axis whose pin failed
        axis: Axis,
    },
    /// PWM duty cycle update failed
    PwmError {
        /// Axis whose channel failed
        axis: Axis,
    },
    /// Any other actuator failure
    Failed(heapless::String<64>),
}

impl ActuatorError {
    /// A free-form failure for actuators without a pin or PWM to blame,
    /// e.g. a motor board behind a serial link. Long text is truncated.
    pub fn failed(reason: &str) -> Self {
        ActuatorError::Failed(bounded(reason))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Input(e) => write!(f, "Input error: {}", e),
            Error::Plan(e) => write!(f, "Plan error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
            Error::Actuator(e) => write!(f, "Actuator error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::NonPositive { field, value } => {
                write!(f, "Invalid {}: {}. Must be > 0", field, value)
            }
            ConfigError::BufferOutOfRange { field, value } => {
                write!(f, "Invalid {}: {}. Must be in (0, 1]", field, value)
            }
            ConfigError::InvalidPower { field, value } => {
                write!(f, "Invalid {}: {}. Must be 1-255", field, value)
            }
            ConfigError::InvalidMultiplier { field, value } => {
                write!(f, "Invalid {}: {}. Must be >= 1", field, value)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MalformedInput { line, reason } => {
                write!(f, "Malformed row at line {}: {}", line, reason)
            }
            #[cfg(feature = "std")]
            InputError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InsufficientData { found, required } => {
                write!(f, "Insufficient data: {} points, at least {} required", found, required)
            }
            PlanError::DegenerateSignal => {
                write!(f, "Degenerate signal: every sampled strain value is zero")
            }
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NonFinitePower { step } => {
                write!(f, "Step {} requires a non-finite motor power", step)
            }
        }
    }
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuatorError::PinError { axis } => {
                write!(f, "Direction pin operation failed on axis {}", axis.name())
            }
            ActuatorError::PwmError { axis } => {
                write!(f, "PWM update failed on axis {}", axis.name())
            }
            ActuatorError::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

/// Copy `text` into a bounded string, dropping whatever does not fit.
pub(crate) fn bounded<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}

impl From<PlanError> for Error {
    fn from(e: PlanError) -> Self {
        Error::Plan(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Error::Actuator(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

#[cfg(feature = "std")]
impl std::error::Error for PlanError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

#[cfg(feature = "std")]
impl std::error::Error for ActuatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_truncates() {
        let s: heapless::String<4> = bounded("abcdef");
        assert_eq!(s.as_str(), "abcd");
    }

    #[test]
    fn test_plan_error_converts() {
        let e: Error = PlanError::DegenerateSignal.into();
        assert!(matches!(e, Error::Plan(PlanError::DegenerateSignal)));
    }

    #[test]
    fn test_failed_actuator_message() {
        let e: Error = ActuatorError::failed("motor board not responding").into();
        assert_eq!(
            alloc::format!("{}", e),
            "Actuator error: motor board not responding"
        );
    }
}
