//! Motor commands handed to an actuator.

/// Highest power magnitude the motor board accepts.
pub const MAX_POWER: i16 = 255;

/// One of the two mirror axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal mirror ("X"), motor port A.
    A,
    /// Vertical mirror ("Y"), motor port B.
    B,
}

impl Axis {
    /// Both axes, A first.
    pub const BOTH: [Axis; 2] = [Axis::A, Axis::B];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::A => "A",
            Axis::B => "B",
        }
    }
}

/// A timed power command for one or both motors.
///
/// Executing a command blocks until `duration` has elapsed and the motors
/// have been stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorCommand {
    /// Drive one axis, leaving the other idle (jog, calibrate, return).
    SingleAxisTimed {
        /// Axis to drive.
        axis: Axis,
        /// Signed power, -255 to 255.
        power: i16,
        /// Run time in seconds.
        duration: f64,
    },
    /// Drive both axes together for the same time (waveform replay).
    DualAxisPreset {
        /// Signed power for axis A.
        power_a: i16,
        /// Signed power for axis B.
        power_b: i16,
        /// Run time in seconds.
        duration: f64,
    },
}

impl MotorCommand {
    /// Run time in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        match *self {
            MotorCommand::SingleAxisTimed { duration, .. } => duration,
            MotorCommand::DualAxisPreset { duration, .. } => duration,
        }
    }

    /// Power applied to `axis`; 0 if the command leaves it idle.
    pub fn power_on(&self, axis: Axis) -> i16 {
        match *self {
            MotorCommand::SingleAxisTimed {
                axis: driven,
                power,
                ..
            } => {
                if driven == axis {
                    power
                } else {
                    0
                }
            }
            MotorCommand::DualAxisPreset {
                power_a, power_b, ..
            } => match axis {
                Axis::A => power_a,
                Axis::B => power_b,
            },
        }
    }

    /// `(power_a, power_b, duration)` as sent to the motor board.
    pub fn as_triple(&self) -> (i16, i16, f64) {
        (self.power_on(Axis::A), self.power_on(Axis::B), self.duration())
    }
}
