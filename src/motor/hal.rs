//! Actuator for DC mirror motors behind embedded-hal 1.0 traits.
//!
//! Each motor is a PWM channel for power plus a direction pin, the usual
//! H-bridge wiring. Commands are timed with a blocking `DelayNs`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::Seconds;
use crate::error::{ActuatorError, Result};
use crate::motion::{Axis, MotorCommand, MAX_POWER};

use super::actuator::Actuator;

/// One H-bridge motor channel.
///
/// Generic over:
/// - `PWM`: power channel (must implement `SetDutyCycle`)
/// - `DIR`: direction pin (must implement `OutputPin`)
pub struct HalMotor<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    /// PWM channel; duty is `|power| / 255`.
    pwm: PWM,

    /// DIR pin (high = positive power, unless inverted).
    dir: DIR,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,
}

impl<PWM, DIR> HalMotor<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    /// Create a motor channel.
    pub fn new(pwm: PWM, dir: DIR) -> Self {
        Self {
            pwm,
            dir,
            invert_direction: false,
        }
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Give the pins back.
    pub fn release(self) -> (PWM, DIR) {
        (self.pwm, self.dir)
    }

    fn drive(&mut self, axis: Axis, power: i16) -> Result<()> {
        let pin_high = (power >= 0) != self.invert_direction;
        let pin = if pin_high {
            self.dir.set_high()
        } else {
            self.dir.set_low()
        };
        pin.map_err(|_| ActuatorError::PinError { axis })?;

        let full = MAX_POWER.unsigned_abs();
        let magnitude = power.unsigned_abs().min(full);
        self.pwm
            .set_duty_cycle_fraction(magnitude, full)
            .map_err(|_| ActuatorError::PwmError { axis })?;
        Ok(())
    }

    fn stop(&mut self, axis: Axis) -> Result<()> {
        self.pwm
            .set_duty_cycle_fully_off()
            .map_err(|_| ActuatorError::PwmError { axis })?;
        Ok(())
    }
}

/// Two-motor actuator.
///
/// A command drives its motors, waits out the duration, cuts power, and
/// then holds at zero for `stop_buffer` so the motors do not coast into
/// the next command.
pub struct HalActuator<PA, DA, PB, DB, DELAY>
where
    PA: SetDutyCycle,
    DA: OutputPin,
    PB: SetDutyCycle,
    DB: OutputPin,
    DELAY: DelayNs,
{
    a: HalMotor<PA, DA>,
    b: HalMotor<PB, DB>,
    delay: DELAY,
    stop_buffer: Seconds,
}

impl<PA, DA, PB, DB, DELAY> HalActuator<PA, DA, PB, DB, DELAY>
where
    PA: SetDutyCycle,
    DA: OutputPin,
    PB: SetDutyCycle,
    DB: OutputPin,
    DELAY: DelayNs,
{
    /// Create an actuator from the two motor channels and a delay provider.
    pub fn new(a: HalMotor<PA, DA>, b: HalMotor<PB, DB>, delay: DELAY, stop_buffer: Seconds) -> Self {
        Self {
            a,
            b,
            delay,
            stop_buffer,
        }
    }

    /// Give the hardware back.
    pub fn release(self) -> (HalMotor<PA, DA>, HalMotor<PB, DB>, DELAY) {
        (self.a, self.b, self.delay)
    }

    fn drive(&mut self, axis: Axis, power: i16) -> Result<()> {
        match axis {
            Axis::A => self.a.drive(axis, power),
            Axis::B => self.b.drive(axis, power),
        }
    }

    fn stop(&mut self, axis: Axis) -> Result<()> {
        match axis {
            Axis::A => self.a.stop(axis),
            Axis::B => self.b.stop(axis),
        }
    }

    fn wait(&mut self, duration: Seconds) {
        self.delay.delay_us(duration.as_micros());
    }
}

impl<PA, DA, PB, DB, DELAY> Actuator for HalActuator<PA, DA, PB, DB, DELAY>
where
    PA: SetDutyCycle,
    DA: OutputPin,
    PB: SetDutyCycle,
    DB: OutputPin,
    DELAY: DelayNs,
{
    fn execute(&mut self, command: &MotorCommand) -> Result<()> {
        match *command {
            MotorCommand::SingleAxisTimed {
                axis,
                power,
                duration,
            } => {
                self.drive(axis, power)?;
                self.wait(Seconds(duration));
                self.stop(axis)?;
            }
            MotorCommand::DualAxisPreset {
                power_a,
                power_b,
                duration,
            } => {
                self.drive(Axis::A, power_a)?;
                self.drive(Axis::B, power_b)?;
                self.wait(Seconds(duration));
                self.stop(Axis::A)?;
                self.stop(Axis::B)?;
            }
        }

        let stop_buffer = self.stop_buffer;
        self.wait(stop_buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    /// PWM channel with a 0-255 range that records every duty written.
    #[derive(Default)]
    struct RecordingPwm {
        duties: Vec<u16>,
    }

    impl ErrorType for RecordingPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for RecordingPwm {
        fn max_duty_cycle(&self) -> u16 {
            255
        }

        fn set_duty_cycle(&mut self, duty: u16) -> core::result::Result<(), Self::Error> {
            self.duties.push(duty);
            Ok(())
        }
    }

    /// Delay that only sums what it was asked to wait.
    #[derive(Default)]
    struct TallyDelay {
        total_ns: u64,
    }

    impl DelayNs for TallyDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_dual_axis_command() {
        let dir_a = PinMock::new(&[Transaction::set(State::High)]);
        let dir_b = PinMock::new(&[Transaction::set(State::Low)]);

        let mut actuator = HalActuator::new(
            HalMotor::new(RecordingPwm::default(), dir_a),
            HalMotor::new(RecordingPwm::default(), dir_b),
            TallyDelay::default(),
            Seconds(0.02),
        );

        actuator
            .execute(&MotorCommand::DualAxisPreset {
                power_a: 20,
                power_b: -20,
                duration: 1.5,
            })
            .unwrap();

        let (a, b, delay) = actuator.release();
        let (pwm_a, mut dir_a) = a.release();
        let (pwm_b, mut dir_b) = b.release();

        assert_eq!(pwm_a.duties, [20, 0]);
        assert_eq!(pwm_b.duties, [20, 0]);
        assert_eq!(delay.total_ns, 1_520_000_000);
        dir_a.done();
        dir_b.done();
    }

    #[test]
    fn test_single_axis_with_inverted_direction() {
        let dir_a = PinMock::new(&[]);
        let dir_b = PinMock::new(&[Transaction::set(State::Low)]);

        let mut actuator = HalActuator::new(
            HalMotor::new(RecordingPwm::default(), dir_a),
            HalMotor::new(RecordingPwm::default(), dir_b).invert_direction(true),
            TallyDelay::default(),
            Seconds(0.0),
        );

        actuator
            .execute(&MotorCommand::SingleAxisTimed {
                axis: Axis::B,
                power: 60,
                duration: 0.45,
            })
            .unwrap();

        let (a, b, delay) = actuator.release();
        let (pwm_a, mut dir_a) = a.release();
        let (pwm_b, mut dir_b) = b.release();

        assert!(pwm_a.duties.is_empty());
        assert_eq!(pwm_b.duties, [60, 0]);
        assert_eq!(delay.total_ns, 450_000_000);
        dir_a.done();
        dir_b.done();
    }
}
