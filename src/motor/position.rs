//! Approximate mirror position tracking.
//!
//! The motors have no encoder feedback in this rig, so position is dead
//! reckoned from the commands issued: each unit of power held for one
//! second turns a mirror by `power_coefficient` degrees. The estimate drifts
//! and must be re-zeroed by calibrating.

use crate::config::units::Degrees;
use crate::motion::{Axis, MotorCommand};

/// Estimated position of both mirrors.
///
/// A plain value: the sequencing layer owns it and updates it after every
/// command it issues.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MirrorPosition {
    a: Degrees,
    b: Degrees,
}

impl MirrorPosition {
    /// Both mirrors at zero.
    #[inline]
    pub const fn new() -> Self {
        Self {
            a: Degrees(0.0),
            b: Degrees(0.0),
        }
    }

    /// A position with the given axis values.
    #[inline]
    pub const fn at(a: Degrees, b: Degrees) -> Self {
        Self { a, b }
    }

    /// Position of one axis.
    #[inline]
    pub fn get(&self, axis: Axis) -> Degrees {
        match axis {
            Axis::A => self.a,
            Axis::B => self.b,
        }
    }

    fn get_mut(&mut self, axis: Axis) -> &mut Degrees {
        match axis {
            Axis::A => &mut self.a,
            Axis::B => &mut self.b,
        }
    }

    /// Position after executing `command`.
    ///
    /// Positive power drives the tracked position negative, matching the
    /// motor wiring.
    #[must_use]
    pub fn after(mut self, command: &MotorCommand, power_coefficient: f64) -> Self {
        self.apply(command, power_coefficient);
        self
    }

    /// Update in place after executing `command`.
    pub fn apply(&mut self, command: &MotorCommand, power_coefficient: f64) {
        let duration = command.duration();
        for axis in Axis::BOTH {
            let power = f64::from(command.power_on(axis));
            let travel = power * duration * power_coefficient;
            let position = self.get_mut(axis);
            *position = Degrees(position.0 - travel);
        }
    }

    /// Declare the current pose to be zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether `axis` is at or beyond `±limit`.
    #[inline]
    pub fn axis_exceeds(&self, axis: Axis, limit: Degrees) -> bool {
        self.get(axis).abs() >= limit.abs()
    }

    /// Whether either axis is at or beyond `±limit`.
    pub fn exceeds(&self, limit: Degrees) -> bool {
        Axis::BOTH.iter().any(|&axis| self.axis_exceeds(axis, limit))
    }

    /// Command that brings `axis` back to zero, or `None` if it is there.
    ///
    /// The power has the sign of the position so that its tracked travel
    /// cancels the position exactly.
    pub fn return_command(
        &self,
        axis: Axis,
        return_power: u8,
        power_coefficient: f64,
    ) -> Option<MotorCommand> {
        let position = self.get(axis).value();
        if position == 0.0 {
            return None;
        }
        let power = i16::from(return_power);
        let duration = libm::fabs(position / (f64::from(power) * power_coefficient));
        Some(MotorCommand::SingleAxisTimed {
            axis,
            power: if position < 0.0 { -power } else { power },
            duration,
        })
    }

    /// Return commands for every axis away from zero, A first.
    pub fn return_commands(
        &self,
        return_power: u8,
        power_coefficient: f64,
    ) -> heapless::Vec<MotorCommand, 2> {
        Axis::BOTH
            .iter()
            .filter_map(|&axis| self.return_command(axis, return_power, power_coefficient))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_command_tracking() {
        let cmd = MotorCommand::DualAxisPreset {
            power_a: 20,
            power_b: -20,
            duration: 1.0,
        };
        let pos = MirrorPosition::new().after(&cmd, 4.5);

        assert!((pos.get(Axis::A).value() + 90.0).abs() < 1e-9);
        assert!((pos.get(Axis::B).value() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_axis_leaves_other_alone() {
        let cmd = MotorCommand::SingleAxisTimed {
            axis: Axis::B,
            power: 30,
            duration: 0.15,
        };
        let pos = MirrorPosition::new().after(&cmd, 4.5);

        assert_eq!(pos.get(Axis::A), Degrees(0.0));
        assert!((pos.get(Axis::B).value() + 20.25).abs() < 1e-9);
    }

    #[test]
    fn test_return_command_cancels_position() {
        for start in [-72.0, 13.5] {
            let pos = MirrorPosition::at(Degrees(start), Degrees(-start));
            for axis in Axis::BOTH {
                let cmd = pos.return_command(axis, 20, 4.5).unwrap();
                let home = pos.after(&cmd, 4.5);
                assert!(home.get(axis).value().abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_no_return_needed_at_zero() {
        assert!(MirrorPosition::new().return_command(Axis::A, 20, 4.5).is_none());
        assert!(MirrorPosition::new().return_commands(20, 4.5).is_empty());
    }

    #[test]
    fn test_return_commands_skip_homed_axis() {
        let pos = MirrorPosition::at(Degrees(0.0), Degrees(-9.0));
        let commands = pos.return_commands(20, 4.5);

        assert_eq!(commands.len(), 1);
        let (a, b, duration) = commands[0].as_triple();
        assert_eq!((a, b), (0, -20));
        assert!((duration - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let pos = MirrorPosition::at(Degrees(-144.0), Degrees(10.0));
        assert!(pos.axis_exceeds(Axis::A, Degrees(144.0)));
        assert!(!pos.axis_exceeds(Axis::B, Degrees(144.0)));
        assert!(pos.exceeds(Degrees(144.0)));
        assert!(!pos.exceeds(Degrees(145.0)));
    }
}
