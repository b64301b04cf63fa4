//! In-memory actuator for dry runs and tests.

use alloc::vec::Vec;

use crate::error::Result;
use crate::motion::MotorCommand;

use super::actuator::Actuator;

/// Records every command instead of moving anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingActuator {
    commands: Vec<MotorCommand>,
}

impl RecordingActuator {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in order.
    #[inline]
    pub fn commands(&self) -> &[MotorCommand] {
        &self.commands
    }

    /// Total run time of the recorded commands, in seconds.
    pub fn total_duration(&self) -> f64 {
        self.commands.iter().map(MotorCommand::duration).sum()
    }

    /// Drain the recorded commands.
    pub fn take(&mut self) -> Vec<MotorCommand> {
        core::mem::take(&mut self.commands)
    }
}

impl Actuator for RecordingActuator {
    fn execute(&mut self, command: &MotorCommand) -> Result<()> {
        self.commands.push(*command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Axis;

    #[test]
    fn test_records_in_order() {
        let mut recorder = RecordingActuator::new();
        let first = MotorCommand::SingleAxisTimed {
            axis: Axis::A,
            power: -30,
            duration: 0.15,
        };
        let second = MotorCommand::DualAxisPreset {
            power_a: 5,
            power_b: -5,
            duration: 1.0,
        };

        recorder.execute(&first).unwrap();
        (&mut recorder).execute(&second).unwrap();

        assert_eq!(recorder.commands(), &[first, second]);
        assert!((recorder.total_duration() - 1.15).abs() < 1e-12);
        assert_eq!(recorder.take().len(), 2);
        assert!(recorder.commands().is_empty());
    }
}
