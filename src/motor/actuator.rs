//! The actuator boundary.

use crate::error::Result;
use crate::motion::MotorCommand;

/// Something that can execute motor commands.
///
/// `execute` blocks until the command has run for its full duration and
/// the motors are stopped. Commands are issued one at a time, in order.
pub trait Actuator {
    /// Run one command to completion.
    ///
    /// # Errors
    ///
    /// [`crate::error::Error::Actuator`] when the hardware rejects an operation.
    fn execute(&mut self, command: &MotorCommand) -> Result<()>;
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    fn execute(&mut self, command: &MotorCommand) -> Result<()> {
        (**self).execute(command)
    }
}
