//! Rig orchestration.
//!
//! [`Rig`] owns the configuration, the actuator and the tracked mirror
//! position, and sequences every motor command through `&mut self`.

mod jog;

pub use jog::{jog_command, JogDirection, JogMode, JogSpeed};

use alloc::vec::Vec;

use crate::config::{RigConfig, Seconds};
use crate::error::Result;
use crate::motion::{commands_for_plan, Axis, MotorCommand};
use crate::motor::{Actuator, MirrorPosition};
use crate::waveform::{check_speed, compute_plan, plot_series, PlotPoint, RawSeries};

/// Advisory text shown when a jog drove a mirror to its manual limit.
pub const LIMIT_WARNING_MESSAGE: &str =
    "Warning: Mirror has reached limit. The mirrors will now return to their default positions.";

/// Result of [`Rig::replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayReport {
    /// The speed warning was raised and the rig refused to move.
    Blocked,
    /// Every step ran and the mirrors were returned home.
    Completed {
        /// Number of plan steps executed.
        steps: usize,
        /// Whether the speed warning was raised (replay not blocked).
        speed_warning: bool,
    },
}

/// Result of [`Rig::jog`].
#[derive(Debug, Clone, PartialEq)]
pub struct JogReport {
    /// The jog command that ran.
    pub command: MotorCommand,
    /// Axes that reached the manual limit and were sent home.
    pub returned_axes: heapless::Vec<Axis, 2>,
}

impl JogReport {
    /// Whether the jog tripped the manual limit.
    #[inline]
    pub fn limit_hit(&self) -> bool {
        !self.returned_axes.is_empty()
    }
}

/// The two-mirror rig.
pub struct Rig<A: Actuator> {
    config: RigConfig,
    actuator: A,
    position: MirrorPosition,
}

impl<A: Actuator> Rig<A> {
    /// A rig whose current pose is taken as zero.
    pub fn new(config: RigConfig, actuator: A) -> Self {
        Self {
            config,
            actuator,
            position: MirrorPosition::new(),
        }
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Tracked mirror position.
    #[inline]
    pub fn position(&self) -> MirrorPosition {
        self.position
    }

    /// Borrow the actuator.
    #[inline]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Give the actuator back.
    pub fn into_actuator(self) -> A {
        self.actuator
    }

    /// Run one command and track its travel.
    ///
    /// On failure the position is left as it was before the command.
    pub fn execute(&mut self, command: &MotorCommand) -> Result<()> {
        self.actuator.execute(command)?;
        self.position
            .apply(command, self.config.motors.power_coefficient);
        Ok(())
    }

    /// Replay a waveform on both mirrors, then return them home.
    ///
    /// After the last step both motors are held at zero power for
    /// `config.motors.settle` before the return. The sampling policy comes
    /// from `config.sampling.mode`. With `block_on_speed_warning` set, a
    /// waveform the motors cannot follow is refused before anything moves.
    ///
    /// # Errors
    ///
    /// Planning, command translation and actuator errors. Translation
    /// happens before the first command, so a bad plan never moves the
    /// mirrors; an actuator failure stops the replay where it happened.
    pub fn replay(&mut self, series: &RawSeries) -> Result<ReplayReport> {
        let speed_warning = check_speed(series, &self.config)?;
        if speed_warning && self.config.motors.block_on_speed_warning {
            warn!("replay blocked by the speed warning");
            return Ok(ReplayReport::Blocked);
        }

        let outcome = compute_plan(series, self.config.sampling.mode, &self.config)?;
        let commands = commands_for_plan(&outcome.plan, &self.config)?;

        for command in &commands {
            self.execute(command)?;
        }
        self.settle()?;
        self.return_home()?;

        info!(
            "replay completed: {} steps over {} s",
            commands.len(),
            outcome.plan.total_duration()
        );
        Ok(ReplayReport::Completed {
            steps: commands.len(),
            speed_warning,
        })
    }

    /// Plot feed for `series`; does not move anything.
    ///
    /// # Errors
    ///
    /// Planning errors, as for [`plot_series`].
    pub fn plot(&self, series: &RawSeries) -> Result<Vec<PlotPoint>> {
        plot_series(series, &self.config)
    }

    /// One manual jog press.
    ///
    /// In [`JogMode::SelfMovement`] every axis at or beyond the manual
    /// limit is returned home afterwards.
    ///
    /// # Errors
    ///
    /// Actuator errors.
    pub fn jog(
        &mut self,
        axis: Axis,
        mode: JogMode,
        direction: JogDirection,
        speed: JogSpeed,
    ) -> Result<JogReport> {
        let command = jog_command(&self.config.jog, axis, mode, direction, speed);
        self.execute(&command)?;

        let mut returned_axes = heapless::Vec::new();
        if mode == JogMode::SelfMovement {
            let limit = self.config.scaling.manual_limit();
            for axis in Axis::BOTH {
                if !self.position.axis_exceeds(axis, limit) {
                    continue;
                }
                warn!("mirror {} reached the manual limit", axis.name());
                self.return_axis(axis)?;
                // Capacity equals the number of axes.
                let _ = returned_axes.push(axis);
            }
        }

        Ok(JogReport {
            command,
            returned_axes,
        })
    }

    /// Declare the current mirror pose to be zero.
    pub fn set_calibrated(&mut self) {
        debug!("mirror position reset to zero");
        self.position.reset();
    }

    /// Drive both mirrors back to zero.
    ///
    /// # Errors
    ///
    /// Actuator errors.
    pub fn return_home(&mut self) -> Result<()> {
        for axis in Axis::BOTH {
            self.return_axis(axis)?;
        }
        Ok(())
    }

    fn settle(&mut self) -> Result<()> {
        let Seconds(duration) = self.config.motors.settle;
        if duration > 0.0 {
            self.execute(&MotorCommand::DualAxisPreset {
                power_a: 0,
                power_b: 0,
                duration,
            })?;
        }
        Ok(())
    }

    fn return_axis(&mut self, axis: Axis) -> Result<()> {
        let motors = &self.config.motors;
        match self
            .position
            .return_command(axis, motors.return_power, motors.power_coefficient)
        {
            Some(command) => self.execute(&command),
            None => Ok(()),
        }
    }
}
