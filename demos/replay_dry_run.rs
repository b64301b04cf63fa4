//! Example: Dry-run replay of a strain waveform.
//!
//! This example demonstrates how to:
//! - Parse the rig configuration from TOML
//! - Read a `time,strain` waveform from CSV
//! - Inspect the motion plan and its speed warning
//! - Replay it through the embedded-hal actuator with mock hardware
//!
//! Run with: `cargo run --example replay_dry_run --features std`

use lego_ligo_motion::{
    compute_plan, parse_config, parse_series,
    rig::LIMIT_WARNING_MESSAGE,
    waveform::SPEED_WARNING_MESSAGE,
    Axis, HalActuator, HalMotor, JogDirection, JogMode, JogSpeed, ReplayReport, Result, Rig,
    Seconds,
};

/// Mock PWM channel that prints every duty change.
struct PrintPwm(&'static str);

impl embedded_hal::pwm::ErrorType for PrintPwm {
    type Error = core::convert::Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for PrintPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> core::result::Result<(), Self::Error> {
        println!("    pwm {}: duty {:>3}/255", self.0, duty);
        Ok(())
    }
}

/// Mock DIR pin for demonstration.
struct MockDirPin;

impl embedded_hal::digital::ErrorType for MockDirPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockDirPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Mock delay for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // In real code, this would actually delay
    }
}

/// A short damped oscillation with a header row, as exported by the
/// waveform tools.
fn waveform_csv() -> String {
    let mut csv = String::from("time,strain\n");
    for i in 0..80 {
        let t = f64::from(i) * 0.01;
        let strain = (-2.0 * t).exp() * (t * 25.0).sin() * 1e-21;
        csv.push_str(&format!("{t},{strain}\n"));
    }
    csv
}

fn main() -> Result<()> {
    println!("=== Waveform Replay Dry Run ===\n");

    let config = parse_config(
        r#"
[sampling]
mode = "local_extrema"

[scaling]
time_scale = 15.0
degree_max = 180.0

[motors]
stop_buffer_secs = 0.02
"#,
    )?;

    let series = parse_series(waveform_csv().as_bytes(), config.sampling.lines_to_skip)?;
    println!("Loaded {} samples over {:.2} s", series.len(), series.time_span());

    let outcome = compute_plan(&series, config.sampling.mode, &config)?;
    println!(
        "Plan ({}): {} steps, {:.2} s, peak {:.1} deg",
        outcome.plan.policy().as_str(),
        outcome.plan.len(),
        outcome.plan.total_duration(),
        outcome.plan.peak_degree()
    );
    if outcome.speed_warning {
        println!("{SPEED_WARNING_MESSAGE}");
    }
    for step in outcome.plan.iter().take(5) {
        println!(
            "  t={:>6.2}s  deg={:>7.2}  dt={:.3}s  v={:>8.2} deg/s",
            step.time, step.degree, step.time_delta, step.velocity
        );
    }
    println!();

    let actuator = HalActuator::new(
        HalMotor::new(PrintPwm("A"), MockDirPin),
        HalMotor::new(PrintPwm("B"), MockDirPin),
        MockDelay,
        config.motors.stop_buffer,
    );
    let mut rig = Rig::new(config, actuator);

    println!("Replaying:");
    match rig.replay(&series)? {
        ReplayReport::Blocked => println!("  blocked: {SPEED_WARNING_MESSAGE}"),
        ReplayReport::Completed { steps, .. } => println!("  completed {steps} steps"),
    }
    println!("Position after replay: {:?}\n", rig.position());

    println!("Jogging mirror A:");
    for _ in 0..3 {
        let report = rig.jog(
            Axis::A,
            JogMode::SelfMovement,
            JogDirection::Forward,
            JogSpeed::Fast,
        )?;
        if report.limit_hit() {
            println!("  {LIMIT_WARNING_MESSAGE}");
        }
        println!(
            "  A at {:.1} deg",
            rig.position().get(Axis::A).value()
        );
    }

    let stop_buffer: Seconds = rig.config().motors.stop_buffer;
    println!("\nEach command holds {:.2} s at zero power afterwards.", stop_buffer.value());
    Ok(())
}
