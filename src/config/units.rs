//! Unit types for physical quantities.
//!
//! Keeps mirror angles and running times apart at compile time in the
//! configuration and the position tracker.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Angular mirror position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Magnitude, sign dropped.
    #[inline]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }

    /// Scale by a dimensionless fraction (e.g. a safety buffer).
    #[inline]
    pub fn scaled(self, fraction: f64) -> Self {
        Self(self.0 * fraction)
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// A duration in seconds of rig running time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whole microseconds for a delay provider.
    ///
    /// Negative and NaN durations become zero; very long ones saturate.
    #[inline]
    pub fn as_micros(self) -> u32 {
        let micros = libm::round(self.0 * 1_000_000.0);
        if micros > 0.0 {
            micros as u32
        } else {
            0
        }
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
    /// Convert to Seconds.
    fn secs(self) -> Seconds;
}

impl UnitExt for f64 {
    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }

    #[inline]
    fn secs(self) -> Seconds {
        Seconds(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_arithmetic() {
        let d = 90.0.degrees() - 135.0.degrees();
        assert_eq!(d, Degrees(-45.0));
        assert_eq!(d.abs(), Degrees(45.0));
        assert_eq!((-d).value(), 45.0);
        assert_eq!(Degrees(180.0).scaled(0.8), Degrees(144.0));
    }

    #[test]
    fn test_seconds_to_micros() {
        assert_eq!(0.15.secs().as_micros(), 150_000);
        assert_eq!(0.02.secs().as_micros(), 20_000);
        assert_eq!((-1.0).secs().as_micros(), 0);
        assert_eq!(f64::NAN.secs().as_micros(), 0);
        assert_eq!(1.0e12.secs().as_micros(), u32::MAX);
    }
}
