// src/numerics/tolerance.rs
// Scalar tolerances, angle conversions and epsilon comparison.

use serde::{Deserialize, Serialize};

use super::types::traits::FloatingPoint;

/// Absolute tolerance below which a length is treated as zero.
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// One degree, in radians.
pub const DEFAULT_ANGLE_TOLERANCE: f64 = std::f64::consts::PI / 180.0;

pub fn to_radians(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians / std::f64::consts::PI * 180.0
}

/// True when `value` is neither infinite nor NaN.
pub fn is_valid_scalar<T: FloatingPoint>(value: T) -> bool {
    value.is_valid()
}

/// Compares two scalars within an absolute tolerance.
///
/// NaN never compares equal. An infinity only matches the infinity of the
/// same sign. Everything else matches when `y - epsilon <= x <= y + epsilon`.
pub fn epsilon_equals<T: FloatingPoint>(x: T, y: T, epsilon: T) -> bool {
    if x.is_nan() || y.is_nan() {
        return false;
    }
    if x.is_infinite() {
        return y.is_infinite() && x.is_sign_positive() == y.is_sign_positive();
    }
    y - epsilon <= x && x <= y + epsilon
}

/// Tolerances used by the geometric queries.
///
/// `zero_tolerance` decides unit length checks; `angle_tolerance` (radians)
/// drives parallel and perpendicular tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    pub zero_tolerance: f64,
    pub angle_tolerance: f64,
}

impl Default for ToleranceConfig {
    /// `ZERO_TOLERANCE` and one degree.
    fn default() -> Self {
        Self {
            zero_tolerance: ZERO_TOLERANCE,
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
        }
    }
}

impl ToleranceConfig {
    pub fn new(zero_tolerance: f64, angle_tolerance: f64) -> Self {
        Self {
            zero_tolerance,
            angle_tolerance,
        }
    }

    /// Default zero tolerance with an angle tolerance given in degrees.
    pub fn with_angle_degrees(degrees: f64) -> Self {
        Self {
            angle_tolerance: to_radians(degrees),
            ..Self::default()
        }
    }
}
