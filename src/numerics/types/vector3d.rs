// src/numerics/types/vector3d.rs
// Three-dimensional displacement vector.

use super::projection::{fixed_dimension_common, role_binop};
use super::vector::GeneralVector;
use crate::numerics::tolerance::{self, ToleranceConfig};

/// A displacement in space.
///
/// Shares its algebra with `Point3d`; only the operator result types
/// differ (`Point3d - Point3d` is a `Vector3d`).
#[derive(Clone, Debug)]
pub struct Vector3d {
    content: GeneralVector<f64>,
}

fixed_dimension_common!(Vector3d, 3, [(x, set_x, 0), (y, set_y, 1), (z, set_z, 2)]);

/// Outcome of a parallelism test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parallelism {
    /// One of the vectors has zero length.
    Degenerate,
    /// Same or opposite direction within the angle tolerance.
    Parallel,
    NotParallel,
}

impl Vector3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_content(GeneralVector::new(vec![x, y, z]))
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn length(&self) -> f64 {
        self.content.length()
    }

    pub fn square_length(&self) -> f64 {
        self.content.square_length()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    pub fn is_unit_vector(&self) -> bool {
        self.is_unit_vector_within(&ToleranceConfig::default())
    }

    pub fn is_unit_vector_within(&self, config: &ToleranceConfig) -> bool {
        (self.length() - 1.0).abs() < config.zero_tolerance
    }

    pub fn dot(&self, other: &Vector3d) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    pub fn cross_product(a: &Vector3d, b: &Vector3d) -> Vector3d {
        Vector3d::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }

    /// Angle in radians between two vectors, from the dot product of their
    /// unitized copies.
    ///
    /// A zero-length input yields NaN.
    pub fn vector_angle(a: &Vector3d, b: &Vector3d) -> f64 {
        let cosine = a.unitized().dot(&b.unitized());
        cosine.clamp(-1.0, 1.0).acos()
    }

    /// Rescale to unit length in place.
    ///
    /// Returns false and leaves the vector unchanged when it is invalid. A
    /// zero vector is not guarded against and becomes NaN.
    pub fn unitize(&mut self) -> bool {
        self.content.unitize()
    }

    pub fn unitized(&self) -> Vector3d {
        let mut copy = self.clone();
        copy.unitize();
        copy
    }

    /// Flips the direction in place; refused for an invalid vector.
    pub fn reverse(&mut self) -> bool {
        if !self.is_valid() {
            return false;
        }
        self.content = self.content.negate();
        true
    }

    pub fn is_parallel_to(&self, other: &Vector3d) -> Parallelism {
        self.is_parallel_to_within(other, tolerance::DEFAULT_ANGLE_TOLERANCE)
    }

    pub fn is_parallel_to_within(&self, other: &Vector3d, angle_tolerance: f64) -> Parallelism {
        if self.is_zero() || other.is_zero() {
            return Parallelism::Degenerate;
        }
        let angle = Self::vector_angle(self, other);
        if (std::f64::consts::PI - angle).min(angle) <= angle_tolerance {
            Parallelism::Parallel
        } else {
            Parallelism::NotParallel
        }
    }

    /// True when the angle between the vectors is within tolerance of a
    /// right angle. A zero vector is perpendicular to everything.
    pub fn is_perpendicular_to(&self, other: &Vector3d) -> bool {
        self.is_perpendicular_to_within(other, tolerance::DEFAULT_ANGLE_TOLERANCE)
    }

    pub fn is_perpendicular_to_within(&self, other: &Vector3d, angle_tolerance: f64) -> bool {
        if self.is_zero() || other.is_zero() {
            return true;
        }
        (Self::vector_angle(self, other) - std::f64::consts::FRAC_PI_2).abs() <= angle_tolerance
    }
}

role_binop!(Add, add, Vector3d, Vector3d => Vector3d, |a, b| Vector3d::from_content(a.as_general() + b.as_general()));
role_binop!(Sub, sub, Vector3d, Vector3d => Vector3d, |a, b| Vector3d::from_content(a.as_general() - b.as_general()));

impl core::ops::Neg for Vector3d {
    type Output = Vector3d;

    fn neg(self) -> Vector3d {
        Vector3d::from_content(self.content.negate())
    }
}

impl core::ops::Neg for &Vector3d {
    type Output = Vector3d;

    fn neg(self) -> Vector3d {
        Vector3d::from_content(self.content.negate())
    }
}
