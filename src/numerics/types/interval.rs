// src/numerics/types/interval.rs
// One-dimensional parametric range.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use crate::numerics::error::{GeometryError, Result};
use crate::numerics::tolerance;

/// Interval is an ordered pair (t0, t1) of scalars.
///
/// The bounds are stored as given; t0 may exceed t1. `min`, `max`, `mid`
/// and `length` are derived on demand.
#[derive(Copy, Clone, Debug)]
pub struct Interval<T: FloatingPoint = f64> {
    pub t0: T,
    pub t1: T,
}

impl<T> Serialize for Interval<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.t0, &self.t1).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Interval<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (t0, t1) = <(T, T)>::deserialize(deserializer)?;
        Ok(Interval { t0, t1 })
    }
}

impl<T: FloatingPoint> Default for Interval<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: FloatingPoint> Interval<T> {
    /// Construct an interval; the bounds are not reordered.
    pub fn new(t0: T, t1: T) -> Self {
        Self { t0, t1 }
    }

    /// Bound by index: 0 is t0, 1 is t1.
    pub fn get(&self, index: usize) -> Result<T> {
        match index {
            0 => Ok(self.t0),
            1 => Ok(self.t1),
            _ => Err(GeometryError::index(index, 2)),
        }
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        match index {
            0 => self.t0 = value,
            1 => self.t1 = value,
            _ => return Err(GeometryError::index(index, 2)),
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.t0.is_valid() && self.t1.is_valid()
    }

    /// Smaller bound; NaN if either bound is NaN.
    pub fn min(&self) -> T {
        if self.t0.is_nan() || self.t1.is_nan() {
            return self.t0 + self.t1;
        }
        self.t0.min(self.t1)
    }

    /// Larger bound; NaN if either bound is NaN.
    pub fn max(&self) -> T {
        if self.t0.is_nan() || self.t1.is_nan() {
            return self.t0 + self.t1;
        }
        self.t0.max(self.t1)
    }

    pub fn mid(&self) -> T {
        (self.t0 + self.t1) / T::from_f64(2.0)
    }

    /// Signed length `t1 - t0`.
    pub fn length(&self) -> T {
        self.t1 - self.t0
    }

    pub fn is_singleton(&self) -> bool {
        self.t0 == self.t1
    }

    pub fn is_increasing(&self) -> bool {
        self.t0 < self.t1
    }

    pub fn is_decreasing(&self) -> bool {
        self.t0 > self.t1
    }

    pub fn swap(&mut self) {
        core::mem::swap(&mut self.t0, &mut self.t1);
    }

    /// Swaps the bounds only if the interval is decreasing.
    pub fn make_increasing(&mut self) {
        if self.is_decreasing() {
            self.swap();
        }
    }

    /// Normalizes to increasing, then extends a bound to include `value`.
    pub fn grow(&mut self, value: T) {
        self.make_increasing();
        if self.t0 > value {
            self.t0 = value;
        }
        if self.t1 < value {
            self.t1 = value;
        }
    }

    /// Maps the interval onto its negation: (t0, t1) becomes (-t1, -t0).
    pub fn reverse(&mut self) {
        let t0 = self.t0;
        self.t0 = -self.t1;
        self.t1 = -t0;
    }

    /// Linear interpolation from t0 (u = 0) to t1 (u = 1).
    pub fn parameter_at(&self, normalized: T) -> T {
        (T::one() - normalized) * self.t0 + normalized * self.t1
    }

    pub fn parameter_interval_at(&self, normalized: Interval<T>) -> Interval<T> {
        Interval::new(self.parameter_at(normalized.t0), self.parameter_at(normalized.t1))
    }

    /// Inverse of `parameter_at`. A singleton interval returns t0.
    pub fn normalized_parameter_at(&self, parameter: T) -> T {
        if self.is_singleton() {
            self.t0
        } else {
            (parameter - self.t0) / self.length()
        }
    }

    pub fn normalized_interval_at(&self, interval: Interval<T>) -> Interval<T> {
        Interval::new(
            self.normalized_parameter_at(interval.t0),
            self.normalized_parameter_at(interval.t1),
        )
    }

    /// Containment test accepting either orientation.
    ///
    /// With `strict` the bounds themselves are excluded.
    pub fn includes_parameter(&self, t: T, strict: bool) -> bool {
        if strict {
            (self.t0 < t && t < self.t1) || (self.t1 < t && t < self.t0)
        } else {
            (self.t0 <= t && t <= self.t1) || (self.t1 <= t && t <= self.t0)
        }
    }

    /// True when both bounds of `other` lie inside this interval.
    pub fn includes_interval(&self, other: &Interval<T>, strict: bool) -> bool {
        self.includes_parameter(other.t0, strict) && self.includes_parameter(other.t1, strict)
    }

    /// Increasing overlap of two intervals, or the default interval when
    /// they are disjoint.
    pub fn from_intersection(a: Interval<T>, b: Interval<T>) -> Interval<T> {
        match Self::increasing_pair(a, b) {
            Some((a, b)) => Interval::new(a.t0.max(b.t0), a.t1.min(b.t1)),
            None => Interval::default(),
        }
    }

    /// Increasing span of two overlapping intervals, or the default interval
    /// when they are disjoint.
    pub fn from_union(a: Interval<T>, b: Interval<T>) -> Interval<T> {
        match Self::increasing_pair(a, b) {
            Some((a, b)) => Interval::new(a.t0.min(b.t0), a.t1.max(b.t1)),
            None => Interval::default(),
        }
    }

    // Both operands made increasing, or None when they do not touch.
    fn increasing_pair(mut a: Interval<T>, mut b: Interval<T>) -> Option<(Interval<T>, Interval<T>)> {
        a.make_increasing();
        b.make_increasing();
        if a.max() < b.min() || b.max() < a.min() {
            return None;
        }
        Some((a, b))
    }

    /// Lexicographic comparison on (t0, t1). NaN bounds compare equal.
    pub fn compare_to(&self, target: &Interval<T>) -> Ordering {
        let by_bound = |mine: T, theirs: T| {
            if mine < theirs {
                Ordering::Less
            } else if mine > theirs {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        };
        by_bound(self.t0, target.t0).then(by_bound(self.t1, target.t1))
    }

    pub fn epsilon_equals(&self, target: &Interval<T>, epsilon: T) -> bool {
        tolerance::epsilon_equals(self.t0, target.t0, epsilon)
            && tolerance::epsilon_equals(self.t1, target.t1, epsilon)
    }
}

impl<T: FloatingPoint> PartialEq for Interval<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }
}

impl<T: FloatingPoint> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl<T: FloatingPoint> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.t0, self.t1)
    }
}

// Shifting by a scalar

impl<T: FloatingPoint> Add<T> for Interval<T> {
    type Output = Self;

    fn add(self, offset: T) -> Self {
        Interval::new(self.t0 + offset, self.t1 + offset)
    }
}

impl<T: FloatingPoint> Sub<T> for Interval<T> {
    type Output = Self;

    fn sub(self, offset: T) -> Self {
        Interval::new(self.t0 - offset, self.t1 - offset)
    }
}

macro_rules! impl_scalar_lhs_ops {
    ($t:ty) => {
        impl Add<Interval<$t>> for $t {
            type Output = Interval<$t>;

            fn add(self, interval: Interval<$t>) -> Interval<$t> {
                interval + self
            }
        }

        /// `s - [t0, t1]` is `[s - t0, s - t1]`.
        impl Sub<Interval<$t>> for $t {
            type Output = Interval<$t>;

            fn sub(self, interval: Interval<$t>) -> Interval<$t> {
                Interval::new(self - interval.t0, self - interval.t1)
            }
        }
    };
}

impl_scalar_lhs_ops!(f32);
impl_scalar_lhs_ops!(f64);

impl<T: FloatingPoint> From<(T, T)> for Interval<T> {
    fn from(tuple: (T, T)) -> Self {
        Interval::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<Interval<T>> for (T, T) {
    fn from(interval: Interval<T>) -> Self {
        (interval.t0, interval.t1)
    }
}
