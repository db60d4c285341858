// src/numerics/types/vector.rs
// Dimension-generic numeric tuple with explicit broadcasting rules.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use crate::numerics::error::{GeometryError, Result};
use crate::numerics::tolerance;

/// How `add_with`/`subtract_with` combine vectors of unequal dimension.
///
/// The result always has `max(dim a, dim b)` components unless the policy
/// rejects the mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BroadcastPolicy {
    /// Missing components of the shorter operand read as zero.
    PadWithZero,
    /// Components past the shorter operand are copied from the longer one,
    /// negated when they come from the right-hand side of a subtraction.
    PadWithOperand,
    /// Unequal dimensions are a `ShapeMismatch` error.
    RejectMismatch,
}

/// GeneralVector is an ordered, fixed-length tuple of scalars.
///
/// The dimension is set at construction. Components may be non-finite;
/// `is_valid` reports whether they all are finite.
#[derive(Clone, Debug)]
pub struct GeneralVector<T: FloatingPoint = f64> {
    components: Vec<T>,
}

impl<T> Serialize for GeneralVector<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.components.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for GeneralVector<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let components = Vec::<T>::deserialize(deserializer)?;
        Ok(GeneralVector { components })
    }
}

impl<T: FloatingPoint> GeneralVector<T> {
    /// Construct from an ordered list of components.
    pub fn new(components: Vec<T>) -> Self {
        Self { components }
    }

    /// Vector of `dimension` zeros.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            components: vec![T::zero(); dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[T] {
        &self.components
    }

    /// Mutable view of the components; the dimension cannot change.
    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.components.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.components
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.components
            .get(index)
            .copied()
            .ok_or_else(|| GeometryError::index(index, self.dimension()))
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.dimension();
        let slot = self
            .components
            .get_mut(index)
            .ok_or_else(|| GeometryError::index(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Copy of this vector with one component replaced.
    pub fn with_component(&self, index: usize, value: T) -> Result<Self> {
        let mut copy = self.clone();
        copy.set(index, value)?;
        Ok(copy)
    }

    /// True iff every component is finite.
    pub fn is_valid(&self) -> bool {
        self.components.iter().all(|c| c.is_valid())
    }

    /// Smallest absolute value among the finite components.
    ///
    /// Seeds at `T::max_value()`, so a vector without finite components
    /// reports the largest representable value.
    pub fn minimum_coordinate(&self) -> T {
        self.components
            .iter()
            .filter(|c| c.is_valid())
            .fold(T::max_value(), |acc, c| acc.min(c.abs()))
    }

    /// Largest absolute value among the finite components, or zero.
    pub fn maximum_coordinate(&self) -> T {
        self.components
            .iter()
            .filter(|c| c.is_valid())
            .fold(T::zero(), |acc, c| acc.max(c.abs()))
    }

    pub fn square_length(&self) -> T {
        self.components
            .iter()
            .fold(T::zero(), |acc, &c| acc + c * c)
    }

    /// Euclidean norm.
    pub fn length(&self) -> T {
        self.square_length().sqrt()
    }

    /// Euclidean distance, with unequal dimensions broadcast by
    /// `PadWithOperand`.
    pub fn distance_to(&self, other: &Self) -> T {
        (self - other).length()
    }

    /// Dot product of two vectors of equal dimension.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.require_same_dimension(other)?;
        Ok(self
            .components
            .iter()
            .zip(other.components.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Divides every component by the current length.
    ///
    /// Returns false and leaves the vector untouched when it is invalid.
    /// A zero-length vector is not guarded: its components become NaN.
    pub fn unitize(&mut self) -> bool {
        if !self.is_valid() {
            tracing::trace!(dimension = self.dimension(), "unitize refused an invalid vector");
            return false;
        }
        let length = self.length();
        for c in self.components.iter_mut() {
            *c = *c / length;
        }
        true
    }

    /// Unitized copy. An invalid vector is returned unchanged.
    pub fn unitized(&self) -> Self {
        let mut copy = self.clone();
        copy.unitize();
        copy
    }

    pub fn scale(&self, factor: T) -> Self {
        self.map(|c| c * factor)
    }

    pub fn divide(&self, divisor: T) -> Self {
        self.map(|c| c / divisor)
    }

    pub fn negate(&self) -> Self {
        self.map(|c| -c)
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            components: self.components.iter().map(|&c| f(c)).collect(),
        }
    }

    /// Componentwise sum under the given broadcasting policy.
    pub fn add_with(&self, other: &Self, policy: BroadcastPolicy) -> Result<Self> {
        self.combine(other, policy, |a, b| a + b, |b| b)
    }

    /// Componentwise difference under the given broadcasting policy.
    pub fn subtract_with(&self, other: &Self, policy: BroadcastPolicy) -> Result<Self> {
        self.combine(other, policy, |a, b| a - b, |b| -b)
    }

    /// Sum that refuses unequal dimensions.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.add_with(other, BroadcastPolicy::RejectMismatch)
    }

    /// Difference that refuses unequal dimensions.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.subtract_with(other, BroadcastPolicy::RejectMismatch)
    }

    fn combine(
        &self,
        other: &Self,
        policy: BroadcastPolicy,
        op: impl Fn(T, T) -> T,
        tail_of_rhs: impl Fn(T) -> T,
    ) -> Result<Self> {
        if policy == BroadcastPolicy::RejectMismatch {
            self.require_same_dimension(other)?;
        }
        Ok(self.broadcast(other, policy, op, tail_of_rhs))
    }

    // `tail_of_rhs` maps a component that exists only in `other`.
    fn broadcast(
        &self,
        other: &Self,
        policy: BroadcastPolicy,
        op: impl Fn(T, T) -> T,
        tail_of_rhs: impl Fn(T) -> T,
    ) -> Self {
        let shared = self.dimension().min(other.dimension());
        let longest = self.dimension().max(other.dimension());
        let mut components = Vec::with_capacity(longest);
        for i in 0..shared {
            components.push(op(self.components[i], other.components[i]));
        }
        for i in shared..longest {
            let value = match (policy, self.dimension() > other.dimension()) {
                (BroadcastPolicy::PadWithZero, true) => op(self.components[i], T::zero()),
                (BroadcastPolicy::PadWithZero, false) => op(T::zero(), other.components[i]),
                (_, true) => self.components[i],
                (_, false) => tail_of_rhs(other.components[i]),
            };
            components.push(value);
        }
        Self { components }
    }

    fn require_same_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(GeometryError::shape(
                format!("dimension {}", self.dimension()),
                format!("dimension {}", other.dimension()),
            ));
        }
        Ok(())
    }

    /// Lexicographic comparison over the indices of `target`.
    ///
    /// Only `0..target.dimension()` is walked, so the result depends on which
    /// operand is the receiver when dimensions differ. A NaN pair is neither
    /// less nor greater and the walk moves on. If `self` runs out of
    /// components before a difference is found the walk fails with an index
    /// error.
    pub fn compare_to(&self, target: &Self) -> Result<Ordering> {
        for i in 0..target.dimension() {
            let mine = self.get(i)?;
            let theirs = target.components[i];
            if mine < theirs {
                return Ok(Ordering::Less);
            }
            if mine > theirs {
                return Ok(Ordering::Greater);
            }
        }
        Ok(Ordering::Equal)
    }

    /// Componentwise epsilon equality. Vectors of different dimension are
    /// never equal.
    pub fn epsilon_equals(&self, target: &Self, epsilon: T) -> bool {
        self.dimension() == target.dimension()
            && self
                .components
                .iter()
                .zip(target.components.iter())
                .all(|(&a, &b)| tolerance::epsilon_equals(a, b, epsilon))
    }
}

impl<T: FloatingPoint> PartialEq for GeneralVector<T> {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare_to(other), Ok(Ordering::Equal))
    }
}

impl<T: FloatingPoint> PartialOrd for GeneralVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl<T: FloatingPoint> fmt::Display for GeneralVector<T> {
    /// Renders `{c0},{c1},...`; a zero-dimensional vector renders empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{{{}}}", c)?;
        }
        Ok(())
    }
}

// Operators broadcast with PadWithOperand and never fail.

impl<'a, T: FloatingPoint> Add<&'a GeneralVector<T>> for &'a GeneralVector<T> {
    type Output = GeneralVector<T>;

    fn add(self, other: &'a GeneralVector<T>) -> GeneralVector<T> {
        self.broadcast(other, BroadcastPolicy::PadWithOperand, |a, b| a + b, |b| b)
    }
}

impl<'a, T: FloatingPoint> Sub<&'a GeneralVector<T>> for &'a GeneralVector<T> {
    type Output = GeneralVector<T>;

    fn sub(self, other: &'a GeneralVector<T>) -> GeneralVector<T> {
        self.broadcast(other, BroadcastPolicy::PadWithOperand, |a, b| a - b, |b| -b)
    }
}

impl<T: FloatingPoint> Add for GeneralVector<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl<T: FloatingPoint> Sub for GeneralVector<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl<T: FloatingPoint> Mul<T> for GeneralVector<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        self.scale(factor)
    }
}

impl<T: FloatingPoint> Mul<T> for &GeneralVector<T> {
    type Output = GeneralVector<T>;

    fn mul(self, factor: T) -> GeneralVector<T> {
        self.scale(factor)
    }
}

impl<T: FloatingPoint> Div<T> for GeneralVector<T> {
    type Output = Self;

    fn div(self, divisor: T) -> Self {
        self.divide(divisor)
    }
}

impl<T: FloatingPoint> Neg for GeneralVector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($t:ty) => {
        impl Mul<GeneralVector<$t>> for $t {
            type Output = GeneralVector<$t>;

            fn mul(self, vector: GeneralVector<$t>) -> GeneralVector<$t> {
                vector.scale(self)
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

impl<T: FloatingPoint> From<Vec<T>> for GeneralVector<T> {
    fn from(components: Vec<T>) -> Self {
        Self { components }
    }
}

impl<T: FloatingPoint> From<&[T]> for GeneralVector<T> {
    fn from(components: &[T]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }
}

impl<T: FloatingPoint, const N: usize> From<[T; N]> for GeneralVector<T> {
    fn from(array: [T; N]) -> Self {
        Self {
            components: array.to_vec(),
        }
    }
}

impl<T: FloatingPoint> From<GeneralVector<T>> for Vec<T> {
    fn from(v: GeneralVector<T>) -> Self {
        v.components
    }
}

impl<'a, T: FloatingPoint> IntoIterator for &'a GeneralVector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
