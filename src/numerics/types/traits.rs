// src/numerics/types/traits.rs
// FloatingPoint trait shared by the generic numeric types.

/// FloatingPoint is the scalar abstraction used by `GeneralVector`,
/// `Interval` and `Matrix`.
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self,
/// plus the handful of float intrinsics the algebra needs.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug + core::fmt::Display
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Largest finite value of the type.
    fn max_value() -> Self;
    fn from_f64(value: f64) -> Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn acos(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_positive(self) -> bool;

    /// Neither infinite nor NaN.
    fn is_valid(self) -> bool {
        !self.is_infinite() && !self.is_nan()
    }
}

macro_rules! impl_floating_point {
    ($t:ty) => {
        impl FloatingPoint for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn max_value() -> Self { <$t>::MAX }
            fn from_f64(value: f64) -> Self { value as $t }

            fn abs(self) -> Self { <$t>::abs(self) }
            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            fn acos(self) -> Self { <$t>::acos(self) }
            fn min(self, other: Self) -> Self { <$t>::min(self, other) }
            fn max(self, other: Self) -> Self { <$t>::max(self, other) }

            fn is_nan(self) -> bool { <$t>::is_nan(self) }
            fn is_infinite(self) -> bool { <$t>::is_infinite(self) }
            fn is_sign_positive(self) -> bool { <$t>::is_sign_positive(self) }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);
