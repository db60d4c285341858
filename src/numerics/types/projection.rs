// src/numerics/types/projection.rs
// Shared surface of the fixed-dimension wrappers over GeneralVector<f64>.
//
// Each wrapper owns exactly one `content: GeneralVector<f64>` whose dimension
// never changes, so indexing into `components()` below the dimension is safe.

/// Generates constructors, axis accessors, delegated comparison, scalar
/// scaling, conversions and serde for a fixed-dimension wrapper.
macro_rules! fixed_dimension_common {
    ($name:ident, $dim:expr, [$(($axis:ident, $set_axis:ident, $idx:expr)),+ $(,)?]) => {
        impl $name {
            pub const DIMENSION: usize = $dim;

            pub(crate) fn from_content(content: GeneralVector<f64>) -> Self {
                debug_assert_eq!(content.dimension(), $dim);
                Self { content }
            }

            $(
                pub fn $axis(&self) -> f64 {
                    self.content.components()[$idx]
                }

                pub fn $set_axis(&mut self, value: f64) {
                    self.content.components_mut()[$idx] = value;
                }
            )+

            pub fn dimension(&self) -> usize {
                $dim
            }

            pub fn components(&self) -> &[f64] {
                self.content.components()
            }

            pub fn get(&self, index: usize) -> crate::numerics::error::Result<f64> {
                self.content.get(index)
            }

            pub fn set(&mut self, index: usize, value: f64) -> crate::numerics::error::Result<()> {
                self.content.set(index, value)
            }

            pub fn is_valid(&self) -> bool {
                self.content.is_valid()
            }

            pub fn minimum_coordinate(&self) -> f64 {
                self.content.minimum_coordinate()
            }

            pub fn maximum_coordinate(&self) -> f64 {
                self.content.maximum_coordinate()
            }

            pub fn epsilon_equals(&self, other: &Self, epsilon: f64) -> bool {
                self.content.epsilon_equals(&other.content, epsilon)
            }

            pub fn distance_to(&self, other: &Self) -> f64 {
                self.content.distance_to(&other.content)
            }

            pub fn as_general(&self) -> &GeneralVector<f64> {
                &self.content
            }

            /// Copy of the backing tuple with every component.
            pub fn to_general(&self) -> GeneralVector<f64> {
                self.content.clone()
            }

            /// Lexicographic comparison of the components.
            pub fn compare_to(&self, other: &Self) -> core::cmp::Ordering {
                // Equal dimensions: the walk never leaves the range.
                self.content
                    .compare_to(&other.content)
                    .unwrap_or(core::cmp::Ordering::Equal)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.compare_to(other) == core::cmp::Ordering::Equal
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.compare_to(other))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.content, f)
            }
        }

        impl TryFrom<GeneralVector<f64>> for $name {
            type Error = crate::numerics::error::GeometryError;

            fn try_from(content: GeneralVector<f64>) -> core::result::Result<Self, Self::Error> {
                if content.dimension() != $dim {
                    return Err(crate::numerics::error::GeometryError::shape(
                        format!("dimension {}", $dim),
                        format!("dimension {}", content.dimension()),
                    ));
                }
                Ok(Self { content })
            }
        }

        impl From<$name> for GeneralVector<f64> {
            fn from(value: $name) -> Self {
                value.content
            }
        }

        impl From<[f64; $dim]> for $name {
            fn from(array: [f64; $dim]) -> Self {
                Self::from_content(GeneralVector::from(array))
            }
        }

        impl From<$name> for [f64; $dim] {
            fn from(value: $name) -> Self {
                let mut array = [0.0; $dim];
                array.copy_from_slice(value.content.components());
                array
            }
        }

        impl core::ops::Mul<f64> for &$name {
            type Output = $name;

            fn mul(self, factor: f64) -> $name {
                $name::from_content(self.content.scale(factor))
            }
        }

        impl core::ops::Mul<f64> for $name {
            type Output = $name;

            fn mul(self, factor: f64) -> $name {
                &self * factor
            }
        }

        impl core::ops::Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, value: $name) -> $name {
                &value * self
            }
        }

        impl core::ops::Mul<&$name> for f64 {
            type Output = $name;

            fn mul(self, value: &$name) -> $name {
                value * self
            }
        }

        impl core::ops::Div<f64> for &$name {
            type Output = $name;

            fn div(self, divisor: f64) -> $name {
                $name::from_content(self.content.divide(divisor))
            }
        }

        impl core::ops::Div<f64> for $name {
            type Output = $name;

            fn div(self, divisor: f64) -> $name {
                &self / divisor
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.content, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let content = <GeneralVector<f64> as serde::Deserialize>::deserialize(deserializer)?;
                $name::try_from(content).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Implements a binary operator for every owned/borrowed operand pairing,
/// with the body written once against two references.
macro_rules! role_binop {
    ($op:ident, $method:ident, $lhs:ty, $rhs:ty => $out:ty, |$a:ident, $b:ident| $body:expr) => {
        impl<'a> core::ops::$op<&'a $rhs> for &'a $lhs {
            type Output = $out;

            fn $method(self, rhs: &'a $rhs) -> $out {
                let $a = self;
                let $b = rhs;
                $body
            }
        }

        impl core::ops::$op<$rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                core::ops::$op::$method(&self, &rhs)
            }
        }

        impl<'a> core::ops::$op<&'a $rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: &'a $rhs) -> $out {
                core::ops::$op::$method(&self, rhs)
            }
        }

        impl<'a> core::ops::$op<$rhs> for &'a $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                core::ops::$op::$method(self, &rhs)
            }
        }
    };
}

pub(crate) use fixed_dimension_common;
pub(crate) use role_binop;
