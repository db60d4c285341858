//! Geometric value-type kernel.
//!
//! `numerics::types` holds the algebra: the dimension-generic
//! [`GeneralVector`], [`Interval`], the dense [`Matrix`], and the
//! fixed-dimension points, vectors and lines built on `GeneralVector`.
//! `collections` adds a point list and polyline queries on top.

pub mod collections;
pub mod numerics;

pub use collections::point_list::Point3dList;
pub use numerics::error::{GeometryError, Result};
pub use numerics::tolerance::ToleranceConfig;
pub use numerics::types::interval::Interval;
pub use numerics::types::line::{GeneralLine, Line};
pub use numerics::types::matrix::Matrix;
pub use numerics::types::point::{Point2d, Point3d, Point4d};
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector::{BroadcastPolicy, GeneralVector};
pub use numerics::types::vector3d::{Parallelism, Vector3d};
