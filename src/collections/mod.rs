//! Containers of fixed-dimension points.
//!
//! Polyline behaviour lives in free functions over `&[Point3d]` rather than
//! in a list subtype.

pub mod point_list;
pub mod polyline;
