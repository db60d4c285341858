// src/numerics/types/point.rs
// Fixed-dimension points backed by GeneralVector<f64>.

use super::projection::{fixed_dimension_common, role_binop};
use super::vector::GeneralVector;
use super::vector3d::Vector3d;

/// A position in the plane.
#[derive(Clone, Debug)]
pub struct Point2d {
    content: GeneralVector<f64>,
}

/// A position in space. Differences of points are `Vector3d`s.
#[derive(Clone, Debug)]
pub struct Point3d {
    content: GeneralVector<f64>,
}

/// A point in homogeneous 4D coordinates.
#[derive(Clone, Debug)]
pub struct Point4d {
    content: GeneralVector<f64>,
}

fixed_dimension_common!(Point2d, 2, [(x, set_x, 0), (y, set_y, 1)]);
fixed_dimension_common!(Point3d, 3, [(x, set_x, 0), (y, set_y, 1), (z, set_z, 2)]);
fixed_dimension_common!(Point4d, 4, [(x, set_x, 0), (y, set_y, 1), (z, set_z, 2), (w, set_w, 3)]);

impl Point2d {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_content(GeneralVector::new(vec![x, y]))
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Point3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_content(GeneralVector::new(vec![x, y, z]))
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Point4d {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_content(GeneralVector::new(vec![x, y, z, w]))
    }
}

role_binop!(Add, add, Point2d, Point2d => Point2d, |a, b| Point2d::from_content(a.as_general() + b.as_general()));
role_binop!(Sub, sub, Point2d, Point2d => Point2d, |a, b| Point2d::from_content(a.as_general() - b.as_general()));

role_binop!(Add, add, Point3d, Vector3d => Point3d, |a, b| Point3d::from_content(a.as_general() + b.as_general()));
role_binop!(Add, add, Vector3d, Point3d => Point3d, |a, b| Point3d::from_content(a.as_general() + b.as_general()));
role_binop!(Add, add, Point3d, Point3d => Point3d, |a, b| Point3d::from_content(a.as_general() + b.as_general()));
role_binop!(Sub, sub, Point3d, Point3d => Vector3d, |a, b| Vector3d::from_content(a.as_general() - b.as_general()));
role_binop!(Sub, sub, Point3d, Vector3d => Point3d, |a, b| Point3d::from_content(a.as_general() - b.as_general()));

role_binop!(Add, add, Point4d, Point4d => Point4d, |a, b| Point4d::from_content(a.as_general() + b.as_general()));
role_binop!(Sub, sub, Point4d, Point4d => Point4d, |a, b| Point4d::from_content(a.as_general() - b.as_general()));

impl From<Vector3d> for Point3d {
    fn from(vector: Vector3d) -> Self {
        Point3d::from_content(vector.into())
    }
}

impl From<Point3d> for Vector3d {
    fn from(point: Point3d) -> Self {
        Vector3d::from_content(point.into())
    }
}
