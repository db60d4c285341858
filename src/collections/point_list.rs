// src/collections/point_list.rs
// Ordered list of 3D points with per-axis helpers.

use core::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::numerics::types::point::Point3d;

/// Point3dList is a growable, ordered list of `Point3d`.
///
/// It derefs to a slice, so the polyline queries and every slice method
/// work on it directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3dList {
    points: Vec<Point3d>,
}

impl Point3dList {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Point3d) {
        self.points.push(point);
    }

    pub fn push_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.points.push(Point3d::new(x, y, z));
    }

    pub fn insert(&mut self, index: usize, point: Point3d) {
        self.points.insert(index, point);
    }

    pub fn remove(&mut self, index: usize) -> Point3d {
        self.points.remove(index)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn into_vec(self) -> Vec<Point3d> {
        self.points
    }

    pub fn x_array(&self) -> Vec<f64> {
        self.points.iter().map(Point3d::x).collect()
    }

    pub fn y_array(&self) -> Vec<f64> {
        self.points.iter().map(Point3d::y).collect()
    }

    pub fn z_array(&self) -> Vec<f64> {
        self.points.iter().map(Point3d::z).collect()
    }

    pub fn set_all_x(&mut self, x: f64) {
        self.points.iter_mut().for_each(|p| p.set_x(x));
    }

    pub fn set_all_y(&mut self, y: f64) {
        self.points.iter_mut().for_each(|p| p.set_y(y));
    }

    pub fn set_all_z(&mut self, z: f64) {
        self.points.iter_mut().for_each(|p| p.set_z(z));
    }

    pub fn closest_index(&self, target: &Point3d) -> Option<usize> {
        closest_index(&self.points, target)
    }
}

/// Index of the point nearest to `target`; `None` for an empty slice.
///
/// An exact hit ends the scan early. Ties keep the first index. Points at
/// a NaN distance are skipped.
pub fn closest_index(points: &[Point3d], target: &Point3d) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let distance = p.distance_to(target);
        if distance == 0.0 {
            return Some(i);
        }
        let closer = match best {
            Some((_, nearest)) => distance < nearest,
            None => !distance.is_nan(),
        };
        if closer {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

impl Deref for Point3dList {
    type Target = [Point3d];

    fn deref(&self) -> &[Point3d] {
        &self.points
    }
}

impl DerefMut for Point3dList {
    fn deref_mut(&mut self) -> &mut [Point3d] {
        &mut self.points
    }
}

impl From<Vec<Point3d>> for Point3dList {
    fn from(points: Vec<Point3d>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point3d> for Point3dList {
    fn from_iter<I: IntoIterator<Item = Point3d>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point3d> for Point3dList {
    fn extend<I: IntoIterator<Item = Point3d>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl IntoIterator for Point3dList {
    type Item = Point3d;
    type IntoIter = std::vec::IntoIter<Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Point3dList {
    type Item = &'a Point3d;
    type IntoIter = core::slice::Iter<'a, Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
