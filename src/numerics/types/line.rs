// src/numerics/types/line.rs
// Straight segments: the 3D `Line` and the N-dimensional `GeneralLine`.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::GeneralVector;
use super::vector3d::Vector3d;
use crate::numerics::error::{GeometryError, Result};

// Getter/setter pairs for one coordinate of one endpoint.
macro_rules! endpoint_coordinates {
    ($(($get:ident, $set:ident, $end:ident, $axis:ident, $set_axis:ident)),+ $(,)?) => {
        $(
            pub fn $get(&self) -> f64 {
                self.$end.$axis()
            }

            pub fn $set(&mut self, value: f64) {
                self.$end.$set_axis(value);
            }
        )+
    };
}

/// A finite segment from `from` to `to`.
///
/// Direction, unit tangent and length are derived from the endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Point3d,
    pub to: Point3d,
}

impl Line {
    pub fn new(from: Point3d, to: Point3d) -> Self {
        Self { from, to }
    }

    /// Segment starting at `from` and spanning `span`.
    pub fn from_span(from: Point3d, span: &Vector3d) -> Self {
        let to = &from + span;
        Self { from, to }
    }

    /// Segment of `length` along the unitized `direction`.
    pub fn from_direction(from: Point3d, direction: &Vector3d, length: f64) -> Self {
        let to = &from + &(&direction.unitized() * length);
        Self { from, to }
    }

    pub fn from_coordinates(x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) -> Self {
        Self::new(Point3d::new(x0, y0, z0), Point3d::new(x1, y1, z1))
    }

    endpoint_coordinates!(
        (from_x, set_from_x, from, x, set_x),
        (from_y, set_from_y, from, y, set_y),
        (from_z, set_from_z, from, z, set_z),
        (to_x, set_to_x, to, x, set_x),
        (to_y, set_to_y, to, y, set_y),
        (to_z, set_to_z, to, z, set_z),
    );

    pub fn is_valid(&self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }

    pub fn direction(&self) -> Vector3d {
        &self.to - &self.from
    }

    pub fn unit_tangent(&self) -> Vector3d {
        self.direction().unitized()
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }

    /// Moves `to` along the current unit tangent so the segment has the
    /// given length.
    pub fn set_length(&mut self, length: f64) {
        self.to = &self.from + &(&self.unit_tangent() * length);
    }

    pub fn flip(&mut self) {
        core::mem::swap(&mut self.from, &mut self.to);
    }

    /// Affine interpolation: `t = 0` is `from`, `t = 1` is `to`.
    pub fn point_at(&self, t: f64) -> Point3d {
        &(&self.from * (1.0 - t)) + &(&self.to * t)
    }

    pub fn closest_parameter(&self, _point: &Point3d) -> Result<f64> {
        Err(GeometryError::not_implemented("Line::closest_parameter"))
    }

    pub fn closest_point(&self, point: &Point3d, limit_to_finite_segment: bool) -> Result<Point3d> {
        let mut t = self.closest_parameter(point)?;
        if limit_to_finite_segment {
            t = t.clamp(0.0, 1.0);
        }
        Ok(self.point_at(t))
    }

    pub fn distance_to(&self, point: &Point3d, limit_to_finite_segment: bool) -> Result<f64> {
        Ok(self
            .closest_point(point, limit_to_finite_segment)?
            .distance_to(point))
    }

    pub fn minimum_distance_to_point(&self, point: &Point3d) -> Result<f64> {
        self.distance_to(point, true)
    }

    pub fn minimum_distance_to_line(&self, _other: &Line) -> Result<f64> {
        Err(GeometryError::not_implemented("Line::minimum_distance_to_line"))
    }

    /// Distance to whichever endpoint is farther from `point`.
    pub fn maximum_distance_to_point(&self, point: &Point3d) -> f64 {
        self.from.distance_to(point).max(self.to.distance_to(point))
    }

    /// Largest distance between any endpoint of this line and any endpoint
    /// of `other`.
    pub fn maximum_distance_to_line(&self, other: &Line) -> f64 {
        [
            self.from.distance_to(&other.from),
            self.from.distance_to(&other.to),
            self.to.distance_to(&other.from),
            self.to.distance_to(&other.to),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    /// Pushes `from` back by `start` and `to` forward by `end` along the
    /// unit tangent.
    ///
    /// Returns false without touching the line when it is invalid or has
    /// zero length.
    pub fn extend(&mut self, start: f64, end: f64) -> bool {
        if !self.is_valid() || self.length() == 0.0 {
            tracing::trace!(line = %self, "extend refused a degenerate line");
            return false;
        }
        let unit = self.unit_tangent();
        self.from = &self.from - &(&unit * start);
        self.to = &self.to + &(&unit * end);
        true
    }

    pub fn epsilon_equals(&self, other: &Line, epsilon: f64) -> bool {
        self.from.epsilon_equals(&other.from, epsilon) && self.to.epsilon_equals(&other.to, epsilon)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.from, self.to)
    }
}

/// A finite segment between two endpoints of the same dimension.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneralLine {
    from: GeneralVector<f64>,
    to: GeneralVector<f64>,
}

impl GeneralLine {
    /// Fails with a shape mismatch when the endpoint dimensions differ.
    pub fn new(from: GeneralVector<f64>, to: GeneralVector<f64>) -> Result<Self> {
        Self::check_dimensions(&from, &to)?;
        Ok(Self { from, to })
    }

    /// Segment of `length` along the unitized `direction`.
    pub fn from_direction(from: GeneralVector<f64>, direction: &GeneralVector<f64>, length: f64) -> Result<Self> {
        let to = from.checked_add(&direction.unitized().scale(length))?;
        Ok(Self { from, to })
    }

    fn check_dimensions(from: &GeneralVector<f64>, to: &GeneralVector<f64>) -> Result<()> {
        if from.dimension() != to.dimension() {
            return Err(GeometryError::shape(
                format!("dimension {}", from.dimension()),
                format!("dimension {}", to.dimension()),
            ));
        }
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.from.dimension()
    }

    pub fn from(&self) -> &GeneralVector<f64> {
        &self.from
    }

    pub fn to(&self) -> &GeneralVector<f64> {
        &self.to
    }

    pub fn set_from(&mut self, from: GeneralVector<f64>) -> Result<()> {
        Self::check_dimensions(&from, &self.to)?;
        self.from = from;
        Ok(())
    }

    pub fn set_to(&mut self, to: GeneralVector<f64>) -> Result<()> {
        Self::check_dimensions(&self.from, &to)?;
        self.to = to;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }

    pub fn direction(&self) -> GeneralVector<f64> {
        &self.to - &self.from
    }

    pub fn unit_tangent(&self) -> GeneralVector<f64> {
        self.direction().unitized()
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }

    pub fn set_length(&mut self, length: f64) {
        self.to = &self.from + &self.unit_tangent().scale(length);
    }

    pub fn flip(&mut self) {
        core::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn point_at(&self, t: f64) -> GeneralVector<f64> {
        &self.from.scale(1.0 - t) + &self.to.scale(t)
    }

    pub fn closest_parameter(&self, _point: &GeneralVector<f64>) -> Result<f64> {
        Err(GeometryError::not_implemented("GeneralLine::closest_parameter"))
    }

    pub fn minimum_distance_to_line(&self, _other: &GeneralLine) -> Result<f64> {
        Err(GeometryError::not_implemented("GeneralLine::minimum_distance_to_line"))
    }

    pub fn maximum_distance_to_point(&self, point: &GeneralVector<f64>) -> f64 {
        self.from.distance_to(point).max(self.to.distance_to(point))
    }

    pub fn extend(&mut self, start: f64, end: f64) -> bool {
        if !self.is_valid() || self.length() == 0.0 {
            tracing::trace!(dimension = self.dimension(), "extend refused a degenerate line");
            return false;
        }
        let unit = self.unit_tangent();
        self.from = &self.from - &unit.scale(start);
        self.to = &self.to + &unit.scale(end);
        true
    }

    pub fn epsilon_equals(&self, other: &GeneralLine, epsilon: f64) -> bool {
        self.from.epsilon_equals(&other.from, epsilon) && self.to.epsilon_equals(&other.to, epsilon)
    }
}

impl<'de> Deserialize<'de> for GeneralLine {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            from: GeneralVector<f64>,
            to: GeneralVector<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        GeneralLine::new(raw.from, raw.to).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for GeneralLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_x() -> Line {
        Line::from_coordinates(0.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[test]
    fn test_derived_properties() {
        let line = Line::from_coordinates(1.0, 1.0, 1.0, 1.0, 4.0, 5.0);
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.direction(), Vector3d::new(0.0, 3.0, 4.0));
        assert!(line.unit_tangent().epsilon_equals(&Vector3d::new(0.0, 0.6, 0.8), 1e-12));
        assert!(line.is_valid());
    }

    #[test]
    fn test_endpoint_coordinate_accessors() {
        let mut line = Line::from_coordinates(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!((line.from_x(), line.from_y(), line.from_z()), (1.0, 2.0, 3.0));
        assert_eq!((line.to_x(), line.to_y(), line.to_z()), (4.0, 5.0, 6.0));

        line.set_from_z(-3.0);
        line.set_to_x(0.0);
        assert_eq!(line.from, Point3d::new(1.0, 2.0, -3.0));
        assert_eq!(line.to, Point3d::new(0.0, 5.0, 6.0));

        line.set_from_x(7.0);
        line.set_from_y(8.0);
        line.set_to_y(9.0);
        line.set_to_z(10.0);
        assert_eq!(line.to_string(), "{7},{8},{-3},{0},{9},{10}");
    }

    #[test]
    fn test_constructors() {
        let origin = Point3d::origin();
        let spanned = Line::from_span(origin.clone(), &Vector3d::new(2.0, 0.0, 0.0));
        assert_eq!(spanned.to, Point3d::new(2.0, 0.0, 0.0));

        let directed = Line::from_direction(origin, &Vector3d::new(0.0, 10.0, 0.0), 3.0);
        assert_eq!(directed.to, Point3d::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_point_at_interpolates() {
        let line = Line::from_coordinates(0.0, 0.0, 0.0, 2.0, 4.0, 6.0);
        assert_eq!(line.point_at(0.0), line.from);
        assert_eq!(line.point_at(1.0), line.to);
        assert_eq!(line.point_at(0.5), Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(line.point_at(2.0), Point3d::new(4.0, 8.0, 12.0));
    }

    #[test]
    fn test_set_length_keeps_direction() {
        let mut line = Line::from_coordinates(1.0, 0.0, 0.0, 1.0, 2.0, 0.0);
        line.set_length(5.0);
        assert_relative_eq!(line.length(), 5.0, epsilon = 1e-12);
        assert!(line.to.epsilon_equals(&Point3d::new(1.0, 5.0, 0.0), 1e-12));
    }

    #[test]
    fn test_extend_moves_both_endpoints() {
        let mut line = unit_x();
        assert!(line.extend(1.0, 2.0));
        assert_eq!(line.from, Point3d::new(-1.0, 0.0, 0.0));
        assert_eq!(line.to, Point3d::new(3.0, 0.0, 0.0));
        assert_eq!(line.length(), 4.0);
    }

    #[test]
    fn test_extend_refuses_degenerate_lines() {
        let mut zero = Line::new(Point3d::new(1.0, 1.0, 1.0), Point3d::new(1.0, 1.0, 1.0));
        let before = zero.clone();
        assert!(!zero.extend(1.0, 1.0));
        assert_eq!(zero, before);

        let mut invalid = Line::from_coordinates(0.0, 0.0, 0.0, f64::NAN, 0.0, 0.0);
        assert!(!invalid.extend(1.0, 1.0));
        assert_eq!(invalid.from, Point3d::origin());
    }

    #[test]
    fn test_flip_and_display() {
        let mut line = unit_x();
        line.flip();
        assert_eq!(line.from, Point3d::new(1.0, 0.0, 0.0));
        assert_eq!(line.to.to_string(), "{0},{0},{0}");
        assert_eq!(line.to_string(), "{1},{0},{0},{0},{0},{0}");
    }

    #[test]
    fn test_closest_queries_are_not_implemented() {
        let line = unit_x();
        let p = Point3d::new(0.5, 1.0, 0.0);
        assert_eq!(
            line.closest_parameter(&p),
            Err(GeometryError::NotImplemented("Line::closest_parameter"))
        );
        assert!(line.closest_point(&p, true).is_err());
        assert!(line.minimum_distance_to_point(&p).is_err());
        assert_eq!(
            line.minimum_distance_to_line(&unit_x()),
            Err(GeometryError::NotImplemented("Line::minimum_distance_to_line"))
        );
    }

    #[test]
    fn test_maximum_distances() {
        let line = unit_x();
        assert_eq!(line.maximum_distance_to_point(&Point3d::new(-1.0, 0.0, 0.0)), 2.0);

        let other = Line::from_coordinates(0.0, 3.0, 0.0, 1.0, 3.0, 0.0);
        assert_relative_eq!(line.maximum_distance_to_line(&other), 10.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_epsilon_equals() {
        let a = unit_x();
        let b = Line::from_coordinates(1e-10, 0.0, 0.0, 1.0, -1e-10, 0.0);
        assert!(a.epsilon_equals(&b, 1e-9));
        assert!(!a.epsilon_equals(&b, 1e-11));
        assert_ne!(a, b);
    }

    #[test]
    fn test_general_line_rejects_dimension_mismatch() {
        let err = GeneralLine::new(GeneralVector::new(vec![0.0, 0.0]), GeneralVector::new(vec![1.0, 0.0, 0.0]));
        assert!(matches!(err, Err(GeometryError::ShapeMismatch { .. })));

        let mut line = GeneralLine::new(GeneralVector::new(vec![0.0, 0.0]), GeneralVector::new(vec![3.0, 4.0])).unwrap();
        assert!(line.set_to(GeneralVector::new(vec![1.0])).is_err());
        assert!(line.set_from(GeneralVector::new(vec![1.0, 1.0])).is_ok());
        assert_eq!(line.from().components(), &[1.0, 1.0]);
    }

    #[test]
    fn test_general_line_geometry() {
        let mut line = GeneralLine::new(
            GeneralVector::new(vec![0.0, 0.0, 0.0, 0.0]),
            GeneralVector::new(vec![2.0, 0.0, 0.0, 0.0]),
        )
        .unwrap();
        assert_eq!(line.dimension(), 4);
        assert_eq!(line.length(), 2.0);
        assert_eq!(line.point_at(0.5).components(), &[1.0, 0.0, 0.0, 0.0]);

        assert!(line.extend(1.0, 1.0));
        assert_eq!(line.from().components(), &[-1.0, 0.0, 0.0, 0.0]);
        assert_eq!(line.length(), 4.0);

        line.set_length(1.0);
        assert_eq!(line.to().components(), &[0.0, 0.0, 0.0, 0.0]);

        line.flip();
        assert_eq!(line.from().components(), &[0.0, 0.0, 0.0, 0.0]);
        assert!(line.closest_parameter(&GeneralVector::zeros(4)).is_err());
    }

    #[test]
    fn test_general_line_from_direction() {
        let line = GeneralLine::from_direction(
            GeneralVector::new(vec![1.0, 1.0]),
            &GeneralVector::new(vec![0.0, 5.0]),
            2.0,
        )
        .unwrap();
        assert_eq!(line.to().components(), &[1.0, 3.0]);

        let mismatch = GeneralLine::from_direction(GeneralVector::zeros(2), &GeneralVector::zeros(3), 1.0);
        assert!(mismatch.is_err());
    }

    #[test]
    fn test_general_line_deserialize_validates() {
        let ok: GeneralLine = serde_json::from_str(r#"{"from":[0.0,1.0],"to":[2.0,3.0]}"#).unwrap();
        assert_eq!(ok.dimension(), 2);
        let bad: core::result::Result<GeneralLine, _> = serde_json::from_str(r#"{"from":[0.0],"to":[2.0,3.0]}"#);
        assert!(bad.is_err());
    }
}
