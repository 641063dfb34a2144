use serde::{Deserialize, Serialize};

use crate::{Intersection, Point3, Vector3};

/// An infinite line through `point` along `direction`.
///
/// The direction is not normalized and not validated. A zero direction is accepted here, but
/// never yields an intersection point, see [`Intersection::Parallel`].
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line3 {
    pub point: Point3,
    pub direction: Vector3,
}

impl Line3 {
    pub fn new(point: impl Into<Point3>, direction: impl Into<Vector3>) -> Self {
        Self {
            point: point.into(),
            direction: direction.into(),
        }
    }

    /// The line running from `from` to `to`, anchored at `to`.
    ///
    /// Returns `None` if both points are the same.
    pub fn from_points(from: impl Into<Point3>, to: impl Into<Point3>) -> Option<Self> {
        let from = from.into();
        let to = to.into();
        if from == to {
            return None;
        }
        Some(Self::new(to, to - from))
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        self.point + self.direction * t
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction == Vector3::ZERO
    }

    pub fn intersects(&self, other: &Line3) -> bool {
        crate::intersects(self, other)
    }

    pub fn intersect(&self, other: &Line3) -> Intersection {
        crate::intersect(self, other)
    }
}

impl From<(Point3, Vector3)> for Line3 {
    fn from((point, direction): (Point3, Vector3)) -> Self {
        Self::new(point, direction)
    }
}

impl From<Line3> for (Point3, Vector3) {
    fn from(l: Line3) -> Self {
        (l.point, l.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_anchors_at_second_point() {
        let line = Line3::from_points((0.0, 0.0, 1.0), (0.0, 2.0, 1.0)).unwrap();
        assert_eq!(line.point, Point3::new(0.0, 2.0, 1.0));
        assert_eq!(line.direction, Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn from_identical_points_is_rejected() {
        assert!(Line3::from_points((1.0, 2.0, 3.0), (1.0, 2.0, 3.0)).is_none());
    }

    #[test]
    fn point_at_walks_along_direction() {
        let line = Line3::new((1.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_eq!(line.point_at(0.0), line.point);
        assert_eq!(line.point_at(-1.0), Point3::new(1.0, 0.0, 1.0));
        assert_eq!(line.point_at(2.5), Point3::new(1.0, 3.5, 1.0));
    }

    #[test]
    fn zero_direction_is_degenerate() {
        assert!(Line3::new((1.0, 0.0, 0.0), (0.0, 0.0, 0.0)).is_degenerate());
        assert!(!Line3::new((1.0, 0.0, 0.0), (0.0, 0.0, -1.0)).is_degenerate());
    }

    #[test]
    fn deserializes_from_toml_arrays() {
        let toml = r#"
point = [1.0, 0.0, 1.0]
direction = [0.0, 1.0, 0.0]
        "#;

        let line: Line3 = toml::from_str(toml).unwrap();
        assert_eq!(line, Line3::new((1.0, 0.0, 1.0), (0.0, 1.0, 0.0)));
    }
}
