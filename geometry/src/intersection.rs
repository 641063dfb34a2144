use log::trace;

use crate::{Line3, Matrix3, Point3};

/// The outcome of intersecting two lines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Intersection {
    /// The lines cross in exactly this point.
    Point(Point3),
    /// The lines are not coplanar.
    None,
    /// The lines are coplanar, but their directions are parallel (or one of them is zero).
    ///
    /// Covers both coincident lines and distinct parallel lines.
    Parallel,
}

impl Intersection {
    pub fn point(&self) -> Option<Point3> {
        match self {
            Self::Point(p) => Some(*p),
            Self::None | Self::Parallel => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The matrix whose rows are `b.point - a.point`, `a.direction` and `b.direction`.
///
/// Its determinant is the scalar triple product of the three rows.
pub fn intersection_matrix(a: &Line3, b: &Line3) -> Matrix3 {
    Matrix3::from_cols(b.point - a.point, a.direction, b.direction).transpose()
}

/// Returns `true` if the lines are coplanar.
///
/// The determinant is compared against exactly zero. This is exact for integral coordinates,
/// but arbitrary floating point input may need [`intersects_within`].
///
/// Coincident and parallel lines are coplanar and are reported as intersecting, too.
pub fn intersects(a: &Line3, b: &Line3) -> bool {
    let det = intersection_matrix(a, b).determinant();
    trace!("Intersection determinant: {det}");
    det == 0.0
}

/// Like [`intersects`], but accepts determinants up to `tolerance` away from zero.
///
/// The tolerance is scale dependent, so it is up to the caller to choose one.
pub fn intersects_within(a: &Line3, b: &Line3, tolerance: f64) -> bool {
    intersection_matrix(a, b).determinant().abs() <= tolerance
}

/// Computes the point where both lines cross.
///
/// Returns [`Intersection::None`] exactly when [`intersects`] returns `false`.
pub fn intersect(a: &Line3, b: &Line3) -> Intersection {
    if !intersects(a, b) {
        return Intersection::None;
    }

    // The x/y plane first, the others when the projected directions are parallel there.
    const PROJECTIONS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

    for (i, j) in PROJECTIONS {
        if let Some(t2) = solve_projected(a, b, i, j) {
            trace!("Solved in projection ({i}, {j}): t2 = {t2}");
            return Intersection::Point(b.point_at(t2));
        }
    }

    Intersection::Parallel
}

/// Solves `a.point + t1 * a.direction = b.point + t2 * b.direction` for `t2`, using the
/// components `i` and `j` only.
///
/// Returns `None` if the directions are parallel in this projection.
fn solve_projected(a: &Line3, b: &Line3, i: usize, j: usize) -> Option<f64> {
    let (a1, b1) = (a.direction[i], a.direction[j]);
    let (a2, b2) = (b.direction[i], b.direction[j]);
    let (x1, y1) = (a.point[i], a.point[j]);
    let (x2, y2) = (b.point[i], b.point[j]);

    let denom = a1 * b2 - a2 * b1;
    if denom == 0.0 {
        return None;
    }

    Some((a1 * y1 - a1 * y2 - b1 * x1 + b1 * x2) / denom)
}
