use crate::errors::GjkError;
use crate::interactions::{dot_product, negate_vector, subtract_vectors};
use crate::models::{ConvexHull, SupportPoint};

/// Shapes that can answer support queries.
///
/// `support_point` returns the point of the shape with the largest projection
/// onto `direction`; the direction does not need to be unit length.
pub trait SupportMap {
    fn support_point(&self, direction: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError>;

    /// Some point of the shape, used to seed the first search direction.
    fn seed_point(&self) -> Result<(f64, f64, f64), GjkError>;
}

/// Index of the point with the largest dot product with `direction`.
///
/// Ties go to the point that comes first in `points`.
///
/// # Errors
/// Returns `GjkError::EmptyPointSet` if `points` is empty.
pub fn support_index(points: &[(f64, f64, f64)], direction: (f64, f64, f64)) -> Result<usize, GjkError> {
    let first = points.first().ok_or(GjkError::EmptyPointSet)?;

    let mut best_index = 0;
    let mut best_dot = dot_product(*first, direction);

    for (i, &p) in points.iter().enumerate().skip(1) {
        let dot = dot_product(p, direction);
        if dot > best_dot {
            best_dot = dot;
            best_index = i;
        }
    }

    Ok(best_index)
}

/// Support function of a point cloud.
///
/// # Arguments
/// * `points` - The vertex cloud of a convex shape.
/// * `direction` - Search direction, any length.
///
/// # Returns
/// The member of `points` maximizing the dot product with `direction`
/// (first one wins on ties).
///
/// # Errors
/// Returns `GjkError::EmptyPointSet` if `points` is empty.
///
/// # Example
/// ```
/// use rs_gjk::interactions::support;
///
/// let points = [(1.0, 0.0, 0.0), (0.0, 2.0, 0.0), (-3.0, 0.0, 0.0)];
///
/// assert_eq!(support(&points, (0.0, 1.0, 0.0)).unwrap(), (0.0, 2.0, 0.0));
/// assert_eq!(support(&points, (-1.0, 0.0, 0.0)).unwrap(), (-3.0, 0.0, 0.0));
/// let empty: [(f64, f64, f64); 0] = [];
/// assert!(support(&empty, (1.0, 0.0, 0.0)).is_err());
/// ```
pub fn support(points: &[(f64, f64, f64)], direction: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError> {
    support_index(points, direction).map(|i| points[i])
}

impl SupportMap for [(f64, f64, f64)] {
    fn support_point(&self, direction: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError> {
        support(self, direction)
    }

    fn seed_point(&self) -> Result<(f64, f64, f64), GjkError> {
        self.first().copied().ok_or(GjkError::EmptyPointSet)
    }
}

impl SupportMap for Vec<(f64, f64, f64)> {
    fn support_point(&self, direction: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError> {
        self.as_slice().support_point(direction)
    }

    fn seed_point(&self) -> Result<(f64, f64, f64), GjkError> {
        self.as_slice().seed_point()
    }
}

impl SupportMap for ConvexHull {
    fn support_point(&self, direction: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError> {
        // Search in local space, then pose the winner.
        let local_dir = self.orientation().inverse().rotate_point(direction);
        let local_support = support(self.vertices(), local_dir)?;
        Ok(self.to_world(local_support))
    }

    fn seed_point(&self) -> Result<(f64, f64, f64), GjkError> {
        self.vertices().seed_point().map(|v| self.to_world(v))
    }
}

impl<T: SupportMap + ?Sized> SupportMap for &T {
    fn support_point(&self, direction: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError> {
        (**self).support_point(direction)
    }

    fn seed_point(&self) -> Result<(f64, f64, f64), GjkError> {
        (**self).seed_point()
    }
}

/// The set `{a - b : a ∈ A, b ∈ B}`; it contains the origin exactly when
/// `A` and `B` overlap.
#[derive(Debug, Clone, Copy)]
pub struct MinkowskiDifference<'a, A: ?Sized, B: ?Sized> {
    pub shape_a: &'a A,
    pub shape_b: &'a B,
}

impl<'a, A: SupportMap + ?Sized, B: SupportMap + ?Sized> MinkowskiDifference<'a, A, B> {
    pub fn new(shape_a: &'a A, shape_b: &'a B) -> Self {
        Self { shape_a, shape_b }
    }

    /// Support point of `A - B` along with the witness points on each shape.
    ///
    /// # Example
    /// ```
    /// use rs_gjk::interactions::MinkowskiDifference;
    ///
    /// let a = vec![(1.0, 0.0, 0.0), (-1.0, 0.0, 0.0)];
    /// let b = vec![(5.0, 0.0, 0.0), (3.0, 0.0, 0.0)];
    /// let difference = MinkowskiDifference::new(&a, &b);
    ///
    /// let sp = difference.support_point_with_witnesses((1.0, 0.0, 0.0)).unwrap();
    /// assert_eq!(sp.point_a, (1.0, 0.0, 0.0));
    /// assert_eq!(sp.point_b, (3.0, 0.0, 0.0));
    /// assert_eq!(sp.point, (-2.0, 0.0, 0.0));
    /// ```
    pub fn support_point_with_witnesses(&self, direction: (f64, f64, f64)) -> Result<SupportPoint, GjkError> {
        let point_a = self.shape_a.support_point(direction)?;
        let point_b = self.shape_b.support_point(negate_vector(direction))?;

        Ok(SupportPoint {
            point: subtract_vectors(point_a, point_b),
            point_a,
            point_b,
        })
    }
}

impl<'a, A: SupportMap + ?Sized, B: SupportMap + ?Sized> SupportMap for MinkowskiDifference<'a, A, B> {
    fn support_point(&self, direction: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError> {
        self.support_point_with_witnesses(direction).map(|sp| sp.point)
    }

    fn seed_point(&self) -> Result<(f64, f64, f64), GjkError> {
        Ok(subtract_vectors(self.shape_a.seed_point()?, self.shape_b.seed_point()?))
    }
}
