use crate::errors::GjkError;
use crate::interactions::{add_vectors, scale_vector, subtract_vectors, vector_magnitude};

/// Support point of a Minkowski difference together with the two shape
/// points it was built from (`point = point_a - point_b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportPoint {
    pub point: (f64, f64, f64),
    pub point_a: (f64, f64, f64),
    pub point_b: (f64, f64, f64),
}

/// Ordered set of at most four points (vertex, segment, triangle or tetrahedron).
///
/// Points are stored in insertion order; `a` is the first point, `d` the fourth.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Simplex {
    points: Vec<(f64, f64, f64)>,
}

impl Simplex {
    pub const MAX_POINTS: usize = 4;

    pub fn new() -> Self {
        Self { points: Vec::with_capacity(Self::MAX_POINTS) }
    }

    /// Builds a simplex from up to four points.
    ///
    /// # Errors
    /// Returns `GjkError::SimplexFull` if more than four points are given.
    ///
    /// # Example
    /// ```
    /// use rs_gjk::models::Simplex;
    ///
    /// let simplex = Simplex::from_points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]).unwrap();
    /// assert_eq!(simplex.size(), 2);
    /// assert!(Simplex::from_points(&[(0.0, 0.0, 0.0); 5]).is_err());
    /// ```
    pub fn from_points(points: &[(f64, f64, f64)]) -> Result<Self, GjkError> {
        let mut simplex = Self::new();
        for &point in points {
            simplex.add(point)?;
        }
        Ok(simplex)
    }

    /// Appends a point.
    ///
    /// # Errors
    /// Returns `GjkError::SimplexFull` if the simplex already holds four points.
    pub fn add(&mut self, point: (f64, f64, f64)) -> Result<(), GjkError> {
        if self.points.len() >= Self::MAX_POINTS {
            return Err(GjkError::SimplexFull);
        }
        self.points.push(point);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64, f64)] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.points.swap(i, j);
    }

    /// Returns true if some stored point lies within `tolerance` of `point`.
    pub fn contains_point(&self, point: (f64, f64, f64), tolerance: f64) -> bool {
        self.points
            .iter()
            .any(|&p| vector_magnitude(subtract_vectors(p, point)) <= tolerance)
    }

    /// Arithmetic mean of the stored points, `None` for an empty simplex.
    ///
    /// # Example
    /// ```
    /// use rs_gjk::models::Simplex;
    ///
    /// let triangle = Simplex::from_points(&[(3.0, 0.0, 0.0), (0.0, 3.0, 0.0), (0.0, 0.0, 3.0)]).unwrap();
    /// assert_eq!(triangle.centroid(), Some((1.0, 1.0, 1.0)));
    /// ```
    pub fn centroid(&self) -> Option<(f64, f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self.points
            .iter()
            .fold((0.0, 0.0, 0.0), |acc, &p| add_vectors(acc, p));
        Some(scale_vector(sum, 1.0 / self.points.len() as f64))
    }
}
