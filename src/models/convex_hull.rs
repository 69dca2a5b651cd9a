use crate::errors::GjkError;
use crate::interactions::{add_vectors, is_finite_vector};
use crate::models::Quaternion;

/// A convex polytope given by its vertex cloud, posed in world space.
///
/// Vertices are stored in local coordinates. Convexity is not checked: the
/// hull of the cloud is what the support function sees.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    vertices: Vec<(f64, f64, f64)>,
    position: (f64, f64, f64),
    orientation: Quaternion,
}

impl ConvexHull {
    /// Creates a hull at the origin with identity orientation.
    ///
    /// # Errors
    /// * `GjkError::EmptyPointSet` if `vertices` is empty.
    /// * `GjkError::NonFinitePoint` if a vertex has a NaN or infinite coordinate.
    pub fn new(vertices: Vec<(f64, f64, f64)>) -> Result<Self, GjkError> {
        validate_point_set(&vertices)?;
        Ok(Self {
            vertices,
            position: (0.0, 0.0, 0.0),
            orientation: Quaternion::identity(),
        })
    }

    /// Axis-aligned cuboid centered on the local origin.
    ///
    /// # Example
    /// ```
    /// use rs_gjk::models::ConvexHull;
    ///
    /// let cube = ConvexHull::new_cuboid(2.0, 2.0, 2.0);
    /// assert_eq!(cube.vertices().len(), 8);
    /// assert!(cube.vertices().contains(&(1.0, 1.0, 1.0)));
    /// ```
    pub fn new_cuboid(width: f64, height: f64, depth: f64) -> Self {
        let w2 = width / 2.0;
        let h2 = height / 2.0;
        let d2 = depth / 2.0;

        Self {
            vertices: vec![
                (-w2, -h2, -d2),
                (w2, -h2, -d2),
                (w2, h2, -d2),
                (-w2, h2, -d2),
                (-w2, -h2, d2),
                (w2, -h2, d2),
                (w2, h2, d2),
                (-w2, h2, d2),
            ],
            position: (0.0, 0.0, 0.0),
            orientation: Quaternion::identity(),
        }
    }

    pub fn with_position(mut self, position: (f64, f64, f64)) -> Self {
        self.position = position;
        self
    }

    pub fn with_orientation(mut self, orientation: Quaternion) -> Self {
        self.orientation = orientation.normalized();
        self
    }

    pub fn vertices(&self) -> &[(f64, f64, f64)] {
        &self.vertices
    }

    pub fn position(&self) -> (f64, f64, f64) {
        self.position
    }

    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Maps a local-space point to world space.
    pub fn to_world(&self, local: (f64, f64, f64)) -> (f64, f64, f64) {
        add_vectors(self.orientation.rotate_point(local), self.position)
    }

    pub fn world_vertices(&self) -> Vec<(f64, f64, f64)> {
        self.vertices.iter().map(|&v| self.to_world(v)).collect()
    }
}

/// Checks the preconditions every support query relies on.
///
/// # Errors
/// * `GjkError::EmptyPointSet` if `points` is empty.
/// * `GjkError::NonFinitePoint` with the index of the first NaN or infinite point.
pub fn validate_point_set(points: &[(f64, f64, f64)]) -> Result<(), GjkError> {
    if points.is_empty() {
        return Err(GjkError::EmptyPointSet);
    }
    match points.iter().position(|&p| !is_finite_vector(p)) {
        Some(index) => Err(GjkError::NonFinitePoint { index }),
        None => Ok(()),
    }
}
