// src/apis/easy_gjk.rs

use crate::errors::GjkError;
use crate::interactions::{classify_point, gjk_intersection, shapes_intersect, support, GjkResult, Reduction};
use crate::models::{validate_point_set, ConvexHull, Simplex};
use crate::utils::GjkConfig;

/// A simplified interface for intersection queries.
///
/// Bundles a `GjkConfig` so callers (a viewer, a wasm front end) only deal
/// with point sets, hulls and simplices.
#[derive(Debug, Clone, Default)]
pub struct EasyGjk {
    config: GjkConfig,
}

impl EasyGjk {
    /// Creates a new `EasyGjk` with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_gjk::apis::easy_gjk::EasyGjk;
    ///
    /// let gjk = EasyGjk::new();
    /// assert_eq!(gjk.config().max_iterations, 100);
    /// ```
    pub fn new() -> Self {
        Self {
            config: GjkConfig::default(),
        }
    }

    /// Creates a new `EasyGjk` with a custom configuration.
    ///
    /// # Errors
    /// Returns `GjkError::InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: GjkConfig) -> Result<Self, GjkError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GjkConfig {
        &self.config
    }

    /// Extreme point of `points` along `direction`.
    pub fn support(&self, points: &[(f64, f64, f64)], direction: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError> {
        support(points, direction)
    }

    /// Tests whether the hull of `points` contains the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_gjk::apis::easy_gjk::EasyGjk;
    ///
    /// let gjk = EasyGjk::new();
    /// let result = gjk.intersects(&[(5.0, 5.0, 5.0)]).unwrap();
    ///
    /// assert!(!result.intersecting);
    /// assert_eq!(result.simplex.points()[0], (5.0, 5.0, 5.0));
    /// ```
    pub fn intersects(&self, points: &[(f64, f64, f64)]) -> Result<GjkResult, GjkError> {
        validate_point_set(points)?;
        gjk_intersection(points, &self.config)
    }

    /// Tests whether two posed hulls overlap.
    pub fn hulls_intersect(&self, hull_a: &ConvexHull, hull_b: &ConvexHull) -> Result<GjkResult, GjkError> {
        shapes_intersect(hull_a, hull_b, &self.config)
    }

    /// Closest feature of `simplex` to `query`.
    pub fn classify(&self, simplex: &Simplex, query: (f64, f64, f64)) -> Result<Reduction, GjkError> {
        classify_point(simplex, query)
    }
}
