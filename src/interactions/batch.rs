// src/interactions/batch.rs

use rayon::prelude::*;

use crate::errors::GjkError;
use crate::interactions::{gjk_intersection, GjkResult};
use crate::models::validate_point_set;
use crate::utils::GjkConfig;

/// Runs one independent GJK query per point set on the rayon pool.
///
/// Each run owns its own simplex; the point sets are only read. Results
/// keep the order of `point_sets`, and a failure in one set does not affect
/// the others.
///
/// # Example
/// ```
/// use rs_gjk::interactions::batch_intersects;
/// use rs_gjk::utils::GjkConfig;
///
/// let sets = vec![
///     vec![(-1.0, -1.0, -1.0), (1.0, 1.0, 1.0), (1.0, -1.0, 1.0), (-1.0, 1.0, -1.0)],
///     vec![(5.0, 5.0, 5.0)],
///     vec![],
/// ];
/// let results = batch_intersects(&sets, &GjkConfig::default());
///
/// assert!(!results[1].as_ref().unwrap().intersecting);
/// assert!(results[2].is_err());
/// ```
pub fn batch_intersects(
    point_sets: &[Vec<(f64, f64, f64)>],
    config: &GjkConfig,
) -> Vec<Result<GjkResult, GjkError>> {
    point_sets
        .par_iter()
        .map(|points| {
            validate_point_set(points)?;
            gjk_intersection(points.as_slice(), config)
        })
        .collect()
}
