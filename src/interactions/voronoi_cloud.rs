// src/interactions/voronoi_cloud.rs
//
// Probing the Voronoi regions of a simplex with a cloud of query points.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::errors::GjkError;
use crate::interactions::{normalize_simplex_orientation, reduce, Reduction};
use crate::models::Simplex;

/// Random simplex of 1 to 4 points drawn from the cube [-0.5, 0.5]³,
/// already in canonical orientation.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rs_gjk::interactions::random_simplex;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let simplex = random_simplex(&mut rng);
///
/// assert!((1..=4).contains(&simplex.size()));
/// ```
pub fn random_simplex<R: Rng + ?Sized>(rng: &mut R) -> Simplex {
    let size = rng.random_range(1..=Simplex::MAX_POINTS);
    let mut simplex = Simplex::from_points(&random_point_cloud(rng, size, 0.5)).unwrap_or_default();
    normalize_simplex_orientation(&mut simplex);
    simplex
}

/// `count` points uniformly distributed in the cube [-half_extent, half_extent]³.
pub fn random_point_cloud<R: Rng + ?Sized>(rng: &mut R, count: usize, half_extent: f64) -> Vec<(f64, f64, f64)> {
    if half_extent <= 0.0 {
        return vec![(0.0, 0.0, 0.0); count];
    }
    (0..count)
        .map(|_| {
            (
                rng.random_range(-half_extent..half_extent),
                rng.random_range(-half_extent..half_extent),
                rng.random_range(-half_extent..half_extent),
            )
        })
        .collect()
}

/// Closest feature of `simplex` to an arbitrary point.
///
/// # Errors
/// Returns `GjkError::EmptyPointSet` for an empty simplex.
pub fn classify_point(simplex: &Simplex, query: (f64, f64, f64)) -> Result<Reduction, GjkError> {
    reduce(query, simplex)
}

/// Classifies every point of `points` against `simplex`.
///
/// Results keep the order of `points`. Runs on the rayon pool when the
/// `parallel` feature is enabled.
pub fn classify_cloud(simplex: &Simplex, points: &[(f64, f64, f64)]) -> Result<Vec<Reduction>, GjkError> {
    #[cfg(feature = "parallel")]
    let iter = points.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = points.iter();

    iter.map(|&p| classify_point(simplex, p)).collect()
}

/// Points whose closest feature of `simplex` has exactly `feature_size` vertices.
///
/// A size of 0 (or more than the simplex holds) selects nothing.
pub fn points_in_feature_size(
    simplex: &Simplex,
    points: &[(f64, f64, f64)],
    feature_size: usize,
) -> Result<Vec<(f64, f64, f64)>, GjkError> {
    let reductions = classify_cloud(simplex, points)?;
    Ok(points
        .iter()
        .zip(reductions)
        .filter(|(_, reduction)| reduction.simplex.size() == feature_size)
        .map(|(&p, _)| p)
        .collect())
}
