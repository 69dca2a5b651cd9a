use log::{debug, trace, warn};

use crate::errors::GjkError;
use crate::interactions::{
    dot_product, is_finite_vector, negate_vector, normalize_simplex_orientation, reduce,
    vector_magnitude, FeatureKind, MinkowskiDifference, SupportMap,
};
use crate::models::{validate_point_set, Simplex};
use crate::utils::GjkConfig;

const ORIGIN: (f64, f64, f64) = (0.0, 0.0, 0.0);

/// How a GJK run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GjkStatus {
    /// The final tetrahedron encloses the origin.
    Enclosed,
    /// The origin lies on a vertex, edge or face of the final simplex.
    Touching,
    /// A support plane separates the shape from the origin.
    Separated,
    /// No further progress was possible (repeated support point or non-finite values).
    Degenerate,
    /// `GjkConfig::max_iterations` ran out.
    IterationLimit,
}

/// Result of an intersection query.
///
/// `simplex` is the last simplex the driver held; it is diagnostic only.
#[derive(Debug, Clone, PartialEq)]
pub struct GjkResult {
    pub intersecting: bool,
    pub simplex: Simplex,
    pub status: GjkStatus,
    pub iterations: usize,
}

impl GjkResult {
    fn new(status: GjkStatus, simplex: Simplex, iterations: usize) -> Self {
        let intersecting = matches!(status, GjkStatus::Enclosed | GjkStatus::Touching);
        debug!("GJK finished after {} iterations: {:?} (simplex size {})", iterations, status, simplex.size());
        Self { intersecting, simplex, status, iterations }
    }

    /// True when the run was cut short rather than decided.
    pub fn is_degenerate(&self) -> bool {
        matches!(self.status, GjkStatus::Degenerate | GjkStatus::IterationLimit)
    }
}

/// Tests whether a convex point set contains the origin.
///
/// Runs [`gjk_intersection`] with the default configuration.
///
/// # Errors
/// * `GjkError::EmptyPointSet` if `points` is empty.
/// * `GjkError::NonFinitePoint` if a point has a NaN or infinite coordinate.
///
/// # Example
/// ```
/// use rs_gjk::interactions::intersects;
///
/// let cube = vec![
///     (-1.0, -1.0, -1.0), (1.0, -1.0, -1.0), (1.0, 1.0, -1.0), (-1.0, 1.0, -1.0),
///     (-1.0, -1.0, 1.0), (1.0, -1.0, 1.0), (1.0, 1.0, 1.0), (-1.0, 1.0, 1.0),
/// ];
/// assert!(intersects(&cube).unwrap().intersecting);
///
/// let shifted: Vec<_> = cube.iter().map(|&(x, y, z)| (x + 10.0, y, z)).collect();
/// assert!(!intersects(&shifted).unwrap().intersecting);
/// ```
pub fn intersects(points: &[(f64, f64, f64)]) -> Result<GjkResult, GjkError> {
    validate_point_set(points)?;
    gjk_intersection(points, &GjkConfig::default())
}

/// Tests whether two convex shapes overlap by running GJK on `a - b`.
pub fn shapes_intersect<A, B>(shape_a: &A, shape_b: &B, config: &GjkConfig) -> Result<GjkResult, GjkError>
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    gjk_intersection(&MinkowskiDifference::new(shape_a, shape_b), config)
}

/// GJK (Gilbert-Johnson-Keerthi) origin containment test for any support-mapped shape.
///
/// Each iteration queries the support point along the current direction,
/// appends it to the simplex, fixes the simplex winding, stops if the new
/// point does not reach past the origin, and otherwise reduces the simplex to
/// the feature closest to the origin.
///
/// # Arguments
/// * `shape` - Convex shape answering support queries.
/// * `config` - Iteration cap and tolerance.
///
/// The run stops as `GjkStatus::Touching` once the origin is within
/// `config.tolerance` of the retained feature, measured as a Euclidean
/// distance, so the decision does not depend on the scale of the shape.
///
/// # Returns
/// A `GjkResult`; degenerate inputs come back as non-intersecting with
/// `GjkStatus::Degenerate` or `GjkStatus::IterationLimit`.
///
/// # Errors
/// Returns an error if the configuration is invalid or a support query fails.
pub fn gjk_intersection<S: SupportMap + ?Sized>(shape: &S, config: &GjkConfig) -> Result<GjkResult, GjkError> {
    config.validate()?;

    let seed = shape.seed_point()?;
    let seed = if vector_magnitude(seed) <= config.tolerance { (1.0, 0.0, 0.0) } else { seed };

    let first = shape.support_point(seed)?;
    let mut simplex = Simplex::new();
    simplex.add(first)?;

    if !is_finite_vector(first) {
        warn!("GJK: non-finite initial support point {:?}", first);
        return Ok(GjkResult::new(GjkStatus::Degenerate, simplex, 0));
    }

    // Distance from the origin to the first support point.
    let mut direction = negate_vector(first);
    if vector_magnitude(direction) <= config.tolerance {
        return Ok(GjkResult::new(GjkStatus::Touching, simplex, 0));
    }

    for iteration in 1..=config.max_iterations {
        let v = shape.support_point(direction)?;
        if !is_finite_vector(v) {
            warn!("GJK: non-finite support point {:?} at iteration {}", v, iteration);
            return Ok(GjkResult::new(GjkStatus::Degenerate, simplex, iteration));
        }

        let repeated = simplex.contains_point(v, config.tolerance);
        simplex.add(v)?;
        normalize_simplex_orientation(&mut simplex);
        trace!("GJK iteration {}: support {:?}, direction {:?}, simplex size {}", iteration, v, direction, simplex.size());

        if dot_product(v, direction) < 0.0 {
            return Ok(GjkResult::new(GjkStatus::Separated, simplex, iteration));
        }

        if repeated {
            warn!("GJK: support point {:?} repeated without progress at iteration {}", v, iteration);
            return Ok(GjkResult::new(GjkStatus::Degenerate, simplex, iteration));
        }

        let reduction = reduce(ORIGIN, &simplex)?;
        simplex = reduction.simplex;

        if reduction.kind == FeatureKind::Interior {
            return Ok(GjkResult::new(GjkStatus::Enclosed, simplex, iteration));
        }

        if !is_finite_vector(reduction.direction) || !reduction.distance.is_finite() {
            warn!("GJK: non-finite search direction at iteration {}", iteration);
            return Ok(GjkResult::new(GjkStatus::Degenerate, simplex, iteration));
        }

        // The direction is unnormalized; only the true distance is compared
        // against the tolerance.
        if reduction.distance <= config.tolerance {
            return Ok(GjkResult::new(GjkStatus::Touching, simplex, iteration));
        }

        direction = reduction.direction;
    }

    warn!("GJK: no decision after {} iterations, reporting separation", config.max_iterations);
    Ok(GjkResult::new(GjkStatus::IterationLimit, simplex, config.max_iterations))
}
