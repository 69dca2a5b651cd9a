// src/interactions/vectors_3d.rs

use crate::errors::GjkError;

/// Adds two 3D vectors.
///
/// # Example
/// ```
/// use rs_gjk::interactions::add_vectors;
///
/// assert_eq!(add_vectors((1.0, 2.0, 3.0), (4.0, 5.0, 6.0)), (5.0, 7.0, 9.0));
/// ```
pub fn add_vectors(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> (f64, f64, f64) {
    (v1.0 + v2.0, v1.1 + v2.1, v1.2 + v2.2)
}

/// Subtracts `v2` from `v1`.
///
/// # Example
/// ```
/// use rs_gjk::interactions::subtract_vectors;
///
/// assert_eq!(subtract_vectors((1.0, 2.0, 3.0), (4.0, 5.0, 6.0)), (-3.0, -3.0, -3.0));
/// ```
pub fn subtract_vectors(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> (f64, f64, f64) {
    (v1.0 - v2.0, v1.1 - v2.1, v1.2 - v2.2)
}

/// Multiplies every component of `v` by `factor`.
pub fn scale_vector(v: (f64, f64, f64), factor: f64) -> (f64, f64, f64) {
    (v.0 * factor, v.1 * factor, v.2 * factor)
}

pub fn negate_vector(v: (f64, f64, f64)) -> (f64, f64, f64) {
    (-v.0, -v.1, -v.2)
}

/// Calculates the cross product of two 3D vectors.
///
/// # Arguments
/// * `v1` - The first vector as a tuple (x, y, z).
/// * `v2` - The second vector as a tuple (x, y, z).
///
/// # Returns
/// The cross product as a new vector.
///
/// # Example
/// ```
/// use rs_gjk::interactions::cross_product;
///
/// let v1 = (1.0, 0.0, 0.0);
/// let v2 = (0.0, 1.0, 0.0);
/// let result = cross_product(v1, v2);
///
/// assert_eq!(result, (0.0, 0.0, 1.0));
/// ```
pub fn cross_product(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> (f64, f64, f64) {
    (
        v1.1 * v2.2 - v1.2 * v2.1,
        v1.2 * v2.0 - v1.0 * v2.2,
        v1.0 * v2.1 - v1.1 * v2.0
    )
}

/// Calculates the dot product of two 3D vectors.
///
/// # Arguments
/// * `v1` - The first vector as a tuple (x, y, z).
/// * `v2` - The second vector as a tuple (x, y, z).
///
/// # Returns
/// The dot product as a scalar.
///
/// # Example
/// ```
/// use rs_gjk::interactions::dot_product;
///
/// let v1 = (1.0, 2.0, 3.0);
/// let v2 = (4.0, 5.0, 6.0);
/// let result = dot_product(v1, v2);
///
/// assert_eq!(result, 32.0); // 1*4 + 2*5 + 3*6 = 32
/// ```
pub fn dot_product(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> f64 {
    v1.0 * v2.0 + v1.1 * v2.1 + v1.2 * v2.2
}

/// Triple product (a × b) × c
///
/// With `a = c = ab` and `b = ao` this is the component of `ao` perpendicular
/// to `ab`, scaled by `|ab|²`.
pub fn triple_product(a: (f64, f64, f64), b: (f64, f64, f64), c: (f64, f64, f64)) -> (f64, f64, f64) {
    cross_product(cross_product(a, b), c)
}

/// Calculates the vector magnitude (length) of a 3D vector.
///
/// # Example
/// ```
/// use rs_gjk::interactions::vector_magnitude;
///
/// let v = (3.0, 4.0, 5.0);
/// let magnitude = vector_magnitude(v);
///
/// assert!((magnitude - 7.0710678118654755).abs() < 1e-10);
/// ```
pub fn vector_magnitude(v: (f64, f64, f64)) -> f64 {
    vector_magnitude_squared(v).sqrt()
}

pub fn vector_magnitude_squared(v: (f64, f64, f64)) -> f64 {
    v.0 * v.0 + v.1 * v.1 + v.2 * v.2
}

/// Normalizes a 3D vector (makes it a unit vector).
///
/// # Errors
/// Returns `GjkError::ZeroVector` if the input has zero length or if the
/// division produces a non-finite result.
///
/// # Example
/// ```
/// use rs_gjk::interactions::normalize_vector;
///
/// let v = (3.0, 0.0, 4.0);
/// let normalized = normalize_vector(v).unwrap();
///
/// assert!((normalized.0 - 0.6).abs() < 1e-10);
/// assert!((normalized.1 - 0.0).abs() < 1e-10);
/// assert!((normalized.2 - 0.8).abs() < 1e-10);
///
/// assert!(normalize_vector((0.0, 0.0, 0.0)).is_err());
/// ```
pub fn normalize_vector(v: (f64, f64, f64)) -> Result<(f64, f64, f64), GjkError> {
    let magnitude = vector_magnitude(v);

    if magnitude == 0.0 {
        return Err(GjkError::ZeroVector);
    }

    let normalized = scale_vector(v, 1.0 / magnitude);
    if !is_finite_vector(normalized) {
        return Err(GjkError::ZeroVector);
    }

    Ok(normalized)
}

pub fn is_finite_vector(v: (f64, f64, f64)) -> bool {
    v.0.is_finite() && v.1.is_finite() && v.2.is_finite()
}
