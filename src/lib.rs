pub mod utils;
pub mod errors;
pub mod apis;
pub mod interactions;
pub mod models;

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}

/// ### General helper function
/// - Asserts that two 3D vectors are approximately equal, component by component.
pub fn assert_vector_eq(a: (f64, f64, f64), b: (f64, f64, f64), epsilon: f64, optional_message: Option<&str>) {
    assert_float_eq(a.0, b.0, epsilon, optional_message);
    assert_float_eq(a.1, b.1, epsilon, optional_message);
    assert_float_eq(a.2, b.2, epsilon, optional_message);
}
