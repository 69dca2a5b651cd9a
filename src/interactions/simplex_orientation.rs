use crate::interactions::{cross_product, dot_product, negate_vector, subtract_vectors};
use crate::models::Simplex;

/// Normal of triangle (a, b, c): `(b - a) × (c - a)`.
///
/// Not normalized; its length is twice the triangle's area.
pub fn triangle_normal(a: (f64, f64, f64), b: (f64, f64, f64), c: (f64, f64, f64)) -> (f64, f64, f64) {
    cross_product(subtract_vectors(b, a), subtract_vectors(c, a))
}

/// Puts a triangle or tetrahedron into the winding the classifier expects.
///
/// * Triangle `a, b, c`: if the origin lies behind the normal `(b - a) × (c - a)`,
///   `a` and `b` are swapped so the normal faces the origin's side.
/// * Tetrahedron `a, b, c, d`: if `d` lies in front of face `abc`, `b` and `d`
///   are swapped. Afterwards the faces abc, bdc, adb and dac all have normals
///   pointing out of the solid.
///
/// Smaller simplices are left untouched. Applying it twice is the same as
/// applying it once.
///
/// # Example
/// ```
/// use rs_gjk::interactions::normalize_simplex_orientation;
/// use rs_gjk::models::Simplex;
///
/// let mut tetrahedron = Simplex::from_points(&[
///     (0.0, 0.0, 0.0),
///     (1.0, 0.0, 0.0),
///     (0.0, 1.0, 0.0),
///     (0.0, 0.0, 1.0),
/// ]).unwrap();
/// normalize_simplex_orientation(&mut tetrahedron);
///
/// assert_eq!(tetrahedron.points()[1], (0.0, 0.0, 1.0));
/// assert_eq!(tetrahedron.points()[3], (1.0, 0.0, 0.0));
/// ```
pub fn normalize_simplex_orientation(simplex: &mut Simplex) {
    match simplex.size() {
        3 => {
            let (a, b, c) = (simplex.points()[0], simplex.points()[1], simplex.points()[2]);
            let n = triangle_normal(a, b, c);
            if dot_product(negate_vector(a), n) < 0.0 {
                simplex.swap(0, 1);
            }
        }
        4 => {
            let (a, b, c, d) = (simplex.points()[0], simplex.points()[1], simplex.points()[2], simplex.points()[3]);
            let n = triangle_normal(a, b, c);
            if dot_product(subtract_vectors(d, a), n) > 0.0 {
                simplex.swap(1, 3);
            }
        }
        _ => {}
    }
}

/// Face normals of a triangle or (oriented) tetrahedron.
///
/// One normal for a triangle; four for a tetrahedron, in the order
/// abc, bdc, adb, dac. Empty for smaller simplices.
pub fn face_normals(simplex: &Simplex) -> Vec<(f64, f64, f64)> {
    match *simplex.points() {
        [a, b, c] => vec![triangle_normal(a, b, c)],
        [a, b, c, d] => vec![
            triangle_normal(a, b, c),
            triangle_normal(b, d, c),
            triangle_normal(a, d, b),
            triangle_normal(d, a, c),
        ],
        _ => Vec::new(),
    }
}
