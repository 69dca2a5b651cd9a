use crate::errors::GjkError;
use crate::interactions::{
    cross_product, dot_product, negate_vector, normalize_simplex_orientation, subtract_vectors,
    triangle_normal, triple_product, vector_magnitude, vector_magnitude_squared,
};
use crate::models::Simplex;

/// Which feature of a simplex lies closest to a query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Vertex,
    Edge,
    Face,
    /// The query is enclosed by a tetrahedron.
    Interior,
}

/// Outcome of a closest-feature reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// Vertices of the closest feature.
    pub simplex: Simplex,
    /// Points from the feature toward the query; zero once the query is enclosed.
    ///
    /// Not normalized: edge directions carry a factor `|uv|²` and face
    /// directions the length of the face normal.
    pub direction: (f64, f64, f64),
    /// Euclidean distance from the query to the feature, 0 when enclosed.
    pub distance: f64,
    pub kind: FeatureKind,
}

impl Reduction {
    fn new(
        points: &[(f64, f64, f64)],
        direction: (f64, f64, f64),
        distance: f64,
        kind: FeatureKind,
    ) -> Result<Self, GjkError> {
        Ok(Self {
            simplex: Simplex::from_points(points)?,
            direction,
            distance,
            kind,
        })
    }

    fn vertex(query: (f64, f64, f64), vertex: (f64, f64, f64)) -> Result<Self, GjkError> {
        let direction = subtract_vectors(query, vertex);
        Self::new(&[vertex], direction, vector_magnitude(direction), FeatureKind::Vertex)
    }

    fn edge(query: (f64, f64, f64), u: (f64, f64, f64), v: (f64, f64, f64)) -> Result<Self, GjkError> {
        let direction = edge_direction(query, u, v);
        // Undo the |uv|² factor of the triple product.
        let distance = vector_magnitude(direction) / vector_magnitude_squared(subtract_vectors(v, u));
        Self::new(&[u, v], direction, distance, FeatureKind::Edge)
    }

    /// `normal` is the face normal through vertex `a`; `direction` is that
    /// normal turned toward the query, or zero when the query lies in the plane.
    /// A degenerate face (zero normal) gets a NaN distance.
    fn face(
        query: (f64, f64, f64),
        points: &[(f64, f64, f64)],
        a: (f64, f64, f64),
        normal: (f64, f64, f64),
        direction: (f64, f64, f64),
    ) -> Result<Self, GjkError> {
        let distance = dot_product(subtract_vectors(query, a), normal).abs() / vector_magnitude(normal);
        Self::new(points, direction, distance, FeatureKind::Face)
    }

    pub fn enclosed(&self) -> bool {
        self.kind == FeatureKind::Interior
    }
}

/// True if `query` lies in the Voronoi region of `vertex`.
///
/// `neighbours` are the other vertices of the simplex; the query is in the
/// region when it is not in front of `vertex` along any edge leaving it.
///
/// # Example
/// ```
/// use rs_gjk::interactions::is_in_vertex_region;
///
/// let a = (0.0, 0.0, 0.0);
/// let others = [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0)];
///
/// assert!(is_in_vertex_region((-1.0, -1.0, 5.0), a, &others));
/// assert!(!is_in_vertex_region((0.5, -1.0, 0.0), a, &others));
/// ```
pub fn is_in_vertex_region(query: (f64, f64, f64), vertex: (f64, f64, f64), neighbours: &[(f64, f64, f64)]) -> bool {
    let to_query = subtract_vectors(query, vertex);
    neighbours
        .iter()
        .all(|&n| dot_product(to_query, subtract_vectors(n, vertex)) <= 0.0)
}

/// True if `query` lies in the Voronoi region of edge `u v`.
///
/// `normal_uv` is the normal of the adjacent face that runs `u → v` in its
/// winding, `normal_vu` the normal of the face that runs `v → u`. For a lone
/// triangle pass its normal and the negated normal.
///
/// The query must project strictly inside the segment and lie on or outside
/// both edge planes `(v - u) × normal_uv` and `(u - v) × normal_vu`.
pub fn is_in_edge_region(
    query: (f64, f64, f64),
    u: (f64, f64, f64),
    v: (f64, f64, f64),
    normal_uv: (f64, f64, f64),
    normal_vu: (f64, f64, f64),
) -> bool {
    let uv = subtract_vectors(v, u);
    let vu = negate_vector(uv);
    let uq = subtract_vectors(query, u);
    let vq = subtract_vectors(query, v);

    dot_product(uq, uv) > 0.0
        && dot_product(vq, vu) > 0.0
        && dot_product(uq, cross_product(uv, normal_uv)) >= 0.0
        && dot_product(vq, cross_product(vu, normal_vu)) >= 0.0
}

/// True if `query` lies in the Voronoi region of face `a b c` of a solid.
///
/// `normal` must be `(b - a) × (c - a)` and point out of the solid. The query
/// has to project inside the triangle and lie strictly in front of it.
pub fn is_in_face_region(
    query: (f64, f64, f64),
    a: (f64, f64, f64),
    b: (f64, f64, f64),
    c: (f64, f64, f64),
    normal: (f64, f64, f64),
) -> bool {
    let edge_plane = |u: (f64, f64, f64), v: (f64, f64, f64)| {
        dot_product(subtract_vectors(query, u), cross_product(subtract_vectors(v, u), normal)) <= 0.0
    };

    edge_plane(a, b)
        && edge_plane(b, c)
        && edge_plane(c, a)
        && dot_product(subtract_vectors(query, a), normal) > 0.0
}

/// Component of `query - u` perpendicular to `u v`, scaled by `|uv|²`.
fn edge_direction(query: (f64, f64, f64), u: (f64, f64, f64), v: (f64, f64, f64)) -> (f64, f64, f64) {
    let uv = subtract_vectors(v, u);
    triple_product(uv, subtract_vectors(query, u), uv)
}

/// Finds the feature of `simplex` closest to `query` and reduces to it.
///
/// Regions are tested vertices first, then edges, then faces, each in a fixed
/// order, and the first match wins:
/// * 2 points: a, b, then the segment.
/// * 3 points: a, b, c; edges bc, ab, ca; otherwise the triangle itself.
/// * 4 points: a, b, c, d; edges ab, bc, bd, ad, ac, cd; faces abc, bdc, adb,
///   dac; otherwise the query is enclosed and all four points are kept.
///
/// A tetrahedron is put into canonical orientation first, so the reduced
/// simplex may list its points in a different order than the input.
///
/// # Errors
/// Returns `GjkError::EmptyPointSet` for an empty simplex.
///
/// # Example
/// ```
/// use rs_gjk::interactions::{reduce, FeatureKind};
/// use rs_gjk::models::Simplex;
///
/// let segment = Simplex::from_points(&[(-1.0, 1.0, 0.0), (1.0, 1.0, 0.0)]).unwrap();
/// let reduction = reduce((0.0, 0.0, 0.0), &segment).unwrap();
///
/// assert_eq!(reduction.kind, FeatureKind::Edge);
/// assert_eq!(reduction.simplex, segment);
/// assert!(reduction.direction.1 < 0.0);
/// ```
pub fn reduce(query: (f64, f64, f64), simplex: &Simplex) -> Result<Reduction, GjkError> {
    match *simplex.points() {
        [] => Err(GjkError::EmptyPointSet),
        [a] => Reduction::vertex(query, a),
        [a, b] => reduce_segment(query, a, b),
        [a, b, c] => reduce_triangle(query, a, b, c),
        _ => {
            let mut oriented = simplex.clone();
            normalize_simplex_orientation(&mut oriented);
            match *oriented.points() {
                [a, b, c, d] => reduce_tetrahedron(query, a, b, c, d),
                _ => Err(GjkError::SimplexFull),
            }
        }
    }
}

fn reduce_segment(query: (f64, f64, f64), a: (f64, f64, f64), b: (f64, f64, f64)) -> Result<Reduction, GjkError> {
    if is_in_vertex_region(query, a, &[b]) {
        return Reduction::vertex(query, a);
    }
    if is_in_vertex_region(query, b, &[a]) {
        return Reduction::vertex(query, b);
    }
    Reduction::edge(query, a, b)
}

fn reduce_triangle(
    query: (f64, f64, f64),
    a: (f64, f64, f64),
    b: (f64, f64, f64),
    c: (f64, f64, f64),
) -> Result<Reduction, GjkError> {
    for (vertex, others) in [(a, [b, c]), (b, [a, c]), (c, [a, b])] {
        if is_in_vertex_region(query, vertex, &others) {
            return Reduction::vertex(query, vertex);
        }
    }

    // A lone triangle is a two-sided face: front normal n, back normal -n.
    let n = triangle_normal(a, b, c);
    let back = negate_vector(n);
    for (u, v) in [(b, c), (a, b), (c, a)] {
        if is_in_edge_region(query, u, v, n, back) {
            return Reduction::edge(query, u, v);
        }
    }

    let side = dot_product(subtract_vectors(query, a), n);
    let direction = if side > 0.0 {
        n
    } else if side < 0.0 {
        back
    } else {
        (0.0, 0.0, 0.0)
    };
    Reduction::face(query, &[a, b, c], a, n, direction)
}

fn reduce_tetrahedron(
    query: (f64, f64, f64),
    a: (f64, f64, f64),
    b: (f64, f64, f64),
    c: (f64, f64, f64),
    d: (f64, f64, f64),
) -> Result<Reduction, GjkError> {
    for (vertex, others) in [(a, [b, c, d]), (b, [a, c, d]), (c, [a, b, d]), (d, [a, b, c])] {
        if is_in_vertex_region(query, vertex, &others) {
            return Reduction::vertex(query, vertex);
        }
    }

    let n_abc = triangle_normal(a, b, c);
    let n_bdc = triangle_normal(b, d, c);
    let n_adb = triangle_normal(a, d, b);
    let n_dac = triangle_normal(d, a, c);

    // (u, v, face running u→v, face running v→u)
    let edges = [
        (a, b, n_abc, n_adb),
        (b, c, n_abc, n_bdc),
        (b, d, n_bdc, n_adb),
        (a, d, n_adb, n_dac),
        (a, c, n_dac, n_abc),
        (c, d, n_dac, n_bdc),
    ];
    for (u, v, normal_uv, normal_vu) in edges {
        if is_in_edge_region(query, u, v, normal_uv, normal_vu) {
            return Reduction::edge(query, u, v);
        }
    }

    let faces = [(a, b, c, n_abc), (b, d, c, n_bdc), (a, d, b, n_adb), (d, a, c, n_dac)];
    for (x, y, z, normal) in faces {
        if is_in_face_region(query, x, y, z, normal) {
            return Reduction::face(query, &[x, y, z], x, normal, normal);
        }
    }

    Reduction::new(&[a, b, c, d], (0.0, 0.0, 0.0), 0.0, FeatureKind::Interior)
}
