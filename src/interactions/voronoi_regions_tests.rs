use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assert_vector_eq;
use crate::errors::GjkError;
use crate::interactions::{
    add_vectors, dot_product, face_normals, is_in_edge_region, is_in_face_region, is_in_vertex_region,
    normalize_simplex_orientation, random_point_cloud, reduce, scale_vector, subtract_vectors, triangle_normal,
    vector_magnitude, FeatureKind, Reduction,
};
use crate::models::Simplex;

fn unit_tetrahedron() -> Simplex {
    Simplex::from_points(&[
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
    ]).unwrap()
}

fn sorted_points(simplex: &Simplex) -> Vec<(f64, f64, f64)> {
    let mut points = simplex.points().to_vec();
    points.sort_by(|p, q| p.partial_cmp(q).unwrap());
    points
}

/// Distance from `query` to the line, plane or point spanned by the reduced feature.
fn distance_to_feature_span(query: (f64, f64, f64), reduction: &Reduction) -> f64 {
    match *reduction.simplex.points() {
        [v] => vector_magnitude(subtract_vectors(query, v)),
        [u, v] => {
            let uv = subtract_vectors(v, u);
            let uq = subtract_vectors(query, u);
            let t = dot_product(uq, uv) / dot_product(uv, uv);
            vector_magnitude(subtract_vectors(uq, scale_vector(uv, t)))
        }
        [a, b, c] => {
            let n = triangle_normal(a, b, c);
            dot_product(subtract_vectors(query, a), n).abs() / vector_magnitude(n)
        }
        _ => 0.0,
    }
}

#[test]
fn test_region_predicates() {
    let a = (0.0, 0.0, 0.0);
    let b = (2.0, 0.0, 0.0);
    let c = (0.0, 2.0, 0.0);
    let n = triangle_normal(a, b, c);
    let back = (0.0, 0.0, -4.0);

    assert!(is_in_vertex_region((-1.0, -1.0, 0.0), a, &[b, c]));
    assert!(!is_in_vertex_region((1.0, -1.0, 0.0), a, &[b, c]));

    assert!(is_in_edge_region((1.0, -1.0, 3.0), a, b, n, back));
    assert!(!is_in_edge_region((1.0, 1.0, 3.0), a, b, n, back));
    // Projects past the end of the segment.
    assert!(!is_in_edge_region((3.0, -1.0, 0.0), a, b, n, back));

    assert!(is_in_face_region((0.5, 0.5, 1.0), a, b, c, n));
    assert!(!is_in_face_region((0.5, 0.5, -1.0), a, b, c, n));
    assert!(!is_in_face_region((0.5, 0.5, 0.0), a, b, c, n), "A point on the face is not in front of it");
    assert!(!is_in_face_region((3.0, 3.0, 1.0), a, b, c, n));
}

#[test]
fn test_reduce_single_point() {
    let point = Simplex::from_points(&[(1.0, 2.0, 3.0)]).unwrap();
    let reduction = reduce((0.0, 0.0, 0.0), &point).unwrap();

    assert_eq!(reduction.kind, FeatureKind::Vertex);
    assert_eq!(reduction.simplex, point);
    assert_eq!(reduction.direction, (-1.0, -2.0, -3.0));
}

#[test]
fn test_reduce_segment() {
    let segment = Simplex::from_points(&[(-1.0, 0.0, 0.0), (1.0, 0.0, 0.0)]).unwrap();

    let left = reduce((-5.0, 1.0, 0.0), &segment).unwrap();
    assert_eq!(left.kind, FeatureKind::Vertex);
    assert_eq!(left.simplex.points(), &[(-1.0, 0.0, 0.0)]);
    assert_eq!(left.direction, (-4.0, 1.0, 0.0));

    let right = reduce((2.0, 0.0, 0.0), &segment).unwrap();
    assert_eq!(right.simplex.points(), &[(1.0, 0.0, 0.0)]);

    let middle = reduce((0.5, 0.0, 2.0), &segment).unwrap();
    assert_eq!(middle.kind, FeatureKind::Edge);
    assert_eq!(middle.simplex, segment);
    // Perpendicular to the segment, towards the query, scaled by |ab|².
    assert_vector_eq(middle.direction, (0.0, 0.0, 8.0), 1e-12, None);
    assert_relative_eq!(middle.distance, 2.0, epsilon = 1e-12);
    assert_relative_eq!(left.distance, 17.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_reduce_segment_through_query() {
    let segment = Simplex::from_points(&[(-1.0, 0.0, 0.0), (1.0, 0.0, 0.0)]).unwrap();
    let reduction = reduce((0.0, 0.0, 0.0), &segment).unwrap();

    assert_eq!(reduction.kind, FeatureKind::Edge);
    assert_eq!(reduction.direction, (0.0, 0.0, 0.0));
    assert_eq!(reduction.distance, 0.0);
}

#[test]
fn test_reduce_triangle_regions() {
    let triangle = Simplex::from_points(&[(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (0.0, 2.0, 0.0)]).unwrap();

    let vertex = reduce((-1.0, -1.0, 0.0), &triangle).unwrap();
    assert_eq!(vertex.kind, FeatureKind::Vertex);
    assert_eq!(vertex.simplex.points(), &[(0.0, 0.0, 0.0)]);

    let edge = reduce((1.0, -1.0, 3.0), &triangle).unwrap();
    assert_eq!(edge.kind, FeatureKind::Edge);
    assert_eq!(edge.simplex.points(), &[(0.0, 0.0, 0.0), (2.0, 0.0, 0.0)]);
    assert_vector_eq(edge.direction, (0.0, -4.0, 12.0), 1e-12, None);

    let above = reduce((0.5, 0.5, 3.0), &triangle).unwrap();
    assert_eq!(above.kind, FeatureKind::Face);
    assert_eq!(above.simplex, triangle);
    assert_eq!(above.direction, (0.0, 0.0, 4.0));
    assert_relative_eq!(above.distance, 3.0, epsilon = 1e-12);

    let below = reduce((0.5, 0.5, -3.0), &triangle).unwrap();
    assert_eq!(below.kind, FeatureKind::Face);
    assert_eq!(below.direction, (0.0, 0.0, -4.0));

    let inside = reduce((0.5, 0.5, 0.0), &triangle).unwrap();
    assert_eq!(inside.kind, FeatureKind::Face);
    assert_eq!(inside.direction, (0.0, 0.0, 0.0));
    assert_eq!(inside.distance, 0.0);
    assert!(!inside.enclosed());

    // Edge direction carries |ab|² = 4; the distance does not.
    assert_relative_eq!(edge.distance, 10.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_reduce_hypotenuse_edge() {
    let triangle = Simplex::from_points(&[(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (0.0, 2.0, 0.0)]).unwrap();
    let reduction = reduce((2.0, 2.0, 0.0), &triangle).unwrap();

    assert_eq!(reduction.kind, FeatureKind::Edge);
    assert_eq!(reduction.simplex.points(), &[(2.0, 0.0, 0.0), (0.0, 2.0, 0.0)]);
    assert!(dot_product(reduction.direction, (1.0, 1.0, 0.0)) > 0.0);
}

#[test]
fn test_reduce_tetrahedron_regions() {
    let tetrahedron = unit_tetrahedron();

    let vertex = reduce((-1.0, -1.0, -1.0), &tetrahedron).unwrap();
    assert_eq!(vertex.kind, FeatureKind::Vertex);
    assert_eq!(vertex.simplex.points(), &[(0.0, 0.0, 0.0)]);

    let apex = reduce((0.0, 0.0, 3.0), &tetrahedron).unwrap();
    assert_eq!(apex.simplex.points(), &[(0.0, 0.0, 1.0)]);

    let edge = reduce((0.5, -1.0, -1.0), &tetrahedron).unwrap();
    assert_eq!(edge.kind, FeatureKind::Edge);
    assert_eq!(sorted_points(&edge.simplex), vec![(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);

    let face = reduce((2.0, 2.0, 2.0), &tetrahedron).unwrap();
    assert_eq!(face.kind, FeatureKind::Face);
    assert_eq!(
        sorted_points(&face.simplex),
        vec![(0.0, 0.0, 1.0), (0.0, 1.0, 0.0), (1.0, 0.0, 0.0)]
    );
    assert!(dot_product(face.direction, (1.0, 1.0, 1.0)) > 0.0);
    assert_relative_eq!(face.distance, 5.0 / 3.0_f64.sqrt(), epsilon = 1e-12);

    let base = reduce((0.2, 0.2, -2.0), &tetrahedron).unwrap();
    assert_eq!(base.kind, FeatureKind::Face);
    assert_eq!(sorted_points(&base.simplex), vec![(0.0, 0.0, 0.0), (0.0, 1.0, 0.0), (1.0, 0.0, 0.0)]);
    assert!(base.direction.2 < 0.0);

    let interior = reduce((0.1, 0.1, 0.1), &tetrahedron).unwrap();
    assert!(interior.enclosed());
    assert_eq!(interior.simplex.size(), 4);
    assert_eq!(interior.direction, (0.0, 0.0, 0.0));
    assert_eq!(interior.distance, 0.0);
}

#[test]
fn test_reduce_query_on_tetrahedron_face_is_interior() {
    let tetrahedron = Simplex::from_points(&[
        (0.0, 0.0, 1.0),
        (-1.0, -1.0, 0.0),
        (2.0, -1.0, 0.0),
        (-1.0, 2.0, 0.0),
    ]).unwrap();
    let reduction = reduce((0.0, 0.0, 0.0), &tetrahedron).unwrap();

    assert_eq!(reduction.kind, FeatureKind::Interior);
    assert_eq!(reduction.simplex, tetrahedron);
}

#[test]
fn test_reduce_accepts_unoriented_tetrahedron() {
    // d in front of abc; the classifier has to flip it before testing faces.
    let tetrahedron = Simplex::from_points(&[
        (0.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (1.0, 0.0, 0.0),
        (0.0, 0.0, -1.0),
    ]).unwrap();
    let mut oriented = tetrahedron.clone();
    normalize_simplex_orientation(&mut oriented);
    assert_ne!(oriented, tetrahedron);

    let reduction = reduce((0.1, 0.1, -0.1), &tetrahedron).unwrap();
    assert!(reduction.enclosed());
    assert_eq!(reduction.simplex, oriented);
}

#[test]
fn test_reduce_vertex_and_edge_are_stable() {
    let tetrahedron = unit_tetrahedron();

    for query in [(-1.0, -1.0, -1.0), (0.5, -1.0, -1.0), (-1.0, 0.5, 0.5)] {
        let first = reduce(query, &tetrahedron).unwrap();
        assert!(matches!(first.kind, FeatureKind::Vertex | FeatureKind::Edge));

        let second = reduce(query, &first.simplex).unwrap();
        assert_eq!(second.kind, first.kind);
        assert_eq!(second.simplex, first.simplex);
    }
}

#[test]
fn test_reduce_empty_simplex() {
    assert_eq!(reduce((0.0, 0.0, 0.0), &Simplex::new()), Err(GjkError::EmptyPointSet));
}

#[test]
fn test_reduce_degenerate_simplices_do_not_fail() {
    let collinear = Simplex::from_points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0)]).unwrap();
    let flat = Simplex::from_points(&[
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (1.0, 1.0, 0.0),
    ]).unwrap();
    let repeated = Simplex::from_points(&[(1.0, 1.0, 1.0), (1.0, 1.0, 1.0)]).unwrap();

    for simplex in [collinear, flat, repeated] {
        for query in [(0.0, 0.0, 0.0), (0.5, 0.5, 1.0), (-3.0, 2.0, 0.0)] {
            let reduction = reduce(query, &simplex).unwrap();
            assert!(!reduction.simplex.is_empty());
            assert!(reduction.simplex.size() <= simplex.size());
        }
    }
}

#[test]
fn test_reduced_feature_is_closest_on_random_tetrahedra() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..100 {
        let mut tetrahedron = Simplex::from_points(&random_point_cloud(&mut rng, 4, 1.0)).unwrap();
        normalize_simplex_orientation(&mut tetrahedron);
        let points = tetrahedron.points().to_vec();
        let normals = face_normals(&tetrahedron);
        let on_face = [points[0], points[1], points[0], points[3]];

        // Barycentric samples of the solid.
        let samples: Vec<_> = (0..500)
            .map(|_| {
                let weights: [f64; 4] = [rng.random(), rng.random(), rng.random(), rng.random()];
                let total: f64 = weights.iter().sum();
                points
                    .iter()
                    .zip(weights)
                    .fold((0.0, 0.0, 0.0), |acc, (&p, w)| add_vectors(acc, scale_vector(p, w / total)))
            })
            .collect();

        for query in random_point_cloud(&mut rng, 20, 2.0) {
            let reduction = reduce(query, &tetrahedron).unwrap();
            let inside = (0..4).all(|i| dot_product(subtract_vectors(query, on_face[i]), normals[i]) <= 0.0);

            if reduction.enclosed() {
                assert!(inside, "{:?} classified as interior of {:?}", query, points);
                continue;
            }
            assert!(!inside, "{:?} lies inside {:?} but reduced to {:?}", query, points, reduction.kind);

            let nearest_sample = samples
                .iter()
                .map(|&s| vector_magnitude(subtract_vectors(query, s)))
                .fold(f64::INFINITY, f64::min);
            let span_distance = distance_to_feature_span(query, &reduction);
            assert!(span_distance <= nearest_sample + 1e-9);
            assert_relative_eq!(reduction.distance, span_distance, epsilon = 1e-9);

            let feature_point = reduction.simplex.points()[0];
            assert!(dot_product(reduction.direction, subtract_vectors(query, feature_point)) > 0.0);
        }
    }
}

#[test]
fn test_reduction_distance_is_scale_free() {
    // Tiny segment 1e-4 above the origin: the raw direction is scaled by
    // |ab|² = 4e-8, the distance is not.
    let segment = Simplex::from_points(&[(-1e-4, 1e-4, 0.0), (1e-4, 1e-4, 0.0)]).unwrap();
    let reduction = reduce((0.0, 0.0, 0.0), &segment).unwrap();

    assert_eq!(reduction.kind, FeatureKind::Edge);
    assert!(vector_magnitude(reduction.direction) < 1e-10);
    assert_relative_eq!(reduction.distance, 1e-4, max_relative = 1e-9);

    let triangle = Simplex::from_points(&[(0.0, 0.0, 1e-4), (1e-4, 0.0, 1e-4), (0.0, 1e-4, 1e-4)]).unwrap();
    let face = reduce((2e-5, 2e-5, 0.0), &triangle).unwrap();

    assert_eq!(face.kind, FeatureKind::Face);
    assert!(vector_magnitude(face.direction) < 1e-7);
    assert_relative_eq!(face.distance, 1e-4, max_relative = 1e-9);
}
