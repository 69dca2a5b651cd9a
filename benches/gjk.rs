use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_gjk::interactions::{classify_cloud, gjk_intersection, intersects, random_point_cloud, random_simplex, shapes_intersect};
use rs_gjk::models::{ConvexHull, Quaternion};
use rs_gjk::utils::GjkConfig;


pub fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("gjk_intersection");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);
    let config = GjkConfig::default();

    let cube = ConvexHull::new_cuboid(2.0, 2.0, 2.0).world_vertices();
    let shifted = ConvexHull::new_cuboid(2.0, 2.0, 2.0)
        .with_position((10.0, 0.0, 0.0))
        .world_vertices();
    let face_tetrahedron = [(0.0, 0.0, 1.0), (-1.0, -1.0, 0.0), (2.0, -1.0, 0.0), (-1.0, 2.0, 0.0)];

    group.bench_function("cube_touching", |b| b.iter(|| intersects(black_box(&cube))));
    group.bench_function("cube_separated", |b| b.iter(|| intersects(black_box(&shifted))));
    group.bench_function("tetrahedron_enclosed", |b| b.iter(|| gjk_intersection(black_box(&face_tetrahedron[..]), &config)));

    // Dense cloud: the support scan dominates.
    let mut rng = StdRng::seed_from_u64(1);
    let cloud = random_point_cloud(&mut rng, 1000, 1.0);
    group.bench_function("cloud_1000", |b| b.iter(|| gjk_intersection(black_box(cloud.as_slice()), &config)));

    let hull_a = ConvexHull::new_cuboid(2.0, 2.0, 2.0)
        .with_orientation(Quaternion::from_axis_angle((1.0, 1.0, 0.0), 0.6));
    let hull_b = ConvexHull::new_cuboid(2.0, 2.0, 2.0)
        .with_orientation(Quaternion::from_axis_angle((0.0, 1.0, 1.0), 1.1))
        .with_position((1.9, 0.3, -0.2));
    group.bench_function("posed_hulls", |b| b.iter(|| shapes_intersect(black_box(&hull_a), black_box(&hull_b), &config)));

    group.finish();
}

pub fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("voronoi_classification");
    group.sample_size(50);

    let mut rng = StdRng::seed_from_u64(2);
    let simplex = loop {
        let simplex = random_simplex(&mut rng);
        if simplex.size() == 4 {
            break simplex;
        }
    };
    let cloud = random_point_cloud(&mut rng, 8000, 1.0);

    group.bench_function("tetrahedron_8000", |b| b.iter(|| classify_cloud(&simplex, black_box(&cloud))));

    group.finish();
}

criterion_group!(benches, bench_intersection, bench_classification);
criterion_main!(benches);
