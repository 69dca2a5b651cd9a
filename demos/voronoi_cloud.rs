// demos/voronoi_cloud.rs
//
// Draws a random simplex, scatters a cloud of points around it and reports
// how many points fall in the Voronoi region of a vertex, an edge, a face or
// the interior. Then runs a few intersection queries.
//
// RUST_LOG=debug cargo run --example voronoi_cloud

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_gjk::apis::easy_gjk::EasyGjk;
use rs_gjk::errors::GjkError;
use rs_gjk::interactions::{points_in_feature_size, random_point_cloud, random_simplex};
use rs_gjk::models::{ConvexHull, Quaternion};

const CLOUD_SIZE: usize = 8000;

fn main() -> Result<(), GjkError> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);

    let simplex = random_simplex(&mut rng);
    println!("Simplex with {} points (seed {}):", simplex.size(), seed);
    for p in simplex.points() {
        println!("  ({:.3}, {:.3}, {:.3})", p.0, p.1, p.2);
    }

    let cloud = random_point_cloud(&mut rng, CLOUD_SIZE, 1.0);
    let labels = ["vertex", "edge", "face", "interior"];
    for (size, label) in (1..=simplex.size()).zip(labels) {
        let points = points_in_feature_size(&simplex, &cloud, size)?;
        println!("{:>8}: {:5} of {} points", label, points.len(), CLOUD_SIZE);
    }

    let gjk = EasyGjk::new();

    let cube = ConvexHull::new_cuboid(2.0, 2.0, 2.0);
    let result = gjk.intersects(&cube.world_vertices())?;
    println!("\nCube around the origin: intersecting={} ({:?})", result.intersecting, result.status);

    let shifted = cube.clone().with_position((10.0, 0.0, 0.0));
    let result = gjk.intersects(&shifted.world_vertices())?;
    println!("Cube shifted by 10: intersecting={} ({:?})", result.intersecting, result.status);

    let tilted = ConvexHull::new_cuboid(2.0, 2.0, 2.0)
        .with_orientation(Quaternion::from_axis_angle((1.0, 1.0, 0.0), 0.6))
        .with_position((1.9, 0.0, 0.0));
    let result = gjk.hulls_intersect(&cube, &tilted)?;
    println!(
        "Tilted cube at x=1.9: intersecting={} ({:?}, {} iterations)",
        result.intersecting, result.status, result.iterations
    );

    Ok(())
}
