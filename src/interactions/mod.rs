mod vectors_3d;
mod support;
mod simplex_orientation;
mod voronoi_regions;
mod gjk_collision_3d;
mod voronoi_cloud;
#[cfg(feature = "parallel")]
mod batch;

pub use vectors_3d::*;
pub use support::*;
pub use simplex_orientation::*;
pub use voronoi_regions::*;
pub use gjk_collision_3d::*;
pub use voronoi_cloud::*;
#[cfg(feature = "parallel")]
pub use batch::*;

#[cfg(test)]
mod voronoi_regions_tests;
