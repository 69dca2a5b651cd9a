mod convex_hull;
mod quaternion;
mod simplex;

pub use convex_hull::*;
pub use quaternion::*;
pub use simplex::*;
