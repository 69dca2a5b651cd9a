use crate::utils;

pub const DEFAULT_GJK_CONFIG: utils::GjkConfig = utils::GjkConfig {
    max_iterations: 100,
    tolerance: 1e-10,
};
