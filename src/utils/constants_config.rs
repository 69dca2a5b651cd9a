// src/utils/constants_config.rs
use crate::errors::GjkError;
use crate::utils::DEFAULT_GJK_CONFIG;

/// Tuning knobs for the GJK driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GjkConfig {
    /// Upper bound on support queries in a single run.
    pub max_iterations: usize,
    /// Search directions shorter than this are treated as "origin on the feature".
    pub tolerance: f64,
}

impl Default for GjkConfig {
    fn default() -> Self {
        DEFAULT_GJK_CONFIG
    }
}

impl GjkConfig {
    pub fn new(max_iterations: Option<usize>, tolerance: Option<f64>) -> Self {
        let default = DEFAULT_GJK_CONFIG;
        Self {
            max_iterations: max_iterations.unwrap_or(default.max_iterations),
            tolerance: tolerance.unwrap_or(default.tolerance),
        }
    }

    /// Checks that the driver can run with these values.
    ///
    /// # Errors
    /// Returns `GjkError::InvalidConfig` if `max_iterations` is zero or
    /// `tolerance` is negative or not finite.
    ///
    /// # Example
    /// ```
    /// use rs_gjk::utils::GjkConfig;
    ///
    /// assert!(GjkConfig::default().validate().is_ok());
    /// assert!(GjkConfig::new(Some(0), None).validate().is_err());
    /// assert!(GjkConfig::new(None, Some(-1.0)).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), GjkError> {
        if self.max_iterations == 0 {
            return Err(GjkError::InvalidConfig("max_iterations must be at least 1".to_string()));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(GjkError::InvalidConfig("tolerance must be finite and non-negative".to_string()));
        }
        Ok(())
    }
}
