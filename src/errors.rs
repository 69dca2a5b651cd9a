use std::fmt;
use std::error::Error;

/// Represents errors that can occur while running intersection queries.
#[derive(Debug, Clone, PartialEq)]
pub enum GjkError {
    /// A support query was made against an empty point set.
    EmptyPointSet,
    /// An input point contains a NaN or infinite coordinate.
    NonFinitePoint { index: usize },
    /// A zero-length vector was given where a direction is required.
    ZeroVector,
    /// A fifth point was pushed onto a simplex that already spans a tetrahedron.
    SimplexFull,
    /// The configuration holds values the driver cannot work with.
    InvalidConfig(String),
}

impl fmt::Display for GjkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GjkError::EmptyPointSet => write!(f, "Point set is empty"),
            GjkError::NonFinitePoint { index } => write!(f, "Point {} has a non-finite coordinate", index),
            GjkError::ZeroVector => write!(f, "Cannot use a zero vector as a direction"),
            GjkError::SimplexFull => write!(f, "Simplex already holds four points"),
            GjkError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl Error for GjkError {}
