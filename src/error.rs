//! Central error handling for the navigation kernel
//!
//! Provides a unified NavigationError enum with consistent categorization.
//! Configuration errors (unknown curve kind, bad duration) are fatal at path
//! construction; there are no recoverable runtime errors on the per-frame path.

/// Centralized error type for all navigation operations
#[derive(thiserror::Error, Debug)]
pub enum NavigationError {
    /// The curve-type selector names no known curve variant.
    #[error("Unknown curve kind: '{0}'")]
    UnknownCurveKind(String),

    /// Start and end waypoints coincide (or nearly so); no path geometry exists.
    #[error("Degenerate path: curve length {length} is below the minimum")]
    DegeneratePath { length: f64 },

    /// An explicitly supplied traversal duration was non-finite or <= 0.
    #[error("Invalid duration: {value} (must be finite and > 0)")]
    InvalidDuration { value: f64 },

    /// The configured speed scale cannot derive a duration.
    #[error("Invalid speed scale: {value} (must be finite and > 0)")]
    InvalidSpeedScale { value: f64 },

    /// A node identifier could not be resolved by the scene query.
    #[error("Unknown scene node: '{0}'")]
    UnknownNode(String),
}

impl NavigationError {
    /// Convenience constructors for common error types
    pub fn unknown_curve_kind<T: ToString>(selector: T) -> Self {
        NavigationError::UnknownCurveKind(selector.to_string())
    }

    pub fn unknown_node<T: ToString>(identifier: T) -> Self {
        NavigationError::UnknownNode(identifier.to_string())
    }
}

/// Result type alias for navigation operations
pub type NavigationResult<T> = Result<T, NavigationError>;
