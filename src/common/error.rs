//! Error types for the configuration surface.

use thiserror::Error;

/// Rejected kinematics configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The per-substep shift bounds the substep count and must be positive.
    #[error("max substep shift must be positive, got {0}")]
    NonPositiveSubstepShift(f64),
    /// A numeric field is NaN or infinite.
    #[error("{field} must be finite")]
    NonFiniteValue { field: &'static str },
    /// Drag removes velocity and cannot be negative.
    #[error("drag must be non-negative, got {0}")]
    NegativeDrag(f64),
    /// Tolerances are distances.
    #[error("{field} must be non-negative, got {value}")]
    NegativeTolerance { field: &'static str, value: f64 },
    /// At least one substep is required per step.
    #[error("max substeps must be at least 1")]
    ZeroSubsteps,
}
