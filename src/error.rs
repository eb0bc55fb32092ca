use thiserror::Error;

/// Top-level error type for the Cephalis analysis kernel.
#[derive(Debug, Error)]
pub enum CephalisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors in static configuration tables (angle definitions, norm rows).
///
/// These indicate a misconfigured protocol, not a runtime measurement
/// condition. Degenerate measurements (missing points, zero-length
/// segments, zero sd) are represented as `None` values, never as errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate metric name: {0}")]
    DuplicateMetric(String),

    #[error("difference metric `{metric}` refers to `{operand}`, which is not defined earlier in the table")]
    OperandNotDefined { metric: String, operand: String },

    #[error("norm row `{label}`: width ratio {value} is out of range (0, {max}]")]
    WidthRatioOutOfRange {
        label: String,
        value: f64,
        max: f64,
    },
}

/// Errors related to the landmark store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown landmark code: {0}")]
    UnknownCode(String),

    #[error("landmark not found in store")]
    LandmarkNotFound,
}

/// Convenience type alias for results using [`CephalisError`].
pub type Result<T> = std::result::Result<T, CephalisError>;
