use thiserror::Error;

/// Top-level error type for the wall framing engine.
#[derive(Debug, Error)]
pub enum WallframeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to wall and opening descriptors.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid wall: {0}")]
    InvalidWall(String),

    #[error("unresolved opening geometry: {0}")]
    UnresolvedOpeningGeometry(String),

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors related to framing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid framing parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors reported by a persistence sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink rejected member: {0}")]
    Rejected(String),
}

/// Convenience type alias for results using [`WallframeError`].
pub type Result<T> = std::result::Result<T, WallframeError>;
