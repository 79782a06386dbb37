use thiserror::Error;

/// Errors raised while building facades over, or loading definitions into,
/// a [`ParameterCollection`](crate::params::collection::ParameterCollection).
///
/// A lookup that finds nothing is not an error and never shows up here.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("invalid authentication context")]
    InvalidAuthContext,

    #[error("set should be called with `key` as a string or a table, got {0}")]
    InvalidInput(String),

    #[error("parameter values must be scalars, got {0}")]
    InvalidValue(String),

    #[error("Definition error: {0}")]
    Definition(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParamError>;
