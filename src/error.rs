use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Prediction or export was attempted before weights were set.
    UninitializedModel,
    DimensionMismatch(String),
    InvalidHyperparameter(String),
    InvalidConfig(String),
    InvalidData(String),
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UninitializedModel => write!(f, "model has not been trained yet"),
            Error::DimensionMismatch(msg) => write!(f, "dimension mismatch: {msg}"),
            Error::InvalidHyperparameter(msg) => write!(f, "invalid hyperparameter: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            Error::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
