use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotatorError {
    #[error("operation `{0}` does not exist on Rotator")]
    UnknownOperation(String),
    #[error("operation `{0}` requires an argument")]
    MissingArgument(&'static str),
    #[error("selector target `{0}` is not a slide index")]
    InvalidTarget(String),
    #[error("slide {index} is out of range ({count} slides)")]
    SlideOutOfRange { index: usize, count: usize },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("invalid options object: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RotatorError>;
