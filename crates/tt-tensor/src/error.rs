use thiserror::Error;

#[derive(Error, Debug)]
pub enum TensorError {
    #[error("invalid shape {0:?}: rank must be >= 1 and every extent >= 1")]
    InvalidShape(Vec<usize>),
    #[error("dtype mismatch: expected {expected}, got {got}")]
    DTypeMismatch { expected: String, got: String },
    #[error("size mismatch: expected {expected} elements, got {got}")]
    SizeMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, TensorError>;
