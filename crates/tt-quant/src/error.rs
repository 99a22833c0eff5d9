use thiserror::Error;
use tt_tensor::{DType, TensorError};

#[derive(Error, Debug)]
pub enum QuantError {
    #[error("quantization input must be f32, got {0}")]
    InputDType(DType),
    #[error("quantization output must be i8, got {0}")]
    OutputDType(DType),
    #[error("element count mismatch: input has {input}, output has {output}")]
    SizeMismatch { input: usize, output: usize },
    #[error("non-finite input value {value} at index {index}")]
    NonFinite { index: usize, value: f32 },
    #[error("tensor error: {0}")]
    Tensor(#[from] TensorError),
}

pub type Result<T> = std::result::Result<T, QuantError>;
