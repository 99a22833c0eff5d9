//! `tt-tensor` - Tagged tensor container for tinytensor.
//!
//! This crate provides:
//! - A `Tensor` type owning a shape and a contiguous element buffer
//! - A `Storage` sum type over the supported element representations
//! - Data type definitions (F32, F16, I8)
//! - A one-line `Display` rendering for inspecting tensor contents

pub mod dtype;
pub mod error;
pub mod shape;
pub mod storage;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use dtype::DType;
pub use error::{Result, TensorError};
pub use shape::Shape;
pub use storage::Storage;
pub use tensor::Tensor;
