//! `tt-quant` - Dynamic-range linear quantization for tinytensor.
//!
//! Maps 32-bit float weights into signed 8-bit codes. The scale is derived
//! from the input's own min/max, so no calibration state is carried between
//! invocations. Derived parameters are reported through an injectable
//! [`DiagnosticSink`].

pub mod error;
pub mod linear;
pub mod sink;

// Re-export primary types at the crate root for convenience.
pub use error::{QuantError, Result};
pub use linear::{quantize_i8, quantize_i8_with, QuantParams};
pub use sink::{DiagnosticSink, NullSink, StdoutSink};
