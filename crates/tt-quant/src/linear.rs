use crate::error::{QuantError, Result};
use crate::sink::{DiagnosticSink, StdoutSink};
use tt_tensor::{DType, Tensor};

/// Parameters derived from the input's dynamic range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantParams {
    /// Smallest observed input value.
    pub min: f32,
    /// Largest observed input value.
    pub max: f32,
    /// Positive step size: code `q` represents approximately `q * scale`.
    pub scale: f32,
}

impl QuantParams {
    /// Derives the scale from observed extrema.
    ///
    /// A constant tensor (zero range) gets scale 1 so the codes reproduce
    /// the rounded constant; otherwise the full 8-bit span of 255 steps
    /// divides the range.
    pub fn from_range(min: f32, max: f32) -> QuantParams {
        QuantParams {
            min,
            max,
            scale: scale_f64(min, max) as f32,
        }
    }
}

// Derived in f64: a single-precision 2.0 / 255.0 rounds up just enough to
// pull a -127.5 quotient inside the boundary, turning -128 codes into -127.
fn scale_f64(min: f32, max: f32) -> f64 {
    let range = f64::from(max) - f64::from(min);
    if range == 0.0 {
        1.0
    } else {
        range / 255.0
    }
}

/// Quantizes an F32 tensor into a pre-allocated I8 tensor, reporting the
/// derived parameters on standard output.
pub fn quantize_i8(input: &Tensor, output: &mut Tensor) -> Result<QuantParams> {
    quantize_i8_with(input, output, &mut StdoutSink)
}

/// Quantizes `input` into `output`, reporting derived parameters through
/// `sink`.
///
/// The input must be F32, the output I8, and both must hold the same number
/// of elements (shape equality is not required). Each element is divided by
/// the scale, clamped to `[-128, 127]` and rounded half-away-from-zero.
/// All preconditions, including rejection of non-finite input, are checked
/// before any element is written: on failure the output buffer is untouched.
///
/// Deterministic: a pure function of the input's contents.
pub fn quantize_i8_with(
    input: &Tensor,
    output: &mut Tensor,
    sink: &mut dyn DiagnosticSink,
) -> Result<QuantParams> {
    if input.dtype() != DType::F32 {
        return Err(QuantError::InputDType(input.dtype()));
    }
    if output.dtype() != DType::I8 {
        return Err(QuantError::OutputDType(output.dtype()));
    }
    if input.numel() != output.numel() {
        return Err(QuantError::SizeMismatch {
            input: input.numel(),
            output: output.numel(),
        });
    }

    let src = input.data_f32()?;
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for (i, &x) in src.iter().enumerate() {
        if !x.is_finite() {
            return Err(QuantError::NonFinite { index: i, value: x });
        }
        min = min.min(x);
        max = max.max(x);
    }

    let params = QuantParams::from_range(min, max);
    log::debug!(
        "quantize: min={} max={} scale={}",
        params.min,
        params.max,
        params.scale
    );

    let scale = scale_f64(min, max);
    let dst = output.data_i8_mut()?;
    for (q, &x) in dst.iter_mut().zip(src) {
        // Clamp before rounding, so +127.5 saturates to 127 while -127.5
        // still rounds away from zero to -128.
        let scaled = (f64::from(x) / scale).clamp(-128.0, 127.0);
        *q = scaled.round() as i8;
    }

    sink.record(&params);
    Ok(params)
}
