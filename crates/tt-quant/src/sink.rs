use crate::linear::QuantParams;

/// Destination for the parameters a quantization run derives.
///
/// Injectable so callers can capture or suppress the report. The default
/// used by [`crate::quantize_i8`] writes to standard output.
pub trait DiagnosticSink {
    /// Receives the derived parameters once per successful run.
    fn record(&mut self, params: &QuantParams);
}

/// Writes `min`, `max` and `scale` as labeled lines on standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn record(&mut self, params: &QuantParams) {
        println!("min: {:.2}", params.min);
        println!("max: {:.2}", params.max);
        println!("scale: {:.4}", params.scale);
    }
}

/// Discards the report.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _params: &QuantParams) {}
}
