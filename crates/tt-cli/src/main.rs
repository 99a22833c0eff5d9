//! Fixed demonstration: quantize a small weight vector and report the
//! memory saved by the 8-bit representation.

use std::process::ExitCode;

use tt_quant::quantize_i8;
use tt_tensor::{DType, Shape, Tensor};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let shape = Shape::new(vec![1, 6]);
    let weights = vec![-0.85, 0.12, 0.99, -1.50, 0.45, -0.10];
    let f32_weights = Tensor::from_f32_vec(weights, shape.clone())?;

    println!("original weights:");
    println!("{}", f32_weights);

    let mut i8_weights = Tensor::new(shape, DType::I8)?;
    quantize_i8(&f32_weights, &mut i8_weights)?;

    println!("quantized weights:");
    println!("{}", i8_weights);

    // Element storage only; shape and record overhead are not counted.
    let before = f32_weights.size_in_bytes();
    let after = i8_weights.size_in_bytes();
    let saved = 100.0 * (1.0 - after as f64 / before as f64);
    println!("f32 storage: {} bytes", before);
    println!("i8 storage: {} bytes", after);
    println!("saved: {:.0}%", saved);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
