use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::storage::Storage;
use std::fmt;

/// A shape-described contiguous array of uniformly-typed elements.
///
/// Holds row-major data in a [`Storage`] whose variant matches `dtype`.
/// The shape and dtype are fixed at construction; element contents are
/// mutable through the typed accessors. The buffers are released when the
/// value is dropped.
#[derive(Debug, Clone)]
pub struct Tensor {
    storage: Storage,
    shape: Shape,
    dtype: DType,
}

impl Tensor {
    /// Create a zero-filled tensor with the given shape and dtype.
    ///
    /// # Errors
    /// Returns `InvalidShape` if the shape has rank 0 or any zero extent.
    pub fn new(shape: Shape, dtype: DType) -> Result<Tensor> {
        shape.validate()?;
        let storage = Storage::zeros(dtype, shape.numel());
        Ok(Tensor {
            storage,
            shape,
            dtype,
        })
    }

    /// Create an F32 tensor adopting the given data.
    ///
    /// # Errors
    /// Returns `InvalidShape` for an unusable shape, or `SizeMismatch` if
    /// `data.len() != shape.numel()`.
    pub fn from_f32_vec(data: Vec<f32>, shape: Shape) -> Result<Tensor> {
        shape.validate()?;
        if data.len() != shape.numel() {
            return Err(TensorError::SizeMismatch {
                expected: shape.numel(),
                got: data.len(),
            });
        }
        Ok(Tensor {
            storage: Storage::from_f32_vec(data),
            shape,
            dtype: DType::F32,
        })
    }

    /// Returns a reference to the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the per-axis extents.
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Returns the tensor's data type.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Bytes occupied by element storage (shape and record overhead excluded).
    pub fn size_in_bytes(&self) -> usize {
        self.numel() * self.dtype.size_in_bytes()
    }

    /// Returns the elements as an f32 slice.
    ///
    /// # Errors
    /// Returns an error if `dtype() != DType::F32`.
    pub fn data_f32(&self) -> Result<&[f32]> {
        self.storage.as_f32_slice()
    }

    /// Returns the elements as a mutable f32 slice.
    ///
    /// # Errors
    /// Returns an error if `dtype() != DType::F32`.
    pub fn data_f32_mut(&mut self) -> Result<&mut [f32]> {
        self.storage.as_f32_slice_mut()
    }

    /// Returns the elements as an f16 slice.
    ///
    /// # Errors
    /// Returns an error if `dtype() != DType::F16`.
    pub fn data_f16(&self) -> Result<&[half::f16]> {
        self.storage.as_f16_slice()
    }

    /// Returns the elements as a mutable f16 slice.
    ///
    /// # Errors
    /// Returns an error if `dtype() != DType::F16`.
    pub fn data_f16_mut(&mut self) -> Result<&mut [half::f16]> {
        self.storage.as_f16_slice_mut()
    }

    /// Returns the elements as an i8 slice.
    ///
    /// # Errors
    /// Returns an error if `dtype() != DType::I8`.
    pub fn data_i8(&self) -> Result<&[i8]> {
        self.storage.as_i8_slice()
    }

    /// Returns the elements as a mutable i8 slice.
    ///
    /// # Errors
    /// Returns an error if `dtype() != DType::I8`.
    pub fn data_i8_mut(&mut self) -> Result<&mut [i8]> {
        self.storage.as_i8_slice_mut()
    }

    /// Returns the underlying storage reference.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

/// One-line rendering: dtype tag, element count, then elements in index
/// order. Floats print with two fractional digits, integers in decimal.
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor ({}) [{} elements]:", self.dtype, self.numel())?;
        match &self.storage {
            Storage::F32(v) => {
                for x in v {
                    write!(f, " {:.2}", x)?;
                }
            }
            Storage::F16(v) => {
                for x in v {
                    write!(f, " {:.2}", x.to_f32())?;
                }
            }
            Storage::I8(v) => {
                for x in v {
                    write!(f, " {}", x)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tensor() {
        let t = Tensor::new(Shape::new(vec![2, 3]), DType::F32).unwrap();
        assert_eq!(t.rank(), 2);
        assert_eq!(t.dims(), &[2, 3]);
        assert_eq!(t.numel(), 6);
        assert_eq!(t.dtype(), DType::F32);
        assert_eq!(t.data_f32().unwrap(), &[0.0; 6]);
    }

    #[test]
    fn test_new_each_dtype() {
        for dtype in [DType::F32, DType::F16, DType::I8] {
            let t = Tensor::new(Shape::new(vec![4]), dtype).unwrap();
            assert_eq!(t.dtype(), dtype);
            assert_eq!(t.numel(), 4);
            assert_eq!(t.storage().len(), 4);
        }
    }

    #[test]
    fn test_new_rejects_rank_zero() {
        assert!(Tensor::new(Shape::new(vec![]), DType::F32).is_err());
    }

    #[test]
    fn test_new_rejects_zero_extent() {
        assert!(Tensor::new(Shape::new(vec![2, 0]), DType::I8).is_err());
    }

    #[test]
    fn test_from_f32_vec() {
        let mut t = Tensor::from_f32_vec(vec![1.0, 2.0, 3.0], Shape::new(vec![3])).unwrap();
        assert_eq!(t.dtype(), DType::F32);
        assert_eq!(t.data_f32().unwrap(), &[1.0, 2.0, 3.0]);
        t.data_f32_mut().unwrap()[0] = 42.0;
        assert_eq!(t.data_f32().unwrap()[0], 42.0);
    }

    #[test]
    fn test_from_f32_vec_size_mismatch() {
        let r = Tensor::from_f32_vec(vec![1.0, 2.0], Shape::new(vec![3]));
        assert!(matches!(
            r,
            Err(TensorError::SizeMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_mistyped_access() {
        let t = Tensor::new(Shape::new(vec![2]), DType::I8).unwrap();
        assert!(t.data_f32().is_err());
        assert!(t.data_i8().is_ok());
    }

    #[test]
    fn test_element_mutation() {
        let mut t = Tensor::new(Shape::new(vec![1, 2]), DType::I8).unwrap();
        t.data_i8_mut().unwrap()[1] = 7;
        assert_eq!(t.data_i8().unwrap(), &[0, 7]);
    }

    #[test]
    fn test_size_in_bytes() {
        let f = Tensor::new(Shape::new(vec![1, 6]), DType::F32).unwrap();
        let q = Tensor::new(Shape::new(vec![1, 6]), DType::I8).unwrap();
        assert_eq!(f.size_in_bytes(), 24);
        assert_eq!(q.size_in_bytes(), 6);
    }

    #[test]
    fn test_create_drop_create() {
        let shape = Shape::new(vec![4, 4]);
        let t = Tensor::new(shape.clone(), DType::F32).unwrap();
        drop(t);
        let t2 = Tensor::new(shape, DType::F32).unwrap();
        assert_eq!(t2.numel(), 16);
    }

    #[test]
    fn test_display_f32() {
        let t = Tensor::from_f32_vec(vec![-0.85, 0.12], Shape::new(vec![2])).unwrap();
        assert_eq!(t.to_string(), "Tensor (f32) [2 elements]: -0.85 0.12");
    }

    #[test]
    fn test_display_i8() {
        let mut t = Tensor::new(Shape::new(vec![3]), DType::I8).unwrap();
        t.data_i8_mut().unwrap().copy_from_slice(&[-87, 12, 101]);
        assert_eq!(t.to_string(), "Tensor (i8) [3 elements]: -87 12 101");
    }

    #[test]
    fn test_display_f16() {
        let mut t = Tensor::new(Shape::new(vec![2]), DType::F16).unwrap();
        t.data_f16_mut().unwrap()[0] = half::f16::from_f32(1.5);
        assert_eq!(t.data_f16().unwrap()[0], half::f16::from_f32(1.5));
        assert_eq!(t.to_string(), "Tensor (f16) [2 elements]: 1.50 0.00");
    }
}
