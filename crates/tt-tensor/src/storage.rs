use crate::dtype::DType;
use crate::error::{Result, TensorError};
use half::f16;

/// Tagged element storage.
///
/// The active variant doubles as the dtype discriminator; dropping the
/// storage frees the buffer through its correctly-typed variant. Access
/// under any other variant is a checked error.
#[derive(Debug, Clone)]
pub enum Storage {
    /// 32-bit floating point storage.
    F32(Vec<f32>),
    /// 16-bit floating point storage (reserved, never computed on).
    F16(Vec<f16>),
    /// Signed 8-bit integer storage.
    I8(Vec<i8>),
}

impl Storage {
    /// Create zero-filled storage for the given dtype and element count.
    pub fn zeros(dtype: DType, n: usize) -> Self {
        match dtype {
            DType::F32 => Storage::F32(vec![0.0; n]),
            DType::F16 => Storage::F16(vec![f16::ZERO; n]),
            DType::I8 => Storage::I8(vec![0; n]),
        }
    }

    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        match self {
            Storage::F32(v) => v.len(),
            Storage::F16(v) => v.len(),
            Storage::I8(v) => v.len(),
        }
    }

    /// Returns true if the storage contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the dtype of this storage.
    pub fn dtype(&self) -> DType {
        match self {
            Storage::F32(_) => DType::F32,
            Storage::F16(_) => DType::F16,
            Storage::I8(_) => DType::I8,
        }
    }

    fn mismatch(&self, expected: DType) -> TensorError {
        TensorError::DTypeMismatch {
            expected: expected.to_string(),
            got: self.dtype().to_string(),
        }
    }

    /// Returns the data as an f32 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not F32.
    pub fn as_f32_slice(&self) -> Result<&[f32]> {
        match self {
            Storage::F32(v) => Ok(v.as_slice()),
            other => Err(other.mismatch(DType::F32)),
        }
    }

    /// Returns the data as a mutable f32 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not F32.
    pub fn as_f32_slice_mut(&mut self) -> Result<&mut [f32]> {
        match self {
            Storage::F32(v) => Ok(v.as_mut_slice()),
            other => Err(other.mismatch(DType::F32)),
        }
    }

    /// Returns the data as an f16 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not F16.
    pub fn as_f16_slice(&self) -> Result<&[f16]> {
        match self {
            Storage::F16(v) => Ok(v.as_slice()),
            other => Err(other.mismatch(DType::F16)),
        }
    }

    /// Returns the data as a mutable f16 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not F16.
    pub fn as_f16_slice_mut(&mut self) -> Result<&mut [f16]> {
        match self {
            Storage::F16(v) => Ok(v.as_mut_slice()),
            other => Err(other.mismatch(DType::F16)),
        }
    }

    /// Returns the data as an i8 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not I8.
    pub fn as_i8_slice(&self) -> Result<&[i8]> {
        match self {
            Storage::I8(v) => Ok(v.as_slice()),
            other => Err(other.mismatch(DType::I8)),
        }
    }

    /// Returns the data as a mutable i8 slice.
    ///
    /// # Errors
    /// Returns an error if the storage is not I8.
    pub fn as_i8_slice_mut(&mut self) -> Result<&mut [i8]> {
        match self {
            Storage::I8(v) => Ok(v.as_mut_slice()),
            other => Err(other.mismatch(DType::I8)),
        }
    }

    /// Create storage from an f32 vector.
    pub fn from_f32_vec(data: Vec<f32>) -> Self {
        Storage::F32(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_f32() {
        let s = Storage::zeros(DType::F32, 5);
        assert_eq!(s.len(), 5);
        assert_eq!(s.dtype(), DType::F32);
        assert_eq!(s.as_f32_slice().unwrap(), &[0.0; 5]);
    }

    #[test]
    fn test_zeros_f16() {
        let s = Storage::zeros(DType::F16, 4);
        assert_eq!(s.len(), 4);
        assert_eq!(s.dtype(), DType::F16);
        assert_eq!(s.as_f16_slice().unwrap(), &[f16::ZERO; 4]);
    }

    #[test]
    fn test_zeros_i8() {
        let s = Storage::zeros(DType::I8, 3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.dtype(), DType::I8);
        assert_eq!(s.as_i8_slice().unwrap(), &[0; 3]);
    }

    #[test]
    fn test_from_f32_vec() {
        let s = Storage::from_f32_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.as_f32_slice().unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mistyped_access() {
        let s = Storage::zeros(DType::I8, 2);
        assert!(s.as_f32_slice().is_err());
        assert!(s.as_f16_slice().is_err());
        assert!(s.as_i8_slice().is_ok());
    }

    #[test]
    fn test_mut_slice() {
        let mut s = Storage::zeros(DType::I8, 2);
        let slice = s.as_i8_slice_mut().unwrap();
        slice[0] = -42;
        assert_eq!(s.as_i8_slice().unwrap(), &[-42, 0]);
    }
}
