use crate::error::{Result, TensorError};
use std::fmt;

/// A tensor shape, wrapping a vector of per-axis extents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Create a new shape from a vector of extents.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    /// Create a shape from a slice of extents.
    pub fn from_slice(dims: &[usize]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }

    /// Number of axes (rank).
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements (product of all extents).
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns the extent of axis `i`.
    ///
    /// # Panics
    /// Panics if `i >= ndim()`.
    pub fn dim(&self, i: usize) -> usize {
        self.dims[i]
    }

    /// Returns a reference to the underlying extents.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Checks that this shape can describe a tensor: rank at least 1 and
    /// every extent at least 1.
    ///
    /// # Errors
    /// Returns `InvalidShape` for a rank-0 shape or any zero extent.
    pub fn validate(&self) -> Result<()> {
        if self.dims.is_empty() || self.dims.iter().any(|&d| d == 0) {
            return Err(TensorError::InvalidShape(self.dims.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape::from_slice(dims)
    }
}
