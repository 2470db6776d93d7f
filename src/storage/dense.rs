//! Column vector on top of Faer.
//!
//! `DenseColumn` stores a real vector as an `n × 1` `faer::Mat<f64>`, so the
//! same storage can be handed to faer-based integrators and linear solvers
//! without a copy. It implements only the three primitives and runs every
//! other operation through the default algorithms.

use crate::core::display::write_vector;
use crate::core::traits::VectorBase;
use crate::error::VecError;
use faer::{Mat, MatRef};
use std::fmt;

pub struct DenseColumn {
    column: Mat<f64>,
}

impl DenseColumn {
    pub fn zeros(size: usize) -> Self {
        Self { column: Mat::from_fn(size, 1, |_, _| 0.0) }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self { column: Mat::from_fn(values.len(), 1, |i, _| values[i]) }
    }

    /// Borrow as an `n × 1` faer matrix.
    pub fn as_mat(&self) -> MatRef<'_, f64> {
        self.column.as_ref()
    }

    pub fn into_mat(self) -> Mat<f64> {
        self.column
    }
}

/// Accepts single-column matrices only.
impl TryFrom<Mat<f64>> for DenseColumn {
    type Error = VecError;

    fn try_from(column: Mat<f64>) -> Result<Self, VecError> {
        VecError::check_size("DenseColumn::try_from", 1, column.ncols())?;
        Ok(Self { column })
    }
}

impl VectorBase<f64> for DenseColumn {
    fn size(&self) -> usize {
        self.column.nrows()
    }

    fn get_at_index(&self, index: usize) -> Result<&f64, VecError> {
        VecError::check_index(index, self.size())?;
        Ok(&self.column[(index, 0)])
    }

    fn get_at_index_mut(&mut self, index: usize) -> Result<&mut f64, VecError> {
        VecError::check_index(index, self.size())?;
        Ok(&mut self.column[(index, 0)])
    }
}

impl fmt::Display for DenseColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_storage_with_faer() {
        let mut v = DenseColumn::from_slice(&[1.0, 2.0, 3.0]);
        v.set_at_index(1, 5.0).unwrap();
        let m = v.as_mat();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 1);
        assert_eq!(m[(1, 0)], 5.0);
    }

    #[test]
    fn rejects_multi_column_matrices() {
        let m = Mat::from_fn(2, 2, |i, j| (i + j) as f64);
        let err = DenseColumn::try_from(m).err();
        assert_eq!(err, Some(VecError::SizeMismatch { expected: 1, found: 2 }));
    }

    #[test]
    fn default_algorithms_run_on_faer_storage() {
        let mut v = DenseColumn::from_slice(&[1.0, -4.0]);
        assert_eq!(v.norm_inf(), 4.0);
        assert_eq!(v.get_at_index(2), Err(VecError::OutOfRange { index: 2, size: 2 }));
        v.set_zero();
        assert_eq!(v.copy_to_vec(), vec![0.0, 0.0]);
        assert_eq!(v.to_string(), "[0, 0]");
    }
}
