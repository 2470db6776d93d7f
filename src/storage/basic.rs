//! Contiguous storage layout backed by a `Vec`.
//!
//! `BasicVector` keeps its elements in one slice. It exposes the slice through
//! `as_contiguous` / `as_contiguous_mut`, which the default bulk writes and
//! other layouts use as a fast path, and overrides the remaining bulk
//! operations of [`VectorBase`] with single slice passes.

use crate::core::bounds::ElementBounds;
use crate::core::display::write_vector;
use crate::core::traits::{CheckedOperands, VectorBase};
use crate::error::VecError;
use crate::scalar::Scalar;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Contiguous vector, optionally carrying element bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicVector<T> {
    values: Vec<T>,
    bounds: ElementBounds,
}

impl<T: Scalar> BasicVector<T> {
    pub fn zeros(size: usize) -> Self {
        Self::from_vec(vec![T::zero(); size])
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Self { values, bounds: ElementBounds::unbounded() }
    }

    pub fn from_slice(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }

    /// Attaches per-element limits; each side must have one entry per element.
    pub fn with_bounds(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, VecError> {
        let bounds = ElementBounds::new(lower, upper)?;
        VecError::check_size("with_bounds", self.values.len(), bounds.len())?;
        self.bounds = bounds;
        Ok(self)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Scalar> VectorBase<T> for BasicVector<T> {
    fn size(&self) -> usize {
        self.values.len()
    }

    fn get_at_index(&self, index: usize) -> Result<&T, VecError> {
        let size = self.values.len();
        self.values.get(index).ok_or(VecError::OutOfRange { index, size })
    }

    fn get_at_index_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        let size = self.values.len();
        self.values.get_mut(index).ok_or(VecError::OutOfRange { index, size })
    }

    fn as_contiguous(&self) -> Option<&[T]> {
        Some(&self.values)
    }

    fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(&mut self.values)
    }

    fn copy_to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    fn copy_into(&self, target: &mut [T]) -> Result<(), VecError> {
        VecError::check_size("copy_into", self.values.len(), target.len())?;
        target.clone_from_slice(&self.values);
        Ok(())
    }

    fn scale_and_add_into(&self, scale: &T, target: &mut [T]) -> Result<(), VecError> {
        VecError::check_size("scale_and_add_into", self.values.len(), target.len())?;
        for (slot, v) in target.iter_mut().zip(&self.values) {
            *slot = slot.clone() + scale.clone() * v.clone();
        }
        Ok(())
    }

    fn do_plus_eq_scaled(&mut self, operands: CheckedOperands<'_, T>) -> Result<(), VecError> {
        VecError::check_size("plus_eq_scaled", self.values.len(), operands.size())?;
        for (i, element) in self.values.iter_mut().enumerate() {
            *element = element.clone() + operands.sum_at(i)?;
        }
        Ok(())
    }

    fn element_bounds(&self) -> ElementBounds {
        self.bounds.clone()
    }
}

impl<T: Scalar> From<Vec<T>> for BasicVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Scalar> Index<usize> for BasicVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T: Scalar> IndexMut<usize> for BasicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T: Scalar> fmt::Display for BasicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(self, f)
    }
}
