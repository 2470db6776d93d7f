//! Mutable view of a contiguous index range of another vector.

use crate::core::display::write_vector;
use crate::core::traits::VectorBase;
use crate::error::VecError;
use crate::scalar::Scalar;
use std::fmt;

/// Elements `[first, first + len)` of a parent vector, re-indexed from zero.
///
/// The view is non-contiguous from the contract's point of view even when the
/// parent is contiguous: every access goes through the parent's primitives.
/// The parent is held as a plain `&mut dyn VectorBase<T>`, so a view is
/// neither `Send` nor `Sync`.
pub struct Subvector<'a, T: Scalar> {
    parent: &'a mut dyn VectorBase<T>,
    first: usize,
    len: usize,
}

impl<'a, T: Scalar> Subvector<'a, T> {
    /// Fails with `OutOfRange` if the range runs past the end of `parent`.
    pub fn new(parent: &'a mut dyn VectorBase<T>, first: usize, len: usize) -> Result<Self, VecError> {
        let size = parent.size();
        match first.checked_add(len) {
            Some(end) if end <= size => Ok(Self { parent, first, len }),
            _ => {
                log::debug!("subvector [{first}, {first}+{len}) exceeds parent of size {size}");
                let last = first.saturating_add(len.saturating_sub(1));
                Err(VecError::OutOfRange { index: last, size })
            }
        }
    }

    /// Offset of element zero within the parent.
    pub fn first(&self) -> usize {
        self.first
    }
}

impl<T: Scalar> VectorBase<T> for Subvector<'_, T> {
    fn size(&self) -> usize {
        self.len
    }

    fn get_at_index(&self, index: usize) -> Result<&T, VecError> {
        VecError::check_index(index, self.len)?;
        self.parent.get_at_index(self.first + index)
    }

    fn get_at_index_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        VecError::check_index(index, self.len)?;
        self.parent.get_at_index_mut(self.first + index)
    }
}

impl<T: Scalar> fmt::Display for Subvector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::BasicVector;

    #[test]
    fn writes_land_in_the_parent() {
        let mut parent = BasicVector::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        {
            let mut sub = Subvector::<f64>::new(&mut parent, 1, 3).unwrap();
            assert_eq!(sub.size(), 3);
            assert_eq!(sub.copy_to_vec(), vec![1.0, 2.0, 3.0]);
            sub.set_zero();
            assert_eq!(sub.get_at_index(3), Err(VecError::OutOfRange { index: 3, size: 3 }));
        }
        assert_eq!(parent.as_slice(), &[0.0, 0.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn range_past_the_end_is_rejected() {
        let mut parent = BasicVector::<f64>::zeros(4);
        assert!(Subvector::<f64>::new(&mut parent, 2, 3).is_err());
        assert!(Subvector::<f64>::new(&mut parent, 4, 0).is_ok());
        assert!(Subvector::<f64>::new(&mut parent, usize::MAX, 2).is_err());
    }
}
