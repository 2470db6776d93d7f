//! The vector contract shared by every state, input and output vector.
//!
//! A storage layout supplies three primitives (`size`, `get_at_index`,
//! `get_at_index_mut`); every other operation has a default body written only
//! in terms of those primitives. Layouts override defaults where their
//! storage allows a faster pass. Overrides must keep the contract:
//! O(size) time for bulk operations, O(1) element access, and no heap
//! allocation in any mutating, size-preserving operation.
//!
//! Scaled addition and its chaining forms live on [`VectorOps`], which is
//! implemented for every `VectorBase`, trait objects included.

use crate::core::bounds::ElementBounds;
use crate::error::VecError;
use crate::scalar::Scalar;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// One term `(scale, vector)` of a multi-operand scaled addition.
///
/// The operand is a plain `&dyn VectorBase<T>` with no `Sync` bound, so an
/// operand list stays on the thread that built it. Concrete layouts over
/// `f64` and `AutoDiff<N>` are `Send + Sync` and may be read from several
/// threads before being wrapped.
pub type ScaledOperand<'a, T> = (T, &'a dyn VectorBase<T>);

/// An operand list whose sizes all match the receiver.
///
/// Only the checked entry points of [`VectorOps`] build one, so a
/// [`VectorBase::do_plus_eq_scaled`] override never sees a wrong-sized operand.
pub struct CheckedOperands<'a, T: Scalar> {
    operands: &'a [ScaledOperand<'a, T>],
    size: usize,
}

impl<'a, T: Scalar> CheckedOperands<'a, T> {
    fn check(size: usize, operands: &'a [ScaledOperand<'a, T>]) -> Result<Self, VecError> {
        for (k, (_, rhs)) in operands.iter().enumerate() {
            if rhs.size() != size {
                log::debug!("plus_eq_scaled: operand {} has {} elements, receiver has {}", k, rhs.size(), size);
                return Err(VecError::SizeMismatch { expected: size, found: rhs.size() });
            }
        }
        Ok(Self { operands, size })
    }

    /// Size shared by the receiver and every operand.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn terms(&self) -> &'a [ScaledOperand<'a, T>] {
        self.operands
    }

    /// `Σ scale_k * rhs_k[index]`, summed in list order starting from zero.
    ///
    /// Contiguous operands are read through their slices.
    pub fn sum_at(&self, index: usize) -> Result<T, VecError> {
        let mut sum = T::zero();
        for (scale, rhs) in self.operands {
            let x = match rhs.as_contiguous() {
                Some(values) => values
                    .get(index)
                    .ok_or(VecError::OutOfRange { index, size: values.len() })?,
                None => rhs.get_at_index(index)?,
            };
            sum = sum + x.clone() * scale.clone();
        }
        Ok(sum)
    }
}

/// A fixed-size column vector of scalars, addressed by zero-based index.
///
/// The contract is object safe; engines hold vectors as `dyn VectorBase<T>`.
/// Values are transferred between vectors only through [`set_from`] and the
/// flat-buffer operations, never by copying the vector object itself.
///
/// [`set_from`]: VectorBase::set_from
pub trait VectorBase<T: Scalar> {
    /// Number of elements. Constant for the lifetime of the vector.
    fn size(&self) -> usize;

    /// Element `index`, or `OutOfRange` if `index >= size()`.
    fn get_at_index(&self, index: usize) -> Result<&T, VecError>;

    /// Mutable element `index`, or `OutOfRange` if `index >= size()`.
    fn get_at_index_mut(&mut self, index: usize) -> Result<&mut T, VecError>;

    fn set_at_index(&mut self, index: usize, value: T) -> Result<(), VecError> {
        *self.get_at_index_mut(index)? = value;
        Ok(())
    }

    /// Backing storage, for layouts that keep their elements in one slice.
    fn as_contiguous(&self) -> Option<&[T]> {
        None
    }

    /// Mutable backing storage; the bulk writes below use it when present.
    fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        None
    }

    /// Replaces every element with the matching element of `value`.
    fn set_from(&mut self, value: &dyn VectorBase<T>) -> Result<(), VecError> {
        VecError::check_size("set_from", self.size(), value.size())?;
        if let Some(values) = value.as_contiguous() {
            return self.set_from_slice(values);
        }
        for i in 0..value.size() {
            self.set_at_index(i, value.get_at_index(i)?.clone())?;
        }
        Ok(())
    }

    /// Replaces every element with the matching entry of `values`.
    fn set_from_slice(&mut self, values: &[T]) -> Result<(), VecError> {
        VecError::check_size("set_from_slice", self.size(), values.len())?;
        if let Some(slots) = self.as_contiguous_mut() {
            slots.clone_from_slice(values);
            return Ok(());
        }
        for (i, v) in values.iter().enumerate() {
            self.set_at_index(i, v.clone())?;
        }
        Ok(())
    }

    fn set_zero(&mut self) {
        if let Some(slots) = self.as_contiguous_mut() {
            slots.fill(T::zero());
            return;
        }
        for i in 0..self.size() {
            if let Ok(element) = self.get_at_index_mut(i) {
                *element = T::zero();
            }
        }
    }

    /// Copies the elements into a newly allocated `Vec` of exactly `size()` entries.
    fn copy_to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size());
        out.extend(elements(self).cloned());
        out
    }

    /// Copies the elements into `target`, which must hold exactly `size()` entries.
    fn copy_into(&self, target: &mut [T]) -> Result<(), VecError> {
        VecError::check_size("copy_into", self.size(), target.len())?;
        for (slot, v) in target.iter_mut().zip(elements(self)) {
            *slot = v.clone();
        }
        Ok(())
    }

    /// `target[i] += scale * self[i]` for every `i`.
    fn scale_and_add_into(&self, scale: &T, target: &mut [T]) -> Result<(), VecError> {
        VecError::check_size("scale_and_add_into", self.size(), target.len())?;
        for (slot, v) in target.iter_mut().zip(elements(self)) {
            *slot = slot.clone() + scale.clone() * v.clone();
        }
        Ok(())
    }

    /// Adds `Σ scale_k * rhs_k` into this vector.
    ///
    /// For each index the operand terms are summed first, in list order, and
    /// the sum is added to the element once. Overrides must keep that order.
    fn do_plus_eq_scaled(&mut self, operands: CheckedOperands<'_, T>) -> Result<(), VecError> {
        for i in 0..self.size() {
            let value = operands.sum_at(i)?;
            let element = self.get_at_index_mut(i)?;
            *element = element.clone() + value;
        }
        Ok(())
    }

    /// Largest element magnitude; zero for an empty vector.
    fn norm_inf(&self) -> T {
        let mut magnitudes = elements(self).map(|v| v.magnitude());
        match magnitudes.next() {
            Some(first) => magnitudes.fold(first, |norm, m| norm.larger(m)),
            None => T::zero(),
        }
    }

    /// Advisory per-element limits. Empty bounds mean unconstrained.
    fn element_bounds(&self) -> ElementBounds {
        ElementBounds::unbounded()
    }
}

/// Scaled addition with chaining, for concrete layouts and trait objects alike.
///
/// Each call is one update: every operand is size-checked before any element
/// changes, so a `SizeMismatch` leaves the receiver untouched.
pub trait VectorOps<T: Scalar>: VectorBase<T> {
    /// Adds every `(scale, rhs)` term into this vector.
    fn plus_eq_scaled_multi(&mut self, operands: &[ScaledOperand<'_, T>]) -> Result<&mut Self, VecError>;

    /// `self += scale * rhs`; the one-operand case of [`plus_eq_scaled_multi`].
    ///
    /// [`plus_eq_scaled_multi`]: VectorOps::plus_eq_scaled_multi
    fn plus_eq_scaled(&mut self, scale: T, rhs: &dyn VectorBase<T>) -> Result<&mut Self, VecError>;

    /// `self += rhs`.
    fn plus_eq(&mut self, rhs: &dyn VectorBase<T>) -> Result<&mut Self, VecError>;

    /// `self -= rhs`.
    fn minus_eq(&mut self, rhs: &dyn VectorBase<T>) -> Result<&mut Self, VecError>;
}

impl<T: Scalar, V: VectorBase<T> + ?Sized> VectorOps<T> for V {
    fn plus_eq_scaled_multi(&mut self, operands: &[ScaledOperand<'_, T>]) -> Result<&mut Self, VecError> {
        let checked = CheckedOperands::check(self.size(), operands)?;
        self.do_plus_eq_scaled(checked)?;
        Ok(self)
    }

    fn plus_eq_scaled(&mut self, scale: T, rhs: &dyn VectorBase<T>) -> Result<&mut Self, VecError> {
        self.plus_eq_scaled_multi(&[(scale, rhs)])
    }

    fn plus_eq(&mut self, rhs: &dyn VectorBase<T>) -> Result<&mut Self, VecError> {
        self.plus_eq_scaled(T::one(), rhs)
    }

    fn minus_eq(&mut self, rhs: &dyn VectorBase<T>) -> Result<&mut Self, VecError> {
        self.plus_eq_scaled(-T::one(), rhs)
    }
}

impl<'v, T: Scalar> dyn VectorBase<T> + 'v {
    pub fn iter(&self) -> Elements<'_, T, Self> {
        elements(self)
    }
}


/// Panics on an out-of-range index, like slice indexing.
impl<T: Scalar> Index<usize> for dyn VectorBase<T> + '_ {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get_at_index(index) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for dyn VectorBase<T> + '_ {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_at_index_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

/// In-order iterator over the elements of any vector.
pub struct Elements<'a, T, V: ?Sized> {
    vector: &'a V,
    next: usize,
    _scalar: PhantomData<fn() -> T>,
}

/// Iterates the elements of `vector` through its indexed-read primitive.
pub fn elements<T, V>(vector: &V) -> Elements<'_, T, V>
where
    T: Scalar,
    V: VectorBase<T> + ?Sized,
{
    Elements { vector, next: 0, _scalar: PhantomData }
}

impl<'a, T, V> Iterator for Elements<'a, T, V>
where
    T: Scalar + 'a,
    V: VectorBase<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let vector = self.vector;
        let item = vector.get_at_index(self.next).ok()?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.vector.size().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<'a, T, V> ExactSizeIterator for Elements<'a, T, V>
where
    T: Scalar + 'a,
    V: VectorBase<T> + ?Sized,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal layout that relies on every default.
    #[derive(Debug)]
    struct Plain(Vec<f64>);

    impl VectorBase<f64> for Plain {
        fn size(&self) -> usize {
            self.0.len()
        }
        fn get_at_index(&self, index: usize) -> Result<&f64, VecError> {
            let size = self.0.len();
            self.0.get(index).ok_or(VecError::OutOfRange { index, size })
        }
        fn get_at_index_mut(&mut self, index: usize) -> Result<&mut f64, VecError> {
            let size = self.0.len();
            self.0.get_mut(index).ok_or(VecError::OutOfRange { index, size })
        }
    }

    #[test]
    fn defaults_cover_the_whole_contract() {
        let mut v = Plain(vec![1.0, 2.0, 3.0]);
        let mut target = [10.0, 10.0, 10.0];
        v.scale_and_add_into(&2.0, &mut target).unwrap();
        assert_eq!(target, [12.0, 14.0, 16.0]);

        v.set_at_index(1, -7.0).unwrap();
        assert_eq!(v.copy_to_vec(), vec![1.0, -7.0, 3.0]);
        assert_eq!(v.norm_inf(), 7.0);

        let other = Plain(vec![1.0, 1.0, 1.0]);
        v.plus_eq(&other).unwrap().minus_eq(&other).unwrap().plus_eq_scaled(3.0, &other).unwrap();
        assert_eq!(v.0, vec![4.0, -4.0, 6.0]);

        v.set_zero();
        assert_eq!(v.0, vec![0.0; 3]);
        assert!(v.element_bounds().is_unbounded());
    }

    #[test]
    fn dyn_receivers_chain() {
        let mut v = Plain(vec![0.0, 0.0]);
        let a = Plain(vec![2.0, 2.0]);
        let b = Plain(vec![1.0, 1.0]);
        let dv: &mut dyn VectorBase<f64> = &mut v;
        let ops: [ScaledOperand<'_, f64>; 2] = [(1.0, &a), (-1.0, &b)];
        dv.plus_eq_scaled_multi(&ops).unwrap().plus_eq(&b).unwrap();
        assert_eq!(dv[0], 2.0);
        dv[1] = 5.0;
        assert_eq!(dv.iter().copied().collect::<Vec<_>>(), vec![2.0, 5.0]);
    }

    #[test]
    fn mismatched_operand_is_rejected_before_any_write() {
        let mut v = Plain(vec![1.0, 2.0]);
        let good = Plain(vec![1.0, 1.0]);
        let bad = Plain(vec![1.0]);
        let ops: [ScaledOperand<'_, f64>; 2] = [(1.0, &good), (1.0, &bad)];
        let err = v.plus_eq_scaled_multi(&ops).unwrap_err();
        assert_eq!(err, VecError::SizeMismatch { expected: 2, found: 1 });
        assert_eq!(v.0, vec![1.0, 2.0]);
    }

    #[test]
    fn operand_check_rejects_any_wrong_size() {
        let good = Plain(vec![1.0, 1.0]);
        let short = Plain(vec![1.0]);
        let ops: [ScaledOperand<'_, f64>; 2] = [(1.0, &short), (1.0, &good)];
        assert_eq!(
            CheckedOperands::check(2, &ops).err(),
            Some(VecError::SizeMismatch { expected: 2, found: 1 })
        );
        assert!(CheckedOperands::check(1, &ops[..1]).is_ok());
    }

    #[test]
    fn sum_past_the_end_is_an_error() {
        let contiguous = crate::storage::BasicVector::from_vec(vec![2.0, 3.0]);
        let plain = Plain(vec![1.0, 1.0]);
        let ops: [ScaledOperand<'_, f64>; 2] = [(2.0, &contiguous), (-1.0, &plain)];
        let checked = CheckedOperands::check(2, &ops).unwrap();
        assert_eq!(checked.size(), 2);
        assert_eq!(checked.terms().len(), 2);
        assert_eq!(checked.sum_at(1), Ok(5.0));
        assert_eq!(checked.sum_at(2), Err(VecError::OutOfRange { index: 2, size: 2 }));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn dyn_index_panics_out_of_range() {
        let v = Plain(vec![1.0]);
        let dv: &dyn VectorBase<f64> = &v;
        let _out_of_range = dv[1];
    }

    #[test]
    fn elements_reports_exact_length() {
        let v = Plain(vec![1.0, 2.0, 3.0]);
        let mut it = elements(&v);
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }
}
