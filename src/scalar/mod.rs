//! Scalar fields a vector can be parameterized over.
//!
//! The set is closed: plain reals (`f64`), forward-mode automatic
//! differentiation numbers ([`AutoDiff`]) and symbolic expressions
//! ([`Expression`]). Every vector algorithm in this crate is written once,
//! generically over [`Scalar`], and monomorphized per scalar type.

use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Neg, Sub};

pub mod autodiff;
pub mod symbolic;

pub use autodiff::AutoDiff;
pub use symbolic::Expression;

mod sealed {
    pub trait Sealed {}
}

/// Element type of a [`VectorBase`](crate::core::traits::VectorBase).
///
/// Sealed; implemented for `f64`, [`AutoDiff<N>`] and [`Expression`] only.
pub trait Scalar:
    Clone + Debug + Display + PartialEq + Zero + One + Sub<Output = Self> + Neg<Output = Self> + sealed::Sealed
{
    /// Absolute value.
    fn magnitude(&self) -> Self;
    /// The larger of `self` and `other`.
    fn larger(self, other: Self) -> Self;
}

impl sealed::Sealed for f64 {}

impl Scalar for f64 {
    fn magnitude(&self) -> Self {
        self.abs()
    }

    fn larger(self, other: Self) -> Self {
        self.max(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_magnitudes<T: Scalar>(xs: &[T]) -> T {
        xs.iter().fold(T::zero(), |acc, x| acc + x.magnitude())
    }

    #[test]
    fn generic_code_runs_on_every_scalar() {
        assert_eq!(sum_of_magnitudes(&[1.0, -2.0, 3.0]), 6.0);

        let ad = [AutoDiff::<1>::seeded(-2.0, 0), AutoDiff::constant(1.0)];
        let s = sum_of_magnitudes(&ad);
        assert_eq!(s.value(), 3.0);
        assert_eq!(s.derivatives(), &[-1.0]);

        let sym = [Expression::constant(-2.0), Expression::constant(4.0)];
        assert_eq!(sum_of_magnitudes(&sym), Expression::constant(6.0));
    }

    #[test]
    fn larger_picks_the_maximum() {
        assert_eq!(1.0f64.larger(3.0), 3.0);
        assert_eq!(AutoDiff::<0>::constant(5.0).larger(AutoDiff::constant(2.0)).value(), 5.0);
    }
}
