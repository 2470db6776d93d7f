//! Forward-mode automatic differentiation scalar.
//!
//! An [`AutoDiff<N>`] carries a value and its gradient with respect to `N`
//! independent variables. The gradient is a fixed-size array, so the type is
//! `Copy` and arithmetic on it never touches the heap.

use super::{sealed, Scalar};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Dual number with an `N`-dimensional gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoDiff<const N: usize> {
    value: f64,
    derivatives: [f64; N],
}

impl<const N: usize> AutoDiff<N> {
    pub fn new(value: f64, derivatives: [f64; N]) -> Self {
        Self { value, derivatives }
    }

    /// A quantity that does not depend on any variable.
    pub fn constant(value: f64) -> Self {
        Self { value, derivatives: [0.0; N] }
    }

    /// The `index`-th independent variable, with a unit derivative in slot `index`.
    pub fn seeded(value: f64, index: usize) -> Self {
        assert!(index < N, "seed index {} out of range for {} derivatives", index, N);
        let mut derivatives = [0.0; N];
        derivatives[index] = 1.0;
        Self { value, derivatives }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn derivatives(&self) -> &[f64; N] {
        &self.derivatives
    }

    fn map(self, scale: f64) -> Self {
        let mut derivatives = self.derivatives;
        derivatives.iter_mut().for_each(|d| *d *= scale);
        Self { value: self.value * scale, derivatives }
    }
}

impl<const N: usize> From<f64> for AutoDiff<N> {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl<const N: usize> Add for AutoDiff<N> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self.value += rhs.value;
        for (d, r) in self.derivatives.iter_mut().zip(rhs.derivatives.iter()) {
            *d += *r;
        }
        self
    }
}

impl<const N: usize> Sub for AutoDiff<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const N: usize> Mul for AutoDiff<N> {
    type Output = Self;
    // d(ab) = a' b + a b'
    fn mul(self, rhs: Self) -> Self {
        let mut derivatives = [0.0; N];
        for (i, d) in derivatives.iter_mut().enumerate() {
            *d = self.derivatives[i] * rhs.value + self.value * rhs.derivatives[i];
        }
        Self { value: self.value * rhs.value, derivatives }
    }
}

impl<const N: usize> Neg for AutoDiff<N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(-1.0)
    }
}

impl<const N: usize> Zero for AutoDiff<N> {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0 && self.derivatives.iter().all(|d| *d == 0.0)
    }
}

impl<const N: usize> One for AutoDiff<N> {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

/// Renders the value only; gradients are not part of the diagnostic output.
impl<const N: usize> fmt::Display for AutoDiff<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<const N: usize> sealed::Sealed for AutoDiff<N> {}

impl<const N: usize> Scalar for AutoDiff<N> {
    fn magnitude(&self) -> Self {
        if self.value < 0.0 { -*self } else { *self }
    }

    fn larger(self, other: Self) -> Self {
        if other.value > self.value { other } else { self }
    }
}
