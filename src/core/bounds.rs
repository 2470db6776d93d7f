//! Advisory element limits.

use crate::error::VecError;

/// Lower and upper limits for each element of a vector.
///
/// Both empty means unconstrained. Otherwise `lower[i] <= v[i] <= upper[i]` is
/// the intended constraint; vectors do not enforce it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementBounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl ElementBounds {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Fails with `SizeMismatch` unless `lower` and `upper` have equal length.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, VecError> {
        VecError::check_size("element bounds", lower.len(), upper.len())?;
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower.is_empty()
    }

    /// Whether `value` lies within the limits of element `index`.
    /// Always true when unbounded.
    pub fn admits(&self, index: usize, value: f64) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match (self.lower.get(index), self.upper.get(index)) {
            (Some(lo), Some(hi)) => *lo <= value && value <= *hi,
            _ => false,
        }
    }
}
