//! Human-readable rendering: `[e0, e1, ..., eN-1]`.
//!
//! For diagnostics only; there is no parser and no round-trip guarantee.

use crate::config::options::FormatOptions;
use crate::core::traits::{elements, VectorBase};
use crate::scalar::Scalar;
use std::fmt;
use std::marker::PhantomData;

/// A vector paired with rendering options, see [`display_with`].
pub struct VectorDisplay<'a, T, V: ?Sized> {
    vector: &'a V,
    options: FormatOptions,
    _scalar: PhantomData<fn() -> T>,
}

pub fn display_with<T, V>(vector: &V, options: FormatOptions) -> VectorDisplay<'_, T, V>
where
    T: Scalar,
    V: VectorBase<T> + ?Sized,
{
    VectorDisplay { vector, options, _scalar: PhantomData }
}

impl<T, V> fmt::Display for VectorDisplay<'_, T, V>
where
    T: Scalar,
    V: VectorBase<T> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.vector.size();
        let shown = self.options.max_elements.map_or(size, |m| m.min(size));
        f.write_str("[")?;
        for (i, v) in elements(self.vector).take(shown).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.options.precision {
                Some(p) => write!(f, "{:.*}", p, v)?,
                None => write!(f, "{}", v)?,
            }
        }
        if shown < size {
            if shown > 0 {
                f.write_str(", ")?;
            }
            f.write_str("...")?;
        }
        f.write_str("]")
    }
}

/// Writes the plain rendering of `vector`.
pub fn write_vector<T, V>(vector: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Scalar,
    V: VectorBase<T> + ?Sized,
{
    fmt::Display::fmt(&display_with(vector, FormatOptions::default()), f)
}

impl<T: Scalar> fmt::Display for dyn VectorBase<T> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Expression;
    use crate::storage::BasicVector;

    #[test]
    fn plain_rendering_has_no_trailing_separator() {
        let v = BasicVector::from_vec(vec![1.0, 2.5, -3.0]);
        let dv: &dyn VectorBase<f64> = &v;
        assert_eq!(dv.to_string(), "[1, 2.5, -3]");
        assert_eq!(BasicVector::<f64>::zeros(0).to_string(), "[]");
    }

    #[test]
    fn precision_and_truncation() {
        let v = BasicVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let opts = FormatOptions::default().with_precision(2).with_max_elements(2);
        assert_eq!(display_with(&v, opts).to_string(), "[1.00, 2.00, ...]");
        let opts = FormatOptions::default().with_max_elements(0);
        assert_eq!(display_with(&v, opts).to_string(), "[...]");
        let opts = FormatOptions::default().with_max_elements(10);
        assert_eq!(display_with(&v, opts).to_string(), "[1, 2, 3, 4]");
    }

    #[test]
    fn symbolic_elements_render_as_expressions() {
        let v = BasicVector::from_vec(vec![Expression::variable("q"), Expression::constant(0.5)]);
        assert_eq!(v.to_string(), "[q, 0.5]");
    }
}
