//! Flat-buffer handoff to transport and log-replay collaborators.
//!
//! Messaging and replay layers move vector contents as dense arrays. This
//! module covers their side of the boundary: optional caller-owned output
//! buffers, and [`FlatFrame`], a reusable snapshot that is refreshed every
//! step without allocating. Byte order and encoding belong to the transport.

use crate::core::traits::VectorBase;
use crate::error::VecError;
use crate::scalar::Scalar;

fn require<'b, T>(context: &str, target: Option<&'b mut [T]>) -> Result<&'b mut [T], VecError> {
    target.ok_or_else(|| {
        log::debug!("{context}: no output buffer provided");
        VecError::NullTarget
    })
}

/// [`VectorBase::copy_into`] for a buffer that may be absent (`NullTarget`).
pub fn copy_to_target<T, V>(vector: &V, target: Option<&mut [T]>) -> Result<(), VecError>
where
    T: Scalar,
    V: VectorBase<T> + ?Sized,
{
    vector.copy_into(require("copy_to_target", target)?)
}

/// [`VectorBase::scale_and_add_into`] for a buffer that may be absent (`NullTarget`).
pub fn scale_and_add_to_target<T, V>(vector: &V, scale: &T, target: Option<&mut [T]>) -> Result<(), VecError>
where
    T: Scalar,
    V: VectorBase<T> + ?Sized,
{
    vector.scale_and_add_into(scale, require("scale_and_add_to_target", target)?)
}

/// Dense snapshot of a vector's elements.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatFrame<T> {
    values: Vec<T>,
}

impl<T: Scalar> FlatFrame<T> {
    /// Allocates a frame sized to `vector` and fills it.
    pub fn capture<V: VectorBase<T> + ?Sized>(vector: &V) -> Self {
        Self { values: vector.copy_to_vec() }
    }

    /// Re-copies `vector` into the existing buffer. Does not allocate.
    pub fn refresh<V: VectorBase<T> + ?Sized>(&mut self, vector: &V) -> Result<(), VecError> {
        vector.copy_into(&mut self.values)
    }

    /// Writes the frame back into `vector`, which must have the frame's length.
    pub fn restore<V: VectorBase<T> + ?Sized>(&self, vector: &mut V) -> Result<(), VecError> {
        vector.set_from_slice(&self.values)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

/// Wraps values received from a transport.
impl<T> From<Vec<T>> for FlatFrame<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}
