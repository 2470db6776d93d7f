//! Concatenation of several vectors into one logical vector.
//!
//! A `BlockVector` borrows its blocks and addresses them as a single vector:
//! global index `i` maps to a (block, local index) pair through prefix
//! offsets computed once at construction. Lookup is a binary search over the
//! blocks, independent of the element count. Bulk operations are forwarded
//! block by block so each block's own overrides are used.

use crate::core::display::write_vector;
use crate::core::traits::VectorBase;
use crate::error::VecError;
use crate::scalar::Scalar;
use std::fmt;

/// Blocks are borrowed as plain `&mut dyn VectorBase<T>`, so a block vector
/// stays on the thread that assembled it.
pub struct BlockVector<'a, T: Scalar> {
    blocks: Vec<&'a mut dyn VectorBase<T>>,
    // offsets[k] is the global index of the first element of block k; the
    // last entry is the total size.
    offsets: Vec<usize>,
}

impl<'a, T: Scalar> BlockVector<'a, T> {
    pub fn new(blocks: Vec<&'a mut dyn VectorBase<T>>) -> Self {
        let mut offsets = Vec::with_capacity(blocks.len() + 1);
        let mut total = 0;
        offsets.push(total);
        for block in &blocks {
            total += block.size();
            offsets.push(total);
        }
        log::debug!("assembled block vector: {} blocks, {} elements", blocks.len(), total);
        Self { blocks, offsets }
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn block(&self, k: usize) -> Option<&dyn VectorBase<T>> {
        self.blocks.get(k).map(|b| &**b)
    }

    /// Global index of the first element of block `k`.
    pub fn block_offset(&self, k: usize) -> Option<usize> {
        if k < self.blocks.len() { Some(self.offsets[k]) } else { None }
    }

    fn locate(&self, index: usize) -> Result<(usize, usize), VecError> {
        VecError::check_index(index, self.size())?;
        // Empty blocks share an offset with their successor; the last block
        // starting at or before `index` is the non-empty one that holds it.
        let block = self.offsets.partition_point(|&start| start <= index) - 1;
        Ok((block, index - self.offsets[block]))
    }

    fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.offsets.windows(2).map(|w| (w[0], w[1]))
    }
}

impl<T: Scalar> VectorBase<T> for BlockVector<'_, T> {
    fn size(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    fn get_at_index(&self, index: usize) -> Result<&T, VecError> {
        let (block, local) = self.locate(index)?;
        self.blocks[block].get_at_index(local)
    }

    fn get_at_index_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        let (block, local) = self.locate(index)?;
        self.blocks[block].get_at_index_mut(local)
    }

    fn set_from_slice(&mut self, values: &[T]) -> Result<(), VecError> {
        VecError::check_size("set_from_slice", self.size(), values.len())?;
        let offsets = &self.offsets;
        for (k, block) in self.blocks.iter_mut().enumerate() {
            block.set_from_slice(&values[offsets[k]..offsets[k + 1]])?;
        }
        Ok(())
    }

    fn set_zero(&mut self) {
        for block in self.blocks.iter_mut() {
            block.set_zero();
        }
    }

    fn copy_into(&self, target: &mut [T]) -> Result<(), VecError> {
        VecError::check_size("copy_into", self.size(), target.len())?;
        for (block, (start, end)) in self.blocks.iter().zip(self.spans()) {
            block.copy_into(&mut target[start..end])?;
        }
        Ok(())
    }

    fn scale_and_add_into(&self, scale: &T, target: &mut [T]) -> Result<(), VecError> {
        VecError::check_size("scale_and_add_into", self.size(), target.len())?;
        for (block, (start, end)) in self.blocks.iter().zip(self.spans()) {
            block.scale_and_add_into(scale, &mut target[start..end])?;
        }
        Ok(())
    }
}

impl<T: Scalar> fmt::Display for BlockVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(self, f)
    }
}
