//! Storage layouts: contiguous and block-structured vectors.

pub mod basic;
pub mod block;
pub mod dense;
pub mod subvector;

pub use basic::BasicVector;
pub use block::BlockVector;
pub use dense::DenseColumn;
pub use subvector::Subvector;
