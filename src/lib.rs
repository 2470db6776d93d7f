//! sysvec: state and signal vectors for dynamical-system simulation
//!
//! This crate provides the vector contract every simulated quantity is stored
//! behind (continuous and discrete state, input and output ports), generic
//! over the scalar field: plain reals, forward-mode automatic differentiation
//! numbers, and symbolic expressions. Contiguous and block-structured storage
//! layouts implement the same contract, and the per-step operations on it
//! never allocate.

pub mod config;
pub mod core;
pub mod error;
pub mod scalar;
pub mod storage;

// Re-exports for convenience
pub use self::config::*;
pub use self::core::*;
pub use self::error::*;
pub use self::scalar::*;
pub use self::storage::*;
