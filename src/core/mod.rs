//! Core vector contract and the helpers built on it.

pub mod bounds;
pub mod buffer;
pub mod display;
pub mod traits;

pub use bounds::ElementBounds;
pub use buffer::{copy_to_target, scale_and_add_to_target, FlatFrame};
pub use display::{display_with, VectorDisplay};
pub use traits::{elements, CheckedOperands, Elements, ScaledOperand, VectorBase, VectorOps};
