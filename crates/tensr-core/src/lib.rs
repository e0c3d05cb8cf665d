//! Foundational value types for tensor computation.
//!
//! `tensr-core` provides `Shape` and `DType` plus the row-major layout
//! arithmetic (strides, index/offset mapping) that compute backends iterate
//! with. It holds no policy of its own: validation and shape-inference rules
//! live in `tensr-ops`.

pub mod layout;
pub mod types;

pub use types::{DType, Shape};
