//! The shape algebra: axis normalization, broadcasting rules, reduction
//! output shapes, op-level shape inference, and dtype promotion.
//!
//! Everything in this crate is a pure function over immutable inputs. An
//! operation's output shape is computed (and validated) here before any
//! buffer is allocated or any kernel runs, so a malformed operation fails at
//! construction time with a diagnosable error instead of deep inside a
//! backend. All functions are safe to call concurrently; there is no shared
//! state anywhere.

pub mod axes;
pub mod broadcast;
pub mod dtype_promotion;
pub mod reduce;
pub mod shape_inference;

pub use axes::{normalize_axes, resolve_axis};
pub use broadcast::broadcast_shapes;
pub use dtype_promotion::promote;
pub use reduce::{all_axes, reduce_shape};
pub use shape_inference::{infer_shape, OpKind};

use tensr_core::Shape;

pub type Result<T> = std::result::Result<T, ShapeError>;

/// Error returned when inputs cannot produce a valid output shape.
///
/// Every variant is an invalid-input error: none is retryable, and the
/// operation being constructed must be abandoned rather than patched up.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// An axis index, after sign normalization, does not address a valid
    /// dimension. `axis` is the value as supplied by the caller.
    #[error("axis {axis} out of range for rank {rank}")]
    AxisOutOfRange { axis: i64, rank: usize },

    /// Two shapes cannot be aligned for broadcasting. `position` counts
    /// from the trailing (innermost) dimension, the alignment direction.
    #[error("cannot broadcast {lhs} with {rhs}: sizes differ at position {position} from the trailing dimension")]
    ShapeMismatch {
        lhs: Shape,
        rhs: Shape,
        position: usize,
    },

    #[error("matmul requires rank-2 operands, got {lhs} and {rhs}")]
    MatmulRank { lhs: Shape, rhs: Shape },

    #[error("matmul inner dimensions mismatch: {k1} vs {k2}")]
    MatmulMismatch { k1: usize, k2: usize },

    #[error("invalid permutation {axes:?} for rank {rank}")]
    InvalidPermutation { axes: Vec<usize>, rank: usize },

    #[error("cannot reshape {from} ({} elements) into {to} ({} elements)", .from.numel(), .to.numel())]
    NumelMismatch { from: Shape, to: Shape },

    #[error("expected {expected} input shapes, got {got}")]
    Arity { expected: usize, got: usize },
}
