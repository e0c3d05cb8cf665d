//! Shape inference for tensor ops.
//!
//! Given an `OpKind` and input shapes, computes the output shape. Operation
//! constructors call this before requesting buffer allocation, and graph
//! validation uses it to check declared shapes without running anything.

use crate::axes::normalize_axes;
use crate::broadcast::broadcast_shapes;
use crate::reduce::{all_axes, reduce_shape};
use crate::{Result, ShapeError};
use tensr_core::Shape;

/// Operations whose output shapes the algebra can derive.
#[derive(Clone, Debug)]
pub enum OpKind {
    // ── Binary elementwise ──────────────────────────────────────────────
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    // ── Unary elementwise ───────────────────────────────────────────────
    Neg,
    Exp,
    Log,
    Sqrt,
    Sigmoid,

    // ── Reductions ──────────────────────────────────────────────────────
    // `axes: None` (or an empty list) means reduce over all axes.
    Sum { axes: Option<Vec<i64>>, keep_dims: bool },
    SumSquare { axes: Option<Vec<i64>>, keep_dims: bool },
    Product { axes: Option<Vec<i64>>, keep_dims: bool },
    Mean { axes: Option<Vec<i64>>, keep_dims: bool },
    Max { axes: Option<Vec<i64>>, keep_dims: bool },
    Min { axes: Option<Vec<i64>>, keep_dims: bool },
    LogSum { axes: Option<Vec<i64>>, keep_dims: bool },
    LogSumExp { axes: Option<Vec<i64>>, keep_dims: bool },

    // ── Linear algebra ──────────────────────────────────────────────────
    MatMul,

    // ── Shape manipulation ──────────────────────────────────────────────
    Reshape { new_shape: Shape },
    Transpose { axes: Option<Vec<usize>> },
}

/// Infer the output shape for a given op and input shapes.
pub fn infer_shape(op: &OpKind, inputs: &[&Shape]) -> Result<Shape> {
    match op {
        // Binary elementwise ops broadcast their operands.
        OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div | OpKind::Pow => {
            let (a, b) = binary_inputs(inputs)?;
            broadcast_shapes(a, b)
        }

        // Unary ops preserve shape.
        OpKind::Neg | OpKind::Exp | OpKind::Log | OpKind::Sqrt | OpKind::Sigmoid => {
            Ok(unary_input(inputs)?.clone())
        }

        OpKind::Sum { axes, keep_dims }
        | OpKind::SumSquare { axes, keep_dims }
        | OpKind::Product { axes, keep_dims }
        | OpKind::Mean { axes, keep_dims }
        | OpKind::Max { axes, keep_dims }
        | OpKind::Min { axes, keep_dims }
        | OpKind::LogSum { axes, keep_dims }
        | OpKind::LogSumExp { axes, keep_dims } => {
            let a = unary_input(inputs)?;
            let resolved = match axes {
                Some(list) if !list.is_empty() => normalize_axes(a.rank(), list)?,
                _ => all_axes(a.rank()),
            };
            Ok(reduce_shape(a, &resolved, *keep_dims))
        }

        // MatMul: [m, k] @ [k, n] → [m, n]
        OpKind::MatMul => {
            let (a, b) = binary_inputs(inputs)?;
            if a.rank() != 2 || b.rank() != 2 {
                return Err(ShapeError::MatmulRank {
                    lhs: a.clone(),
                    rhs: b.clone(),
                });
            }
            let k1 = a.0[1];
            let k2 = b.0[0];
            if k1 != k2 {
                return Err(ShapeError::MatmulMismatch { k1, k2 });
            }
            Ok(Shape::new(vec![a.0[0], b.0[1]]))
        }

        // Reshape: declared shape, but the element count must not change.
        OpKind::Reshape { new_shape } => {
            let a = unary_input(inputs)?;
            if a.numel() != new_shape.numel() {
                return Err(ShapeError::NumelMismatch {
                    from: a.clone(),
                    to: new_shape.clone(),
                });
            }
            Ok(new_shape.clone())
        }

        // Transpose: permute dimensions; `None` reverses them.
        OpKind::Transpose { axes } => {
            let a = unary_input(inputs)?;
            let perm: Vec<usize> = match axes {
                Some(ax) => {
                    validate_permutation(ax, a.rank())?;
                    ax.clone()
                }
                None => (0..a.rank()).rev().collect(),
            };
            let dims: Vec<usize> = perm.iter().map(|&ax| a.0[ax]).collect();
            Ok(Shape::new(dims))
        }
    }
}

fn unary_input<'a>(inputs: &[&'a Shape]) -> Result<&'a Shape> {
    match inputs {
        [a] => Ok(a),
        _ => Err(ShapeError::Arity {
            expected: 1,
            got: inputs.len(),
        }),
    }
}

fn binary_inputs<'a>(inputs: &[&'a Shape]) -> Result<(&'a Shape, &'a Shape)> {
    match inputs {
        [a, b] => Ok((a, b)),
        _ => Err(ShapeError::Arity {
            expected: 2,
            got: inputs.len(),
        }),
    }
}

fn validate_permutation(axes: &[usize], rank: usize) -> Result<()> {
    let mut seen = vec![false; rank];
    let valid = axes.len() == rank
        && axes.iter().all(|&ax| {
            if ax >= rank || seen[ax] {
                false
            } else {
                seen[ax] = true;
                true
            }
        });
    if valid {
        Ok(())
    } else {
        Err(ShapeError::InvalidPermutation {
            axes: axes.to_vec(),
            rank,
        })
    }
}
