//! Axis normalization.
//!
//! Callers hand reduction and transpose ops axis lists that may be negative
//! (counted from the end), unordered, or duplicated. Everything downstream
//! assumes ascending, unique, in-range axes, so all axis input passes
//! through here first.

use crate::{Result, ShapeError};

/// Resolve a possibly negative axis against a rank.
pub fn resolve_axis(axis: i64, rank: usize) -> Result<usize> {
    let rank_i = rank as i64;
    let resolved = if axis < 0 { rank_i + axis } else { axis };
    if resolved < 0 || resolved >= rank_i {
        return Err(ShapeError::AxisOutOfRange { axis, rank });
    }
    Ok(resolved as usize)
}

/// Normalize an axis list against a rank: negative axes are rewritten to
/// count from the front, duplicates collapse, and the result is ascending.
///
/// An empty `axes` stays empty. Whether that means "reduce nothing" or
/// "reduce everything" is the caller's convention (see
/// [`infer_shape`](crate::infer_shape)); this function only validates what
/// it is given.
pub fn normalize_axes(rank: usize, axes: &[i64]) -> Result<Vec<usize>> {
    let mut resolved = Vec::with_capacity(axes.len());
    for &axis in axes {
        resolved.push(resolve_axis(axis, rank)?);
    }
    resolved.sort_unstable();
    resolved.dedup();
    Ok(resolved)
}
