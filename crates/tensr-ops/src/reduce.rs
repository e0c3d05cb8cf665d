//! Reduction output shapes.

use tensr_core::Shape;

/// Output shape of reducing `shape` over `axes`.
///
/// `axes` must already be normalized against `shape.rank()` (ascending,
/// duplicate-free, in range; see [`normalize_axes`](crate::normalize_axes)).
/// Given that, this is total: an empty `axes` reduces nothing, and a scalar
/// reduces to a scalar.
///
/// With `keep_dims` the reduced positions are retained with size 1 and the
/// rank is unchanged; without it they are removed and the remaining
/// dimensions keep their relative order.
pub fn reduce_shape(shape: &Shape, axes: &[usize], keep_dims: bool) -> Shape {
    let mut dims = Vec::with_capacity(shape.rank());
    let mut ax_ix = 0;
    for (i, &dim) in shape.0.iter().enumerate() {
        if ax_ix < axes.len() && axes[ax_ix] == i {
            ax_ix += 1;
            if keep_dims {
                dims.push(1);
            }
        } else {
            dims.push(dim);
        }
    }
    Shape::new(dims)
}

/// The full axis set `{0, …, rank-1}`: what "reduce over all axes" expands
/// to before calling [`reduce_shape`].
pub fn all_axes(rank: usize) -> Vec<usize> {
    (0..rank).collect()
}
