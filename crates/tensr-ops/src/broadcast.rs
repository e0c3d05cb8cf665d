//! Broadcasting rules following NumPy/ONNX semantics.

use crate::{Result, ShapeError};
use tensr_core::Shape;

/// Compute the broadcast shape of two shapes.
///
/// Rules (NumPy-style):
/// 1. Align shapes from the trailing dimension; the shorter shape is
///    implicitly left-padded with 1s.
/// 2. For each dimension pair: the sizes must be equal, or one must be 1.
/// 3. The output rank is the larger of the two input ranks.
///
/// A size-0 dimension is not a broadcastable singleton: it only aligns with
/// 0 or 1. The error reports both shapes and the position (counted from the
/// trailing dimension) at which they diverge.
pub fn broadcast_shapes(a: &Shape, b: &Shape) -> Result<Shape> {
    let a_dims = &a.0;
    let b_dims = &b.0;
    let max_rank = a_dims.len().max(b_dims.len());

    let mut result = Vec::with_capacity(max_rank);

    for i in 0..max_rank {
        let da = if i < a_dims.len() {
            a_dims[a_dims.len() - 1 - i]
        } else {
            1
        };
        let db = if i < b_dims.len() {
            b_dims[b_dims.len() - 1 - i]
        } else {
            1
        };

        if da == db {
            result.push(da);
        } else if da == 1 {
            result.push(db);
        } else if db == 1 {
            result.push(da);
        } else {
            return Err(ShapeError::ShapeMismatch {
                lhs: a.clone(),
                rhs: b.clone(),
                position: i,
            });
        }
    }

    result.reverse();
    Ok(Shape::new(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_shapes() {
        let a = Shape::new(vec![2, 3]);
        let b = Shape::new(vec![2, 3]);
        assert_eq!(broadcast_shapes(&a, &b).unwrap(), Shape::new(vec![2, 3]));
    }

    #[test]
    fn test_scalar_broadcast() {
        let a = Shape::new(vec![2, 3]);
        let b = Shape::scalar();
        assert_eq!(broadcast_shapes(&a, &b).unwrap(), Shape::new(vec![2, 3]));
        assert_eq!(broadcast_shapes(&b, &a).unwrap(), Shape::new(vec![2, 3]));
        assert_eq!(broadcast_shapes(&b, &b).unwrap(), Shape::scalar());
    }

    #[test]
    fn test_one_broadcast() {
        let a = Shape::new(vec![2, 1]);
        let b = Shape::new(vec![1, 3]);
        assert_eq!(broadcast_shapes(&a, &b).unwrap(), Shape::new(vec![2, 3]));
    }

    #[test]
    fn test_rank_extension() {
        let a = Shape::new(vec![2, 3, 4, 5]);
        let b = Shape::new(vec![5]);
        assert_eq!(
            broadcast_shapes(&a, &b).unwrap(),
            Shape::new(vec![2, 3, 4, 5])
        );
    }

    #[test]
    fn test_higher_rank() {
        let a = Shape::new(vec![8, 1, 6, 1]);
        let b = Shape::new(vec![7, 1, 5]);
        assert_eq!(
            broadcast_shapes(&a, &b).unwrap(),
            Shape::new(vec![8, 7, 6, 5])
        );
    }

    #[test]
    fn test_incompatible_reports_position() {
        let a = Shape::new(vec![3, 4]);
        let b = Shape::new(vec![4, 3]);
        assert_eq!(
            broadcast_shapes(&a, &b),
            Err(ShapeError::ShapeMismatch {
                lhs: a.clone(),
                rhs: b.clone(),
                position: 0,
            })
        );

        // [2, 5, 3] vs [4, 1, 3]: inner positions align (3 = 3, then 1
        // broadcasts), the outermost pair is the divergence.
        let a = Shape::new(vec![2, 5, 3]);
        let b = Shape::new(vec![4, 1, 3]);
        assert_eq!(
            broadcast_shapes(&a, &b),
            Err(ShapeError::ShapeMismatch {
                lhs: a,
                rhs: b,
                position: 2,
            })
        );
    }

    #[test]
    fn test_zero_dim_aligns_with_one() {
        let a = Shape::new(vec![0]);
        let b = Shape::new(vec![1]);
        assert_eq!(broadcast_shapes(&a, &b).unwrap(), Shape::new(vec![0]));
        assert_eq!(
            broadcast_shapes(&Shape::new(vec![0]), &Shape::new(vec![0])).unwrap(),
            Shape::new(vec![0])
        );
    }

    #[test]
    fn test_zero_dim_is_not_a_singleton() {
        let a = Shape::new(vec![0]);
        let b = Shape::new(vec![3]);
        assert!(broadcast_shapes(&a, &b).is_err());
    }
}
