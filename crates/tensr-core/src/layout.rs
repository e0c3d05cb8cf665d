//! Row-major layout arithmetic.
//!
//! Maps between multi-dimensional indices and flat buffer offsets. These are
//! the iteration primitives a compute backend walks contiguous storage with;
//! they never touch storage themselves.

/// Row-major strides for a shape. The innermost dimension has stride 1;
/// a rank-0 shape has no strides.
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let rank = shape.len();
    if rank == 0 {
        return vec![];
    }

    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Flat buffer offset of a multi-dimensional index.
pub fn index_to_offset(index: &[usize], strides: &[usize]) -> usize {
    index.iter().zip(strides).map(|(ix, st)| ix * st).sum()
}

/// Multi-dimensional index of a flat buffer offset.
pub fn offset_to_index(offset: usize, strides: &[usize]) -> Vec<usize> {
    let mut index = vec![0; strides.len()];
    let mut rem = offset;
    for (ix, &stride) in index.iter_mut().zip(strides) {
        *ix = rem / stride;
        rem %= stride;
    }
    index
}

/// Step an index forward by one position in row-major order, wrapping
/// around to all zeros past the last position.
pub fn increment_index(index: &mut [usize], shape: &[usize]) {
    for i in (0..index.len()).rev() {
        index[i] += 1;
        if index[i] >= shape[i] {
            index[i] = 0;
        } else {
            return;
        }
    }
}

/// Step an index backward by one position in row-major order, wrapping
/// around to the last position from all zeros.
pub fn decrement_index(index: &mut [usize], shape: &[usize]) {
    for i in (0..index.len()).rev() {
        if index[i] == 0 {
            index[i] = shape[i] - 1;
        } else {
            index[i] -= 1;
            return;
        }
    }
}
