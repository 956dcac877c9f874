//! Range validation for flattened block addressing

use crate::MatrixError;

/// Validate a `[start, start + step)` request against `len` flattened cells
///
/// `start` and `step` may each be at most `len`, and the block must end
/// inside the matrix. Returns the exclusive end index.
pub const fn validate_block_range(start: usize, step: usize, len: usize) -> Result<usize, MatrixError> {
    if start > len || step > len {
        return Err(MatrixError::OutOfRange { start, step, len });
    }

    match start.checked_add(step) {
        Some(end) if end <= len => Ok(end),
        _ => Err(MatrixError::OutOfRange { start, step, len }),
    }
}

/// Number of cells in an `n` x `n` matrix, guarding against overflow
pub const fn cell_count(size: usize) -> Option<usize> {
    size.checked_mul(size)
}
