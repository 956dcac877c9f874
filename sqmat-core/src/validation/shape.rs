//! Shape validation for explicitly constructed grids

use alloc::vec::Vec;

use crate::MatrixError;

/// Validate that `rows` is a `size` x `size` grid
pub fn validate_grid<T>(size: usize, rows: &[Vec<T>]) -> Result<(), MatrixError> {
    if rows.len() != size {
        return Err(MatrixError::Shape {
            expected: size,
            found: rows.len(),
        });
    }

    if let Some(row) = rows.iter().find(|row| row.len() != size) {
        return Err(MatrixError::Shape {
            expected: size,
            found: row.len(),
        });
    }

    Ok(())
}
