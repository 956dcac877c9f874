//! Square matrices of concrete or symbolic cells
//!
//! Cells are stored in row-major order, so a flattened block of the matrix
//! is a plain slice of the storage.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::format::constants::{CELL_SEPARATOR, CLOSE_BRACKET, OPEN_BRACKET};
use crate::format::parse_matrix;
use crate::validation::{cell_count, validate_block_range, validate_grid};
use crate::{Binding, Cell, Element, MatrixError, Result};

/// An `n` x `n` grid of cells
///
/// `n == 0` is the empty matrix, rendered as `[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "Vec<Vec<T>>",
        try_from = "Vec<Vec<T>>",
        bound(
            serialize = "T: serde::Serialize + Clone",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

/// Matrix whose cells are all integers
pub type ConcreteMatrix = SquareMatrix<i32>;

/// Matrix whose cells may be variables
pub type SymbolicMatrix = SquareMatrix<Cell>;

impl<T> SquareMatrix<T> {
    /// Create the empty matrix
    pub const fn empty() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
        }
    }

    /// Create a matrix from `size` rows of `size` cells each
    pub fn from_rows(size: usize, rows: Vec<Vec<T>>) -> Result<Self> {
        validate_grid(size, &rows)?;
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Create a matrix from `size * size` cells in row-major order
    pub fn from_row_major(size: usize, cells: Vec<T>) -> Result<Self> {
        let expected = cell_count(size).ok_or(MatrixError::Shape {
            expected: usize::MAX,
            found: cells.len(),
        })?;
        if cells.len() != expected {
            return Err(MatrixError::Shape {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Row and column count
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether this is the empty matrix
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Mutable access to the cells in row-major order
    ///
    /// The slice length is fixed, so the matrix stays square.
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Consume the matrix, returning its cells in row-major order
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics; an empty matrix has no cells anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Flattened block `[start, start + step)` of the row-major cells
    ///
    /// Fails if `start` or `step` exceeds `n²` or the block runs past the
    /// end. A zero `step` gives an empty block.
    pub fn block(&self, start: usize, step: usize) -> Result<&[T]> {
        let end = validate_block_range(start, step, self.cells.len())?;
        Ok(&self.cells[start..end])
    }

    /// Fail with [`MatrixError::DimensionMismatch`] unless both matrices have the same size
    pub fn check_dimensions<U>(&self, other: &SquareMatrix<U>) -> Result<()> {
        if self.size != other.size {
            return Err(MatrixError::DimensionMismatch {
                left: self.size,
                right: other.size,
            });
        }
        Ok(())
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Return a new matrix with rows and columns swapped
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let cells = (0..n)
            .flat_map(|col| (0..n).map(move |row| (row, col)))
            .map(|(row, col)| self.cells[row * n + col].clone())
            .collect();
        Self { size: n, cells }
    }
}

impl<T: Element> SquareMatrix<T> {
    /// Parse a matrix from its text form
    pub fn parse(text: &str) -> Result<Self> {
        let (size, cells) = parse_matrix(text)?;
        Ok(Self { size, cells })
    }

    /// Resolve every cell, producing a concrete matrix of the same size
    ///
    /// Fails on the first undefined variable in row-major order.
    pub fn evaluate(&self, binding: &Binding) -> Result<ConcreteMatrix> {
        let cells = self
            .cells
            .iter()
            .map(|cell| cell.evaluate(binding))
            .collect::<Result<Vec<i32>>>()?;
        Ok(SquareMatrix {
            size: self.size,
            cells,
        })
    }
}

impl ConcreteMatrix {
    /// Create an `n` x `n` identity matrix
    pub fn identity(n: usize) -> Self {
        let cells = (0..n * n)
            .map(|i| i32::from(i / n == i % n))
            .collect();
        Self { size: n, cells }
    }

    /// Standard row-times-column product
    ///
    /// Each output cell is the dot product of a row of `self` with a row of
    /// `rhs` transposed. Runs on the calling thread.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.check_dimensions(rhs)?;

        let columns = rhs.transpose();
        let cells = self
            .rows()
            .flat_map(|row| columns.rows().map(move |col| dot(row, col)))
            .collect();

        Ok(Self {
            size: self.size,
            cells,
        })
    }

    /// Matrix "division": `self` multiplied by the transpose of `rhs`
    ///
    /// This is not multiplication by an inverse.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        self.multiply(&rhs.transpose())
    }
}

fn dot(lhs: &[i32], rhs: &[i32]) -> i32 {
    lhs.iter()
        .zip(rhs)
        .fold(0i32, |acc, (a, b)| acc.wrapping_add(a.wrapping_mul(*b)))
}

impl<T> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = char::from(OPEN_BRACKET);
        let close = char::from(CLOSE_BRACKET);
        let separator = char::from(CELL_SEPARATOR);

        write!(f, "{open}")?;
        for row in self.rows() {
            write!(f, "{open}")?;
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, "{separator}")?;
                }
                write!(f, "{cell}")?;
            }
            write!(f, "{close}")?;
        }
        write!(f, "{close}")
    }
}

impl<T: Element> FromStr for SquareMatrix<T> {
    type Err = MatrixError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl From<ConcreteMatrix> for SymbolicMatrix {
    fn from(matrix: ConcreteMatrix) -> Self {
        Self {
            size: matrix.size,
            cells: matrix.cells.into_iter().map(Cell::Integer).collect(),
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        Self::from_rows(size, rows)
    }
}

impl<T: Clone> From<SquareMatrix<T>> for Vec<Vec<T>> {
    fn from(matrix: SquareMatrix<T>) -> Self {
        matrix.rows().map(<[T]>::to_vec).collect()
    }
}
