//! Matrix cells: integer literals and single-letter variables

use core::fmt;

use crate::{Binding, MatrixError, Result};

/// A single matrix entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedCell")
)]
pub enum Cell {
    /// Literal integer
    Integer(i32),
    /// Named variable, resolved through a [`Binding`]
    Variable(char),
}

/// Wire form of [`Cell`] before the variable name is checked
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Cell")]
enum UncheckedCell {
    Integer(i32),
    Variable(char),
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedCell> for Cell {
    type Error = MatrixError;

    fn try_from(cell: UncheckedCell) -> Result<Self> {
        match cell {
            UncheckedCell::Integer(value) => Ok(Cell::Integer(value)),
            UncheckedCell::Variable(name) => Cell::variable(name),
        }
    }
}

impl Cell {
    /// Create an integer cell
    pub const fn integer(value: i32) -> Self {
        Cell::Integer(value)
    }

    /// Create a variable cell, rejecting names that are not ASCII letters
    pub fn variable(name: char) -> Result<Self> {
        if name.is_ascii_alphabetic() {
            Ok(Cell::Variable(name))
        } else {
            Err(MatrixError::parse("variable name must be a letter", 0))
        }
    }

    /// Check whether this cell needs a binding to be evaluated
    pub const fn is_variable(&self) -> bool {
        matches!(self, Cell::Variable(_))
    }

    /// Get the literal value, if this is an integer cell
    pub const fn as_integer(&self) -> Option<i32> {
        match self {
            Cell::Integer(value) => Some(*value),
            Cell::Variable(_) => None,
        }
    }

    /// Resolve the cell to an integer
    pub fn evaluate(&self, binding: &Binding) -> Result<i32> {
        match *self {
            Cell::Integer(value) => Ok(value),
            Cell::Variable(name) => binding
                .get(name)
                .ok_or(MatrixError::UndefinedVariable(name)),
        }
    }

    /// Resolve both cells and combine them with a scalar operator
    pub fn combine(&self, other: &Cell, op: ScalarOp, binding: &Binding) -> Result<Cell> {
        let lhs = self.evaluate(binding)?;
        let rhs = other.evaluate(binding)?;
        op.apply(lhs, rhs).map(Cell::Integer)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(value) => write!(f, "{value}"),
            Cell::Variable(name) => write!(f, "{name}"),
        }
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Integer(value)
    }
}

impl TryFrom<char> for Cell {
    type Error = MatrixError;

    fn try_from(name: char) -> Result<Self> {
        Cell::variable(name)
    }
}

/// Binary operator on two integers
///
/// Arithmetic wraps on overflow. Division truncates toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ScalarOp {
    /// Apply the operator
    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32> {
        match self {
            ScalarOp::Add => Ok(lhs.wrapping_add(rhs)),
            ScalarOp::Sub => Ok(lhs.wrapping_sub(rhs)),
            ScalarOp::Mul => Ok(lhs.wrapping_mul(rhs)),
            ScalarOp::Div => {
                if rhs == 0 {
                    return Err(MatrixError::DivisionByZero);
                }
                Ok(lhs.wrapping_div(rhs))
            }
        }
    }

    /// Display symbol of the operator
    pub const fn symbol(self) -> char {
        match self {
            ScalarOp::Add => '+',
            ScalarOp::Sub => '-',
            ScalarOp::Mul => '*',
            ScalarOp::Div => '/',
        }
    }
}
