//! Cell kind constraints for square matrices
//!
//! This module defines the trait that constrains what types can be
//! stored as cells of a [`SquareMatrix`](crate::SquareMatrix).

use core::fmt::Display;

use crate::format::Token;
use crate::{Binding, Cell, Result};

/// Trait for types that can be stored as matrix cells
///
/// All cell types must be:
/// - Clone: Can be copied into transposes, evaluations and clones
/// - PartialEq: Can be compared for matrix equality
/// - Display: Renders in the matrix text grammar
pub trait Element: Clone + PartialEq + Display + Sized {
    /// Build a cell from a parsed token
    ///
    /// Returns `None` when the token is not allowed for this cell kind.
    fn from_token(token: Token) -> Option<Self>;

    /// Resolve the cell to an integer
    fn evaluate(&self, binding: &Binding) -> Result<i32>;
}

impl Element for i32 {
    fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Integer(value) => Some(value),
            Token::Letter(_) => None,
        }
    }

    fn evaluate(&self, _binding: &Binding) -> Result<i32> {
        Ok(*self)
    }
}

impl Element for Cell {
    fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Integer(value) => Some(Cell::Integer(value)),
            Token::Letter(name) => Some(Cell::Variable(name)),
        }
    }

    fn evaluate(&self, binding: &Binding) -> Result<i32> {
        Cell::evaluate(self, binding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    #[test]
    fn test_from_token() {
        assert_eq!(i32::from_token(Token::Integer(4)), Some(4));
        assert_eq!(i32::from_token(Token::Letter('a')), None);
        assert_eq!(
            Cell::from_token(Token::Letter('a')),
            Some(Cell::Variable('a'))
        );
        assert_eq!(Cell::from_token(Token::Integer(-3)), Some(Cell::Integer(-3)));
    }

    #[test]
    fn test_element_evaluate() {
        let binding = Binding::new().with('b', 2);
        assert_eq!(Element::evaluate(&7, &binding), Ok(7));
        assert_eq!(Element::evaluate(&Cell::Variable('b'), &binding), Ok(2));
        assert_eq!(
            Element::evaluate(&Cell::Variable('c'), &binding),
            Err(MatrixError::UndefinedVariable('c'))
        );
    }
}
