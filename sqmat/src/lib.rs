//! SQMAT - Symbolic square matrix expressions
//!
//! This library evaluates expression trees over square matrices whose cells
//! are integers or single-letter variables, with elementwise addition and
//! subtraction spread over worker threads.
//!
//! ## Architecture
//!
//! SQMAT follows the same split as its core crate:
//!
//! - **sqmat-core**: Cells, bindings, the matrix grammar and the matrix type (no threads)
//! - **sqmat**: Execution context, concurrent elementwise engine and expressions
//!
//! ## Quick Start
//!
//! ```rust
//! use sqmat::{Binding, ConcreteMatrix, ExecutionContext, Expression, MatrixExpr, Operator, SymbolicMatrix};
//!
//! fn example() -> sqmat::Result<()> {
//!     let lhs: SymbolicMatrix = "[[a,b][4,5]]".parse()?;
//!     let rhs: ConcreteMatrix = "[[1,2][4,5]]".parse()?;
//!     let expr = Expression::with_operator(lhs, rhs, Operator::Add);
//!
//!     let binding: Binding = [('a', 1), ('b', 4)].into_iter().collect();
//!     let result = expr.evaluate(&binding, &ExecutionContext::default())?;
//!     assert_eq!(result.to_string(), "[[2,6][8,10]]");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Concurrent add/sub**: One scoped worker per block, all reads before any write
//! - **All-or-nothing updates**: A failed block leaves the left operand untouched
//! - **Symbolic cells**: Variables resolved through a [`Binding`] at evaluation time
//! - **JSON**: Matrices as nested arrays with the `serde` feature

// Re-export core abstractions
pub use sqmat_core::{
    // Cells and bindings
    Binding, Cell, ScalarOp,
    // Matrices
    ConcreteMatrix, Element, SquareMatrix, SymbolicMatrix, EMPTY_MATRIX,
    // Error handling
    ErrorCategory, MatrixError, Result,
};

// Implementation modules
pub mod arithmetic;
pub mod engine;
pub mod expression;
#[cfg(feature = "serde")]
pub mod json;
pub mod random;

// Public exports
pub use arithmetic::ConcreteArithmetic;
pub use engine::{add, apply_elementwise, subtract, BlockPlan, ExecutionContext};
pub use expression::{Expression, MatrixExpr, Operator};
pub use random::{random_matrix, random_matrix_with_rng, RANDOM_CELL_RANGE};

#[cfg(feature = "serde")]
pub use json::{from_json, to_json};
