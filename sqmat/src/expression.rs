//! Binary expression trees over matrices
//!
//! An [`Expression`] holds two operands behind the [`MatrixExpr`] trait, so a
//! leaf can be a concrete matrix, a symbolic matrix or another expression.
//! Evaluation resolves both operands against a [`Binding`] and combines the
//! two concrete results with an [`Operator`].

use std::fmt::{self, Debug, Display};

use sqmat_core::{Binding, ConcreteMatrix, Element, Result, ScalarOp, SquareMatrix};
use tracing::debug;

use crate::engine::{apply_elementwise, ExecutionContext};

/// Anything that can stand in an operand slot of an [`Expression`]
pub trait MatrixExpr: Display + Debug + Send + Sync {
    /// Size of the matrix this operand evaluates to
    fn size(&self) -> usize;

    /// Resolve the operand to a concrete matrix
    fn evaluate(&self, binding: &Binding, ctx: &ExecutionContext) -> Result<ConcreteMatrix>;

    /// Deep copy behind a fresh box
    fn box_clone(&self) -> Box<dyn MatrixExpr>;
}

impl Clone for Box<dyn MatrixExpr> {
    fn clone(&self) -> Self {
        (**self).box_clone()
    }
}

impl<T> MatrixExpr for SquareMatrix<T>
where
    T: Element + Debug + Send + Sync + 'static,
{
    fn size(&self) -> usize {
        SquareMatrix::size(self)
    }

    fn evaluate(&self, binding: &Binding, _ctx: &ExecutionContext) -> Result<ConcreteMatrix> {
        SquareMatrix::evaluate(self, binding)
    }

    fn box_clone(&self) -> Box<dyn MatrixExpr> {
        Box::new(self.clone())
    }
}

/// Operator joining the two operands of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Canonical symbol
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Look up the operator written as `symbol`
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Combine two concrete matrices
    ///
    /// Addition and subtraction run on the elementwise engine and reuse the
    /// storage of `lhs`. Multiplication and division run on the calling thread.
    pub fn apply(
        self,
        mut lhs: ConcreteMatrix,
        rhs: &ConcreteMatrix,
        ctx: &ExecutionContext,
    ) -> Result<ConcreteMatrix> {
        match self {
            Operator::Add => {
                apply_elementwise(&mut lhs, rhs, ScalarOp::Add, ctx)?;
                Ok(lhs)
            }
            Operator::Sub => {
                apply_elementwise(&mut lhs, rhs, ScalarOp::Sub, ctx)?;
                Ok(lhs)
            }
            Operator::Mul => lhs.multiply(rhs),
            Operator::Div => lhs.divide(rhs),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary expression `( left ) symbol ( right )`
#[derive(Debug, Clone)]
pub struct Expression {
    left: Box<dyn MatrixExpr>,
    right: Box<dyn MatrixExpr>,
    operator: Operator,
    symbol: char,
}

impl Expression {
    /// Build an expression, displaying `symbol` between the operands
    pub fn new<L, R>(left: L, right: R, operator: Operator, symbol: char) -> Self
    where
        L: MatrixExpr + 'static,
        R: MatrixExpr + 'static,
    {
        Self::from_boxed(Box::new(left), Box::new(right), operator, symbol)
    }

    /// Build an expression from operands that are already boxed
    pub fn from_boxed(
        left: Box<dyn MatrixExpr>,
        right: Box<dyn MatrixExpr>,
        operator: Operator,
        symbol: char,
    ) -> Self {
        Self {
            left,
            right,
            operator,
            symbol,
        }
    }

    /// Build an expression displayed with the operator's own symbol
    pub fn with_operator<L, R>(left: L, right: R, operator: Operator) -> Self
    where
        L: MatrixExpr + 'static,
        R: MatrixExpr + 'static,
    {
        Self::new(left, right, operator, operator.symbol())
    }

    /// Left operand
    pub fn left(&self) -> &dyn MatrixExpr {
        self.left.as_ref()
    }

    /// Right operand
    pub fn right(&self) -> &dyn MatrixExpr {
        self.right.as_ref()
    }

    /// Operator applied at evaluation
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Symbol shown between the operands
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl MatrixExpr for Expression {
    fn size(&self) -> usize {
        self.left.size()
    }

    fn evaluate(&self, binding: &Binding, ctx: &ExecutionContext) -> Result<ConcreteMatrix> {
        let lhs = self.left.evaluate(binding, ctx)?;
        let rhs = self.right.evaluate(binding, ctx)?;
        debug!(
            operator = %self.operator,
            left = lhs.size(),
            right = rhs.size(),
            "evaluating expression"
        );
        self.operator.apply(lhs, &rhs, ctx)
    }

    fn box_clone(&self) -> Box<dyn MatrixExpr> {
        Box::new(self.clone())
    }
}

impl Default for Expression {
    fn default() -> Self {
        Self::with_operator(
            ConcreteMatrix::empty(),
            ConcreteMatrix::empty(),
            Operator::Add,
        )
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} ) {} ( {} )", self.left, self.symbol, self.right)
    }
}
