//! Compound-assignment arithmetic for concrete matrices
//!
//! Addition and subtraction go through the concurrent elementwise engine.
//! Multiplication and division use the single-threaded row-times-column
//! product from `sqmat-core`.

use sqmat_core::{ConcreteMatrix, Result, ScalarOp};

use crate::engine::{add, apply_elementwise, subtract, ExecutionContext};

/// Extension trait for in-place arithmetic on concrete matrices
pub trait ConcreteArithmetic: Sized {
    /// `self += rhs`
    fn add_assign_in(&mut self, rhs: &Self, ctx: &ExecutionContext) -> Result<()>;

    /// `self -= rhs`
    fn sub_assign_in(&mut self, rhs: &Self, ctx: &ExecutionContext) -> Result<()>;

    /// `self *= rhs`
    fn mul_assign_in(&mut self, rhs: &Self) -> Result<()>;

    /// `self /= rhs`, i.e. `self *= transpose(rhs)`
    fn div_assign_in(&mut self, rhs: &Self) -> Result<()>;

    /// `self + rhs` as a new matrix
    fn added(&self, rhs: &Self, ctx: &ExecutionContext) -> Result<Self>;

    /// `self - rhs` as a new matrix
    fn subtracted(&self, rhs: &Self, ctx: &ExecutionContext) -> Result<Self>;
}

impl ConcreteArithmetic for ConcreteMatrix {
    fn add_assign_in(&mut self, rhs: &Self, ctx: &ExecutionContext) -> Result<()> {
        apply_elementwise(self, rhs, ScalarOp::Add, ctx)
    }

    fn sub_assign_in(&mut self, rhs: &Self, ctx: &ExecutionContext) -> Result<()> {
        apply_elementwise(self, rhs, ScalarOp::Sub, ctx)
    }

    fn mul_assign_in(&mut self, rhs: &Self) -> Result<()> {
        *self = self.multiply(rhs)?;
        Ok(())
    }

    fn div_assign_in(&mut self, rhs: &Self) -> Result<()> {
        *self = self.divide(rhs)?;
        Ok(())
    }

    fn added(&self, rhs: &Self, ctx: &ExecutionContext) -> Result<Self> {
        add(self, rhs, ctx)
    }

    fn subtracted(&self, rhs: &Self, ctx: &ExecutionContext) -> Result<Self> {
        subtract(self, rhs, ctx)
    }
}
