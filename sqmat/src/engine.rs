//! Concurrent elementwise operations on concrete matrices
//!
//! The left matrix is split into contiguous blocks of its row-major cells,
//! one worker thread per block. Every worker reads its inputs and computes a
//! private result buffer, then waits on a barrier shared by all workers.
//! Write-back into the left matrix only starts once every worker has passed
//! the barrier, so no worker ever observes a partially updated matrix. If any
//! worker failed, none of them writes and the left matrix is left untouched.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Barrier;
use std::thread;

use sqmat_core::{ConcreteMatrix, Result, ScalarOp};
use tracing::{debug, trace};

pub mod context;
pub mod partition;

pub use context::{ExecutionContext, DEFAULT_PARALLEL_THRESHOLD};
pub use partition::BlockPlan;

/// Apply `op` cell by cell, storing the result in `lhs`
///
/// Fails with [`sqmat_core::MatrixError::DimensionMismatch`] if the sizes differ. On any
/// error `lhs` keeps its original values.
pub fn apply_elementwise(
    lhs: &mut ConcreteMatrix,
    rhs: &ConcreteMatrix,
    op: ScalarOp,
    ctx: &ExecutionContext,
) -> Result<()> {
    lhs.check_dimensions(rhs)?;

    let plan = BlockPlan::new(lhs.cells().len(), ctx.workers());
    if plan.is_empty() {
        return Ok(());
    }

    if plan.block_count() == 1 || plan.total() < ctx.parallel_threshold() {
        debug!(
            size = lhs.size(),
            op = %op.symbol(),
            "elementwise operation on calling thread"
        );
        return apply_inline(lhs.cells_mut(), rhs.cells(), op);
    }

    debug!(
        size = lhs.size(),
        op = %op.symbol(),
        block_size = plan.block_size(),
        block_count = plan.block_count(),
        "elementwise operation across workers"
    );
    apply_blocks(lhs, rhs, op, &plan)
}

fn apply_inline(lhs: &mut [i32], rhs: &[i32], op: ScalarOp) -> Result<()> {
    let results = compute(lhs, rhs, op)?;
    lhs.copy_from_slice(&results);
    Ok(())
}

fn compute(lhs: &[i32], rhs: &[i32], op: ScalarOp) -> Result<Vec<i32>> {
    lhs.iter().zip(rhs).map(|(&a, &b)| op.apply(a, b)).collect()
}

fn apply_blocks(
    lhs: &mut ConcreteMatrix,
    rhs: &ConcreteMatrix,
    op: ScalarOp,
    plan: &BlockPlan,
) -> Result<()> {
    let barrier = Barrier::new(plan.block_count());
    let failed = AtomicBool::new(false);

    let outcomes: Vec<Result<()>> = thread::scope(|scope| {
        let handles: Vec<_> = lhs
            .cells_mut()
            .chunks_mut(plan.block_size())
            .enumerate()
            .map(|(index, block)| {
                let task = BlockTask {
                    index,
                    start: plan.range(index).start,
                    barrier: &barrier,
                    failed: &failed,
                };
                scope.spawn(move || task.run(block, rhs, op))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload))
            })
            .collect()
    });

    outcomes.into_iter().collect()
}

/// One worker's share of an elementwise operation
struct BlockTask<'a> {
    index: usize,
    start: usize,
    barrier: &'a Barrier,
    failed: &'a AtomicBool,
}

impl BlockTask<'_> {
    fn run(self, block: &mut [i32], rhs: &ConcreteMatrix, op: ScalarOp) -> Result<()> {
        let start = self.start;
        self.run_with(block, |current| {
            // Snapshot of the pre-mutation left values and the matching right block
            let (left, right) = rayon::join(
                || current.to_vec(),
                || rhs.block(start, current.len()),
            );
            right.and_then(|right| compute(&left, right, op))
        })
    }

    /// Run `read` on the block, wait for every worker, then write back
    ///
    /// A panic in `read` still reaches the barrier, so the other workers are
    /// released before the panic is resumed on this thread.
    fn run_with<F>(self, block: &mut [i32], read: F) -> Result<()>
    where
        F: FnOnce(&[i32]) -> Result<Vec<i32>>,
    {
        let step = block.len();
        let caught = panic::catch_unwind(AssertUnwindSafe(|| read(block)));

        if !matches!(caught, Ok(Ok(_))) {
            self.failed.store(true, Ordering::SeqCst);
        }
        trace!(block = self.index, start = self.start, len = step, "block computed");

        // Read phase of every worker ends here
        self.barrier.wait();

        let outcome = caught.unwrap_or_else(|payload| panic::resume_unwind(payload));
        if self.failed.load(Ordering::SeqCst) {
            return outcome.map(|_| ());
        }

        let results = outcome?;
        block.copy_from_slice(&results);
        Ok(())
    }
}

/// Elementwise sum of two matrices
pub fn add(lhs: &ConcreteMatrix, rhs: &ConcreteMatrix, ctx: &ExecutionContext) -> Result<ConcreteMatrix> {
    combine(lhs, rhs, ScalarOp::Add, ctx)
}

/// Elementwise difference of two matrices
pub fn subtract(
    lhs: &ConcreteMatrix,
    rhs: &ConcreteMatrix,
    ctx: &ExecutionContext,
) -> Result<ConcreteMatrix> {
    combine(lhs, rhs, ScalarOp::Sub, ctx)
}

fn combine(
    lhs: &ConcreteMatrix,
    rhs: &ConcreteMatrix,
    op: ScalarOp,
    ctx: &ExecutionContext,
) -> Result<ConcreteMatrix> {
    let mut result = lhs.clone();
    apply_elementwise(&mut result, rhs, op, ctx)?;
    Ok(result)
}
