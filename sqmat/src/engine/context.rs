//! Execution context for the elementwise engine
//!
//! The context is passed to every operation that may spawn worker threads,
//! so there is no process-wide thread count or lock.

use std::num::NonZeroUsize;
use std::thread;

use sqmat_core::{MatrixError, Result};

/// Matrices with fewer cells than this are processed on the calling thread
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Worker configuration for elementwise operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Number of blocks a matrix is split into
    workers: NonZeroUsize,
    /// Minimum cell count before worker threads are used
    parallel_threshold: usize,
}

impl ExecutionContext {
    /// Create a context sized by the detected hardware parallelism
    ///
    /// Fails with [`MatrixError::NoParallelism`] if the platform cannot
    /// report a thread count.
    pub fn detect() -> Result<Self> {
        thread::available_parallelism()
            .map(Self::with_workers)
            .map_err(|_| MatrixError::NoParallelism)
    }

    /// Create a context with an explicit worker count
    pub fn with_workers(workers: NonZeroUsize) -> Self {
        Self {
            workers,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create a context from a plain count, rejecting zero
    pub fn from_count(workers: usize) -> Result<Self> {
        NonZeroUsize::new(workers)
            .map(Self::with_workers)
            .ok_or(MatrixError::NoParallelism)
    }

    /// Create a context that never splits work
    pub fn single_threaded() -> Self {
        Self::with_workers(NonZeroUsize::MIN)
    }

    /// Set the minimum cell count for threaded execution
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Get the worker count
    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Get the parallel threshold in cells
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::detect().unwrap_or_else(|_| Self::single_threaded())
    }
}
