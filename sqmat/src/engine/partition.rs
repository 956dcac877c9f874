//! Partitioning of flattened matrices into contiguous blocks

use std::ops::Range;

/// Split of `total` flattened cells into at most `workers` contiguous blocks
///
/// Block `i` covers `[i * block_size, i * block_size + block_size)`, clipped
/// to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlan {
    total: usize,
    block_size: usize,
    block_count: usize,
}

impl BlockPlan {
    /// Plan `total` cells over `workers` workers
    pub fn new(total: usize, workers: usize) -> Self {
        let block_size = total.div_ceil(workers.max(1));
        let block_count = if block_size == 0 {
            0
        } else {
            total.div_ceil(block_size)
        };

        Self {
            total,
            block_size,
            block_count,
        }
    }

    /// Total number of cells
    pub fn total(&self) -> usize {
        self.total
    }

    /// Cells per block (the last block may be shorter)
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks, one task each
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Check whether there is no work
    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }

    /// Flattened index range of block `index`
    pub fn range(&self, index: usize) -> Range<usize> {
        let start = (index * self.block_size).min(self.total);
        let end = (start + self.block_size).min(self.total);
        start..end
    }

    /// Iterate over all block ranges in order
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.block_count).map(|index| self.range(index))
    }
}
