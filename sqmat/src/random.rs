//! Random concrete matrices

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqmat_core::validation::cell_count;
use sqmat_core::{ConcreteMatrix, MatrixError, Result};

/// Range of the cells of a random matrix
pub const RANDOM_CELL_RANGE: RangeInclusive<i32> = -99..=99;

/// Create a `size` x `size` matrix of uniform cells, seeded from the clock
pub fn random_matrix(size: usize) -> Result<ConcreteMatrix> {
    let mut rng = StdRng::seed_from_u64(time_seed());
    random_matrix_with_rng(size, &mut rng)
}

/// Create a `size` x `size` matrix of uniform cells from `rng`
pub fn random_matrix_with_rng<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<ConcreteMatrix> {
    let total = cell_count(size).ok_or(MatrixError::Shape {
        expected: size,
        found: usize::MAX,
    })?;
    let distribution = Uniform::from(RANDOM_CELL_RANGE);
    let cells = (0..total).map(|_| distribution.sample(rng)).collect();
    ConcreteMatrix::from_row_major(size, cells)
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
