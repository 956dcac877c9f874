//! Worker-count independence of the elementwise engine

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqmat::{
    add, apply_elementwise, random_matrix_with_rng, subtract, ConcreteMatrix, ExecutionContext,
    MatrixError, ScalarOp,
};

fn ctx(workers: usize) -> ExecutionContext {
    ExecutionContext::from_count(workers)
        .unwrap()
        .with_parallel_threshold(0)
}

fn matrix_pair() -> impl Strategy<Value = (ConcreteMatrix, ConcreteMatrix)> {
    (0usize..8).prop_flat_map(|n| {
        let cells = prop::collection::vec(any::<i32>(), n * n);
        (cells.clone(), cells).prop_map(move |(a, b)| {
            (
                ConcreteMatrix::from_row_major(n, a).unwrap(),
                ConcreteMatrix::from_row_major(n, b).unwrap(),
            )
        })
    })
}

proptest! {
    #[test]
    fn test_add_independent_of_workers((a, b) in matrix_pair(), workers in 1usize..20) {
        prop_assert_eq!(
            add(&a, &b, &ctx(workers)).unwrap(),
            add(&a, &b, &ExecutionContext::single_threaded()).unwrap()
        );
    }

    #[test]
    fn test_subtract_independent_of_workers((a, b) in matrix_pair(), workers in 1usize..20) {
        prop_assert_eq!(
            subtract(&a, &b, &ctx(workers)).unwrap(),
            subtract(&a, &b, &ExecutionContext::single_threaded()).unwrap()
        );
    }

    #[test]
    fn test_add_commutes((a, b) in matrix_pair(), workers in 1usize..8) {
        let ctx = ctx(workers);
        prop_assert_eq!(add(&a, &b, &ctx).unwrap(), add(&b, &a, &ctx).unwrap());
    }

    #[test]
    fn test_self_subtraction_is_zero((a, _) in matrix_pair(), workers in 1usize..8) {
        let zero = subtract(&a, &a, &ctx(workers)).unwrap();
        prop_assert!(zero.cells().iter().all(|&cell| cell == 0));
    }
}

#[test]
fn test_large_random_matrices() {
    let mut rng = StdRng::seed_from_u64(150);
    let a = random_matrix_with_rng(150, &mut rng).unwrap();
    let b = random_matrix_with_rng(150, &mut rng).unwrap();

    let expected: Vec<i32> = a.cells().iter().zip(b.cells()).map(|(x, y)| x + y).collect();
    for workers in [1, 2, 7, 64, 150] {
        let sum = add(&a, &b, &ctx(workers)).unwrap();
        assert_eq!(sum.cells(), expected.as_slice());
    }
}

#[test]
fn test_failure_is_all_or_nothing() {
    let mut rng = StdRng::seed_from_u64(7);
    let original = random_matrix_with_rng(20, &mut rng).unwrap();
    let mut cells = vec![1; 400];
    cells[399] = 0;
    let divisor = ConcreteMatrix::from_row_major(20, cells).unwrap();

    for workers in [1, 4, 13, 400] {
        let mut lhs = original.clone();
        assert_eq!(
            apply_elementwise(&mut lhs, &divisor, ScalarOp::Div, &ctx(workers)),
            Err(MatrixError::DivisionByZero)
        );
        assert_eq!(lhs, original);
    }
}
