//! Property-based tests for the matrix value model.

use proptest::prelude::*;

use sqmat_core::{Binding, Cell, ConcreteMatrix, SymbolicMatrix};

// Strategy for small concrete matrices, including the occasional large cell
fn concrete_matrix() -> impl Strategy<Value = ConcreteMatrix> {
    (1usize..6).prop_flat_map(|n| {
        prop::collection::vec(prop_oneof![-99i32..=99, any::<i32>()], n * n)
            .prop_map(move |cells| ConcreteMatrix::from_row_major(n, cells).unwrap())
    })
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        (-1000i32..1000).prop_map(Cell::Integer),
        prop::char::range('a', 'z').prop_map(Cell::Variable),
        prop::char::range('A', 'Z').prop_map(Cell::Variable),
    ]
}

fn symbolic_matrix() -> impl Strategy<Value = SymbolicMatrix> {
    (1usize..5).prop_flat_map(|n| {
        prop::collection::vec(cell(), n * n)
            .prop_map(move |cells| SymbolicMatrix::from_row_major(n, cells).unwrap())
    })
}

proptest! {
    #[test]
    fn concrete_round_trip(m in concrete_matrix()) {
        let text = m.to_string();
        let parsed: ConcreteMatrix = text.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), text);
        prop_assert_eq!(parsed, m);
    }

    #[test]
    fn symbolic_round_trip(m in symbolic_matrix()) {
        let text = m.to_string();
        let parsed: SymbolicMatrix = text.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), text);
        prop_assert_eq!(parsed, m);
    }

    #[test]
    fn transpose_is_involution(m in symbolic_matrix()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn block_matches_flattening(m in concrete_matrix(), k in 0usize..36) {
        let total = m.size() * m.size();
        let full: Vec<i32> = m.rows().flatten().copied().collect();
        prop_assert_eq!(m.block(0, total).unwrap(), &full[..]);

        if k < total {
            let (row, col) = (k / m.size(), k % m.size());
            prop_assert_eq!(m.block(k, 1).unwrap(), &[*m.get(row, col).unwrap()][..]);
        } else {
            prop_assert!(m.block(k, 1).is_err());
        }
    }

    #[test]
    fn divide_is_multiply_by_transpose(m in concrete_matrix()) {
        prop_assert_eq!(m.divide(&m).unwrap(), m.multiply(&m.transpose()).unwrap());
    }

    #[test]
    fn evaluate_fully_bound(m in symbolic_matrix(), value in -50i32..50) {
        let binding: Binding = ('a'..='z').chain('A'..='Z').map(|name| (name, value)).collect();
        let evaluated = m.evaluate(&binding).unwrap();
        for (cell, resolved) in m.cells().iter().zip(evaluated.cells()) {
            match cell {
                Cell::Integer(v) => prop_assert_eq!(v, resolved),
                Cell::Variable(_) => prop_assert_eq!(*resolved, value),
            }
        }
    }
}
