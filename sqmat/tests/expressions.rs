//! End-to-end scenarios through the public API

use sqmat::{
    Binding, ConcreteArithmetic, ConcreteMatrix, ExecutionContext, Expression, MatrixError,
    MatrixExpr, Operator, SymbolicMatrix,
};

fn ctx(workers: usize) -> ExecutionContext {
    ExecutionContext::from_count(workers)
        .unwrap()
        .with_parallel_threshold(0)
}

#[test]
fn test_compound_assignment_scenario() {
    let ctx = ctx(4);
    let mut a: ConcreteMatrix = "[[1,2][3,4]]".parse().unwrap();
    let mut b: ConcreteMatrix = "[[2,2][2,2]]".parse().unwrap();

    a.add_assign_in(&b, &ctx).unwrap();
    assert_eq!(a.to_string(), "[[3,4][5,6]]");

    b.sub_assign_in(&a, &ctx).unwrap();
    assert_eq!(b.to_string(), "[[-1,-2][-3,-4]]");
}

#[test]
fn test_symbolic_expression_scenario() {
    let lhs: SymbolicMatrix = "[[a,b][4,5]]".parse().unwrap();
    let rhs: ConcreteMatrix = "[[1,2][4,5]]".parse().unwrap();
    let expr = Expression::with_operator(lhs, rhs, Operator::Add);

    let mut binding = Binding::new();
    assert_eq!(
        expr.evaluate(&binding, &ctx(2)),
        Err(MatrixError::UndefinedVariable('a'))
    );

    binding.insert('a', 1);
    binding.insert('b', 4);
    let result = expr.evaluate(&binding, &ctx(2)).unwrap();
    assert_eq!(result.to_string(), "[[2,6][8,10]]");
}

#[test]
fn test_rejects_non_square_text() {
    let parsed = "[[1,2,3][4,5,6][7,8,9][10,11,12]]".parse::<ConcreteMatrix>();
    assert!(matches!(parsed, Err(MatrixError::Parse { .. })));
}

#[test]
fn test_division_by_self_is_not_identity() {
    let m: ConcreteMatrix = "[[1,2,3][4,5,6][7,8,9]]".parse().unwrap();
    let quotient = m.divide(&m).unwrap();
    assert_eq!(quotient, m.multiply(&m.transpose()).unwrap());
    assert_eq!(quotient.to_string(), "[[14,32,50][32,77,122][50,122,194]]");
    assert_ne!(quotient, ConcreteMatrix::identity(3));
}

#[test]
fn test_block_views() {
    let m: ConcreteMatrix = "[[1,2,3][4,5,6][7,8,9]]".parse().unwrap();
    assert_eq!(m.block(0, 9).unwrap(), m.cells());
    assert_eq!(m.block(4, 1).unwrap(), &[5]);
    assert_eq!(m.block(9, 0).unwrap(), &[] as &[i32]);
    assert!(matches!(m.block(8, 2), Err(MatrixError::OutOfRange { .. })));
}

#[test]
fn test_deep_expression_tree() {
    let ones: ConcreteMatrix = "[[1,1][1,1]]".parse().unwrap();
    let mut expr: Box<dyn MatrixExpr> = Box::new(ones.clone());
    for _ in 0..10 {
        expr = Box::new(Expression::from_boxed(
            expr,
            Box::new(ones.clone()),
            Operator::Add,
            '+',
        ));
    }
    let result = expr.evaluate(&Binding::new(), &ctx(3)).unwrap();
    assert_eq!(result.to_string(), "[[11,11][11,11]]");
}
