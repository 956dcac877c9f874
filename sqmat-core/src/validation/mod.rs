//! Validation utilities for matrix construction and addressing
//!
//! Pure functions with no side effects, shared by the matrix type and
//! the elementwise engine.

pub mod bounds;
pub mod shape;

pub use bounds::{cell_count, validate_block_range};
pub use shape::validate_grid;
