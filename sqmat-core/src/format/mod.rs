//! Text format of square matrices
//!
//! The same grammar is used for input and output, so every matrix
//! round-trips through its string form.

pub mod constants;
pub mod parser;

pub use constants::EMPTY_MATRIX;
pub use parser::{parse_matrix, Token};
