//! Tokens of the matrix text grammar

/// Opens the matrix and each row
pub const OPEN_BRACKET: u8 = b'[';

/// Closes the matrix and each row
pub const CLOSE_BRACKET: u8 = b']';

/// Separates cells within a row
pub const CELL_SEPARATOR: u8 = b',';

/// Optional sign of an integer cell
pub const MINUS_SIGN: u8 = b'-';

/// Canonical text of the empty matrix
pub const EMPTY_MATRIX: &str = "[]";
