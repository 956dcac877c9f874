//! Error types for square matrix operations

/// Errors that can occur while building, combining or evaluating matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Matrix text does not follow the grammar
    Parse {
        /// What was wrong with the input
        reason: &'static str,
        /// Byte offset where parsing stopped
        offset: usize,
    },
    /// Structural constructor given the wrong number of rows or cells
    Shape { expected: usize, found: usize },
    /// Flattened block request outside the matrix
    OutOfRange { start: usize, step: usize, len: usize },
    /// Operator applied to matrices of different size
    DimensionMismatch { left: usize, right: usize },
    /// Variable missing from the binding
    UndefinedVariable(char),
    /// Scalar division by zero
    DivisionByZero,
    /// No usable worker count could be determined
    NoParallelism,
}

/// Coarse grouping of errors, used by front-ends to pick an exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied malformed or inconsistent input
    Input,
    /// Input was well formed but could not be evaluated
    Evaluation,
    /// The execution environment is unusable
    Configuration,
}

impl MatrixError {
    /// Shorthand for a parse failure
    pub const fn parse(reason: &'static str, offset: usize) -> Self {
        MatrixError::Parse { reason, offset }
    }

    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::Parse { .. }
            | MatrixError::Shape { .. }
            | MatrixError::OutOfRange { .. } => ErrorCategory::Input,
            MatrixError::DimensionMismatch { .. }
            | MatrixError::UndefinedVariable(_)
            | MatrixError::DivisionByZero => ErrorCategory::Evaluation,
            MatrixError::NoParallelism => ErrorCategory::Configuration,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Parse { reason, offset } => {
                write!(f, "Invalid matrix string at offset {offset}: {reason}")
            }
            MatrixError::Shape { expected, found } => {
                write!(f, "Not a square matrix: expected {expected}, found {found}")
            }
            MatrixError::OutOfRange { start, step, len } => {
                write!(f, "Block [{start}, {start}+{step}) exceeds {len} elements")
            }
            MatrixError::DimensionMismatch { left, right } => {
                write!(f, "Dimension mismatch: {left}x{left} and {right}x{right}")
            }
            MatrixError::UndefinedVariable(name) => write!(f, "Undefined variable '{name}'"),
            MatrixError::DivisionByZero => write!(f, "Divisor cannot be zero"),
            MatrixError::NoParallelism => write!(f, "Cannot read the amount of system threads"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
