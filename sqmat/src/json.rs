//! JSON encoding of matrices
//!
//! Matrices encode as an array of rows. Decoding applies the same square
//! shape checks as [`SquareMatrix::from_rows`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqmat_core::SquareMatrix;

/// Encode a matrix as a JSON array of rows
pub fn to_json<T>(matrix: &SquareMatrix<T>) -> serde_json::Result<String>
where
    T: Serialize + Clone,
{
    serde_json::to_string(matrix)
}

/// Decode a matrix from a JSON array of rows
pub fn from_json<T>(text: &str) -> serde_json::Result<SquareMatrix<T>>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text)
}
