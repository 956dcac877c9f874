#![no_std]

//! sqmat-core - Square Matrix Value Model
//!
//! This crate provides the cell and matrix types, the text grammar and the
//! error type shared by every sqmat front-end. It performs no I/O and spawns
//! no threads.
//!
//! ```
//! use sqmat_core::{Binding, SymbolicMatrix};
//!
//! let m: SymbolicMatrix = "[[a,2][3,b]]".parse().unwrap();
//! let binding = Binding::new().with('a', 1).with('b', 4);
//! assert_eq!(m.evaluate(&binding).unwrap().to_string(), "[[1,2][3,4]]");
//! ```

extern crate alloc;

pub mod binding;
pub mod cell;
pub mod error;
pub mod format;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use binding::Binding;
pub use cell::{Cell, ScalarOp};
pub use error::*;
pub use format::EMPTY_MATRIX;
pub use matrix::{ConcreteMatrix, SquareMatrix, SymbolicMatrix};
pub use traits::*;
