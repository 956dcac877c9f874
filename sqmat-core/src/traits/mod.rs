//! Abstract interfaces for square matrices

pub mod element;

pub use element::Element;
