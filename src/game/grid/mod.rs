//! Grid module.
//!
//! Stateless coordinate validation and empty-cell sampling.

pub mod grid;

pub use grid::*;
