//! Domain Services
//!
//! Pure computations over domain values.

pub mod progression;

pub use progression::*;
