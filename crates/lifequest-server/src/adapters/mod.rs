//! Infrastructure Adapters
//!
//! Implementations of domain ports backed by external services.

mod gemini;

pub use gemini::*;
