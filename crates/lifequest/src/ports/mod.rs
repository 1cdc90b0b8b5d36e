//! Ports Layer
//!
//! Abstract interfaces (traits) to the outside world.

pub mod services;

pub use services::*;
