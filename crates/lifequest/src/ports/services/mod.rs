//! Service Ports
//!
//! External service interfaces.

mod mentor;

pub use mentor::*;
