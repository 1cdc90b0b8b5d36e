//! Application Services (Use Cases)
//!
//! Orchestrate domain operations for the HTTP layer.

mod generation_service;
mod session_service;

pub use generation_service::*;
pub use session_service::*;
