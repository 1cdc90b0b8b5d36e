//! API Models
//!
//! Request/response DTOs for the HTTP layer.

mod campfire;
mod character;
mod quest;

pub use campfire::*;
pub use character::*;
pub use quest::*;
