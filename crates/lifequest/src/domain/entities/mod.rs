//! Domain Entities
//!
//! Core domain models, free of infrastructure dependencies.

mod character;
mod mood;
mod quest;

pub use character::*;
pub use mood::*;
pub use quest::*;
