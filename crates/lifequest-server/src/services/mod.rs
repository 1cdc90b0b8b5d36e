//! Server Services
//!
//! Background simulations that are not part of the domain core.

pub mod campfire;
