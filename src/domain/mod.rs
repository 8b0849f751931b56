//! Business entities and use-case contracts.
//!
//! Nothing here knows about HTTP, SQL or hashing algorithms.

pub mod account;
pub mod error;
pub mod usecases;

pub use account::*;
pub use usecases::*;
