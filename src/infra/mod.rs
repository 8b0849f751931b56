//! Adapters implementing the data-layer ports.

pub mod crypto;
pub mod db;
