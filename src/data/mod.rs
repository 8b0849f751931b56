//! Use-case implementations and the ports they need from the outside world.

pub mod db_add_account;
pub mod protocols;

pub use db_add_account::*;
pub use protocols::*;
