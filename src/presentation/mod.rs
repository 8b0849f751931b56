//! Framework-agnostic controllers and their HTTP value objects.

pub mod errors;
pub mod http;
pub mod protocols;
pub mod signup;

pub use errors::ControllerError;
pub use http::*;
pub use protocols::*;
pub use signup::*;
