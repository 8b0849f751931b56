//! Capabilities consumed or exposed by controllers.

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::presentation::{HttpRequest, HttpResponse};

/// Map a request into a response.
#[async_trait]
pub trait Controller: Send + Sync {
    type Body: Send + 'static;

    async fn handle(&self, request: HttpRequest<Self::Body>) -> HttpResponse;
}

/// Email syntax checker.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is a syntactically valid address.
    fn is_valid(&self, email: &str) -> Result<bool>;
}
