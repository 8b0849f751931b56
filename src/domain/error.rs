//! Custom error handler for domain (core).

pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors raised by use cases and their collaborators.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("email is already used by another account")]
    EmailAlreadyUsed,

    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl DomainError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

/// Wrap any foreign error into [`DomainError::Internal`].
pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(DomainError::internal)
    }
}
