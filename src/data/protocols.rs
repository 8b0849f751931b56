//! These traits define what the data layer needs from infrastructure.

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::{Account, AddAccountModel};

/// One-way password transformation.
#[async_trait]
pub trait Encrypter: Send + Sync {
    /// Turn a plain value into its stored representation.
    async fn encrypt(&self, value: &str) -> Result<String>;
}

/// Port for account persistence.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Insert a new account and return it with its assigned identifier.
    async fn add(&self, account: AddAccountModel) -> Result<Account>;
}
