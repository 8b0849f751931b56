//! Use-case ports.

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::{Account, AddAccountModel};

/// Account creation capability.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Persist a new account and return the stored record.
    async fn add(&self, account: AddAccountModel) -> Result<Account>;
}
