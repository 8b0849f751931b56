//! Account creation use case backed by a repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::{AddAccountRepository, Encrypter};
use crate::domain::error::Result;
use crate::domain::{Account, AddAccount, AddAccountModel};

/// Hash the password, then persist the account.
pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    /// Create a new [`DbAddAccount`].
    pub fn new(
        encrypter: Arc<dyn Encrypter>,
        repository: Arc<dyn AddAccountRepository>,
    ) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, account: AddAccountModel) -> Result<Account> {
        let password = self.encrypter.encrypt(&account.password).await?;

        let account = self
            .repository
            .add(AddAccountModel {
                password,
                ..account
            })
            .await?;

        tracing::info!(account_id = %account.id, "account created");

        Ok(account)
    }
}
