//! Process-local account storage.
//!
//! Used when no PostgreSQL instance is configured and by the router tests.

use std::collections::HashMap;

use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;
use tokio::sync::RwLock;

use crate::data::AddAccountRepository;
use crate::domain::error::{DomainError, Result};
use crate::domain::{Account, AddAccountModel};

/// Size, in bytes, of generated identifiers.
const ID_LENGTH: usize = 12;

/// In-memory account repository, keyed by identifier.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty [`InMemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id() -> String {
        let mut bytes = [0u8; ID_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

#[cfg(test)]
impl InMemoryAccountRepository {
    /// Find an account using its identifier.
    async fn find_by_id(&self, id: &str) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }

    /// Number of stored accounts.
    async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::EmailAlreadyUsed);
        }

        let mut id = Self::generate_id();
        while accounts.contains_key(&id) {
            id = Self::generate_id();
        }

        let account = Account {
            id: id.clone(),
            name: account.name,
            email: account.email,
            password: account.password,
        };
        accounts.insert(id, account.clone());

        Ok(account)
    }
}
