//! PostgreSQL implementation for account repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::data::AddAccountRepository;
use crate::domain::error::{DomainError, Result};
use crate::domain::{Account, AddAccountModel};

/// Row of the `accounts` table.
#[derive(Debug, sqlx::FromRow)]
struct AccountRecord {
    id: String,
    name: String,
    email: String,
    password: String,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            password: record.password,
        }
    }
}

/// PostgreSQL account repository.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddAccountRepository for PgAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<Account> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO accounts (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DomainError::EmailAlreadyUsed
            },
            err => DomainError::internal(err),
        })?;

        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Pool, Postgres};

    #[sqlx::test]
    async fn test_add_returns_stored_account(pool: Pool<Postgres>) {
        let repository = PgAccountRepository::new(pool);

        let account = repository
            .add(AddAccountModel::new(
                "any_name",
                "any_email@mail.com",
                "any_password",
            ))
            .await
            .unwrap();

        assert!(!account.id.is_empty());
        assert_eq!(account.name, "any_name");
        assert_eq!(account.email, "any_email@mail.com");
        assert_eq!(account.password, "any_password");
    }

    #[sqlx::test]
    async fn test_add_duplicated_email(pool: Pool<Postgres>) {
        let repository = PgAccountRepository::new(pool);
        let model =
            AddAccountModel::new("any_name", "any_email@mail.com", "pwd");

        repository.add(model.clone()).await.unwrap();
        let result = repository.add(model).await;

        assert!(matches!(result, Err(DomainError::EmailAlreadyUsed)));
    }
}
