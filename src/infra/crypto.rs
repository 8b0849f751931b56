//! Password hashing.

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Argon2, Params, Version};
use async_trait::async_trait;
use rand::rngs::OsRng;

use crate::config::Argon2 as ArgonConfig;
use crate::data::Encrypter;
use crate::domain::error::{Result, ToInternal};

#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    #[error("argon2 error: {0}")]
    Argon2(String),
    #[error("hashing task was aborted")]
    Join(#[from] tokio::task::JoinError),
}

/// Password encrypter that uses Argon2id and PHC string format.
#[derive(Clone)]
pub struct Argon2Encrypter {
    params: Params,
}

impl Argon2Encrypter {
    /// Create a new [`Argon2Encrypter`].
    pub fn new(
        config: Option<ArgonConfig>,
    ) -> std::result::Result<Self, CryptoError> {
        let config = config.unwrap_or_default();

        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )
        .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(
            argon2::Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
    }

    /// Hash password using Argon2id.
    pub fn hash_password(
        &self,
        password: impl AsRef<[u8]>,
    ) -> std::result::Result<String, CryptoError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_ref(), &salt)
            .map_err(|e| CryptoError::Argon2(e.to_string()))?;

        Ok(hash.to_string())
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, value: &str) -> Result<String> {
        // Argon2 is memory-hard, keep it off the async workers.
        let encrypter = self.clone();
        let value = value.to_owned();

        tokio::task::spawn_blocking(move || encrypter.hash_password(value))
            .await
            .map_err(CryptoError::from)
            .catch()?
            .catch()
    }
}

#[cfg(test)]
mod tests {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    use super::*;

    /// Verify password against a PHC.
    fn verify(encrypter: &Argon2Encrypter, password: &str, phc: &str) -> bool {
        PasswordHash::new(phc)
            .and_then(|parsed| {
                encrypter.argon2().verify_password(password.as_bytes(), &parsed)
            })
            .is_ok()
    }

    fn light() -> Option<ArgonConfig> {
        Some(ArgonConfig {
            memory_cost: 1024,
            iterations: 1,
            parallelism: 1,
            hash_length: 32,
        })
    }

    #[test]
    fn test_hash_password() {
        let encrypter = Argon2Encrypter::new(light()).unwrap();

        let hash = encrypter.hash_password("valid_password").unwrap();
        assert!(hash.starts_with("$argon2id$v=19$"));
        assert!(verify(&encrypter, "valid_password", &hash));
        assert!(!verify(&encrypter, "other_password", &hash));
    }

    #[test]
    fn test_invalid_params() {
        let config = ArgonConfig {
            hash_length: 1,
            ..Default::default()
        };

        assert!(Argon2Encrypter::new(Some(config)).is_err());
    }

    #[tokio::test]
    async fn test_encrypt() {
        let encrypter = Argon2Encrypter::new(light()).unwrap();

        let first = encrypter.encrypt("valid_password").await.unwrap();
        let second = encrypter.encrypt("valid_password").await.unwrap();

        assert_ne!(first, "valid_password");
        // Random salt.
        assert_ne!(first, second);
        assert!(verify(&encrypter, "valid_password", &second));
    }
}
