//! Account entity.

use serde::{Deserialize, Serialize};

/// Account as stored by the persistence layer.
///
/// `id` is always assigned by the repository.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Data required to create an [`Account`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountModel {
    /// Create a new [`AddAccountModel`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
