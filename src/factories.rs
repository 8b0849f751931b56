//! Dependency wiring.

use std::sync::Arc;

use crate::data::{AddAccountRepository, DbAddAccount, Encrypter};
use crate::presentation::SignUpController;
use crate::utils::EmailValidatorAdapter;

/// Build a [`SignUpController`] on top of the given adapters.
pub fn make_signup_controller(
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
) -> SignUpController {
    let add_account = DbAddAccount::new(encrypter, repository);

    SignUpController::new(Arc::new(EmailValidatorAdapter), Arc::new(add_account))
}
