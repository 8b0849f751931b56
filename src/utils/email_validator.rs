//! Email syntax validation backed by the `validator` crate.

use validator::ValidateEmail;

use crate::domain::error::Result;
use crate::presentation::EmailValidator;

/// [`EmailValidator`] following the HTML5 email definition.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}
