//! Sign-up controller.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{AddAccount, AddAccountModel};
use crate::presentation::{
    Controller, ControllerError, EmailValidator, HttpRequest, HttpResponse,
    bad_request, ok, server_error,
};

/// Registration payload. Every field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

/// Field reported when the payload is not a JSON object.
pub const BODY_PARAM: &str = "body";

impl TryFrom<Value> for SignUpBody {
    type Error = ControllerError;

    /// Decode a raw JSON payload.
    ///
    /// `null` counts as absent. Any other non-string value is reported as
    /// [`ControllerError::InvalidParam`], fields taken in check order.
    fn try_from(value: Value) -> Result<Self, ControllerError> {
        let Value::Object(mut map) = value else {
            return Err(ControllerError::InvalidParam(BODY_PARAM));
        };

        fn take(
            map: &mut Map<String, Value>,
            field: &'static str,
        ) -> Result<Option<String>, ControllerError> {
            match map.remove(field) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(value)) => Ok(Some(value)),
                Some(_) => Err(ControllerError::InvalidParam(field)),
            }
        }

        Ok(Self {
            name: take(&mut map, "name")?,
            email: take(&mut map, "email")?,
            password: take(&mut map, "password")?,
            password_confirmation: take(&mut map, "passwordConfirmation")?,
        })
    }
}

/// [`SignUpBody`] once every required field is known to be present.
struct SignUpFields {
    name: String,
    email: String,
    password: String,
    password_confirmation: String,
}

impl SignUpBody {
    /// Report the first missing field.
    ///
    /// Fields are checked in order: `name`, `email`, `password`,
    /// `passwordConfirmation`.
    fn required(self) -> Result<SignUpFields, ControllerError> {
        // Struct fields are evaluated in declaration order.
        Ok(SignUpFields {
            name: self.name.ok_or(ControllerError::MissingParam("name"))?,
            email: self.email.ok_or(ControllerError::MissingParam("email"))?,
            password: self
                .password
                .ok_or(ControllerError::MissingParam("password"))?,
            password_confirmation: self
                .password_confirmation
                .ok_or(ControllerError::MissingParam("passwordConfirmation"))?,
        })
    }
}

/// Validate a registration request, then create the account.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    /// Create a new [`SignUpController`].
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Body = SignUpBody;

    async fn handle(&self, request: HttpRequest<SignUpBody>) -> HttpResponse {
        let fields = match request.body.required() {
            Ok(fields) => fields,
            Err(err) => return bad_request(err),
        };

        if fields.password != fields.password_confirmation {
            return bad_request(ControllerError::InvalidParam(
                "passwordConfirmation",
            ));
        }

        match self.email_validator.is_valid(&fields.email) {
            Ok(true) => (),
            Ok(false) => {
                return bad_request(ControllerError::InvalidParam("email"));
            },
            Err(err) => {
                tracing::error!(error = %err, "email validator failed");
                return server_error();
            },
        }

        let account = AddAccountModel {
            name: fields.name,
            email: fields.email,
            password: fields.password,
        };

        match self.add_account.add(account).await {
            Ok(account) => ok(account),
            Err(err) => {
                tracing::error!(error = %err, "account creation failed");
                server_error()
            },
        }
    }
}
