//! Errors returned to the client as response bodies.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Failure reported by a controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("Missing param: {0}")]
    MissingParam(&'static str),
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),
    /// Never carries the underlying cause.
    #[error("Internal server error")]
    ServerError,
}

impl ControllerError {
    /// Error name, as exposed to clients.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MissingParamError",
            Self::InvalidParam(_) => "InvalidParamError",
            Self::ServerError => "ServerError",
        }
    }
}

impl Serialize for ControllerError {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ControllerError", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages() {
        assert_eq!(
            ControllerError::MissingParam("email").to_string(),
            "Missing param: email"
        );
        assert_eq!(
            ControllerError::InvalidParam("passwordConfirmation").to_string(),
            "Invalid param: passwordConfirmation"
        );
        assert_eq!(
            ControllerError::ServerError.to_string(),
            "Internal server error"
        );
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_value(ControllerError::InvalidParam("email"))
                .unwrap(),
            json!({ "name": "InvalidParamError", "message": "Invalid param: email" })
        );
        assert_eq!(
            serde_json::to_value(ControllerError::ServerError).unwrap(),
            json!({ "name": "ServerError", "message": "Internal server error" })
        );
    }
}
