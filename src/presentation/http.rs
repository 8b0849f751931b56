//! HTTP-shaped request and response.

use serde::Serialize;

use crate::domain::Account;
use crate::presentation::ControllerError;

pub const OK: u16 = 200;
pub const BAD_REQUEST: u16 = 400;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Inbound request handed to a controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpRequest<B> {
    pub body: B,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

/// Body of an [`HttpResponse`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(Account),
    Error(ControllerError),
}

/// Outbound response built by a controller.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

/// `400` with the given error.
pub fn bad_request(error: ControllerError) -> HttpResponse {
    HttpResponse {
        status_code: BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// `500` with a generic [`ControllerError::ServerError`].
pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(ControllerError::ServerError),
    }
}

/// `200` with the given account.
pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: OK,
        body: ResponseBody::Account(account),
    }
}
