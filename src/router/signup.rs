use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;

use crate::AppState;
use crate::presentation::{
    BODY_PARAM, Controller, ControllerError, HttpRequest, HttpResponse,
    SignUpBody, bad_request,
};

/// Handler to sign up.
///
/// Payload errors are answered like controller errors.
pub async fn handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    let Json(value) = match body {
        Ok(value) => value,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "sign-up payload rejected");
            return bad_request(ControllerError::InvalidParam(BODY_PARAM));
        },
    };

    match SignUpBody::try_from(value) {
        Ok(body) => state.signup.handle(HttpRequest::new(body)).await,
        Err(err) => bad_request(err),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    use crate::*;

    async fn json_body(response: axum::response::Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_signup_handler() {
        let state = testing_state();
        let app = app(state);

        let response = make_request(
            app,
            Method::POST,
            "/api/signup",
            json!({
                "name": "valid_name",
                "email": "valid_email@app.com",
                "password": "valid_password",
                "passwordConfirmation": "valid_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["id"].as_str().unwrap().len(), 24);
        assert_eq!(body["name"], "valid_name");
        assert_eq!(body["email"], "valid_email@app.com");
        assert_ne!(body["password"], "valid_password");
        assert!(body.get("passwordConfirmation").is_none());
    }

    #[tokio::test]
    async fn test_signup_missing_field() {
        let app = app(testing_state());

        let response = make_request(
            app,
            Method::POST,
            "/api/signup",
            json!({
                "name": "valid_name",
                "password": "valid_password",
                "passwordConfirmation": "valid_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "name": "MissingParamError", "message": "Missing param: email" })
        );
    }

    #[tokio::test]
    async fn test_signup_invalid_email() {
        let app = app(testing_state());

        let response = make_request(
            app,
            Method::POST,
            "/api/signup",
            json!({
                "name": "valid_name",
                "email": "invalid_email",
                "password": "valid_password",
                "passwordConfirmation": "valid_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "name": "InvalidParamError", "message": "Invalid param: email" })
        );
    }

    #[tokio::test]
    async fn test_signup_duplicated_email() {
        let state = testing_state();
        let body = json!({
            "name": "valid_name",
            "email": "valid_email@app.com",
            "password": "valid_password",
            "passwordConfirmation": "valid_password",
        })
        .to_string();

        let first = make_request(
            app(state.clone()),
            Method::POST,
            "/api/signup",
            body.clone(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::OK);

        let second =
            make_request(app(state), Method::POST, "/api/signup", body).await;
        assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(second).await,
            json!({ "name": "ServerError", "message": "Internal server error" })
        );
    }

    #[tokio::test]
    async fn test_signup_wrong_typed_field() {
        let app = app(testing_state());

        let response = make_request(
            app,
            Method::POST,
            "/api/signup",
            json!({
                "name": 42,
                "email": "valid_email@app.com",
                "password": "valid_password",
                "passwordConfirmation": "valid_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "name": "InvalidParamError", "message": "Invalid param: name" })
        );
    }

    #[tokio::test]
    async fn test_signup_null_field() {
        let app = app(testing_state());

        let response = make_request(
            app,
            Method::POST,
            "/api/signup",
            json!({
                "name": "valid_name",
                "email": "valid_email@app.com",
                "password": "valid_password",
                "passwordConfirmation": null,
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({
                "name": "MissingParamError",
                "message": "Missing param: passwordConfirmation"
            })
        );
    }

    #[tokio::test]
    async fn test_signup_not_json() {
        let app = app(testing_state());

        let response = make_request(
            app,
            Method::POST,
            "/api/signup",
            "name=valid_name".to_owned(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "name": "InvalidParamError", "message": "Invalid param: body" })
        );
    }
}
