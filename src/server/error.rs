use std::borrow::Cow;
use std::collections::HashMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

pub type AppResult<T> = Result<T, Error>;

pub type ErrorMap = HashMap<Cow<'static, str>, Vec<Cow<'static, str>>>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("authentication is required to access this resource")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ObjectConflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    InternalServerErrorWithContext(String),
    #[error(transparent)]
    AxumJsonRejection(#[from] JsonRejection),
    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl Error {
    /// maps `validator` failures into the same json shape every other error
    /// uses so clients only ever parse one error schema
    fn unprocessable_entity(errors: ValidationErrors) -> Response {
        let mut validation_errors = ErrorMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .clone()
                        .unwrap_or_else(|| Cow::from(e.code.clone()))
                })
                .collect();
            validation_errors.insert(Cow::from(field.to_string()), messages);
        }

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": validation_errors })),
        )
            .into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::ValidationError(e) = self {
            return Self::unprocessable_entity(e);
        }

        let (status, error_message) = match self {
            Error::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Error::ObjectConflict(_) => (StatusCode::CONFLICT, self.to_string()),
            Error::BadRequest(_) | Error::AxumJsonRejection(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Error::AnyhowError(ref e) => {
                error!("unhandled internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "errors": {
                "message": vec![error_message],
            }
        }));

        (status, body).into_response()
    }
}
