//! Server error types with HTTP status code mapping

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use fallbacks_lib::TemplateError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Template lookup or validation failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Client exceeded its request quota
    #[error("Too many requests. Please try again later.")]
    RateLimited,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    RouteNotFound,

    /// Unexpected failure; the detail is logged, not returned
    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    status: u16,
}

impl ServerError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Template(err) => match err {
                TemplateError::MissingPath | TemplateError::InvalidPath(_) => {
                    StatusCode::BAD_REQUEST
                }
                TemplateError::OutsideRoot(_) | TemplateError::PermissionDenied(_) => {
                    StatusCode::FORBIDDEN
                }
                TemplateError::NotFound(_) => StatusCode::NOT_FOUND,
                TemplateError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                TemplateError::Empty | TemplateError::NotSource => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                TemplateError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::RouteNotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client. Server-side failures stay generic.
    fn public_message(&self) -> String {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = Json(ErrorResponse {
            error: self.public_message(),
            status: status.as_u16(),
        });

        match self {
            ServerError::MethodNotAllowed => {
                (status, [(header::ALLOW, "GET")], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}
