//! # Error Handling for the CRUD routes
//!
//! Handlers return [`ApiError`], which turns into a JSON body of the form
//! `{"error": "..."}` with the matching status code:
//!
//! - lookup misses become `404 Not Found`
//! - rejected requests keep the status Axum assigned them (400, 415 or 422)
//! - database failures become `500 Internal Server Error`
//!
//! Database error details are logged with `tracing` and never sent to clients.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

const DATABASE_ERROR_MESSAGE: &str = "A database error occurred";

#[derive(Debug)]
pub enum ApiError {
    /// No record of `resource` under `id`.
    NotFound {
        resource: String,
        id: Option<String>,
    },

    /// The client sent something unusable.
    Rejected { status: StatusCode, message: String },

    /// Storage failure. Logged, never exposed.
    Database(DbErr),
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Rejected { status, .. } => *status,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::NotFound {
                resource,
                id: Some(id),
            } => format!("{resource} with ID '{id}' not found"),
            Self::NotFound { resource, id: None } => format!("{resource} not found"),
            Self::Rejected { message, .. } => message.clone(),
            Self::Database(_) => DATABASE_ERROR_MESSAGE.to_string(),
        }
    }

    fn log(&self) {
        match self {
            Self::Database(err) => tracing::error!(error = ?err, "database error"),
            _ => tracing::debug!(
                status = %self.status_code(),
                error = %self.public_message(),
                "request failed"
            ),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.public_message())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(err) => Some(err),
            _ => None,
        }
    }
}

/// `RecordNotFound` and `RecordNotUpdated` become 404, everything else 500.
///
/// `RecordNotUpdated` is what an update reports when the row disappeared
/// between the lookup and the save.
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("record");
                Self::not_found(resource, None)
            }
            DbErr::RecordNotUpdated => Self::not_found("record", None),
            other => Self::Database(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}
