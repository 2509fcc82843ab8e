use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The statement matched no row.
    #[error("{0}")]
    NotFound(&'static str),

    /// Store failure caught at the request boundary.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Store failure with no operation-specific handling: bare 500, no body.
    #[error(transparent)]
    Unhandled(#[from] sqlx::Error),
}

impl ApiError {
    /// Tags a store error with the message the client will see.
    pub fn store(message: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| {
            error!("{}: {}", message, source);
            ApiError::Store { message, source }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } | ApiError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound(message) | ApiError::Store { message, .. } => {
                HttpResponse::build(self.status_code()).json(ErrorResponse {
                    error: (*message).to_string(),
                })
            }
            ApiError::Unhandled(source) => {
                error!("Unhandled store error: {}", source);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}
