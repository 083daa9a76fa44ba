// server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use product_db::{ApiError, Envelope};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error(transparent)]
  Api(#[from] ApiError),

  #[error("Invalid request body: {0}")]
  Payload(String),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Api(ApiError::Validation(_))
      | AppError::Api(ApiError::InvalidIdentifier(_))
      | AppError::Api(ApiError::Duplicate(_))
      | AppError::Payload(_) => StatusCode::BAD_REQUEST,
      AppError::Api(ApiError::NotFound(_)) => StatusCode::NOT_FOUND,
      AppError::Api(ApiError::Store(_)) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();

    // Log the full error when it's turned into a response; the body only ever
    // carries the public message.
    let message = match self {
      AppError::Api(api_error) => api_error.public_message(),
      AppError::Payload(_) => self.to_string(),
      AppError::Config(_) => "Internal error".to_string(),
    };
    if let AppError::Api(ApiError::Store(_)) = self {
      // Already logged in full where the store call failed.
      tracing::debug!(application_error = %self, "Responding with store error");
    } else if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Rejecting request");
    }

    HttpResponse::build(status).json(Envelope::error(message))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
