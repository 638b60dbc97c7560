// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// No resolved user identity on the request.
  #[error("Authentication Failed: {0}")]
  Auth(String),

  /// Recognized action, but the payload is missing or malformed.
  #[error("Invalid Input: {0}")]
  InvalidInput(String),

  /// The action itself is not recognized.
  #[error("Invalid Request: {0}")]
  InvalidRequest(String),

  #[error("Method Not Allowed")]
  MethodNotAllowed,

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::InvalidInput(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::InvalidRequest(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::MethodNotAllowed => HttpResponse::MethodNotAllowed().json(json!({"error": "Method not allowed"})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      // Never echo query/constraint detail across the API boundary.
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
