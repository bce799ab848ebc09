// ABOUTME: Unified error handling system with error codes and HTTP status mapping
// ABOUTME: Defines AppError, ErrorCode and the JSON error body shared by every endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! # Unified Error Handling System
//!
//! Every failure the service can report is an [`AppError`] carrying an
//! [`ErrorCode`]. The code alone decides the HTTP status, so services never
//! deal with status codes and handlers never inspect messages.

/// Storage-layer error types
pub mod database;

#[cfg(feature = "http-response")]
mod http;

pub use database::DatabaseError;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::EntityKind;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request payload is malformed or fails field validation
    InvalidInput,
    /// A composite request references a sub-entity that does not exist
    InvalidArgument,
    /// A precondition independent of any single id is violated
    BusinessRuleViolation,
    /// The addressed record does not exist
    ResourceNotFound,
    /// The store refused the change because other records still reference it
    ResourceConflict,
    /// Storage operation failed
    DatabaseError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidArgument | Self::BusinessRuleViolation => 400,
            Self::ResourceNotFound => 404,
            Self::ResourceConflict => 409,
            Self::DatabaseError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidArgument => "The request references an unknown record",
            Self::BusinessRuleViolation => "The operation violates a business rule",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceConflict => "The resource is still referenced by other records",
            Self::DatabaseError => "Database operation failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Record with the given id does not exist
    ///
    /// Produces `"Categoria com ID 7 não encontrada"` style messages.
    #[must_use]
    pub fn entity_not_found(kind: EntityKind, id: i64) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} com ID {id} {}", kind.label(), kind.not_found_suffix()),
        )
    }

    /// Record targeted by a delete does not exist
    #[must_use]
    pub fn entity_not_found_for_deletion(kind: EntityKind, id: i64) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!(
                "{} com ID {id} {} para exclusão",
                kind.label(),
                kind.not_found_suffix()
            ),
        )
    }

    /// Business rule violation
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BusinessRuleViolation, message)
    }

    /// Composite request references a record that does not exist
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// Referenced ingredient is not part of the catalog
    #[must_use]
    pub fn ingredient_not_in_catalog(ingredient_id: i64) -> Self {
        Self::invalid_argument(format!("Ingredient not found: ID {ingredient_id}"))
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing from the request body
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(ErrorCode::InvalidInput, format!("Campo obrigatório ausente: {field}"))
    }

    /// Store refused the change because of remaining references
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceConflict, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
            },
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::ConstraintViolation { ref context } => {
                let message = format!("Registro ainda referenciado: {context}");
                Self::conflict(message).with_source(error)
            }
            other => Self::database(other.to_string()).with_source(other),
        }
    }
}
