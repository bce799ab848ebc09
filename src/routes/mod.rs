// ABOUTME: Route module organization for the recipe catalog HTTP endpoints
// ABOUTME: One route group per entity plus health checks, and shared extractor error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! HTTP routes
//!
//! Each group builds its own `Router` with [`ServerResources`] as state and
//! keeps handlers thin: extract, call the service, pick the status code.
//!
//! [`ServerResources`]: crate::resources::ServerResources

/// `/categorias`
pub mod categories;
/// `/health` and `/ready`
pub mod health;
/// `/ingredientes`
pub mod ingredients;
/// `/receitas`
pub mod recipes;

pub use categories::CategoryRoutes;
pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use recipes::RecipeRoutes;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;

use crate::errors::{AppError, AppResult};

/// Unwrap a JSON body, turning malformed payloads into `INVALID_INPUT`
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Unwrap a numeric path id, turning garbage into `INVALID_INPUT`
pub(crate) fn path_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
