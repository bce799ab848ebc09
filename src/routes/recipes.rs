// ABOUTME: Recipe route handlers
// ABOUTME: REST endpoints for recipes including full replace and partial update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Recipe routes
//!
//! Requests and responses use the flat recipe shapes from
//! [`crate::models`]; the service does all reconciliation.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::{json_body, path_id};
use crate::{errors::AppError, models::RecipeRequest, resources::ServerResources};

/// Recipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/receitas", get(Self::handle_list).post(Self::handle_create))
            .route(
                "/receitas/:id",
                get(Self::handle_get)
                    .put(Self::handle_replace)
                    .patch(Self::handle_partial_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = resources.recipes.list().await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let recipe = resources.recipes.get(path_id(path)?).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RecipeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        let created = resources.recipes.create(&request).await?;
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    async fn handle_replace(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
        payload: Result<Json<RecipeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id = path_id(path)?;
        let request = json_body(payload)?;
        let updated = resources.recipes.replace(id, &request).await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    async fn handle_partial_update(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
        payload: Result<Json<RecipeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id = path_id(path)?;
        let request = json_body(payload)?;
        let updated = resources.recipes.partial_update(id, &request).await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        resources.recipes.delete(path_id(path)?).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
