// ABOUTME: Category route handlers
// ABOUTME: REST endpoints for listing, reading, creating, replacing and deleting categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

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
use crate::{errors::AppError, models::Category, resources::ServerResources};

/// Category routes
pub struct CategoryRoutes;

impl CategoryRoutes {
    /// Create all category routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/categorias", get(Self::handle_list).post(Self::handle_create))
            .route(
                "/categorias/:id",
                get(Self::handle_get)
                    .put(Self::handle_replace)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let categories = resources.categories.list().await?;
        Ok((StatusCode::OK, Json(categories)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let category = resources.categories.get(path_id(path)?).await?;
        Ok((StatusCode::OK, Json(category)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<Category>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let created = resources.categories.create(json_body(payload)?).await?;
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    async fn handle_replace(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
        payload: Result<Json<Category>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id = path_id(path)?;
        let updated = resources
            .categories
            .replace(id, json_body(payload)?)
            .await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        resources.categories.delete(path_id(path)?).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
