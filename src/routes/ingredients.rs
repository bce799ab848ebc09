// ABOUTME: Ingredient route handlers
// ABOUTME: REST endpoints over the ingredient catalog, same shape as the category routes
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
use crate::{errors::AppError, models::Ingredient, resources::ServerResources};

/// Ingredient catalog routes
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/ingredientes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/ingredientes/:id",
                get(Self::handle_get)
                    .put(Self::handle_replace)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let ingredients = resources.ingredients.list().await?;
        Ok((StatusCode::OK, Json(ingredients)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let ingredient = resources.ingredients.get(path_id(path)?).await?;
        Ok((StatusCode::OK, Json(ingredient)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<Ingredient>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let created = resources.ingredients.create(json_body(payload)?).await?;
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    async fn handle_replace(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
        payload: Result<Json<Ingredient>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id = path_id(path)?;
        let updated = resources
            .ingredients
            .replace(id, json_body(payload)?)
            .await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        path: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        resources.ingredients.delete(path_id(path)?).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
