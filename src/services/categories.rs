// ABOUTME: Category business logic: list, get, create, replace and delete
// ABOUTME: Enforces existence checks and name validation before touching the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use std::sync::Arc;

use tracing::{debug, info};

use super::require_name;
use crate::database::repositories::CategoryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, EntityKind};

/// Category operations
#[derive(Clone)]
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Create a service over the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// All categories
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.repository.find_all().await?)
    }

    /// Category by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no category has this id
    pub async fn get(&self, id: i64) -> AppResult<Category> {
        debug!(category_id = id, "Fetching category");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(EntityKind::Category, id))
    }

    /// Store a new category; any client-supplied id is ignored
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a blank name
    pub async fn create(&self, input: Category) -> AppResult<Category> {
        require_name(&input.nome)?;
        let created = self
            .repository
            .save(&Category {
                id: None,
                nome: input.nome,
            })
            .await?;
        info!(category_id = ?created.id, "Category created");
        Ok(created)
    }

    /// Replace every field of an existing category, keeping its id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no category has this id, `INVALID_INPUT` for a blank name
    pub async fn replace(&self, id: i64, input: Category) -> AppResult<Category> {
        let existing = self.get(id).await?;
        require_name(&input.nome)?;
        let updated = self
            .repository
            .save(&Category {
                id: existing.id,
                nome: input.nome,
            })
            .await?;
        info!(category_id = id, "Category replaced");
        Ok(updated)
    }

    /// Delete an existing category
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no category has this id, `RESOURCE_CONFLICT`
    /// if recipes still reference it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::entity_not_found_for_deletion(
                EntityKind::Category,
                id,
            ));
        }
        self.repository.delete_by_id(id).await?;
        info!(category_id = id, "Category deleted");
        Ok(())
    }
}
