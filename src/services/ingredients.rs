// ABOUTME: Ingredient catalog business logic: list, get, create, replace and delete
// ABOUTME: Mirrors the category rules with masculine not-found messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use std::sync::Arc;

use tracing::{debug, info};

use super::require_name;
use crate::database::repositories::IngredientRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{EntityKind, Ingredient};

/// Ingredient catalog operations
#[derive(Clone)]
pub struct IngredientService {
    repository: Arc<dyn IngredientRepository>,
}

impl IngredientService {
    /// Create a service over the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn IngredientRepository>) -> Self {
        Self { repository }
    }

    /// The whole catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list(&self) -> AppResult<Vec<Ingredient>> {
        Ok(self.repository.find_all().await?)
    }

    /// Ingredient by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no ingredient has this id
    pub async fn get(&self, id: i64) -> AppResult<Ingredient> {
        debug!(ingredient_id = id, "Fetching ingredient");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(EntityKind::Ingredient, id))
    }

    /// Add an ingredient to the catalog; any client-supplied id is ignored
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a blank name
    pub async fn create(&self, input: Ingredient) -> AppResult<Ingredient> {
        require_name(&input.nome)?;
        let created = self
            .repository
            .save(&Ingredient {
                id: None,
                nome: input.nome,
            })
            .await?;
        info!(ingredient_id = ?created.id, "Ingredient created");
        Ok(created)
    }

    /// Replace an existing ingredient, keeping its id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no ingredient has this id, `INVALID_INPUT` for a blank name
    pub async fn replace(&self, id: i64, input: Ingredient) -> AppResult<Ingredient> {
        let existing = self.get(id).await?;
        require_name(&input.nome)?;
        let updated = self
            .repository
            .save(&Ingredient {
                id: existing.id,
                nome: input.nome,
            })
            .await?;
        info!(ingredient_id = id, "Ingredient replaced");
        Ok(updated)
    }

    /// Remove an ingredient from the catalog
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no ingredient has this id, `RESOURCE_CONFLICT`
    /// if a recipe still uses it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::entity_not_found_for_deletion(
                EntityKind::Ingredient,
                id,
            ));
        }
        self.repository.delete_by_id(id).await?;
        info!(ingredient_id = id, "Ingredient deleted");
        Ok(())
    }
}
