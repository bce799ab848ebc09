// ABOUTME: Recipe business logic over the recipe, category and ingredient repositories
// ABOUTME: Orders precondition checks per operation and reconciles ingredient associations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Recipe operations
//!
//! Every check runs before the single `save` call of an operation, so a
//! failed request never writes anything. The order of the checks is part
//! of the observable behavior:
//!
//! | operation | order |
//! |---|---|
//! | create | category, catalog non-empty, assembly, save |
//! | replace | recipe exists, category, catalog, assembly, save |
//! | partial update | recipe exists, scalar fields, category if given, catalog if lines given, save |

use std::sync::Arc;

use tracing::{debug, info};

use super::recipe_assembler::{build_recipe, to_response};
use super::require_name;
use crate::constants::messages::NO_INGREDIENTS_REGISTERED;
use crate::database::repositories::{CategoryRepository, IngredientRepository, RecipeRepository};
use crate::errors::{AppError, AppResult};
use crate::models::{Category, EntityKind, Recipe, RecipeRequest, RecipeResponse};

/// Recipe operations
#[derive(Clone)]
pub struct RecipeService {
    recipes: Arc<dyn RecipeRepository>,
    categories: Arc<dyn CategoryRepository>,
    ingredients: Arc<dyn IngredientRepository>,
}

impl RecipeService {
    /// Create a service over the three repositories
    #[must_use]
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        categories: Arc<dyn CategoryRepository>,
        ingredients: Arc<dyn IngredientRepository>,
    ) -> Self {
        Self {
            recipes,
            categories,
            ingredients,
        }
    }

    /// Every recipe, flattened
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list(&self) -> AppResult<Vec<RecipeResponse>> {
        let recipes = self.recipes.find_all().await?;
        Ok(recipes.iter().map(to_response).collect())
    }

    /// Recipe by id, flattened
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no recipe has this id
    pub async fn get(&self, id: i64) -> AppResult<RecipeResponse> {
        debug!(recipe_id = id, "Fetching recipe");
        let recipe = self.find_existing(id).await?;
        Ok(to_response(&recipe))
    }

    /// Create a recipe from a request
    ///
    /// The catalog must hold at least one ingredient even when the request
    /// lists none.
    ///
    /// # Errors
    ///
    /// - `INVALID_INPUT` without `categoriaId` or with a blank `nome`
    /// - `RESOURCE_NOT_FOUND` for an unknown category
    /// - `BUSINESS_RULE_VIOLATION` when the catalog is empty
    /// - `INVALID_ARGUMENT` for an ingredient line outside the catalog
    pub async fn create(&self, request: &RecipeRequest) -> AppResult<RecipeResponse> {
        let categoria_id = required_category_id(request)?;
        let categoria = self.resolve_category(categoria_id).await?;

        let catalog = self.ingredients.find_all().await?;
        if catalog.is_empty() {
            return Err(AppError::business_rule(NO_INGREDIENTS_REGISTERED));
        }

        let recipe = build_recipe(request, Some(categoria), &catalog)?;
        require_name(&recipe.nome)?;

        let saved = self.recipes.save(&recipe).await?;
        info!(
            recipe_id = ?saved.id,
            ingredients = saved.receita_ingredientes.len(),
            "Recipe created"
        );
        Ok(to_response(&saved))
    }

    /// Replace a recipe entirely, keeping its id
    ///
    /// Fields absent from the request are reset, not carried over.
    ///
    /// # Errors
    ///
    /// - `RESOURCE_NOT_FOUND` for an unknown recipe, checked first, or an unknown category
    /// - `INVALID_INPUT` without `categoriaId` or with a blank `nome`
    /// - `INVALID_ARGUMENT` for an ingredient line outside the catalog
    pub async fn replace(&self, id: i64, request: &RecipeRequest) -> AppResult<RecipeResponse> {
        let existing = self.find_existing(id).await?;
        let categoria_id = required_category_id(request)?;
        let categoria = self.resolve_category(categoria_id).await?;
        let catalog = self.ingredients.find_all().await?;

        let mut recipe = build_recipe(request, Some(categoria), &catalog)?;
        if let Some(existing_id) = existing.id {
            recipe = recipe.with_id(existing_id);
        }
        require_name(&recipe.nome)?;

        let saved = self.recipes.save(&recipe).await?;
        info!(recipe_id = id, "Recipe replaced");
        Ok(to_response(&saved))
    }

    /// Overwrite only the supplied fields of a recipe
    ///
    /// `tempoDePreparo` is applied only when greater than zero. A non-empty
    /// ingredient list replaces every existing association, assembled against
    /// the recipe's category after any category change in the same request.
    ///
    /// # Errors
    ///
    /// - `RESOURCE_NOT_FOUND` for an unknown recipe or category
    /// - `INVALID_ARGUMENT` for an ingredient line outside the catalog
    pub async fn partial_update(
        &self,
        id: i64,
        request: &RecipeRequest,
    ) -> AppResult<RecipeResponse> {
        let mut recipe = self.find_existing(id).await?;

        if let Some(nome) = &request.nome {
            recipe.nome.clone_from(nome);
        }
        if let Some(descricao) = &request.descricao {
            recipe.descricao = Some(descricao.clone());
        }
        if request.tempo_de_preparo > 0 {
            recipe.tempo_de_preparo = request.tempo_de_preparo;
        }
        if let Some(categoria_id) = request.categoria_id {
            recipe.categoria = Some(self.resolve_category(categoria_id).await?);
        }

        if let Some(lines) = request.ingredientes.as_ref().filter(|lines| !lines.is_empty()) {
            let catalog = self.ingredients.find_all().await?;
            let lines_only = RecipeRequest {
                ingredientes: Some(lines.clone()),
                ..RecipeRequest::default()
            };
            let assembled = build_recipe(&lines_only, recipe.categoria.clone(), &catalog)?;
            recipe.replace_ingredients(assembled.receita_ingredientes);
        }

        let saved = self.recipes.save(&recipe).await?;
        info!(recipe_id = id, "Recipe partially updated");
        Ok(to_response(&saved))
    }

    /// Delete a recipe and its associations
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no recipe has this id
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.recipes.exists_by_id(id).await? {
            return Err(AppError::entity_not_found_for_deletion(EntityKind::Recipe, id));
        }
        self.recipes.delete_by_id(id).await?;
        info!(recipe_id = id, "Recipe deleted");
        Ok(())
    }

    async fn find_existing(&self, id: i64) -> AppResult<Recipe> {
        self.recipes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(EntityKind::Recipe, id))
    }

    async fn resolve_category(&self, id: i64) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(EntityKind::Category, id))
    }
}

fn required_category_id(request: &RecipeRequest) -> AppResult<i64> {
    request
        .categoria_id
        .ok_or_else(|| AppError::missing_field("categoriaId"))
}
