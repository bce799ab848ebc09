// ABOUTME: Shared server resources handed to every route group as axum state
// ABOUTME: Wires repositories into the category, ingredient and recipe services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use std::sync::Arc;

use crate::database::repositories::{
    CategoryRepository, CategoryRepositoryImpl, IngredientRepository, IngredientRepositoryImpl,
    RecipeRepository, RecipeRepositoryImpl,
};
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::services::{CategoryService, IngredientService, RecipeService};

/// Services and handles shared by all requests
pub struct ServerResources {
    /// Category operations
    pub categories: CategoryService,
    /// Ingredient catalog operations
    pub ingredients: IngredientService,
    /// Recipe operations
    pub recipes: RecipeService,
    database: Option<Database>,
}

impl ServerResources {
    /// Build resources backed by the SQLite repositories on `database`
    #[must_use]
    pub fn new(database: Database) -> Self {
        let pool = database.pool().clone();
        let mut resources = Self::from_repositories(
            Arc::new(CategoryRepositoryImpl::new(pool.clone())),
            Arc::new(IngredientRepositoryImpl::new(pool.clone())),
            Arc::new(RecipeRepositoryImpl::new(pool)),
        );
        resources.database = Some(database);
        resources
    }

    /// Build resources over arbitrary repositories
    ///
    /// Without a [`Database`] the readiness check reports the store as reachable.
    #[must_use]
    pub fn from_repositories(
        categories: Arc<dyn CategoryRepository>,
        ingredients: Arc<dyn IngredientRepository>,
        recipes: Arc<dyn RecipeRepository>,
    ) -> Self {
        Self {
            categories: CategoryService::new(Arc::clone(&categories)),
            ingredients: IngredientService::new(Arc::clone(&ingredients)),
            recipes: RecipeService::new(recipes, categories, ingredients),
            database: None,
        }
    }

    /// Round-trip to the store, if one is attached
    ///
    /// # Errors
    ///
    /// Returns an error if the attached database cannot be reached
    pub async fn check_database(&self) -> Result<(), DatabaseError> {
        match &self.database {
            Some(database) => database.ping().await,
            None => Ok(()),
        }
    }
}
