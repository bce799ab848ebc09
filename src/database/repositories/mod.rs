// ABOUTME: Repository traits for the catalog entities
// ABOUTME: One trait per entity with find_all, find_by_id, save, exists_by_id and delete_by_id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! # Repositories
//!
//! Services depend on these traits only, so tests can swap in in-memory
//! implementations and the SQLite mapping stays in one place per entity.
//!
//! `save` follows upsert semantics: a record without an id is inserted and
//! returned with the id the store assigned; a record with an id replaces
//! the row carrying that id.

/// `CategoryRepository` over SQLite
pub mod category_repository;
/// `IngredientRepository` over SQLite
pub mod ingredient_repository;
/// `RecipeRepository` over SQLite
pub mod recipe_repository;

pub use category_repository::CategoryRepositoryImpl;
pub use ingredient_repository::IngredientRepositoryImpl;
pub use recipe_repository::RecipeRepositoryImpl;

use async_trait::async_trait;

use crate::errors::DatabaseError;
use crate::models::{Category, Ingredient, Recipe};

/// Persistence for [`Category`]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category ordered by id
    async fn find_all(&self) -> Result<Vec<Category>, DatabaseError>;

    /// Category by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DatabaseError>;

    /// Insert or replace
    async fn save(&self, category: &Category) -> Result<Category, DatabaseError>;

    /// Whether a category with this id exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    /// Remove by id
    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;
}

/// Persistence for [`Ingredient`]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// The full catalog ordered by id
    async fn find_all(&self) -> Result<Vec<Ingredient>, DatabaseError>;

    /// Ingredient by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, DatabaseError>;

    /// Insert or replace
    async fn save(&self, ingredient: &Ingredient) -> Result<Ingredient, DatabaseError>;

    /// Whether an ingredient with this id exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    /// Remove by id
    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;
}

/// Persistence for [`Recipe`] and its owned association rows
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Every recipe with category and associations loaded
    async fn find_all(&self) -> Result<Vec<Recipe>, DatabaseError>;

    /// Recipe by id with category and associations loaded
    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, DatabaseError>;

    /// Insert or replace the recipe and rewrite its association rows
    async fn save(&self, recipe: &Recipe) -> Result<Recipe, DatabaseError>;

    /// Whether a recipe with this id exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    /// Remove by id; associations go with it
    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;
}
