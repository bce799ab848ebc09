// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, SQLite test databases and in-memory recording repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::unwrap_used
)]
//! Shared test utilities for `gestor_receitas`
//!
//! The in-memory repositories count calls so tests can assert that a
//! rejected request never reached `save` or a particular lookup.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use anyhow::Result;
use async_trait::async_trait;
use gestor_receitas::{
    database::{
        repositories::{CategoryRepository, IngredientRepository, RecipeRepository},
        Database,
    },
    errors::DatabaseError,
    models::{Category, Ingredient, Recipe},
    resources::ServerResources,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory SQLite database with the schema applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Per-method call counters
#[derive(Debug, Default)]
pub struct CallCounts {
    pub find_all: AtomicUsize,
    pub find_by_id: AtomicUsize,
    pub save: AtomicUsize,
    pub exists_by_id: AtomicUsize,
    pub delete_by_id: AtomicUsize,
}

impl CallCounts {
    pub fn find_all(&self) -> usize {
        self.find_all.load(Ordering::SeqCst)
    }

    pub fn find_by_id(&self) -> usize {
        self.find_by_id.load(Ordering::SeqCst)
    }

    pub fn save(&self) -> usize {
        self.save.load(Ordering::SeqCst)
    }

    pub fn delete_by_id(&self) -> usize {
        self.delete_by_id.load(Ordering::SeqCst)
    }

    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// Ordered in-memory table assigning ids from 1
#[derive(Debug)]
struct Table<T> {
    rows: Mutex<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn all(&self) -> Vec<T> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn contains(&self, id: i64) -> bool {
        self.rows.lock().unwrap().contains_key(&id)
    }

    fn remove(&self, id: i64) {
        self.rows.lock().unwrap().remove(&id);
    }

    fn assign_id(&self, id: Option<i64>) -> i64 {
        match id {
            Some(id) => {
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        }
    }

    fn put(&self, id: i64, row: T) {
        self.rows.lock().unwrap().insert(id, row);
    }
}

/// In-memory `CategoryRepository` counting calls
pub struct InMemoryCategoryRepository {
    table: Table<Category>,
    pub calls: CallCounts,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
            calls: CallCounts::default(),
        }
    }

    /// Insert a fixture row without counting it as a `save`
    pub fn seed(&self, category: Category) -> Category {
        let id = self.table.assign_id(category.id);
        let stored = category.with_id(id);
        self.table.put(id, stored.clone());
        stored
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DatabaseError> {
        CallCounts::bump(&self.calls.find_all);
        Ok(self.table.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DatabaseError> {
        CallCounts::bump(&self.calls.find_by_id);
        Ok(self.table.get(id))
    }

    async fn save(&self, category: &Category) -> Result<Category, DatabaseError> {
        CallCounts::bump(&self.calls.save);
        let id = self.table.assign_id(category.id);
        let stored = category.clone().with_id(id);
        self.table.put(id, stored.clone());
        Ok(stored)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        CallCounts::bump(&self.calls.exists_by_id);
        Ok(self.table.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        CallCounts::bump(&self.calls.delete_by_id);
        self.table.remove(id);
        Ok(())
    }
}

/// In-memory `IngredientRepository` counting calls
pub struct InMemoryIngredientRepository {
    table: Table<Ingredient>,
    pub calls: CallCounts,
}

impl InMemoryIngredientRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
            calls: CallCounts::default(),
        }
    }

    /// Insert a fixture row without counting it as a `save`
    pub fn seed(&self, ingredient: Ingredient) -> Ingredient {
        let id = self.table.assign_id(ingredient.id);
        let stored = ingredient.with_id(id);
        self.table.put(id, stored.clone());
        stored
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn find_all(&self) -> Result<Vec<Ingredient>, DatabaseError> {
        CallCounts::bump(&self.calls.find_all);
        Ok(self.table.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, DatabaseError> {
        CallCounts::bump(&self.calls.find_by_id);
        Ok(self.table.get(id))
    }

    async fn save(&self, ingredient: &Ingredient) -> Result<Ingredient, DatabaseError> {
        CallCounts::bump(&self.calls.save);
        let id = self.table.assign_id(ingredient.id);
        let stored = ingredient.clone().with_id(id);
        self.table.put(id, stored.clone());
        Ok(stored)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        CallCounts::bump(&self.calls.exists_by_id);
        Ok(self.table.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        CallCounts::bump(&self.calls.delete_by_id);
        self.table.remove(id);
        Ok(())
    }
}

/// In-memory `RecipeRepository` counting calls
pub struct InMemoryRecipeRepository {
    table: Table<Recipe>,
    pub calls: CallCounts,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
            calls: CallCounts::default(),
        }
    }

    /// Insert a fixture row without counting it as a `save`
    pub fn seed(&self, recipe: Recipe) -> Recipe {
        let id = self.table.assign_id(recipe.id);
        let stored = recipe.with_id(id);
        self.table.put(id, stored.clone());
        stored
    }

    /// Stored row, bypassing the counters
    pub fn stored(&self, id: i64) -> Option<Recipe> {
        self.table.get(id)
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn find_all(&self) -> Result<Vec<Recipe>, DatabaseError> {
        CallCounts::bump(&self.calls.find_all);
        Ok(self.table.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, DatabaseError> {
        CallCounts::bump(&self.calls.find_by_id);
        Ok(self.table.get(id))
    }

    async fn save(&self, recipe: &Recipe) -> Result<Recipe, DatabaseError> {
        CallCounts::bump(&self.calls.save);
        let id = self.table.assign_id(recipe.id);
        let stored = recipe.clone().with_id(id);
        self.table.put(id, stored.clone());
        Ok(stored)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        CallCounts::bump(&self.calls.exists_by_id);
        Ok(self.table.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        CallCounts::bump(&self.calls.delete_by_id);
        self.table.remove(id);
        Ok(())
    }
}

/// The three in-memory repositories wired together
pub struct InMemoryStore {
    pub categories: Arc<InMemoryCategoryRepository>,
    pub ingredients: Arc<InMemoryIngredientRepository>,
    pub recipes: Arc<InMemoryRecipeRepository>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        init_test_logging();
        Self {
            categories: Arc::new(InMemoryCategoryRepository::new()),
            ingredients: Arc::new(InMemoryIngredientRepository::new()),
            recipes: Arc::new(InMemoryRecipeRepository::new()),
        }
    }

    /// Server resources over these repositories
    pub fn resources(&self) -> Arc<ServerResources> {
        Arc::new(ServerResources::from_repositories(
            self.categories.clone(),
            self.ingredients.clone(),
            self.recipes.clone(),
        ))
    }
}
