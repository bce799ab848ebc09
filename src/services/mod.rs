// ABOUTME: Domain service layer between the HTTP routes and the repositories
// ABOUTME: Category, ingredient and recipe services plus the recipe assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Domain service layer
//!
//! Services hold repository trait objects and return [`AppResult`], so the
//! routes only deal with extraction and status codes.

/// Category operations
pub mod categories;

/// Ingredient catalog operations
pub mod ingredients;

/// Request/aggregate/response translation for recipes
pub mod recipe_assembler;

/// Recipe operations and ingredient reconciliation
pub mod recipes;

pub use categories::CategoryService;
pub use ingredients::IngredientService;
pub use recipes::RecipeService;

use crate::constants::messages::BLANK_NAME;
use crate::errors::{AppError, AppResult};

/// Reject names that are empty or whitespace only
pub(crate) fn require_name(nome: &str) -> AppResult<()> {
    if nome.trim().is_empty() {
        return Err(AppError::invalid_input(BLANK_NAME));
    }
    Ok(())
}
