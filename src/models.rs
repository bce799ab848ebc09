// ABOUTME: Domain records and the JSON request/response shapes of the recipe endpoints
// ABOUTME: Re-exports core records and defines RecipeRequest and RecipeResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Models
//!
//! Categories and ingredients travel over the wire as the domain records
//! themselves. Recipes use a flat request shape referencing catalog ids and
//! a flat response shape with ingredient names resolved.

use serde::{Deserialize, Serialize};

pub use receitas_core::models::{Category, EntityKind, Ingredient, Recipe, RecipeIngredient};

/// One ingredient line of a recipe request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientRequest {
    /// Catalog ingredient id
    pub ingrediente_id: i64,
    /// Free-form quantity
    #[serde(default)]
    pub quantidade: Option<String>,
    /// Unit of measure
    #[serde(default)]
    pub unidade: Option<String>,
}

/// Body of `POST`, `PUT` and `PATCH /receitas`
///
/// `tempo_de_preparo` defaults to zero when absent, which is also how a
/// partial update tells "not supplied" apart from a real value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    /// Recipe name
    #[serde(default)]
    pub nome: Option<String>,
    /// Free text
    #[serde(default)]
    pub descricao: Option<String>,
    /// Minutes
    #[serde(default)]
    pub tempo_de_preparo: i32,
    /// Category id
    #[serde(default)]
    pub categoria_id: Option<i64>,
    /// Ingredient lines
    #[serde(default)]
    pub ingredientes: Option<Vec<RecipeIngredientRequest>>,
}

/// Category as embedded in a recipe response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category id
    pub id: Option<i64>,
    /// Category name
    pub nome: String,
}

/// Ingredient line of a recipe response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientResponse {
    /// Catalog ingredient id
    pub ingrediente_id: Option<i64>,
    /// Ingredient name
    pub nome: String,
    /// Free-form quantity
    pub quantidade: Option<String>,
    /// Unit of measure
    pub unidade: Option<String>,
}

/// Flattened recipe returned by every recipe endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    /// Recipe id
    pub id: Option<i64>,
    /// Recipe name
    pub nome: String,
    /// Free text
    pub descricao: Option<String>,
    /// Minutes
    pub tempo_de_preparo: i32,
    /// Owning category, `null` when unset
    pub categoria: Option<CategorySummary>,
    /// Ingredient lines, empty when none
    pub ingredientes: Vec<RecipeIngredientResponse>,
}
