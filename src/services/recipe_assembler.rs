// ABOUTME: Pure translation between recipe requests, Recipe aggregates and recipe responses
// ABOUTME: Resolves ingredient lines against the in-memory catalog and flattens recipes for output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Recipe assembly
//!
//! Ingredient lines are matched against the full catalog passed in by the
//! caller, never looked up one by one. Any line naming an id missing from
//! the catalog aborts assembly before anything reaches the store.

use crate::errors::{AppError, AppResult};
use crate::models::{
    Category, CategorySummary, Ingredient, Recipe, RecipeIngredient, RecipeIngredientRequest,
    RecipeIngredientResponse, RecipeRequest, RecipeResponse,
};

/// Build an unsaved [`Recipe`] from a request, its resolved category and the ingredient catalog
///
/// An absent or empty ingredient list yields an empty association list.
///
/// # Errors
///
/// Returns `INVALID_ARGUMENT` naming the first ingredient id not found in `catalog`
pub fn build_recipe(
    request: &RecipeRequest,
    categoria: Option<Category>,
    catalog: &[Ingredient],
) -> AppResult<Recipe> {
    let receita_ingredientes = request
        .ingredientes
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|line| build_association(line, catalog))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Recipe {
        id: None,
        nome: request.nome.clone().unwrap_or_default(),
        descricao: request.descricao.clone(),
        tempo_de_preparo: request.tempo_de_preparo,
        categoria,
        receita_ingredientes,
    })
}

fn build_association(
    line: &RecipeIngredientRequest,
    catalog: &[Ingredient],
) -> AppResult<RecipeIngredient> {
    let ingredient = catalog
        .iter()
        .find(|candidate| candidate.id == Some(line.ingrediente_id))
        .ok_or_else(|| AppError::ingredient_not_in_catalog(line.ingrediente_id))?;

    Ok(RecipeIngredient {
        id: None,
        recipe_id: None,
        ingredient: ingredient.clone(),
        quantidade: line.quantidade.clone(),
        unidade_medida: line.unidade.clone(),
    })
}

/// Flatten a recipe into the response shape
#[must_use]
pub fn to_response(recipe: &Recipe) -> RecipeResponse {
    RecipeResponse {
        id: recipe.id,
        nome: recipe.nome.clone(),
        descricao: recipe.descricao.clone(),
        tempo_de_preparo: recipe.tempo_de_preparo,
        categoria: recipe.categoria.as_ref().map(|categoria| CategorySummary {
            id: categoria.id,
            nome: categoria.nome.clone(),
        }),
        ingredientes: recipe
            .receita_ingredientes
            .iter()
            .map(|association| RecipeIngredientResponse {
                ingrediente_id: association.ingredient.id,
                nome: association.ingredient.nome.clone(),
                quantidade: association.quantidade.clone(),
                unidade: association.unidade_medida.clone(),
            })
            .collect(),
    }
}
