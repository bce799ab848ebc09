// ABOUTME: Catalog domain records shared by persistence, services and routes
// ABOUTME: Category, Ingredient, Recipe and the RecipeIngredient association
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Domain records.
//!
//! `Category` and `Ingredient` are serialized as-is on the wire. `Recipe` is
//! only ever exposed through the flattened response shape built by the
//! service crate, so its serde derives exist for logging and fixtures.

use serde::{Deserialize, Serialize};

/// Entity families addressed by the API, used to render error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// `categoria`
    Category,
    /// `ingrediente`
    Ingredient,
    /// `receita`
    Recipe,
}

impl EntityKind {
    /// Capitalized Portuguese label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Categoria",
            Self::Ingredient => "Ingrediente",
            Self::Recipe => "Receita",
        }
    }

    /// "não encontrada" or "não encontrado" depending on grammatical gender
    #[must_use]
    pub const fn not_found_suffix(self) -> &'static str {
        match self {
            Self::Category | Self::Recipe => "não encontrada",
            Self::Ingredient => "não encontrado",
        }
    }
}

/// Named grouping for recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier, `None` until persisted
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name
    #[serde(default)]
    pub nome: String,
}

impl Category {
    /// Unsaved category
    pub fn new(nome: impl Into<String>) -> Self {
        Self {
            id: None,
            nome: nome.into(),
        }
    }

    /// Same record carrying the given id
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Named raw material usable in recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Store-assigned identifier, `None` until persisted
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name
    #[serde(default)]
    pub nome: String,
}

impl Ingredient {
    /// Unsaved ingredient
    pub fn new(nome: impl Into<String>) -> Self {
        Self {
            id: None,
            nome: nome.into(),
        }
    }

    /// Same record carrying the given id
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// "This recipe uses this ingredient in this quantity/unit"
///
/// Owned by exactly one [`Recipe`]. `recipe_id` is a back-reference only; the
/// row is created and removed when the owning recipe is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    /// Store-assigned identifier
    pub id: Option<i64>,
    /// Owning recipe, `None` while the recipe itself is unsaved
    pub recipe_id: Option<i64>,
    /// Referenced catalog ingredient
    pub ingredient: Ingredient,
    /// Free-form quantity ("2", "1/2")
    pub quantidade: Option<String>,
    /// Unit of measure ("xícaras", "unidades")
    pub unidade_medida: Option<String>,
}

/// Named dish with prep time, description, one category and its ingredients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Store-assigned identifier
    pub id: Option<i64>,
    /// Display name
    pub nome: String,
    /// Optional free text
    pub descricao: Option<String>,
    /// Minutes
    pub tempo_de_preparo: i32,
    /// Owning category
    pub categoria: Option<Category>,
    /// Ordered association list
    pub receita_ingredientes: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Force the identifier and re-point every association at it
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        for association in &mut self.receita_ingredientes {
            association.recipe_id = Some(id);
        }
        self
    }

    /// Clear the association list and take ownership of `associations`
    pub fn replace_ingredients(&mut self, associations: Vec<RecipeIngredient>) {
        self.receita_ingredientes.clear();
        let owner = self.id;
        self.receita_ingredientes
            .extend(associations.into_iter().map(|mut association| {
                association.recipe_id = owner;
                association
            }));
    }
}
