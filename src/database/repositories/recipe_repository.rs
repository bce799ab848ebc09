// ABOUTME: SQLite implementation of RecipeRepository
// ABOUTME: Loads recipes with category and associations, rewrites associations on save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use std::collections::HashMap;

use super::RecipeRepository;
use crate::database::SqliteTransactionGuard;
use crate::errors::DatabaseError;
use crate::models::{Category, Ingredient, Recipe, RecipeIngredient};
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

const SELECT_RECIPES: &str = r"
    SELECT r.id, r.nome, r.descricao, r.tempo_de_preparo, r.categoria_id,
           c.nome AS categoria_nome
    FROM receita r
    LEFT JOIN categoria c ON c.id = r.categoria_id
";

const SELECT_ASSOCIATIONS: &str = r"
    SELECT ri.id, ri.receita_id, ri.ingrediente_id, i.nome AS ingrediente_nome,
           ri.quantidade, ri.unidade_medida
    FROM receita_ingrediente ri
    JOIN ingrediente i ON i.id = ri.ingrediente_id
";

/// SQLite implementation of `RecipeRepository`
pub struct RecipeRepositoryImpl {
    pool: SqlitePool,
}

impl RecipeRepositoryImpl {
    /// Create a new repository on the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Recipe columns only; associations are attached by the caller
fn row_to_recipe(row: &SqliteRow) -> Result<Recipe, DatabaseError> {
    let categoria_id: Option<i64> = row.try_get("categoria_id")?;
    let categoria_nome: Option<String> = row.try_get("categoria_nome")?;

    Ok(Recipe {
        id: Some(row.try_get("id")?),
        nome: row.try_get("nome")?,
        descricao: row.try_get("descricao")?,
        tempo_de_preparo: row.try_get("tempo_de_preparo")?,
        categoria: categoria_id.map(|id| Category {
            id: Some(id),
            nome: categoria_nome.unwrap_or_default(),
        }),
        receita_ingredientes: Vec::new(),
    })
}

fn row_to_association(row: &SqliteRow) -> Result<RecipeIngredient, DatabaseError> {
    Ok(RecipeIngredient {
        id: Some(row.try_get("id")?),
        recipe_id: Some(row.try_get("receita_id")?),
        ingredient: Ingredient {
            id: Some(row.try_get("ingrediente_id")?),
            nome: row.try_get("ingrediente_nome")?,
        },
        quantidade: row.try_get("quantidade")?,
        unidade_medida: row.try_get("unidade_medida")?,
    })
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Recipe>, DatabaseError> {
        let recipe_rows = sqlx::query(&format!("{SELECT_RECIPES} ORDER BY r.id"))
            .fetch_all(&self.pool)
            .await?;
        let association_rows = sqlx::query(&format!("{SELECT_ASSOCIATIONS} ORDER BY ri.id"))
            .fetch_all(&self.pool)
            .await?;

        let mut by_recipe: HashMap<i64, Vec<RecipeIngredient>> = HashMap::new();
        for row in &association_rows {
            let association = row_to_association(row)?;
            if let Some(recipe_id) = association.recipe_id {
                by_recipe.entry(recipe_id).or_default().push(association);
            }
        }

        recipe_rows
            .iter()
            .map(|row| {
                let mut recipe = row_to_recipe(row)?;
                if let Some(associations) = recipe.id.and_then(|id| by_recipe.remove(&id)) {
                    recipe.receita_ingredientes = associations;
                }
                Ok(recipe)
            })
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, DatabaseError> {
        let Some(row) = sqlx::query(&format!("{SELECT_RECIPES} WHERE r.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let mut recipe = row_to_recipe(&row)?;
        let association_rows =
            sqlx::query(&format!("{SELECT_ASSOCIATIONS} WHERE ri.receita_id = $1 ORDER BY ri.id"))
                .bind(id)
                .fetch_all(&self.pool)
                .await?;
        recipe.receita_ingredientes = association_rows
            .iter()
            .map(row_to_association)
            .collect::<Result<_, _>>()?;

        Ok(Some(recipe))
    }

    async fn save(&self, recipe: &Recipe) -> Result<Recipe, DatabaseError> {
        let categoria_id = recipe.categoria.as_ref().and_then(|c| c.id);
        let mut guard = SqliteTransactionGuard::new(self.pool.begin().await?);

        let recipe_id = if let Some(id) = recipe.id {
            sqlx::query(
                r"
                INSERT INTO receita (id, nome, descricao, tempo_de_preparo, categoria_id)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT(id) DO UPDATE SET
                    nome = excluded.nome,
                    descricao = excluded.descricao,
                    tempo_de_preparo = excluded.tempo_de_preparo,
                    categoria_id = excluded.categoria_id
                ",
            )
            .bind(id)
            .bind(&recipe.nome)
            .bind(&recipe.descricao)
            .bind(recipe.tempo_de_preparo)
            .bind(categoria_id)
            .execute(guard.executor()?)
            .await?;
            id
        } else {
            sqlx::query(
                r"
                INSERT INTO receita (nome, descricao, tempo_de_preparo, categoria_id)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(&recipe.nome)
            .bind(&recipe.descricao)
            .bind(recipe.tempo_de_preparo)
            .bind(categoria_id)
            .execute(guard.executor()?)
            .await?
            .last_insert_rowid()
        };

        // Associations not in the current list are orphans
        sqlx::query("DELETE FROM receita_ingrediente WHERE receita_id = $1")
            .bind(recipe_id)
            .execute(guard.executor()?)
            .await?;

        let mut saved = recipe.clone().with_id(recipe_id);
        for association in &mut saved.receita_ingredientes {
            let association_id = sqlx::query(
                r"
                INSERT INTO receita_ingrediente (receita_id, ingrediente_id, quantidade, unidade_medida)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(recipe_id)
            .bind(association.ingredient.id)
            .bind(&association.quantidade)
            .bind(&association.unidade_medida)
            .execute(guard.executor()?)
            .await?
            .last_insert_rowid();
            association.id = Some(association_id);
        }

        guard.commit().await?;
        debug!(
            recipe_id,
            associations = saved.receita_ingredientes.len(),
            "Recipe saved"
        );
        Ok(saved)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM receita WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM receita WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
