// ABOUTME: SQLite implementation of IngredientRepository
// ABOUTME: Maps the ingrediente table to Ingredient records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use super::IngredientRepository;
use crate::errors::DatabaseError;
use crate::models::Ingredient;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// SQLite implementation of `IngredientRepository`
pub struct IngredientRepositoryImpl {
    pool: SqlitePool,
}

impl IngredientRepositoryImpl {
    /// Create a new repository on the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_ingredient(row: &SqliteRow) -> Result<Ingredient, DatabaseError> {
    Ok(Ingredient {
        id: Some(row.try_get("id")?),
        nome: row.try_get("nome")?,
    })
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Ingredient>, DatabaseError> {
        let rows = sqlx::query("SELECT id, nome FROM ingrediente ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_ingredient).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, DatabaseError> {
        let row = sqlx::query("SELECT id, nome FROM ingrediente WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_ingredient).transpose()
    }

    async fn save(&self, ingredient: &Ingredient) -> Result<Ingredient, DatabaseError> {
        let id = match ingredient.id {
            Some(id) => {
                sqlx::query(
                    r"
                    INSERT INTO ingrediente (id, nome) VALUES ($1, $2)
                    ON CONFLICT(id) DO UPDATE SET nome = excluded.nome
                    ",
                )
                .bind(id)
                .bind(&ingredient.nome)
                .execute(&self.pool)
                .await?;
                id
            }
            None => sqlx::query("INSERT INTO ingrediente (nome) VALUES ($1)")
                .bind(&ingredient.nome)
                .execute(&self.pool)
                .await?
                .last_insert_rowid(),
        };

        Ok(Ingredient {
            id: Some(id),
            nome: ingredient.nome.clone(),
        })
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ingrediente WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM ingrediente WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
