// ABOUTME: Integration tests for the ingredient service
// ABOUTME: Catalog CRUD rules and masculine not-found messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::InMemoryStore;
use gestor_receitas::errors::ErrorCode;
use gestor_receitas::models::Ingredient;

#[tokio::test]
async fn test_create_and_get_ingredient() {
    let store = InMemoryStore::new();
    let resources = store.resources();

    let created = resources
        .ingredients
        .create(Ingredient::new("Farinha de trigo"))
        .await
        .unwrap();
    let fetched = resources
        .ingredients
        .get(created.id.unwrap())
        .await
        .unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_ingredient_uses_masculine_message() {
    let store = InMemoryStore::new();
    let resources = store.resources();

    let error = resources.ingredients.get(8).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.message, "Ingrediente com ID 8 não encontrado");
}

#[tokio::test]
async fn test_replace_rejects_blank_name_after_existence_check() {
    let store = InMemoryStore::new();
    let seeded = store.ingredients.seed(Ingredient::new("Sal"));
    let resources = store.resources();

    let error = resources
        .ingredients
        .replace(seeded.id.unwrap(), Ingredient::new(""))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(store.ingredients.calls.find_by_id(), 1);
    assert_eq!(store.ingredients.calls.save(), 0);
}

#[tokio::test]
async fn test_replace_keeps_id() {
    let store = InMemoryStore::new();
    let seeded = store.ingredients.seed(Ingredient::new("Açúcar"));
    let id = seeded.id.unwrap();
    let resources = store.resources();

    let updated = resources
        .ingredients
        .replace(id, Ingredient::new("Açúcar mascavo"))
        .await
        .unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.nome, "Açúcar mascavo");
}

#[tokio::test]
async fn test_delete_missing_ingredient() {
    let store = InMemoryStore::new();
    let resources = store.resources();

    let error = resources.ingredients.delete(11).await.unwrap_err();

    assert_eq!(
        error.message,
        "Ingrediente com ID 11 não encontrado para exclusão"
    );
    assert_eq!(store.ingredients.calls.delete_by_id(), 0);
}
