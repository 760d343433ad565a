//! Integration tests for Products domain
//!
//! These tests use real MongoDB via testcontainers to ensure:
//! - Documents round-trip through the driver correctly
//! - Pagination and search behave as specified
//! - The conditional stock decrement is atomic under concurrency

use std::sync::Arc;

use domain_products::*;
use test_utils::{assertions::*, TestDataBuilder, TestMongo};
use uuid::Uuid;

fn create_input(builder: &TestDataBuilder, suffix: &str, qty: i32) -> CreateProduct {
    CreateProduct {
        name: builder.name("product", suffix),
        description: "Integration test product".to_string(),
        images: vec!["https://cdn.example.com/p.jpg".to_string()],
        price: 19.99,
        qty,
        category_id: builder.user_id(),
    }
}

#[tokio::test]
async fn test_create_and_get_product() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_create_get"));
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = create_input(&builder, "main", 10);
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.name, input.name);
    assert_eq!(created.qty, 10);
    assert_eq!(created.price, 19.99);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");

    assert_uuid_eq(retrieved.id, created.id, "retrieved product id");
    assert_eq!(retrieved.images, created.images);
}

#[tokio::test]
async fn test_list_products_paginates() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_pagination"));
    let builder = TestDataBuilder::from_test_name("pagination");

    for i in 0..25 {
        repo.create(create_input(&builder, &format!("p{:02}", i), 5))
            .await
            .unwrap();
    }

    let page = repo
        .list(ProductListQuery {
            limit: 10,
            page: 3,
            search: String::new(),
        })
        .await
        .unwrap();
    let total = repo.count("").await.unwrap();

    assert_eq!(page.len(), 5, "third page of 25 at limit 10 has 5 items");
    assert_eq!(total, 25);
}

#[tokio::test]
async fn test_list_products_search_is_case_insensitive() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_search"));
    let builder = TestDataBuilder::from_test_name("search");

    let mut keyboard = create_input(&builder, "kb", 5);
    keyboard.name = "Mechanical Keyboard".to_string();
    repo.create(keyboard).await.unwrap();

    let mut mouse = create_input(&builder, "mouse", 5);
    mouse.name = "Wireless Mouse".to_string();
    repo.create(mouse).await.unwrap();

    let hits = repo
        .list(ProductListQuery {
            limit: 10,
            page: 1,
            search: "KEYBOARD".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Mechanical Keyboard");
    assert_eq!(repo.count("keyboard").await.unwrap(), 1);
}

#[tokio::test]
async fn test_reserve_stock_returns_pre_image() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_reserve"));
    let builder = TestDataBuilder::from_test_name("reserve_pre_image");

    let created = repo.create(create_input(&builder, "main", 10)).await.unwrap();

    let before = repo.reserve_stock(created.id, 3).await.unwrap();
    assert_eq!(before.qty, 10, "reserve returns the pre-decrement document");

    let after = assert_some(
        repo.get_by_id(created.id).await.unwrap(),
        "product should exist",
    );
    assert_eq!(after.qty, 7);
}

#[tokio::test]
async fn test_reserve_stock_insufficient_changes_nothing() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_insufficient"));
    let builder = TestDataBuilder::from_test_name("reserve_insufficient");

    let created = repo.create(create_input(&builder, "main", 2)).await.unwrap();

    let result = repo.reserve_stock(created.id, 5).await;
    match result {
        Err(ProductError::InsufficientStock {
            name,
            available,
            requested,
        }) => {
            assert_eq!(name, created.name);
            assert_eq!(available, 2);
            assert_eq!(requested, 5);
        }
        other => panic!("expected InsufficientStock, got {:?}", other.map(|p| p.qty)),
    }

    let after = assert_some(
        repo.get_by_id(created.id).await.unwrap(),
        "product should exist",
    );
    assert_eq!(after.qty, 2, "failed reservation must not touch qty");
}

#[tokio::test]
async fn test_reserve_stock_missing_product() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_reserve_missing"));

    let result = repo.reserve_stock(Uuid::now_v7(), 1).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));
}

#[tokio::test]
async fn test_release_stock_restores_quantity() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_release"));
    let builder = TestDataBuilder::from_test_name("release_stock");

    let created = repo.create(create_input(&builder, "main", 10)).await.unwrap();

    repo.reserve_stock(created.id, 4).await.unwrap();
    repo.release_stock(created.id, 4).await.unwrap();

    let after = assert_some(
        repo.get_by_id(created.id).await.unwrap(),
        "product should exist",
    );
    assert_eq!(after.qty, 10);
}

#[tokio::test]
async fn test_concurrent_reservations_never_oversell() {
    let mongo = TestMongo::new().await;
    let repo = Arc::new(MongoProductRepository::new(
        &mongo.database("products_concurrency"),
    ));
    let builder = TestDataBuilder::from_test_name("concurrent_reserve");

    let created = repo.create(create_input(&builder, "main", 3)).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = Arc::clone(&repo);
        let id = created.id;
        handles.push(tokio::spawn(async move { repo.reserve_stock(id, 1).await }));
    }

    let mut succeeded = 0;
    let mut insufficient = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(ProductError::InsufficientStock { .. }) => insufficient += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(succeeded, 3, "exactly the available quantity succeeds");
    assert_eq!(insufficient, 5);

    let after = assert_some(
        repo.get_by_id(created.id).await.unwrap(),
        "product should exist",
    );
    assert_eq!(after.qty, 0, "stock drained exactly to zero");
}

#[tokio::test]
async fn test_update_product_changes_fields() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_update"));
    let builder = TestDataBuilder::from_test_name("update_product");

    let created = repo.create(create_input(&builder, "main", 10)).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateProduct {
                price: Some(9.99),
                qty: Some(42),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 9.99);
    assert_eq!(updated.qty, 42);
    assert_eq!(updated.name, created.name);
}

#[tokio::test]
async fn test_delete_product_removes_document() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("products_delete"));
    let builder = TestDataBuilder::from_test_name("delete_product");

    let created = repo.create(create_input(&builder, "doomed", 1)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());

    let result = repo.delete(created.id).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));
}
