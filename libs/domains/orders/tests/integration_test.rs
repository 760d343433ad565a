//! Integration tests for Orders domain
//!
//! These tests use real MongoDB via testcontainers to ensure:
//! - Placing an order persists the document and decrements stock
//! - Concurrent orders never take more units than are on hand
//! - Failed orders release every reservation they took
//! - History pagination, search and per-user scoping behave as specified

use domain_orders::*;
use domain_products::{CreateProduct, MongoProductRepository, Product, ProductRepository};
use test_utils::{assertions::*, TestDataBuilder, TestMongo};
use uuid::Uuid;

async fn build_service(
    mongo: &TestMongo,
    db_name: &str,
) -> (
    OrderService<MongoOrderRepository, MongoProductRepository>,
    MongoProductRepository,
) {
    let db = mongo.database(db_name);
    let service = OrderService::new(MongoOrderRepository::new(&db), MongoProductRepository::new(&db));
    (service, MongoProductRepository::new(&db))
}

async fn seed_product(
    products: &MongoProductRepository,
    builder: &TestDataBuilder,
    suffix: &str,
    price: f64,
    qty: i32,
) -> Product {
    products
        .create(CreateProduct {
            name: builder.name("product", suffix),
            description: "Integration test product".to_string(),
            images: vec!["https://cdn.example.com/p.jpg".to_string()],
            price,
            qty,
            category_id: builder.user_id(),
        })
        .await
        .unwrap()
}

fn one_line(product_id: Uuid, qty: i32) -> CreateOrderRequest {
    CreateOrderRequest {
        order_items: vec![OrderItemRequest { product_id, qty }],
    }
}

#[tokio::test]
async fn test_place_order_persists_and_decrements_stock() {
    let mongo = TestMongo::new().await;
    let (service, products) = build_service(&mongo, "orders_place").await;
    let builder = TestDataBuilder::from_test_name("place_order");

    let keyboard = seed_product(&products, &builder, "keyboard", 129.99, 10).await;
    let mouse = seed_product(&products, &builder, "mouse", 49.50, 4).await;

    let order = service
        .place_order(
            "buyer-1",
            CreateOrderRequest {
                order_items: vec![
                    OrderItemRequest {
                        product_id: keyboard.id,
                        qty: 2,
                    },
                    OrderItemRequest {
                        product_id: mouse.id,
                        qty: 1,
                    },
                ],
            },
        )
        .await
        .unwrap();

    assert_eq!(order.order_items.len(), 2);
    assert_eq!(order.order_items[0].name, keyboard.name);
    assert_eq!(order.order_items[0].price, 129.99);
    assert!((order.grand_total - 309.48).abs() < 1e-9);
    assert_eq!(order.status, OrderStatus::Pending);

    let keyboard_after = assert_some(
        products.get_by_id(keyboard.id).await.unwrap(),
        "keyboard should exist",
    );
    let mouse_after = assert_some(
        products.get_by_id(mouse.id).await.unwrap(),
        "mouse should exist",
    );
    assert_eq!(keyboard_after.qty, 8);
    assert_eq!(mouse_after.qty, 3);

    let (history, total) = service
        .order_history("buyer-1", OrderHistoryQuery::default())
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_uuid_eq(history[0].id, order.id, "persisted order id");
}

#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let mongo = TestMongo::new().await;
    let (service, products) = build_service(&mongo, "orders_concurrency").await;
    let builder = TestDataBuilder::from_test_name("concurrent_orders");

    let scarce = seed_product(&products, &builder, "scarce", 9.99, 3).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let service = service.clone();
        let product_id = scarce.id;
        handles.push(tokio::spawn(async move {
            service
                .place_order(&format!("buyer-{i}"), one_line(product_id, 1))
                .await
        }));
    }

    let mut succeeded = 0;
    let mut insufficient = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(OrderError::InsufficientStock(_)) => insufficient += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(succeeded, 3, "exactly the available quantity succeeds");
    assert_eq!(insufficient, 5);

    let after = assert_some(
        products.get_by_id(scarce.id).await.unwrap(),
        "product should exist",
    );
    assert_eq!(after.qty, 0, "stock drained exactly to zero");
}

#[tokio::test]
async fn test_failed_order_rolls_back_all_reservations() {
    let mongo = TestMongo::new().await;
    let (service, products) = build_service(&mongo, "orders_rollback").await;
    let builder = TestDataBuilder::from_test_name("rollback");

    let plenty = seed_product(&products, &builder, "plenty", 10.00, 5).await;
    let scarce = seed_product(&products, &builder, "scarce", 20.00, 1).await;

    let result = service
        .place_order(
            "buyer-1",
            CreateOrderRequest {
                order_items: vec![
                    OrderItemRequest {
                        product_id: plenty.id,
                        qty: 2,
                    },
                    OrderItemRequest {
                        product_id: scarce.id,
                        qty: 3,
                    },
                ],
            },
        )
        .await;

    assert!(
        matches!(result, Err(OrderError::InsufficientStock(ref name)) if *name == scarce.name)
    );

    // The first line's reservation was released again
    let plenty_after = assert_some(
        products.get_by_id(plenty.id).await.unwrap(),
        "product should exist",
    );
    let scarce_after = assert_some(
        products.get_by_id(scarce.id).await.unwrap(),
        "product should exist",
    );
    assert_eq!(plenty_after.qty, 5);
    assert_eq!(scarce_after.qty, 1);

    // And no order document was written
    let (_, total) = service
        .order_history("buyer-1", OrderHistoryQuery::default())
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_order_history_paginates() {
    let mongo = TestMongo::new().await;
    let (service, products) = build_service(&mongo, "orders_pagination").await;
    let builder = TestDataBuilder::from_test_name("order_pagination");

    let bulk = seed_product(&products, &builder, "bulk", 2.50, 30).await;
    for _ in 0..25 {
        service
            .place_order("pager", one_line(bulk.id, 1))
            .await
            .unwrap();
    }

    let (page, total) = service
        .order_history(
            "pager",
            OrderHistoryQuery {
                limit: 10,
                page: 3,
                search: String::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(total, 25);
    assert_eq!(page.len(), 5, "third page holds the remainder");
}

#[tokio::test]
async fn test_order_history_sorted_newest_first() {
    let mongo = TestMongo::new().await;
    let (service, products) = build_service(&mongo, "orders_sorting").await;
    let builder = TestDataBuilder::from_test_name("order_sorting");

    let bulk = seed_product(&products, &builder, "bulk", 2.50, 10).await;
    let mut placed = Vec::new();
    for _ in 0..3 {
        placed.push(
            service
                .place_order("sorter", one_line(bulk.id, 1))
                .await
                .unwrap(),
        );
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (history, _) = service
        .order_history("sorter", OrderHistoryQuery::default())
        .await
        .unwrap();

    assert_eq!(history.len(), 3);
    assert_uuid_eq(history[0].id, placed[2].id, "newest order first");
    assert_uuid_eq(history[2].id, placed[0].id, "oldest order last");
}

#[tokio::test]
async fn test_order_history_search_matches_item_name_and_status() {
    let mongo = TestMongo::new().await;
    let (service, products) = build_service(&mongo, "orders_search").await;
    let builder = TestDataBuilder::from_test_name("order_search");

    let keyboard = seed_product(&products, &builder, "keyboard", 129.99, 5).await;
    let mouse = seed_product(&products, &builder, "mouse", 49.50, 5).await;
    service
        .place_order("searcher", one_line(keyboard.id, 1))
        .await
        .unwrap();
    service
        .place_order("searcher", one_line(mouse.id, 1))
        .await
        .unwrap();

    // Case-insensitive match against the snapshotted item name
    let (by_name, total_by_name) = service
        .order_history(
            "searcher",
            OrderHistoryQuery {
                limit: 10,
                page: 1,
                search: "KEYBOARD".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(total_by_name, 1);
    assert_eq!(by_name[0].order_items[0].name, keyboard.name);

    // Status text matches too, and both orders are still pending
    let (_, total_by_status) = service
        .order_history(
            "searcher",
            OrderHistoryQuery {
                limit: 10,
                page: 1,
                search: "PEND".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(total_by_status, 2);

    let (_, total_no_match) = service
        .order_history(
            "searcher",
            OrderHistoryQuery {
                limit: 10,
                page: 1,
                search: "cancelled".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(total_no_match, 0);
}

#[tokio::test]
async fn test_order_history_scopes_to_user() {
    let mongo = TestMongo::new().await;
    let (service, products) = build_service(&mongo, "orders_scoping").await;
    let builder = TestDataBuilder::from_test_name("order_scoping");

    let shared = seed_product(&products, &builder, "shared", 5.00, 10).await;
    service
        .place_order("user-a", one_line(shared.id, 1))
        .await
        .unwrap();
    service
        .place_order("user-a", one_line(shared.id, 1))
        .await
        .unwrap();
    service
        .place_order("user-b", one_line(shared.id, 1))
        .await
        .unwrap();

    let (for_a, total_a) = service
        .order_history("user-a", OrderHistoryQuery::default())
        .await
        .unwrap();
    let (for_b, total_b) = service
        .order_history("user-b", OrderHistoryQuery::default())
        .await
        .unwrap();

    assert_eq!(total_a, 2);
    assert_eq!(total_b, 1);
    assert!(for_a.iter().all(|order| order.created_by == "user-a"));
    assert!(for_b.iter().all(|order| order.created_by == "user-b"));
}

#[tokio::test]
async fn test_init_indexes_is_idempotent() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("orders_indexes");
    let repo = MongoOrderRepository::new(&db);

    repo.init_indexes().await.unwrap();
    repo.init_indexes().await.unwrap();

    let count = repo.count_by_user("nobody", "").await.unwrap();
    assert_eq!(count, 0);
}
