//! Orders API routes
//!
//! This module wires up the orders domain to HTTP routes. Orders need two
//! repositories: their own collection and the product stock they reserve
//! against.

use axum::Router;
use domain_orders::{MongoOrderRepository, OrderService, handlers};
use domain_products::MongoProductRepository;
use tracing::info;

use crate::state::AppState;

/// Create orders router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repositories
    let repository = MongoOrderRepository::new(&state.db);
    let products = MongoProductRepository::new(&state.db);

    // Create the service
    let service = OrderService::new(repository, products);

    // Return the domain's router
    handlers::router(service)
}

/// Initialize order indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoOrderRepository::new(db);
    repository
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create order indexes: {}", e))?;
    info!("Order collection indexes created");
    Ok(())
}
