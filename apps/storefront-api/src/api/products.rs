//! Products API routes
//!
//! This module wires up the products domain to HTTP routes.

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};
use tracing::info;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoProductRepository::new(&state.db);

    // Create the service
    let service = ProductService::new(repository);

    // Return the domain's router
    handlers::router(service)
}

/// Initialize product indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoProductRepository::new(db);
    repository
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create product indexes: {}", e))?;
    info!("Product collection indexes created");
    Ok(())
}
