//! Categories API routes
//!
//! This module wires up the categories domain to HTTP routes.

use axum::Router;
use domain_categories::{CategoryService, MongoCategoryRepository, handlers};
use tracing::info;

use crate::state::AppState;

/// Create categories router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoCategoryRepository::new(&state.db);

    // Create the service
    let service = CategoryService::new(repository);

    // Return the domain's router
    handlers::router(service)
}

/// Initialize category indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoCategoryRepository::new(db);
    repository
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create category indexes: {}", e))?;
    info!("Category collection indexes created");
    Ok(())
}
