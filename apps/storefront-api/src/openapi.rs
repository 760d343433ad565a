//! OpenAPI documentation configuration

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "MongoDB-based REST API for the storefront: catalog, categories and orders",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api/categories", api = domain_categories::ApiDoc),
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/orders", api = domain_orders::ApiDoc)
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Categories", description = "Category management endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Orders", description = "Order placement and history endpoints")
    )
)]
pub struct ApiDoc;

/// Registers the `bearerAuth` scheme referenced by the mutating paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
