use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product entity - represents a catalog product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Ordered list of image URLs
    pub images: Vec<String>,
    /// Unit price
    pub price: f64,
    /// Available quantity. Decremented by order placement, never negative
    pub qty: i32,
    /// Category reference
    pub category_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub images: Vec<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub qty: i32,
    pub category_id: Uuid,
}

/// DTO for updating an existing product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub images: Option<Vec<String>>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub qty: Option<i32>,
    pub category_id: Option<Uuid>,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
pub struct ProductListQuery {
    /// Page size (1-based pagination)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: i64,
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,
    /// Case-insensitive substring match on product name
    #[serde(default)]
    pub search: String,
}

fn default_limit() -> i64 {
    10
}

fn default_page() -> i64 {
    1
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            page: default_page(),
            search: String::new(),
        }
    }
}

impl ProductListQuery {
    /// Number of documents to skip for the requested page
    pub fn skip(&self) -> u64 {
        ((self.page - 1) * self.limit).max(0) as u64
    }
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            images: input.images,
            price: input.price,
            qty: input.qty,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(qty) = update.qty {
            self.qty = qty;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Mechanical Keyboard".to_string(),
            description: "Tenkeyless, hot-swappable switches".to_string(),
            images: vec!["https://cdn.example.com/kb-1.jpg".to_string()],
            price: 129.99,
            qty: 10,
            category_id: Uuid::now_v7(),
        }
    }

    #[test]
    fn test_new_product_sets_id_and_timestamps() {
        let product = Product::new(create_input());

        assert_eq!(product.name, "Mechanical Keyboard");
        assert_eq!(product.qty, 10);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_update_changes_only_provided_fields() {
        let mut product = Product::new(create_input());
        let category_id = product.category_id;

        product.apply_update(UpdateProduct {
            price: Some(99.99),
            qty: Some(3),
            ..Default::default()
        });

        assert_eq!(product.price, 99.99);
        assert_eq!(product.qty, 3);
        assert_eq!(product.name, "Mechanical Keyboard");
        assert_eq!(product.category_id, category_id);
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let mut input = create_input();
        input.price = -1.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_product_rejects_negative_qty() {
        let mut input = create_input();
        input.qty = -1;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_product_requires_an_image() {
        let mut input = create_input();
        input.images.clear();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_product_serializes_camel_case_keys() {
        let product = Product::new(create_input());
        let value = serde_json::to_value(&product).unwrap();

        assert!(value.get("_id").is_some());
        assert!(value.get("categoryId").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("category_id").is_none());
    }

    #[test]
    fn test_list_query_defaults_and_skip() {
        let query = ProductListQuery::default();
        assert_eq!(query.limit, 10);
        assert_eq!(query.page, 1);
        assert_eq!(query.skip(), 0);

        let page_three = ProductListQuery {
            limit: 10,
            page: 3,
            search: String::new(),
        };
        assert_eq!(page_three.skip(), 20);
    }

    #[test]
    fn test_list_query_rejects_non_positive_page() {
        let query = ProductListQuery {
            limit: 10,
            page: 0,
            search: String::new(),
        };
        assert!(query.validate().is_err());

        let query = ProductListQuery {
            limit: -5,
            page: 1,
            search: String::new(),
        };
        assert!(query.validate().is_err());
    }
}
