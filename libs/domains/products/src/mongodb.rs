//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::with_timeout;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductListQuery, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a repository over a custom-named collection
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Create the name and category indexes the catalog queries rely on
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            // Name lookups and search
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(IndexOptions::builder().name("idx_name".to_string()).build())
                .build(),
            // Category listings
            IndexModel::builder()
                .keys(doc! { "categoryId": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category_id".to_string())
                        .build(),
                )
                .build(),
        ];

        with_timeout("create_product_indexes", self.collection.create_indexes(indexes)).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Direct access to the backing collection
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from a search term
    fn build_filter(search: &str) -> mongodb::bson::Document {
        if search.is_empty() {
            doc! {}
        } else {
            doc! { "name": { "$regex": search, "$options": "i" } }
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        with_timeout("insert_product", self.collection.insert_one(&product)).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let product = with_timeout("find_product_by_id", self.collection.find_one(filter)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ProductListQuery) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let filter = Self::build_filter(&query.search);

        let options = mongodb::options::FindOptions::builder()
            .limit(query.limit)
            .skip(query.skip())
            .sort(doc! { "createdAt": -1 })
            .build();

        let products = with_timeout("list_products", async {
            let cursor = self.collection.find(filter).with_options(options).await?;
            cursor.try_collect().await
        })
        .await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, search: &str) -> ProductResult<u64> {
        let filter = Self::build_filter(search);
        let count = with_timeout("count_products", self.collection.count_documents(filter)).await?;
        Ok(count)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = with_timeout(
            "find_product_for_update",
            self.collection.find_one(filter.clone()),
        )
        .await?
        .ok_or(ProductError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        with_timeout("replace_product", self.collection.replace_one(filter, &updated)).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = with_timeout("delete_product", self.collection.delete_one(filter)).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn reserve_stock(&self, id: Uuid, qty: i32) -> ProductResult<Product> {
        // Conditional decrement: only matches while enough stock is on hand,
        // so concurrent orders can never drive qty below zero.
        let filter = doc! {
            "_id": to_bson(&id).unwrap_or(Bson::Null),
            "qty": { "$gte": qty }
        };
        let update = doc! {
            "$inc": { "qty": -qty },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() }
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::Before)
            .build();

        let reserved = with_timeout(
            "reserve_product_stock",
            self.collection
                .find_one_and_update(filter, update)
                .with_options(options),
        )
        .await?;

        match reserved {
            Some(product) => {
                tracing::info!(product_id = %id, qty, "Stock reserved");
                Ok(product)
            }
            // No match: either the product is gone or the stock is short
            None => match self.get_by_id(id).await? {
                Some(product) => Err(ProductError::InsufficientStock {
                    name: product.name,
                    available: product.qty,
                    requested: qty,
                }),
                None => Err(ProductError::NotFound(id)),
            },
        }
    }

    #[instrument(skip(self))]
    async fn release_stock(&self, id: Uuid, qty: i32) -> ProductResult<()> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let update = doc! {
            "$inc": { "qty": qty },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() }
        };

        let result = with_timeout(
            "release_product_stock",
            self.collection.update_one(filter, update),
        )
        .await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, qty, "Stock released");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty_search() {
        let doc = MongoProductRepository::build_filter("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_matches_name_case_insensitive() {
        let doc = MongoProductRepository::build_filter("keyboard");

        let name = doc.get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), "keyboard");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_build_filter_searches_name_only() {
        let doc = MongoProductRepository::build_filter("keyboard");
        assert!(!doc.contains_key("$or"));
        assert!(!doc.contains_key("description"));
    }
}
