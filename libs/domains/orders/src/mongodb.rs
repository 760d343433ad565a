//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use database::mongodb::with_timeout;
use mongodb::{
    Collection, Database, IndexModel,
    bson::doc,
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::OrderResult;
use crate::models::{Order, OrderHistoryQuery};
use crate::repository::OrderRepository;

/// MongoDB implementation of the OrderRepository
pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    /// Create a new MongoOrderRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Order>("orders");
        Self { collection }
    }

    /// Create a repository over a custom-named collection
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Order>(collection_name);
        Self { collection }
    }

    /// Create the history and search indexes the listing queries rely on
    pub async fn init_indexes(&self) -> OrderResult<()> {
        let indexes = vec![
            // History listing: per-user, newest first
            IndexModel::builder()
                .keys(doc! { "createdBy": 1, "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_by_created_at".to_string())
                        .build(),
                )
                .build(),
            // Item name search
            IndexModel::builder()
                .keys(doc! { "orderItems.name": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_order_items_name".to_string())
                        .build(),
                )
                .build(),
        ];

        with_timeout("create_order_indexes", self.collection.create_indexes(indexes)).await?;
        tracing::info!("Order indexes created successfully");
        Ok(())
    }

    /// Direct access to the backing collection
    pub fn collection(&self) -> &Collection<Order> {
        &self.collection
    }

    /// Build a MongoDB filter scoped to one user, optionally matching a
    /// search term against item names or the order status
    fn build_filter(user_id: &str, search: &str) -> mongodb::bson::Document {
        let mut filter = doc! { "createdBy": user_id };

        if !search.is_empty() {
            filter.insert(
                "$or",
                vec![
                    doc! { "orderItems.name": { "$regex": search, "$options": "i" } },
                    doc! { "status": { "$regex": search, "$options": "i" } },
                ],
            );
        }

        filter
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, order), fields(order_id = %order.id, created_by = %order.created_by))]
    async fn insert(&self, order: Order) -> OrderResult<Order> {
        with_timeout("insert_order", self.collection.insert_one(&order)).await?;

        tracing::info!(order_id = %order.id, grand_total = order.grand_total, "Order created successfully");
        Ok(order)
    }

    #[instrument(skip(self, query))]
    async fn find_by_user(
        &self,
        user_id: &str,
        query: OrderHistoryQuery,
    ) -> OrderResult<Vec<Order>> {
        use futures_util::TryStreamExt;

        let filter = Self::build_filter(user_id, &query.search);

        let options = mongodb::options::FindOptions::builder()
            .limit(query.limit)
            .skip(query.skip())
            .sort(doc! { "createdAt": -1 })
            .build();

        let orders = with_timeout("list_orders", async {
            let cursor = self.collection.find(filter).with_options(options).await?;
            cursor.try_collect().await
        })
        .await?;

        Ok(orders)
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: &str, search: &str) -> OrderResult<u64> {
        let filter = Self::build_filter(user_id, search);
        let count = with_timeout("count_orders", self.collection.count_documents(filter)).await?;
        Ok(count)
    }
}
