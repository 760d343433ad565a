//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use database::mongodb::with_timeout;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// MongoDB implementation of the CategoryRepository
pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    /// Create a new MongoCategoryRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Category>("categories");
        Self { collection }
    }

    /// Create a repository over a custom-named collection
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Category>(collection_name);
        Self { collection }
    }

    /// Create the unique name index that backs duplicate detection
    pub async fn init_indexes(&self) -> CategoryResult<()> {
        let indexes = vec![
            // Unique name index
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_name_unique".to_string())
                        .build(),
                )
                .build(),
        ];

        with_timeout("create_category_indexes", self.collection.create_indexes(indexes)).await?;
        tracing::info!("Category indexes created successfully");
        Ok(())
    }

    /// Direct access to the backing collection
    pub fn collection(&self) -> &Collection<Category> {
        &self.collection
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self, input), fields(category_name = %input.name))]
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let category = Category::new(input);

        with_timeout("insert_category", self.collection.insert_one(&category)).await?;

        tracing::info!(category_id = %category.id, "Category created successfully");
        Ok(category)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let category = with_timeout("find_category_by_id", self.collection.find_one(filter)).await?;
        Ok(category)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> CategoryResult<Vec<Category>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let categories = with_timeout("list_categories", async {
            let cursor = self.collection.find(doc! {}).with_options(options).await?;
            cursor.try_collect().await
        })
        .await?;

        Ok(categories)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<Category> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = with_timeout(
            "find_category_for_update",
            self.collection.find_one(filter.clone()),
        )
        .await?
        .ok_or(CategoryError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        with_timeout(
            "replace_category",
            self.collection.replace_one(filter, &updated),
        )
        .await?;

        tracing::info!(category_id = %id, "Category updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CategoryResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = with_timeout("delete_category", self.collection.delete_one(filter)).await?;

        if result.deleted_count == 0 {
            return Err(CategoryError::NotFound(id));
        }

        tracing::info!(category_id = %id, "Category deleted successfully");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool> {
        let filter = doc! { "name": name };
        let count = with_timeout(
            "count_categories_by_name",
            self.collection.count_documents(filter),
        )
        .await?;
        Ok(count > 0)
    }
}
