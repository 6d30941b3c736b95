//! Item storage abstraction.
//!
//! One table, ad hoc queries. Two implementations: SQLite for the running
//! application and an in-memory store for tests/dev.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use barstock_core::ItemId;
use barstock_inventory::{CategoryFilter, Item, ItemFields};

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryItemRepository;
pub use sqlite::SqliteItemRepository;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage failure. Not recoverable at the request level.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// CRUD over the `items` table.
///
/// Lookups of absent ids are not errors: they come back as `None` and the
/// caller decides what a missing item means.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Items matching the filter, in storage order.
    async fn list(&self, filter: &CategoryFilter) -> StoreResult<Vec<Item>>;

    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>>;

    /// Insert a row with a fresh id.
    async fn insert(&self, fields: &ItemFields) -> StoreResult<Item>;

    /// Overwrite all fields. `None` when the id does not exist.
    async fn update(&self, id: ItemId, fields: &ItemFields) -> StoreResult<Option<Item>>;

    /// Hard delete. Returns the removed item, or `None` when the id did not
    /// exist (nothing is touched in that case).
    async fn delete(&self, id: ItemId) -> StoreResult<Option<Item>>;
}

#[async_trait]
impl<S> ItemRepository for Arc<S>
where
    S: ItemRepository + ?Sized,
{
    async fn list(&self, filter: &CategoryFilter) -> StoreResult<Vec<Item>> {
        (**self).list(filter).await
    }

    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        (**self).get(id).await
    }

    async fn insert(&self, fields: &ItemFields) -> StoreResult<Item> {
        (**self).insert(fields).await
    }

    async fn update(&self, id: ItemId, fields: &ItemFields) -> StoreResult<Option<Item>> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: ItemId) -> StoreResult<Option<Item>> {
        (**self).delete(id).await
    }
}
