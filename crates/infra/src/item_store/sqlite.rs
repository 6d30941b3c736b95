//! SQLite-backed item repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use barstock_core::ItemId;
use barstock_inventory::{CategoryFilter, Item, ItemFields};

use super::{ItemRepository, StoreResult};

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    quantity: i64,
    unit: String,
    category: String,
    location: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::new(row.id),
            name: row.name,
            quantity: row.quantity,
            unit: row.unit,
            category: row.category,
            location: row.location,
        }
    }
}

/// Repository over the `items` table.
///
/// Every call checks a connection out of the pool for the duration of the
/// query; the guard returns it on all exit paths.
#[derive(Debug, Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn list(&self, filter: &CategoryFilter) -> StoreResult<Vec<Item>> {
        let rows: Vec<ItemRow> = match filter {
            CategoryFilter::All => {
                sqlx::query_as("SELECT id, name, quantity, unit, category, location FROM items")
                    .fetch_all(&self.pool)
                    .await?
            }
            CategoryFilter::Only(category) => {
                sqlx::query_as(
                    "SELECT id, name, quantity, unit, category, location FROM items WHERE category = ?",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as(
            "SELECT id, name, quantity, unit, category, location FROM items WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Item::from))
    }

    async fn insert(&self, fields: &ItemFields) -> StoreResult<Item> {
        let result = sqlx::query(
            "INSERT INTO items (name, quantity, unit, category, location) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(&fields.unit)
        .bind(&fields.category)
        .bind(&fields.location)
        .execute(&self.pool)
        .await?;

        let id = ItemId::new(result.last_insert_rowid());
        Ok(Item::from_fields(id, fields.clone()))
    }

    async fn update(&self, id: ItemId, fields: &ItemFields) -> StoreResult<Option<Item>> {
        let result = sqlx::query(
            "UPDATE items SET name = ?, quantity = ?, unit = ?, category = ?, location = ? WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(fields.quantity)
        .bind(&fields.unit)
        .bind(&fields.category)
        .bind(&fields.location)
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Item::from_fields(id, fields.clone())))
    }

    async fn delete(&self, id: ItemId) -> StoreResult<Option<Item>> {
        // Read and delete in one transaction so the returned name is the one removed.
        let mut tx = self.pool.begin().await?;

        let row: Option<ItemRow> = sqlx::query_as(
            "SELECT id, name, quantity, unit, category, location FROM items WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.get())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Some(row.into()))
    }
}
