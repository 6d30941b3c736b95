use std::sync::RwLock;

use async_trait::async_trait;

use barstock_core::ItemId;
use barstock_inventory::{CategoryFilter, Item, ItemFields};

use super::{ItemRepository, StoreError, StoreResult};

#[derive(Debug)]
struct Table {
    rows: Vec<Item>,
    // Mirrors AUTOINCREMENT: ids are never reused, even after deletes.
    last_id: i64,
}

/// In-memory item repository.
///
/// Intended for tests/dev. Keeps insertion order like SQLite's rowid order.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    table: RwLock<Table>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self, filter: &CategoryFilter) -> StoreResult<Vec<Item>> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.iter().filter(|i| filter.matches(i)).cloned().collect())
    }

    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.iter().find(|i| i.id == id).cloned())
    }

    async fn insert(&self, fields: &ItemFields) -> StoreResult<Item> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        table.last_id += 1;
        let item = Item::from_fields(ItemId::new(table.last_id), fields.clone());
        table.rows.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: ItemId, fields: &ItemFields) -> StoreResult<Option<Item>> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        match table.rows.iter_mut().find(|i| i.id == id) {
            Some(row) => {
                *row = Item::from_fields(id, fields.clone());
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        match table.rows.iter().position(|i| i.id == id) {
            Some(idx) => Ok(Some(table.rows.remove(idx))),
            None => Ok(None),
        }
    }
}
