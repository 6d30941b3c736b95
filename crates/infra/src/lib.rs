//! Infrastructure layer: SQLite storage, item repositories, CSV export.

pub mod db;
pub mod export;
pub mod item_store;


pub use db::{DbSettings, connect, ensure_schema};
pub use export::{CSV_CONTENT_TYPE, CSV_FILE_NAME, CSV_HEADER, export_csv, write_csv};
pub use item_store::{
    InMemoryItemRepository, ItemRepository, SqliteItemRepository, StoreError, StoreResult,
};
