//! Inventory domain module.
//!
//! This crate contains the inventory business rules as deterministic domain
//! logic (no IO, no HTTP, no storage): item fields and their validation, the
//! fixed category list, order-list parsing and the user-facing notices each
//! operation produces.

pub mod category;
pub mod item;
pub mod notice;
pub mod order;

pub use category::{ALL_CATEGORIES, CATEGORIES, CategoryFilter, stock_categories};
pub use item::{Item, ItemDraft, ItemFields};
pub use notice::{Notice, NoticeKind};
pub use order::{OrderLine, OrderRequest, OrderedItem, summarize_order};
