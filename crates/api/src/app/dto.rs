//! Form payloads and their mapping to domain types.

use serde::Deserialize;

use barstock_core::{DomainResult, ItemId};
use barstock_inventory::{ItemDraft, OrderRequest};

/// Add/edit form. Every field must be present; `quantity` stays text until
/// validated.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub location: String,
}

impl From<ItemForm> for ItemDraft {
    fn from(form: ItemForm) -> Self {
        ItemDraft {
            name: form.name,
            quantity: form.quantity,
            unit: form.unit,
            category: form.category,
            location: form.location,
        }
    }
}

/// Order form fields in submission order (`order_<id>` → amount, plus
/// whatever else the page posts).
pub type OrderForm = Vec<(String, String)>;

pub fn order_request(form: OrderForm) -> DomainResult<OrderRequest> {
    OrderRequest::from_form(form)
}

pub fn parse_item_id(raw: &str) -> DomainResult<ItemId> {
    raw.parse()
}
