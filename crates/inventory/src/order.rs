//! Order list: turning a submitted order form into typed lines and a summary.
//!
//! No order entity is persisted. An order only produces a [`Notice`].

use barstock_core::{DomainResult, ItemId};

use crate::item::{Item, parse_quantity};
use crate::notice::Notice;

/// Form field prefix: `order_<item id>`.
pub const ORDER_FIELD_PREFIX: &str = "order_";

const ORDER_PREFIX_TEXT: &str = "Order submitted for the following items: ";
const NOTHING_ORDERED_TEXT: &str = "No items were ordered.";

/// One requested item. `quantity` is always strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub quantity: i64,
}

/// The ordered lines of a submitted order form, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRequest {
    lines: Vec<OrderLine>,
}

impl OrderRequest {
    /// Build an order from raw form fields.
    ///
    /// - fields without the `order_` prefix are ignored
    /// - empty amounts, zero and negative amounts are not ordered
    /// - a non-numeric amount, or a non-numeric id on an ordered field, is a
    ///   validation error
    /// - a repeated item id keeps its first position and its last amount
    pub fn from_form<I, K, V>(fields: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut lines: Vec<OrderLine> = Vec::new();

        for (key, value) in fields {
            let Some(raw_id) = key.as_ref().strip_prefix(ORDER_FIELD_PREFIX) else {
                continue;
            };
            let value = value.as_ref();
            if value.trim().is_empty() {
                continue;
            }

            let quantity = parse_quantity(value)?;
            if quantity <= 0 {
                continue;
            }
            let item_id: ItemId = raw_id.parse()?;

            match lines.iter_mut().find(|l| l.item_id == item_id) {
                Some(existing) => existing.quantity = quantity,
                None => lines.push(OrderLine { item_id, quantity }),
            }
        }

        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// An order line resolved against storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedItem {
    pub name: String,
    pub unit: String,
    pub quantity: i64,
}

impl OrderedItem {
    pub fn new(item: &Item, quantity: i64) -> Self {
        Self {
            name: item.name.clone(),
            unit: item.unit.clone(),
            quantity,
        }
    }
}

/// Build the confirmation notice for an order.
///
/// Lines whose item no longer exists are expected to be dropped by the caller;
/// an empty slice yields the error notice.
pub fn summarize_order(ordered: &[OrderedItem]) -> Notice {
    if ordered.is_empty() {
        return Notice::error(NOTHING_ORDERED_TEXT);
    }

    let fragments: Vec<String> = ordered
        .iter()
        .map(|o| format!("{} ({} {})", o.name, o.quantity, o.unit))
        .collect();

    Notice::success(format!("{ORDER_PREFIX_TEXT}{}", fragments.join(", ")))
}
