use serde::{Deserialize, Serialize};

use barstock_core::{DomainError, DomainResult, ItemId};

/// The five mutable fields of an inventory item.
///
/// `category` is free text: the fixed category list is a UI convention and is
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub quantity: i64,
    pub unit: String,
    pub category: String,
    pub location: String,
}

/// A stored inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub unit: String,
    pub category: String,
    pub location: String,
}

impl Item {
    pub fn from_fields(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            quantity: fields.quantity,
            unit: fields.unit,
            category: fields.category,
            location: fields.location,
        }
    }

    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
        }
    }
}

/// Unvalidated item fields as submitted by the add/edit forms.
///
/// Every field is required; only `quantity` is coerced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub location: String,
}

impl ItemDraft {
    /// Coerce the draft into typed fields.
    ///
    /// Fails with `DomainError::Validation` when `quantity` is not a base-10
    /// integer. Range is not checked.
    pub fn validate(self) -> DomainResult<ItemFields> {
        let quantity = parse_quantity(&self.quantity)?;
        Ok(ItemFields {
            name: self.name,
            quantity,
            unit: self.unit,
            category: self.category,
            location: self.location,
        })
    }
}

pub(crate) fn parse_quantity(raw: &str) -> DomainResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        DomainError::validation(format!("quantity must be a whole number, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(quantity: &str) -> ItemDraft {
        ItemDraft {
            name: "Vodka".to_string(),
            quantity: quantity.to_string(),
            unit: "bottle".to_string(),
            category: "Liquor".to_string(),
            location: "Shelf A".to_string(),
        }
    }

    #[test]
    fn validate_coerces_quantity() {
        let fields = draft("3").validate().unwrap();
        assert_eq!(fields.quantity, 3);
        assert_eq!(fields.name, "Vodka");
        assert_eq!(fields.location, "Shelf A");
    }

    #[test]
    fn validate_accepts_surrounding_whitespace_and_negatives() {
        assert_eq!(draft(" 12 ").validate().unwrap().quantity, 12);
        assert_eq!(draft("-4").validate().unwrap().quantity, -4);
    }

    #[test]
    fn validate_rejects_non_numeric_quantity() {
        for bad in ["", "three", "1.5", "3 cases"] {
            let err = draft(bad).validate().unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                other => panic!("expected Validation error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn category_is_not_enforced() {
        let mut d = draft("1");
        d.category = "Cleaning supplies".to_string();
        assert_eq!(d.validate().unwrap().category, "Cleaning supplies");
    }

    #[test]
    fn item_round_trips_through_fields() {
        let fields = draft("5").validate().unwrap();
        let item = Item::from_fields(ItemId::new(9), fields.clone());
        assert_eq!(item.id, ItemId::new(9));
        assert_eq!(item.fields(), fields);
    }
}
