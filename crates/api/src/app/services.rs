//! Inventory operations behind the HTTP handlers.
//!
//! Each operation is a single read or a single write against the repository
//! and returns the [`Notice`] the user should see, if any.

use std::sync::Arc;

use thiserror::Error;

use barstock_core::{DomainError, ItemId};
use barstock_infra::{ItemRepository, StoreError, export_csv};
use barstock_inventory::{
    CategoryFilter, Item, ItemDraft, Notice, OrderRequest, OrderedItem, summarize_order,
};

/// Failure of an inventory operation.
///
/// `Domain` errors are the caller's to recover from; `Store` errors are not.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Clone)]
pub struct AppServices {
    items: Arc<dyn ItemRepository>,
}

impl AppServices {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Item>> {
        Ok(self.items.list(&CategoryFilter::All).await?)
    }

    /// `"All"` lists everything; an unknown category lists nothing.
    pub async fn list_by_category(&self, category: &str) -> ServiceResult<Vec<Item>> {
        Ok(self.items.list(&CategoryFilter::parse(category)).await?)
    }

    pub async fn add_item(&self, draft: ItemDraft) -> ServiceResult<(Item, Notice)> {
        let fields = draft.validate()?;
        let item = self.items.insert(&fields).await?;
        tracing::info!(item_id = %item.id, name = %item.name, "item added");
        let notice = Notice::item_added(&item.name);
        Ok((item, notice))
    }

    pub async fn get_item(&self, id: ItemId) -> ServiceResult<Item> {
        self.items
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found().into())
    }

    pub async fn update_item(&self, id: ItemId, draft: ItemDraft) -> ServiceResult<(Item, Notice)> {
        let fields = draft.validate()?;
        let item = self
            .items
            .update(id, &fields)
            .await?
            .ok_or(DomainError::NotFound)?;
        tracing::info!(item_id = %id, "item updated");
        let notice = Notice::item_updated(&item.name);
        Ok((item, notice))
    }

    /// Deleting a missing id is a no-op: no error and no notice.
    pub async fn delete_item(&self, id: ItemId) -> ServiceResult<Option<Notice>> {
        match self.items.delete(id).await? {
            Some(removed) => {
                tracing::info!(item_id = %id, name = %removed.name, "item deleted");
                Ok(Some(Notice::item_deleted(&removed.name)))
            }
            None => {
                tracing::debug!(item_id = %id, "delete of missing item ignored");
                Ok(None)
            }
        }
    }

    pub async fn export_csv(&self) -> ServiceResult<Vec<u8>> {
        let items = self.list_all().await?;
        Ok(export_csv(&items)?)
    }

    /// Resolve each order line against storage and build the summary notice.
    ///
    /// Lines referencing items that no longer exist are dropped. Nothing is
    /// written.
    pub async fn submit_order(&self, order: &OrderRequest) -> ServiceResult<Notice> {
        let mut ordered = Vec::with_capacity(order.lines().len());
        for line in order.lines() {
            match self.items.get(line.item_id).await? {
                Some(item) => ordered.push(OrderedItem::new(&item, line.quantity)),
                None => tracing::warn!(item_id = %line.item_id, "ordered item not found; skipped"),
            }
        }

        let notice = summarize_order(&ordered);
        tracing::info!(lines = ordered.len(), "order submitted");
        Ok(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barstock_infra::InMemoryItemRepository;
    use barstock_inventory::NoticeKind;

    fn services() -> AppServices {
        AppServices::new(Arc::new(InMemoryItemRepository::new()))
    }

    fn draft(name: &str, quantity: &str, unit: &str, category: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            category: category.to_string(),
            location: "Shelf A".to_string(),
        }
    }

    #[tokio::test]
    async fn add_item_persists_and_confirms() {
        let svc = services();
        let (item, notice) = svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();

        assert_eq!(notice, Notice::success("Item 'Vodka' added successfully."));
        assert_eq!(svc.list_all().await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn add_item_with_bad_quantity_persists_nothing() {
        let svc = services();
        let err = svc.add_item(draft("Vodka", "lots", "bottle", "Liquor")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_item_reports_not_found() {
        let err = services().get_item(ItemId::new(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::NotFound)));
    }

    #[tokio::test]
    async fn update_item_overwrites_every_field() {
        let svc = services();
        let (vodka, _) = svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();
        let (lager, _) = svc.add_item(draft("Lager", "2", "case", "Beer")).await.unwrap();

        let (updated, notice) = svc
            .update_item(vodka.id, draft("Gin", "7", "litre", "Liquor"))
            .await
            .unwrap();

        assert_eq!(notice.text, "Item 'Gin' updated successfully.");
        assert_eq!(svc.get_item(vodka.id).await.unwrap(), updated);
        assert_eq!(updated.quantity, 7);
        assert_eq!(updated.unit, "litre");
        assert_eq!(svc.get_item(lager.id).await.unwrap(), lager);
    }

    #[tokio::test]
    async fn update_with_bad_quantity_leaves_item_unchanged() {
        let svc = services();
        let (vodka, _) = svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();

        let err = svc
            .update_item(vodka.id, draft("Gin", "lots", "litre", "Liquor"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));
        assert_eq!(svc.get_item(vodka.id).await.unwrap(), vodka);
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found() {
        let svc = services();
        svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();

        let err = svc
            .update_item(ItemId::new(99), draft("Gin", "1", "bottle", "Liquor"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::NotFound)));
        assert_eq!(svc.list_all().await.unwrap()[0].name, "Vodka");
    }

    #[tokio::test]
    async fn delete_is_lenient_for_missing_ids() {
        let svc = services();
        let (vodka, _) = svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();
        let (lager, _) = svc.add_item(draft("Lager", "2", "case", "Beer")).await.unwrap();

        let notice = svc.delete_item(vodka.id).await.unwrap();
        assert_eq!(notice, Some(Notice::success("Item 'Vodka' deleted successfully.")));

        assert_eq!(svc.delete_item(vodka.id).await.unwrap(), None);
        assert_eq!(svc.list_all().await.unwrap(), vec![lager]);
    }

    #[tokio::test]
    async fn list_by_category_handles_sentinel_and_unknown() {
        let svc = services();
        svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();
        svc.add_item(draft("Lager", "2", "case", "Beer")).await.unwrap();

        assert_eq!(svc.list_by_category("All").await.unwrap(), svc.list_all().await.unwrap());
        assert_eq!(svc.list_by_category("Beer").await.unwrap().len(), 1);
        assert!(svc.list_by_category("Wine").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn export_matches_listing() {
        let svc = services();
        svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();

        let csv = String::from_utf8(svc.export_csv().await.unwrap()).unwrap();
        assert_eq!(csv, "ID,Name,Quantity,Unit,Category,Location\r\n1,Vodka,3,bottle,Liquor,Shelf A\r\n");
    }

    #[tokio::test]
    async fn order_includes_only_positive_lines() {
        let svc = services();
        svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();

        let order = OrderRequest::from_form([("order_1", "2"), ("order_2", "0"), ("order_3", "-1")]).unwrap();
        let notice = svc.submit_order(&order).await.unwrap();

        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Order submitted for the following items: Vodka (2 bottle)");
    }

    #[tokio::test]
    async fn empty_order_is_an_error_and_changes_nothing() {
        let svc = services();
        svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();
        let before = svc.list_all().await.unwrap();

        let order = OrderRequest::from_form([("order_1", "0")]).unwrap();
        let notice = svc.submit_order(&order).await.unwrap();

        assert!(notice.is_error());
        assert_eq!(notice.text, "No items were ordered.");
        assert_eq!(svc.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn order_lines_for_missing_items_are_dropped() {
        let svc = services();
        svc.add_item(draft("Vodka", "3", "bottle", "Liquor")).await.unwrap();

        let order = OrderRequest::from_form([("order_42", "1")]).unwrap();
        assert!(svc.submit_order(&order).await.unwrap().is_error());

        let order = OrderRequest::from_form([("order_42", "1"), ("order_1", "4")]).unwrap();
        assert_eq!(
            svc.submit_order(&order).await.unwrap().text,
            "Order submitted for the following items: Vodka (4 bottle)"
        );
    }
}
