//! Catalog collaborator the facet computations query.

use std::collections::BTreeMap;

use common::catalog::{Attribute, AttributeFilter, Category, Manufacturer};


/// Read-only access to the product catalog.
///
/// Failures are passed through untouched; the facet computations never retry.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Active products of `category` matching every restriction given.
    /// `manufacturers: None` means no manufacturer restriction.
    async fn count_active_products(
        &self,
        category: &Category,
        manufacturers: Option<&[u64]>,
        attributes: &AttributeFilter,
    ) -> anyhow::Result<u64>;

    /// Active products of `category` matching `attributes`, counted for each of
    /// `manufacturers` on its own. Manufacturers without products may be missing
    /// from the map.
    async fn count_active_products_per_manufacturer(
        &self,
        category: &Category,
        manufacturers: &[u64],
        attributes: &AttributeFilter,
    ) -> anyhow::Result<BTreeMap<u64, u64>> {
        let mut result = BTreeMap::new();
        for id in manufacturers {
            let count = self
                .count_active_products(category, Some(std::slice::from_ref(id)), attributes)
                .await?;
            result.insert(*id, count);
        }
        Ok(result)
    }

    /// Every manufacturer, ordered by id.
    async fn list_manufacturers(&self) -> anyhow::Result<Vec<Manufacturer>>;

    /// Manufacturers offered as facet entries for `category`, ordered by id.
    async fn list_category_manufacturers(&self, _category: &Category) -> anyhow::Result<Vec<Manufacturer>> {
        self.list_manufacturers().await
    }

    /// Filterable attributes of `category`, each with its options in display order.
    async fn list_attributes_for_category(&self, category: &Category) -> anyhow::Result<Vec<Attribute>>;
}
