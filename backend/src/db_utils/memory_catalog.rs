//! Catalog held entirely in memory.

use std::collections::BTreeMap;

use common::catalog::{Attribute, AttributeFilter, Category, Manufacturer, Product};

use crate::api::filter::Catalog;

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    manufacturers: Vec<Manufacturer>,
    category_attributes: BTreeMap<u64, Vec<Attribute>>,
    products: Vec<Product>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturers.push(manufacturer);
        self.manufacturers.sort_by_key(|m| m.id);
        self
    }

    /// Attributes are listed for a category in the order they were added.
    pub fn with_category_attribute(mut self, category_id: u64, attribute: Attribute) -> Self {
        self.category_attributes.entry(category_id).or_default().push(attribute);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    fn active_products_in<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| p.is_active && p.category_ids.contains(&category.id))
    }
}

fn matches_selection(product: &Product, manufacturers: Option<&[u64]>, attributes: &AttributeFilter) -> bool {
    if let Some(manufacturers) = manufacturers {
        match product.manufacturer_id {
            Some(id) if manufacturers.contains(&id) => {}
            _ => return false,
        }
    }
    attributes.iter().all(|(name, option_ids)| {
        option_ids.is_empty()
            || product
                .attribute_options
                .get(name)
                .is_some_and(|assigned| !assigned.is_disjoint(option_ids))
    })
}

impl Catalog for MemoryCatalog {
    async fn count_active_products(
        &self,
        category: &Category,
        manufacturers: Option<&[u64]>,
        attributes: &AttributeFilter,
    ) -> anyhow::Result<u64> {
        let count = self
            .active_products_in(category)
            .filter(|p| matches_selection(p, manufacturers, attributes))
            .count();
        Ok(count as u64)
    }

    async fn list_manufacturers(&self) -> anyhow::Result<Vec<Manufacturer>> {
        Ok(self.manufacturers.clone())
    }

    async fn list_category_manufacturers(&self, category: &Category) -> anyhow::Result<Vec<Manufacturer>> {
        let present = self
            .active_products_in(category)
            .filter_map(|p| p.manufacturer_id)
            .collect::<std::collections::BTreeSet<_>>();
        Ok(self
            .manufacturers
            .iter()
            .filter(|m| present.contains(&m.id))
            .cloned()
            .collect())
    }

    async fn list_attributes_for_category(&self, category: &Category) -> anyhow::Result<Vec<Attribute>> {
        Ok(self.category_attributes.get(&category.id).cloned().unwrap_or_default())
    }
}
