//! Catalog backed by the store tables in ClickHouse.

use std::collections::BTreeMap;

use anyhow::Context;
use common::catalog::{Attribute, AttributeFilter, AttributeOption, Category, Manufacturer};
use tracing::debug;

use crate::{
    api::filter::Catalog,
    db_utils::{
        catalog_sql::{
            build_attribute_options_sql, build_category_attributes_sql, build_category_manufacturers_sql,
            build_count_per_manufacturer_sql, build_count_sql,
        },
        clickhouse_utils::get_clickhouse_client,
    },
};

#[derive(Clone)]
pub struct ClickhouseCatalog {
    client: clickhouse::Client,
}

impl ClickhouseCatalog {
    pub fn new(client: clickhouse::Client) -> Self {
        Self { client }
    }

    /// Client configured from the `CLICKHOUSE_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(get_clickhouse_client())
    }
}

impl Catalog for ClickhouseCatalog {
    async fn count_active_products(
        &self,
        category: &Category,
        manufacturers: Option<&[u64]>,
        attributes: &AttributeFilter,
    ) -> anyhow::Result<u64> {
        let sql = build_count_sql(category, manufacturers, attributes);
        debug!("count sql: {}", sql);
        let response = self
            .client
            .query(&sql)
            .fetch_all::<u64>()
            .await
            .context("Failed to count active products")?;
        Ok(response.into_iter().next().unwrap_or(0))
    }

    async fn count_active_products_per_manufacturer(
        &self,
        category: &Category,
        manufacturers: &[u64],
        attributes: &AttributeFilter,
    ) -> anyhow::Result<BTreeMap<u64, u64>> {
        if manufacturers.is_empty() {
            return Ok(BTreeMap::new());
        }
        let sql = build_count_per_manufacturer_sql(category, manufacturers, attributes);
        debug!("count per manufacturer sql: {}", sql);
        let result = self
            .client
            .query(&sql)
            .fetch_all::<(u64, u64)>()
            .await
            .context("Failed to count active products per manufacturer")?;
        Ok(BTreeMap::from_iter(result))
    }

    async fn list_manufacturers(&self) -> anyhow::Result<Vec<Manufacturer>> {
        let result = self
            .client
            .query("SELECT id, name FROM store_manufacturer ORDER BY id")
            .fetch_all::<(u64, String)>()
            .await
            .context("Failed to list manufacturers")?;
        Ok(result.into_iter().map(|(id, name)| Manufacturer { id, name }).collect())
    }

    async fn list_category_manufacturers(&self, category: &Category) -> anyhow::Result<Vec<Manufacturer>> {
        let result = self
            .client
            .query(&build_category_manufacturers_sql(category))
            .fetch_all::<(u64, String)>()
            .await
            .context("Failed to list category manufacturers")?;
        Ok(result.into_iter().map(|(id, name)| Manufacturer { id, name }).collect())
    }

    async fn list_attributes_for_category(&self, category: &Category) -> anyhow::Result<Vec<Attribute>> {
        let rows = self
            .client
            .query(&build_category_attributes_sql(category))
            .fetch_all::<(u64, String, String, u8)>()
            .await
            .context("Failed to list category attributes")?;
        if rows.is_empty() {
            return Ok(vec![]);
        }

        let attribute_ids = rows.iter().map(|(id, ..)| *id).collect::<Vec<_>>();
        let option_rows = self
            .client
            .query(&build_attribute_options_sql(&attribute_ids))
            .fetch_all::<(u64, u64, String)>()
            .await
            .context("Failed to list attribute options")?;
        let mut options = BTreeMap::<u64, Vec<AttributeOption>>::new();
        for (id, attribute_id, value) in option_rows {
            options.entry(attribute_id).or_default().push(AttributeOption { id, value });
        }

        Ok(rows
            .into_iter()
            .map(|(id, name, title, select_many)| Attribute {
                id,
                name,
                title,
                select_many: select_many != 0,
                options: options.remove(&id).unwrap_or_default(),
            })
            .collect())
    }
}
