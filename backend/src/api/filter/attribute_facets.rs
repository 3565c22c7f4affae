//! Attribute facets of a category page.

use common::{
    catalog::{Attribute, Category},
    filter_const::MANUFACTURER_QUERY_KEY,
    filter_query::FilterQuery,
    filter_result::FacetGroup,
};
use tracing::debug;

use crate::api::filter::{
    catalog::Catalog,
    filter_selection::{attribute_filter, facet_item, manufacturer_filter},
};

/// One group per attribute, one entry per option. An option's count is the
/// number of products matching the current selection with that option added.
pub async fn compute_attribute_facets<C: Catalog>(
    catalog: &C,
    attributes: &[Attribute],
    category: &Category,
    query: &FilterQuery,
) -> anyhow::Result<Vec<FacetGroup>> {
    let manufacturers = if query.selected_values(MANUFACTURER_QUERY_KEY).is_empty() {
        vec![]
    } else {
        catalog.list_manufacturers().await?
    };
    let manufacturer_ids = manufacturer_filter(query, &manufacturers);
    let current = attribute_filter(query, attributes);

    let mut result = Vec::with_capacity(attributes.len());
    for attribute in attributes {
        let mut group = FacetGroup::new(&attribute.name, &attribute.title, attribute.select_many);
        for option in &attribute.options {
            let mut with_option = current.clone();
            with_option.entry(attribute.name.clone()).or_default().insert(option.id);
            let count = catalog
                .count_active_products(category, manufacturer_ids.as_deref(), &with_option)
                .await?;
            group.filters.push(facet_item(
                query,
                &attribute.name,
                attribute.select_many,
                option.value.clone(),
                count,
                option.id,
            ));
        }
        debug!("attribute {}: {} options", attribute.name, group.filters.len());
        result.push(group);
    }
    Ok(result)
}
