//! Manufacturer facet of a category page.

use common::{
    catalog::{Attribute, Category},
    filter_const::{MANUFACTURER_FACET_TITLE, MANUFACTURER_QUERY_KEY},
    filter_query::FilterQuery,
    filter_result::FacetGroup,
};
use tracing::debug;

use crate::api::filter::{catalog::Catalog, filter_selection::{attribute_filter, facet_item}};

pub async fn compute_manufacturer_facet<C: Catalog>(
    catalog: &C,
    category: &Category,
    attributes: &[Attribute],
    query: &FilterQuery,
) -> anyhow::Result<FacetGroup> {
    // the manufacturer selection itself stays out of the counts, so every entry
    // tells how many products that manufacturer would bring
    let attribute_filter = attribute_filter(query, attributes);

    let candidates = catalog.list_category_manufacturers(category).await?;
    let ids = candidates.iter().map(|m| m.id).collect::<Vec<_>>();
    let counts = catalog
        .count_active_products_per_manufacturer(category, &ids, &attribute_filter)
        .await?;
    debug!("manufacturer counts in category {}: {:?}", category.id, counts);

    let mut result = FacetGroup::new(MANUFACTURER_QUERY_KEY, MANUFACTURER_FACET_TITLE, true);
    for manufacturer in candidates {
        let count = counts.get(&manufacturer.id).copied().unwrap_or(0);
        result.filters.push(facet_item(
            query,
            MANUFACTURER_QUERY_KEY,
            result.select_many,
            manufacturer.name,
            count,
            manufacturer.id,
        ));
    }
    Ok(result)
}
