//! Complete filter data of one category page.

use common::{
    catalog::Category,
    filter_const::{MANUFACTURER_QUERY_KEY, URL_QUERY_KEY},
    filter_query::FilterQuery,
    filter_result::CategoryFacets,
};
use tracing::info;

use crate::api::filter::{
    active_filters::{clear_filters_url, compute_active_filters},
    attribute_facets::compute_attribute_facets,
    catalog::Catalog,
    filter_selection::normalize_single_valued,
    manufacturer_facet::compute_manufacturer_facet,
};

pub async fn compute_category_facets<C: Catalog>(
    catalog: &C,
    category: &Category,
    query: &FilterQuery,
) -> anyhow::Result<CategoryFacets> {
    let attributes = catalog.list_attributes_for_category(category).await?;

    let mut query = query.clone();
    // links have to keep pointing at this category
    if !category.url.is_empty() && !query.contains_key(URL_QUERY_KEY) {
        query = query.with_param_added(URL_QUERY_KEY, &category.url, false);
    }
    for attribute in &attributes {
        query = normalize_single_valued(&query, attribute);
    }
    info!("Computing facets for category {} ({} attributes): {}", category.id, attributes.len(), query.to_query_string());

    let manufacturers = compute_manufacturer_facet(catalog, category, &attributes, &query).await?;
    let attribute_groups = compute_attribute_facets(catalog, &attributes, category, &query).await?;
    let active_filters = compute_active_filters(catalog, &attributes, &query).await?;

    let known_manufacturers = if query.selected_values(MANUFACTURER_QUERY_KEY).is_empty() {
        vec![]
    } else {
        catalog.list_manufacturers().await?
    };
    let clear_url = clear_filters_url(&query, &attributes, &known_manufacturers);

    Ok(CategoryFacets {
        category: category.clone(),
        manufacturers,
        attributes: attribute_groups,
        active_filters,
        clear_url,
    })
}
