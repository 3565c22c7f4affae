//! Links cancelling the filters applied to a category page.

use std::collections::BTreeSet;

use common::{
    catalog::{Attribute, Manufacturer},
    filter_const::{MANUFACTURER_QUERY_KEY, STORE_CATEGORY_ROUTE},
    filter_query::FilterQuery,
    filter_result::ActiveFilterLink,
    filter_url::remove_url_param,
};
use tracing::debug;

use crate::api::filter::{catalog::Catalog, filter_selection::{has_active_selection, selected_raw_id}};

/// Manufacturer filters first in query order, then attribute filters in
/// catalog order. Ids that resolve to nothing are dropped.
pub async fn compute_active_filters<C: Catalog>(
    catalog: &C,
    attributes: &[Attribute],
    query: &FilterQuery,
) -> anyhow::Result<Vec<ActiveFilterLink>> {
    let mut result = Vec::new();

    let selected_manufacturers = query.selected_values(MANUFACTURER_QUERY_KEY);
    if !selected_manufacturers.is_empty() {
        let manufacturers = catalog.list_manufacturers().await?;
        let mut present_ids = BTreeSet::new();
        for raw_id in selected_manufacturers {
            let manufacturer = raw_id
                .parse::<u64>()
                .ok()
                .and_then(|id| manufacturers.iter().find(|m| m.id == id));
            let Some(manufacturer) = manufacturer else {
                debug!("dropping unknown manufacturer filter: {}", raw_id);
                continue;
            };
            if !present_ids.insert(manufacturer.id) {
                continue;
            }
            result.push(ActiveFilterLink {
                label: manufacturer.name.clone(),
                url: remove_url_param(query, MANUFACTURER_QUERY_KEY, Some(raw_id)),
            });
        }
    }

    for attribute in attributes {
        if !query.contains_key(&attribute.name) {
            continue;
        }
        for option in &attribute.options {
            if let Some(raw_id) = selected_raw_id(query, &attribute.name, option.id) {
                result.push(ActiveFilterLink {
                    label: option.value.clone(),
                    url: remove_url_param(query, &attribute.name, Some(raw_id)),
                });
            }
        }
    }

    Ok(result)
}

/// Url dropping every manufacturer and attribute selection while keeping the
/// rest of the query. `None` when no selection resolves to a known
/// manufacturer or option.
pub fn clear_filters_url(query: &FilterQuery, attributes: &[Attribute], manufacturers: &[Manufacturer]) -> Option<String> {
    if !has_active_selection(query, attributes, manufacturers) {
        return None;
    }
    let mut cleared = query.with_param_removed(MANUFACTURER_QUERY_KEY, None);
    for attribute in attributes {
        cleared = cleared.with_param_removed(&attribute.name, None);
    }
    Some(cleared.to_url(STORE_CATEGORY_ROUTE))
}
