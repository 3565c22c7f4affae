//! Typed view of the selections held in a query snapshot.

use common::{
    catalog::{Attribute, AttributeFilter, Manufacturer},
    filter_const::MANUFACTURER_QUERY_KEY,
    filter_query::FilterQuery,
    filter_result::FacetItem,
    filter_url::{add_url_param, remove_url_param},
};


/// Raw query value selecting `id` under `key`, if any. Values are compared as
/// numbers so `07` selects id 7.
pub fn selected_raw_id<'a>(query: &'a FilterQuery, key: &str, id: u64) -> Option<&'a str> {
    query
        .selected_values(key)
        .into_iter()
        .find(|value| value.parse::<u64>().ok() == Some(id))
}

/// Known manufacturer ids selected in the query; `None` when nothing usable is selected.
pub fn manufacturer_filter(query: &FilterQuery, manufacturers: &[Manufacturer]) -> Option<Vec<u64>> {
    let ids = manufacturers
        .iter()
        .filter(|m| selected_raw_id(query, MANUFACTURER_QUERY_KEY, m.id).is_some())
        .map(|m| m.id)
        .collect::<Vec<_>>();
    if ids.is_empty() { None } else { Some(ids) }
}

/// Selected options of the given attributes. Keys that name no attribute and
/// ids that name no option of their attribute are left out.
pub fn attribute_filter(query: &FilterQuery, attributes: &[Attribute]) -> AttributeFilter {
    let mut filter = AttributeFilter::new();
    for attribute in attributes {
        let ids = attribute
            .options
            .iter()
            .filter(|option| selected_raw_id(query, &attribute.name, option.id).is_some())
            .map(|option| option.id)
            .collect::<std::collections::BTreeSet<_>>();
        if !ids.is_empty() {
            filter.insert(attribute.name.clone(), ids);
        }
    }
    filter
}

/// True when the query selects a known manufacturer or an option of one of
/// `attributes`. Values resolving to nothing do not count.
pub fn has_active_selection(query: &FilterQuery, attributes: &[Attribute], manufacturers: &[Manufacturer]) -> bool {
    manufacturer_filter(query, manufacturers).is_some() || !attribute_filter(query, attributes).is_empty()
}

/// Copy of the query where a single valued `attribute` keeps only its first
/// value naming one of its options. The key is dropped when none does.
pub fn normalize_single_valued(query: &FilterQuery, attribute: &Attribute) -> FilterQuery {
    if attribute.select_many || !query.contains_key(&attribute.name) {
        return query.clone();
    }
    let first_known = query
        .selected_values(&attribute.name)
        .into_iter()
        .find(|value| {
            attribute
                .options
                .iter()
                .any(|option| value.parse::<u64>().ok() == Some(option.id))
        });
    match first_known {
        Some(value) => query.with_param_added(&attribute.name, value, false),
        None => query.with_param_removed(&attribute.name, None),
    }
}

/// Facet entry for `query_param` under `query_key`, linked to deselect itself
/// when already selected and to select itself otherwise.
pub(crate) fn facet_item(
    query: &FilterQuery,
    query_key: &str,
    select_many: bool,
    title: String,
    count: u64,
    query_param: u64,
) -> FacetItem {
    let selected = selected_raw_id(query, query_key, query_param);
    let url = match selected {
        Some(raw) => remove_url_param(query, query_key, Some(raw)),
        None => add_url_param(query, query_key, &query_param.to_string(), select_many),
    };
    FacetItem {
        title,
        count,
        query_key: query_key.to_string(),
        query_param,
        selected: selected.is_some(),
        url,
    }
}


#[cfg(test)]
mod tests {
    use common::catalog::AttributeOption;

    use super::*;

    fn color() -> Attribute {
        Attribute {
            id: 1,
            name: "color".to_string(),
            title: "Color".to_string(),
            select_many: true,
            options: vec![AttributeOption::new(1, "Red"), AttributeOption::new(2, "Blue")],
        }
    }

    #[test]
    fn manufacturer_filter_ignores_unknown_and_malformed_ids() {
        let manufacturers = vec![Manufacturer::new(3, "Acme"), Manufacturer::new(7, "Globex")];
        let q = FilterQuery::from_pairs([("manufacturer", "7;x;9;03")]);
        assert_eq!(manufacturer_filter(&q, &manufacturers), Some(vec![3, 7]));

        let q = FilterQuery::from_pairs([("manufacturer", "9;abc")]);
        assert_eq!(manufacturer_filter(&q, &manufacturers), None);
        assert_eq!(manufacturer_filter(&FilterQuery::new(), &manufacturers), None);
    }

    #[test]
    fn attribute_filter_keeps_only_known_options() {
        let q = FilterQuery::from_pairs([("color", "2;5;blue"), ("sort", "price"), ("size", "1")]);
        let filter = attribute_filter(&q, &[color()]);
        assert_eq!(filter.len(), 1);
        assert_eq!(filter["color"].iter().copied().collect::<Vec<_>>(), vec![2]);

        let q = FilterQuery::from_pairs([("color", "5")]);
        assert!(attribute_filter(&q, &[color()]).is_empty());
    }

    #[test]
    fn facet_item_links_toggle_selection() {
        let q = FilterQuery::from_pairs([("color", "1"), ("url", "phones")]);
        let selected = facet_item(&q, "color", true, "Red".to_string(), 4, 1);
        assert!(selected.selected);
        assert_eq!(selected.url, "/store/category/view?url=phones");

        let other = facet_item(&q, "color", true, "Blue".to_string(), 2, 2);
        assert!(!other.selected);
        assert_eq!(other.url, "/store/category/view?color=1%3B2&url=phones");
    }

    #[test]
    fn active_selection_ignores_unrelated_keys() {
        let attributes = [color()];
        let manufacturers = [Manufacturer::new(1, "Acme")];
        assert!(!has_active_selection(&FilterQuery::from_pairs([("sort", "price")]), &attributes, &manufacturers));
        assert!(has_active_selection(&FilterQuery::from_pairs([("color", "2")]), &attributes, &manufacturers));
        assert!(has_active_selection(&FilterQuery::from_pairs([("manufacturer", "1")]), &attributes, &manufacturers));
    }

    #[test]
    fn active_selection_ignores_unresolved_ids() {
        let attributes = [color()];
        let manufacturers = [Manufacturer::new(1, "Acme")];
        assert!(!has_active_selection(&FilterQuery::from_pairs([("manufacturer", "404")]), &attributes, &manufacturers));
        assert!(!has_active_selection(&FilterQuery::from_pairs([("color", "9;red")]), &attributes, &manufacturers));
    }

    #[test]
    fn single_valued_attribute_keeps_first_known_option() {
        let size = Attribute {
            id: 2,
            name: "size".to_string(),
            title: "Size".to_string(),
            select_many: false,
            options: vec![AttributeOption::new(10, "Small"), AttributeOption::new(11, "Large")],
        };
        let q = FilterQuery::from_pairs([("size", "99;x;11;10"), ("url", "phones")]);
        assert_eq!(
            normalize_single_valued(&q, &size),
            FilterQuery::from_pairs([("size", "11"), ("url", "phones")])
        );

        let q = FilterQuery::from_pairs([("size", "99"), ("url", "phones")]);
        assert_eq!(normalize_single_valued(&q, &size), FilterQuery::from_pairs([("url", "phones")]));

        // multi valued attributes are left alone
        let q = FilterQuery::from_pairs([("color", "9;1;2")]);
        assert_eq!(normalize_single_valued(&q, &color()), q);
    }
}
