//! Links to the category route built from a query snapshot.

use crate::{filter_const::STORE_CATEGORY_ROUTE, filter_query::FilterQuery};

/// Url selecting `value` for `key` on top of the current query.
pub fn add_url_param(query: &FilterQuery, key: &str, value: &str, select_many: bool) -> String {
    query.with_param_added(key, value, select_many).to_url(STORE_CATEGORY_ROUTE)
}

/// Url without `value` under `key`, or without the whole key when `value` is `None`.
pub fn remove_url_param(query: &FilterQuery, key: &str, value: Option<&str>) -> String {
    query.with_param_removed(key, value).to_url(STORE_CATEGORY_ROUTE)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_point_to_category_route() {
        let q = FilterQuery::from_pairs([("url", "phones"), ("manufacturer", "3")]);
        assert_eq!(
            add_url_param(&q, "manufacturer", "7", true),
            "/store/category/view?manufacturer=3%3B7&url=phones"
        );
        assert_eq!(remove_url_param(&q, "manufacturer", Some("3")), "/store/category/view?url=phones");
        assert_eq!(remove_url_param(&q, "url", None), "/store/category/view?manufacturer=3");
    }
}
