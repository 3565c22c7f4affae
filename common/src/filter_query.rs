//! Query-string snapshot the filter selections are read from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter_const::{URL_QUERY_KEY, VALUE_SEPARATOR};


/// Current query parameters of a category page. A value may hold several
/// selections joined by `;`.
///
/// Every operation that changes the query returns a new snapshot, the
/// receiver is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FilterQuery {
    pub params: BTreeMap<String, String>,
}

#[derive(Debug)]
pub enum QueryParseError {
    DecodeError(serde_urlencoded::de::Error),
}

impl std::fmt::Display for QueryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode query string: {}", err),
        }
    }
}

impl std::error::Error for QueryParseError {}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later pairs overwrite earlier ones with the same key.
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            params: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Parse a raw query string, with or without the leading `?`.
    pub fn parse(query_string: &str) -> Result<Self, QueryParseError> {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query_string)
            .map_err(QueryParseError::DecodeError)?;
        Ok(Self::from_pairs(pairs))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Selected values of `key` in query order. Empty segments are skipped.
    pub fn selected_values(&self, key: &str) -> Vec<&str> {
        match self.params.get(key) {
            Some(value) => split_values(value),
            None => vec![],
        }
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.selected_values(key).contains(&value)
    }

    /// Copy of the query with `value` merged into `key`.
    ///
    /// With `select_many` the value joins the existing set (existing values
    /// first, duplicates dropped); otherwise it replaces whatever was there.
    /// The `url` key always gets replaced.
    pub fn with_param_added(&self, key: &str, value: &str, select_many: bool) -> Self {
        let mut query = self.clone();
        let merged = match self.params.get(key) {
            Some(existing) if select_many && key != URL_QUERY_KEY => {
                let mut values = split_values(existing);
                if !value.is_empty() && !values.contains(&value) {
                    values.push(value);
                }
                values.join(VALUE_SEPARATOR)
            }
            _ => value.to_string(),
        };
        query.params.insert(key.to_string(), merged);
        query
    }

    /// Copy of the query with `value` taken out of `key`, or the whole key
    /// when `value` is `None`. A key left without values is deleted.
    pub fn with_param_removed(&self, key: &str, value: Option<&str>) -> Self {
        let mut query = self.clone();
        let Some(current) = self.params.get(key) else {
            return query;
        };
        let Some(value) = value else {
            query.params.remove(key);
            return query;
        };

        let mut values = split_values(current);
        let Some(pos) = values.iter().position(|v| *v == value) else {
            return query;
        };
        values.remove(pos);
        if values.is_empty() {
            query.params.remove(key);
        } else {
            query.params.insert(key.to_string(), values.join(VALUE_SEPARATOR));
        }
        query
    }

    pub fn to_query_string(&self) -> String {
        // string pairs always serialize
        serde_urlencoded::to_string(&self.params).unwrap_or_default()
    }

    pub fn to_url(&self, route: &str) -> String {
        let query_string = self.to_query_string();
        if query_string.is_empty() {
            route.to_string()
        } else {
            format!("{route}?{query_string}")
        }
    }
}

fn split_values(value: &str) -> Vec<&str> {
    value.split(VALUE_SEPARATOR).filter(|v| !v.is_empty()).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> FilterQuery {
        FilterQuery::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn parses_raw_query_string() {
        let q = FilterQuery::parse("?manufacturer=3%3B7&color=2&url=phones").unwrap();
        assert_eq!(q.get("manufacturer"), Some("3;7"));
        assert_eq!(q.selected_values("manufacturer"), vec!["3", "7"]);
        assert_eq!(q.selected_values("color"), vec!["2"]);
        assert_eq!(q.get("url"), Some("phones"));
        assert!(FilterQuery::parse("").unwrap().params.is_empty());
    }

    #[test]
    fn selected_values_skip_empty_segments() {
        let q = query(&[("manufacturer", ";3;;7;")]);
        assert_eq!(q.selected_values("manufacturer"), vec!["3", "7"]);
        assert!(q.selected_values("color").is_empty());
        assert!(q.is_selected("manufacturer", "7"));
        assert!(!q.is_selected("manufacturer", "37"));
    }

    #[test]
    fn add_appends_for_select_many_keys() {
        let q = query(&[("manufacturer", "3")]);
        let added = q.with_param_added("manufacturer", "7", true);
        assert_eq!(added.get("manufacturer"), Some("3;7"));
        // already selected values are not repeated
        let again = added.with_param_added("manufacturer", "3", true);
        assert_eq!(again.get("manufacturer"), Some("3;7"));
        // the snapshot itself is untouched
        assert_eq!(q.get("manufacturer"), Some("3"));
    }

    #[test]
    fn add_replaces_for_single_valued_keys() {
        let q = query(&[("size", "4")]);
        assert_eq!(q.with_param_added("size", "5", false).get("size"), Some("5"));
        assert_eq!(FilterQuery::new().with_param_added("size", "5", true).get("size"), Some("5"));
    }

    #[test]
    fn add_never_merges_url_key() {
        let q = query(&[("url", "phones")]);
        let added = q.with_param_added("url", "tablets", true);
        assert_eq!(added.get("url"), Some("tablets"));
    }

    #[test]
    fn remove_takes_out_one_value() {
        let q = query(&[("manufacturer", "3;7")]);
        let removed = q.with_param_removed("manufacturer", Some("3"));
        assert_eq!(removed, query(&[("manufacturer", "7")]));
    }

    #[test]
    fn remove_last_value_deletes_key() {
        let q = query(&[("manufacturer", "7"), ("url", "phones")]);
        let removed = q.with_param_removed("manufacturer", Some("7"));
        assert!(!removed.contains_key("manufacturer"));
        assert_eq!(removed.get("url"), Some("phones"));
    }

    #[test]
    fn remove_without_value_deletes_key() {
        let q = query(&[("color", "1;2"), ("sort", "price")]);
        assert_eq!(q.with_param_removed("color", None), query(&[("sort", "price")]));
    }

    #[test]
    fn remove_of_unknown_value_keeps_key() {
        let q = query(&[("color", "1;2")]);
        assert_eq!(q.with_param_removed("color", Some("5")), q);
        assert_eq!(q.with_param_removed("size", Some("5")), q);
    }

    #[test]
    fn remove_after_add_restores_selection() {
        let snapshots = [
            query(&[]),
            query(&[("color", "1")]),
            query(&[("color", "1;2"), ("manufacturer", "4")]),
        ];
        for q in snapshots {
            let round_trip = q.with_param_added("color", "9", true).with_param_removed("color", Some("9"));
            assert_eq!(round_trip, q);
        }
    }

    #[test]
    fn builds_url_with_sorted_keys() {
        let q = query(&[("url", "phones"), ("manufacturer", "3;7")]);
        assert_eq!(q.to_url("/store/category/view"), "/store/category/view?manufacturer=3%3B7&url=phones");
        assert_eq!(FilterQuery::new().to_url("/store/category/view"), "/store/category/view");
    }
}
