//! Query keys and routes shared by the filter engine and its consumers.

/// Route every filter link points to.
pub const STORE_CATEGORY_ROUTE: &str = "/store/category/view";

/// Query key of the manufacturer facet.
pub const MANUFACTURER_QUERY_KEY: &str = "manufacturer";

/// Query key carrying the category slug. It is a path segment, never a filter value.
pub const URL_QUERY_KEY: &str = "url";

/// Separator between several selected values of one query key.
pub const VALUE_SEPARATOR: &str = ";";

/// Title of the manufacturer facet group.
pub const MANUFACTURER_FACET_TITLE: &str = "Manufacturer";
