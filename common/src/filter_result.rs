use serde::{Deserialize, Serialize};

use crate::catalog::Category;


/// One filterable dimension: the manufacturer facet or an attribute facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetGroup {
    pub query_key: String,
    pub title: String,
    pub select_many: bool,
    pub filters: Vec<FacetItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetItem {
    pub title: String,
    /// Products matching the current selection with this entry selected too.
    pub count: u64,
    pub query_key: String,
    pub query_param: u64,
    pub selected: bool,
    /// Deselects the entry when `selected`, selects it otherwise.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveFilterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFacets {
    pub category: Category,
    pub manufacturers: FacetGroup,
    pub attributes: Vec<FacetGroup>,
    pub active_filters: Vec<ActiveFilterLink>,
    /// Removes every manufacturer and attribute selection at once.
    pub clear_url: Option<String>,
}

impl FacetGroup {
    pub fn new(query_key: impl Into<String>, title: impl Into<String>, select_many: bool) -> Self {
        Self { query_key: query_key.into(), title: title.into(), select_many, filters: vec![] }
    }
}
