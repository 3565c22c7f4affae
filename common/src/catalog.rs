//! Shared catalog models read by the filter engine.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub struct Category {
    pub id: u64,
    /// Slug the category route carries in its `url` query parameter.
    pub url: String,
}

impl Category {
    pub fn new(id: u64, url: impl Into<String>) -> Self {
        Self { id, url: url.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: u64,
    pub name: String,
}

impl Manufacturer {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: u64,
    /// Query key of this attribute's facet.
    pub name: String,
    pub title: String,
    pub select_many: bool,
    pub options: Vec<AttributeOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOption {
    pub id: u64,
    pub value: String,
}

impl AttributeOption {
    pub fn new(id: u64, value: impl Into<String>) -> Self {
        Self { id, value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub is_active: bool,
    pub category_ids: BTreeSet<u64>,
    pub manufacturer_id: Option<u64>,
    /// Assigned option ids keyed by attribute name.
    pub attribute_options: BTreeMap<String, BTreeSet<u64>>,
}

/// Selected option ids keyed by attribute name. Options of one attribute are
/// alternatives, different attributes must all match.
pub type AttributeFilter = BTreeMap<String, BTreeSet<u64>>;
