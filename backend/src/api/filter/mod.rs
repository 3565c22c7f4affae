//! Category filter computations and module exports.

pub mod catalog;
pub use catalog::Catalog;

pub mod filter_selection;

mod manufacturer_facet;
pub use manufacturer_facet::compute_manufacturer_facet;

mod attribute_facets;
pub use attribute_facets::compute_attribute_facets;

mod active_filters;
pub use active_filters::{clear_filters_url, compute_active_filters};

mod category_facets;
pub use category_facets::compute_category_facets;
