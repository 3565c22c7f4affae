//! Facet filter engine of the storefront category pages.

pub mod api;
pub mod db_utils;
