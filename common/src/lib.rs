//! Models shared by the filter engine and its consumers.

extern crate serde;


pub mod catalog;
pub mod filter_const;
pub mod filter_query;
pub mod filter_result;
pub mod filter_url;
