//! Catalog storage backends.

pub mod catalog_sql;
pub mod clickhouse_catalog;
pub mod clickhouse_utils;
pub mod memory_catalog;
