//! Prints the filter data of a category page as JSON.
//!
//! Usage:
//!   category_filters --category-id 12 --category-url phones --query 'manufacturer=3;7&color=2'

use anyhow::Context;
use backend::{api::filter::compute_category_facets, db_utils::clickhouse_catalog::ClickhouseCatalog};
use clap::Parser;
use common::{catalog::Category, filter_query::FilterQuery};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "category_filters", about = "Compute category filter facets")]
struct Cli {
    /// Category to compute facets for.
    #[arg(long = "category-id")]
    category_id: u64,

    /// Category slug carried in the `url` query parameter.
    #[arg(long = "category-url", default_value = "")]
    category_url: String,

    /// Current query string of the category page.
    #[arg(long = "query", default_value = "")]
    query: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let query = FilterQuery::parse(&cli.query).context("Invalid --query")?;
    let category = Category::new(cli.category_id, cli.category_url);

    let catalog = ClickhouseCatalog::from_env();
    let facets = compute_category_facets(&catalog, &category, &query).await?;
    info!(
        "Category {}: {} manufacturers, {} attributes, {} active filters",
        category.id,
        facets.manufacturers.filters.len(),
        facets.attributes.len(),
        facets.active_filters.len()
    );

    println!("{}", serde_json::to_string_pretty(&facets)?);
    Ok(())
}
