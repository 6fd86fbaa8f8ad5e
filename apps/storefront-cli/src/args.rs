use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storefront_core::types::{FilterCriteria, SortBy};

/// Command-line arguments accepted by the `storefront` binary.
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Search, filter and sort a product catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one search and print the matching products
    Search(SearchArgs),
    /// Print the categories, brands and price range of the catalog
    Facets(FacetsArgs),
    /// Start a search session that reads queries and slash commands from stdin
    Interactive(CatalogArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    #[arg(
        long,
        value_name = "PATH",
        env = "STOREFRONT_CATALOG",
        help = "Catalog file or directory (default: catalog.path from config)"
    )]
    pub catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[arg(value_name = "QUERY", default_value = "", help = "Whitespace separated terms; all must match")]
    pub query: String,
    #[command(flatten)]
    pub catalog: CatalogArgs,
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,
    #[arg(long, value_name = "NAME")]
    pub brand: Option<String>,
    #[arg(long, value_name = "PRICE", help = "Inclusive lower price bound")]
    pub price_min: Option<f64>,
    #[arg(long, value_name = "PRICE", help = "Inclusive upper price bound")]
    pub price_max: Option<f64>,
    #[arg(long)]
    pub in_stock: bool,
    #[arg(long)]
    pub featured: bool,
    #[arg(long, value_name = "KEY", help = "name, price-low, price-high, rating or popular")]
    pub sort_by: Option<SortBy>,
    #[arg(long, help = "Match query terms case-sensitively (default: config)")]
    pub case_sensitive: bool,
    #[arg(short = 'n', long, value_name = "N", help = "Cap the number of results (default: config)")]
    pub limit: Option<usize>,
    #[arg(long, help = "Print results as JSON")]
    pub json: bool,
}

impl SearchArgs {
    pub fn filters(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category.clone(),
            brand: self.brand.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            in_stock: self.in_stock.then_some(true),
            featured: self.featured.then_some(true),
            sort_by: self.sort_by,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
    #[arg(long, help = "Print metadata as JSON")]
    pub json: bool,
}
