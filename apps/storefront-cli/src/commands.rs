use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use storefront_core::catalog::CatalogLoader;
use storefront_core::config::Config;
use storefront_core::types::Product;
use storefront_search::{CatalogSearch, SearchOptions};
use storefront_session::SearchSession;
use tokio::io::AsyncBufRead;

use crate::args::{CatalogArgs, FacetsArgs, SearchArgs};
use crate::{render, repl};

/// Catalog location and search options resolved from flags and configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: PathBuf,
    pub options: SearchOptions,
}

impl Settings {
    pub fn resolve(config: &Config, args: &CatalogArgs, cwd: &Path) -> anyhow::Result<Self> {
        let catalog = match &args.catalog {
            Some(path) => cwd.join(path),
            None => config.catalog_path(cwd),
        };
        let options = SearchOptions::from(config.search_settings()?);
        Ok(Self { catalog, options })
    }
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Product>> {
    let products = CatalogLoader::new()
        .load(path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))?;
    tracing::info!(path = %path.display(), products = products.len(), "catalog loaded");
    Ok(products)
}

pub fn search(settings: Settings, args: &SearchArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut options = settings.options;
    if args.case_sensitive {
        options = options.with_case_sensitive(true);
    }
    if let Some(limit) = args.limit {
        options = options.with_max_results(Some(limit));
    }

    let catalog = CatalogSearch::new(load_catalog(&settings.catalog)?, options);
    let results = catalog.search(&args.query, &args.filters());
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
    } else {
        render::results(out, &results, catalog.total_count())?;
    }
    Ok(())
}

pub fn facets(settings: Settings, args: &FacetsArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = CatalogSearch::new(load_catalog(&settings.catalog)?, settings.options);
    let metadata = catalog.metadata();
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &metadata)?;
        writeln!(out)?;
    } else {
        render::metadata(out, &metadata)?;
    }
    Ok(())
}

pub async fn interactive<R>(settings: Settings, input: R, out: &mut impl Write) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let session = SearchSession::new(load_catalog(&settings.catalog)?, settings.options)?;
    writeln!(out, "{} products loaded. Type /help for commands.", session.total_count())?;
    repl::run(&session, input, out).await
}
