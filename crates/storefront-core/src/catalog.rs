//! Static catalog loading.
//!
//! A catalog is either a single JSON file or a directory of them. Each file
//! holds a bare array of products or the backend's `{ "products": [...] }`
//! response envelope.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Product;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Product>),
    Envelope { products: Vec<Product> },
}

impl CatalogDocument {
    fn into_products(self) -> Vec<Product> {
        match self {
            CatalogDocument::Bare(products) | CatalogDocument::Envelope { products } => products,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    limit: Option<usize>,
}

impl CatalogLoader {
    pub fn new() -> Self { Self::default() }

    /// Stop after `limit` products; handy for trimming large exports during development.
    pub fn with_limit(limit: usize) -> Self { Self { limit: Some(limit) } }

    pub fn load(&self, path: &Path) -> Result<Vec<Product>> {
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let mut products = if path.is_dir() { self.load_directory(path)? } else { self.load_file(path)? };
        if let Some(limit) = self.limit {
            if products.len() > limit {
                tracing::info!(limit, total = products.len(), "truncating catalog");
                products.truncate(limit);
            }
        }
        Ok(products)
    }

    pub fn load_file(&self, path: &Path) -> Result<Vec<Product>> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let document: CatalogDocument =
            serde_json::from_str(&raw).map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
        let products = document.into_products();
        tracing::debug!(path = %path.display(), count = products.len(), "loaded catalog file");
        Ok(products)
    }

    fn load_directory(&self, root: &Path) -> Result<Vec<Product>> {
        let files = self.list_json_files(root);
        if files.is_empty() {
            tracing::warn!(root = %root.display(), "no .json files found in catalog directory");
            return Ok(vec![]);
        }
        let mut all_products = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            tracing::debug!(file = file_index + 1, of = files.len(), path = %file_path.display(), "reading catalog file");
            all_products.extend(self.load_file(file_path)?);
        }
        tracing::info!(files = files.len(), products = all_products.len(), "loaded catalog directory");
        Ok(all_products)
    }

    fn list_json_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut json_files = Vec::new();
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path(); if path.extension().and_then(|s| s.to_str()) == Some("json") { json_files.push(path.to_path_buf()); }
        }
        json_files.sort(); json_files
    }
}
