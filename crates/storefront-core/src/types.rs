//! Domain types shared by the search pipeline, the session and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::traits::SearchableItem;

/// A catalog record as served by the storefront backend.
///
/// - `id`: opaque identifier, assumed unique but never checked
/// - `name`: display name and primary text-search target
/// - `category`/`brand`: exact-match classification labels
/// - `price`: non-negative, used for range filters and price sorting
/// - `in_stock`/`featured`: boolean filters
/// - `rating`/`popularity`: sort keys only
/// - `description`/`tags`: secondary text-search targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), ..Self::default() }
    }
}

impl SearchableItem for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn price(&self) -> Option<f64> {
        self.price
    }

    fn in_stock(&self) -> Option<bool> {
        self.in_stock
    }

    fn featured(&self) -> Option<bool> {
        self.featured
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn popularity(&self) -> Option<f64> {
        self.popularity
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Item fields that can take part in text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Id,
    Name,
    Category,
    Brand,
    Description,
    Tags,
}

impl SearchField {
    pub const DEFAULTS: [SearchField; 3] = [SearchField::Name, SearchField::Description, SearchField::Tags];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Id => "id",
            SearchField::Name => "name",
            SearchField::Category => "category",
            SearchField::Brand => "brand",
            SearchField::Description => "description",
            SearchField::Tags => "tags",
        }
    }
}

impl FromStr for SearchField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SearchField::Id),
            "name" => Ok(SearchField::Name),
            "category" => Ok(SearchField::Category),
            "brand" => Ok(SearchField::Brand),
            "description" => Ok(SearchField::Description),
            "tags" => Ok(SearchField::Tags),
            other => Err(Error::InvalidSearchField(other.to_string())),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering. Absent means input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "popular")]
    Popular,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
            SortBy::Rating => "rating",
            SortBy::Popular => "popular",
        }
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortBy::Name),
            "price-low" => Ok(SortBy::PriceLow),
            "price-high" => Ok(SortBy::PriceHigh),
            "rating" => Ok(SortBy::Rating),
            "popular" => Ok(SortBy::Popular),
            other => Err(Error::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse filter record. Every `None` means "no constraint".
///
/// `in_stock` and `featured` only constrain when `Some(true)`; an empty
/// `category` or `brand` string is treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Category constraint, if any. Empty strings do not constrain.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Brand constraint, if any. Empty strings do not constrain.
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref().filter(|b| !b.is_empty())
    }

    pub fn requires_in_stock(&self) -> bool {
        self.in_stock == Some(true)
    }

    pub fn requires_featured(&self) -> bool {
        self.featured == Some(true)
    }

    /// Number of entries that narrow or reorder the result set; backs the
    /// "N filters" badge next to the filter toggle.
    pub fn active_count(&self) -> usize {
        [
            self.category().is_some(),
            self.brand().is_some(),
            self.price_min.is_some(),
            self.price_max.is_some(),
            self.requires_in_stock(),
            self.requires_featured(),
            self.sort_by.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// A distinct category and how many items carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub id: String,
    pub name: String,
    pub count: usize,
}

impl CategoryFacet {
    /// Builds a facet whose `id` is the slug of `name`: lowercased, with
    /// every run of whitespace (leading and trailing included) replaced by `-`.
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        let name = name.into();
        let mut id = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for c in name.to_lowercase().chars() {
            if !c.is_whitespace() {
                id.push(c);
            } else if !in_whitespace {
                id.push('-');
            }
            in_whitespace = c.is_whitespace();
        }
        Self { id, name, count }
    }
}

/// Facet data used to populate filter controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub categories: Vec<CategoryFacet>,
    pub brands: Vec<String>,
    pub price_range: (f64, f64),
    pub stats: CatalogStats,
}

/// Whole-catalog counters shown alongside the facet lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub in_stock: usize,
    pub featured: usize,
    /// Mean rating with unrated items counted as 0; 0 for an empty catalog.
    pub avg_rating: f64,
}
