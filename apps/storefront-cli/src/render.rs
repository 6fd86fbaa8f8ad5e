use std::io::{self, Write};

use storefront_core::types::{FilterCriteria, Product, SearchMetadata};

pub fn results(out: &mut impl Write, items: &[&Product], total: usize) -> io::Result<()> {
    writeln!(out, "Showing {} of {} products", items.len(), total)?;
    for (index, product) in items.iter().enumerate() {
        write!(out, "  {:>3}. {}", index + 1, product.name)?;
        if let Some(brand) = &product.brand {
            write!(out, " ({brand})")?;
        }
        if let Some(price) = product.price {
            write!(out, "  ${price:.2}")?;
        }
        if let Some(rating) = product.rating {
            write!(out, "  ★{rating:.1}")?;
        }
        if product.in_stock == Some(false) {
            write!(out, "  [out of stock]")?;
        }
        writeln!(out)?;
        if let Some(category) = &product.category {
            writeln!(out, "       {category}  id={}", product.id)?;
        }
    }
    Ok(())
}

pub fn metadata(out: &mut impl Write, metadata: &SearchMetadata) -> io::Result<()> {
    writeln!(out, "Categories:")?;
    for facet in &metadata.categories {
        writeln!(out, "  {:<24} {:>5}  ({})", facet.name, facet.count, facet.id)?;
    }
    writeln!(out, "Brands: {}", if metadata.brands.is_empty() { "-".to_string() } else { metadata.brands.join(", ") })?;
    let (low, high) = metadata.price_range;
    writeln!(out, "Price range: ${low:.2} - ${high:.2}")?;
    let stats = &metadata.stats;
    writeln!(
        out,
        "Products: {} total, {} in stock, {} featured, average rating {:.1}",
        stats.total, stats.in_stock, stats.featured, stats.avg_rating
    )
}

pub fn filters(out: &mut impl Write, query: &str, filters: &FilterCriteria) -> io::Result<()> {
    let mut parts = Vec::new();
    if !query.is_empty() {
        parts.push(format!("query=\"{query}\""));
    }
    if let Some(category) = filters.category() {
        parts.push(format!("category={category}"));
    }
    if let Some(brand) = filters.brand() {
        parts.push(format!("brand={brand}"));
    }
    match (filters.price_min, filters.price_max) {
        (None, None) => {}
        (min, max) => parts.push(format!(
            "price={}..{}",
            min.map(|v| v.to_string()).unwrap_or_default(),
            max.map(|v| v.to_string()).unwrap_or_default()
        )),
    }
    if filters.requires_in_stock() {
        parts.push("in-stock".to_string());
    }
    if filters.requires_featured() {
        parts.push("featured".to_string());
    }
    if let Some(sort_by) = filters.sort_by {
        parts.push(format!("sort={sort_by}"));
    }
    if parts.is_empty() {
        writeln!(out, "(no filters)")
    } else {
        writeln!(out, "({} filters) {}", filters.active_count(), parts.join("  "))
    }
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Type text to search; every word must match.")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  /category NAME     Filter by category (no name clears)")?;
    writeln!(out, "  /brand NAME        Filter by brand (no name clears)")?;
    writeln!(out, "  /price MIN MAX     Inclusive price bounds, '-' for open")?;
    writeln!(out, "  /in-stock          Toggle in-stock only")?;
    writeln!(out, "  /featured          Toggle featured only")?;
    writeln!(out, "  /sort KEY          name, price-low, price-high, rating, popular (no key clears)")?;
    writeln!(out, "  /clear-search      Reset the query")?;
    writeln!(out, "  /clear-filters     Reset the filters")?;
    writeln!(out, "  /clear             Reset both")?;
    writeln!(out, "  /facets            List categories, brands and price range")?;
    writeln!(out, "  /help, /h          Show this help")?;
    writeln!(out, "  /quit, /q          Exit")
}
