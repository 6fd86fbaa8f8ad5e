use std::io::Write;

use anyhow::{bail, Context};
use storefront_core::types::{Product, SortBy};
use storefront_session::SearchSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Query(String),
    /// `None` clears the constraint.
    Category(Option<String>),
    Brand(Option<String>),
    Price(Option<f64>, Option<f64>),
    ToggleInStock,
    ToggleFeatured,
    Sort(Option<SortBy>),
    Clear,
    ClearSearch,
    ClearFilters,
    Facets,
    Help,
    Quit,
}

impl ReplCommand {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(ReplCommand::Query(line.to_string()));
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        let label = || (!arg.is_empty()).then(|| arg.to_string());

        let command = match name {
            "category" | "c" => ReplCommand::Category(label()),
            "brand" | "b" => ReplCommand::Brand(label()),
            "price" | "p" => {
                let mut bounds = arg.split_whitespace();
                let min = parse_bound(bounds.next())?;
                let max = parse_bound(bounds.next())?;
                if bounds.next().is_some() {
                    bail!("usage: /price MIN MAX");
                }
                ReplCommand::Price(min, max)
            }
            "in-stock" => ReplCommand::ToggleInStock,
            "featured" => ReplCommand::ToggleFeatured,
            "sort" | "s" if arg.is_empty() => ReplCommand::Sort(None),
            "sort" | "s" => ReplCommand::Sort(Some(arg.parse()?)),
            "clear" => ReplCommand::Clear,
            "clear-search" => ReplCommand::ClearSearch,
            "clear-filters" => ReplCommand::ClearFilters,
            "facets" | "f" => ReplCommand::Facets,
            "help" | "h" => ReplCommand::Help,
            "quit" | "q" | "exit" => ReplCommand::Quit,
            other => bail!("unknown command /{other}; try /help"),
        };
        Ok(command)
    }
}

/// `-` or a missing token leaves that side unbounded.
fn parse_bound(token: Option<&str>) -> anyhow::Result<Option<f64>> {
    match token {
        None | Some("-") => Ok(None),
        Some(raw) => raw.parse().map(Some).with_context(|| format!("invalid price '{raw}'")),
    }
}

/// Apply `command` to `session`. Returns `false` once the user asked to quit.
pub async fn apply(session: &SearchSession<Product>, command: ReplCommand, out: &mut impl Write) -> anyhow::Result<bool> {
    let mut filters = session.filters();
    match command {
        ReplCommand::Query(query) => {
            session.set_query(query);
            session.settled().await;
            render::results(out, &session.filtered_items(), session.total_count())?;
            return Ok(true);
        }
        ReplCommand::Category(category) => filters.category = category,
        ReplCommand::Brand(brand) => filters.brand = brand,
        ReplCommand::Price(min, max) => filters = filters.with_price_range(min, max),
        ReplCommand::ToggleInStock => filters.in_stock = (!filters.requires_in_stock()).then_some(true),
        ReplCommand::ToggleFeatured => filters.featured = (!filters.requires_featured()).then_some(true),
        ReplCommand::Sort(sort_by) => filters.sort_by = sort_by,
        ReplCommand::Clear => {
            session.clear_all();
            return status(session, out);
        }
        ReplCommand::ClearSearch => {
            session.clear_search();
            return status(session, out);
        }
        ReplCommand::ClearFilters => {
            session.clear_filters();
            return status(session, out);
        }
        ReplCommand::Facets => {
            render::metadata(out, &session.metadata())?;
            return Ok(true);
        }
        ReplCommand::Help => {
            render::help(out)?;
            return Ok(true);
        }
        ReplCommand::Quit => return Ok(false),
    }
    session.set_filters(filters);
    status(session, out)
}

fn status(session: &SearchSession<Product>, out: &mut impl Write) -> anyhow::Result<bool> {
    render::filters(out, &session.search_query(), &session.filters())?;
    render::results(out, &session.filtered_items(), session.total_count())?;
    Ok(true)
}

/// Read lines from `input` until EOF or `/quit`.
pub async fn run<R>(session: &SearchSession<Product>, input: R, out: &mut impl Write) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        write!(out, "search> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else { break };
        if line.trim().is_empty() {
            continue;
        }
        match ReplCommand::parse(&line) {
            Ok(command) => {
                if !apply(session, command, out).await? {
                    break;
                }
            }
            Err(e) => writeln!(out, "error: {e:#}")?,
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_query() {
        assert_eq!(ReplCommand::parse("  green tea ").unwrap(), ReplCommand::Query("green tea".into()));
    }

    #[test]
    fn slash_commands_take_arguments() {
        assert_eq!(ReplCommand::parse("/category Loose Leaf").unwrap(), ReplCommand::Category(Some("Loose Leaf".into())));
        assert_eq!(ReplCommand::parse("/brand").unwrap(), ReplCommand::Brand(None));
        assert_eq!(ReplCommand::parse("/price 10 25.5").unwrap(), ReplCommand::Price(Some(10.0), Some(25.5)));
        assert_eq!(ReplCommand::parse("/price - 40").unwrap(), ReplCommand::Price(None, Some(40.0)));
        assert_eq!(ReplCommand::parse("/sort price-high").unwrap(), ReplCommand::Sort(Some(SortBy::PriceHigh)));
        assert_eq!(ReplCommand::parse("/sort").unwrap(), ReplCommand::Sort(None));
        assert_eq!(ReplCommand::parse("/q").unwrap(), ReplCommand::Quit);
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(ReplCommand::parse("/price ten").is_err());
        assert!(ReplCommand::parse("/price 1 2 3").is_err());
        assert!(ReplCommand::parse("/sort cheapest").is_err());
        assert!(ReplCommand::parse("/stats").is_err());
    }
}
