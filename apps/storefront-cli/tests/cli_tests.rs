use std::fs;
use std::path::Path;

use clap::Parser;
use storefront_cli::args::{Cli, Command};
use storefront_cli::commands::{self, Settings};
use storefront_search::SearchOptions;
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "products": [
    {"id": "t1", "name": "Sencha Green Tea", "category": "Tea", "brand": "Leafy", "price": 12.0, "inStock": true, "rating": 4.5},
    {"id": "t2", "name": "Assam Black Tea", "category": "Tea", "brand": "Leafy", "price": 9.5, "inStock": false, "rating": 4.1},
    {"id": "m1", "name": "Ceramic Mug", "category": "Drinkware", "brand": "Kiln", "price": 18.0, "inStock": true, "featured": true},
    {"id": "k1", "name": "Glass Kettle", "category": "Drinkware", "price": 42.0, "inStock": true, "tags": ["tea", "stovetop"]}
  ]
}"#;

fn write_catalog(dir: &Path) -> Settings {
    let path = dir.join("catalog.json");
    fs::write(&path, CATALOG).unwrap();
    Settings { catalog: path, options: SearchOptions::default() }
}

fn search_args(argv: &[&str]) -> storefront_cli::args::SearchArgs {
    let cli = Cli::try_parse_from(["storefront", "search"].iter().chain(argv)).unwrap();
    match cli.command {
        Command::Search(args) => args,
        other => panic!("expected search, got {other:?}"),
    }
}

#[test]
fn search_prints_matching_rows() {
    let dir = TempDir::new().unwrap();
    let settings = write_catalog(dir.path());
    let mut out = Vec::new();

    commands::search(settings, &search_args(&["tea", "--in-stock", "--sort-by", "price-high"]), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Showing 2 of 4 products\n"), "{text}");
    let kettle = text.find("Glass Kettle").unwrap();
    let sencha = text.find("Sencha Green Tea").unwrap();
    assert!(kettle < sencha, "price-high puts the kettle first");
    assert!(!text.contains("Assam"));
}

#[test]
fn search_json_output_is_camel_case() {
    let dir = TempDir::new().unwrap();
    let settings = write_catalog(dir.path());
    let mut out = Vec::new();

    commands::search(settings, &search_args(&["--category", "Drinkware", "--limit", "1", "--json"]), &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "m1");
    assert_eq!(rows[0]["inStock"], true);
}

#[test]
fn facets_json_summarises_catalog() {
    let dir = TempDir::new().unwrap();
    let settings = write_catalog(dir.path());
    let cli = Cli::try_parse_from(["storefront", "facets", "--json"]).unwrap();
    let Command::Facets(args) = cli.command else { panic!("expected facets") };
    let mut out = Vec::new();

    commands::facets(settings, &args, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["categories"][0]["id"], "tea");
    assert_eq!(value["categories"][0]["count"], 2);
    assert_eq!(value["brands"], serde_json::json!(["Kiln", "Leafy"]));
    assert_eq!(value["price_range"], serde_json::json!([9.5, 42.0]));
    assert_eq!(value["stats"]["total"], 4);
    assert_eq!(value["stats"]["in_stock"], 3);
    assert_eq!(value["stats"]["featured"], 1);
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = TempDir::new().unwrap();
    let settings = Settings { catalog: dir.path().join("absent.json"), options: SearchOptions::default() };
    let err = commands::search(settings, &search_args(&[]), &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[tokio::test(start_paused = true)]
async fn interactive_session_runs_a_script() {
    let dir = TempDir::new().unwrap();
    let settings = write_catalog(dir.path());
    let script: &[u8] = b"/category Tea\ngreen\n/clear-search\n/bogus\n/quit\nnever reached\n";
    let mut out = Vec::new();

    commands::interactive(settings, script, &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("4 products loaded."));
    assert!(text.contains("(1 filters) category=Tea\nShowing 2 of 4 products"), "{text}");
    assert!(text.contains("Showing 1 of 4 products\n    1. Sencha Green Tea"), "{text}");
    assert!(text.contains("error: unknown command /bogus"));
    assert!(!text.contains("never reached"));
}
