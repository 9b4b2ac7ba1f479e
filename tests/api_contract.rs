#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! API Contract Tests
//!
//! The routes built in src/api/mod.rs must match tests/fixtures/api_routes.txt,
//! and every path the WASM client requests must be one of them.
//!
//! If this test fails, review the route change, then update the golden file
//! and the client together.
//!
//! Run with: cargo test --test api_contract

use std::collections::BTreeSet;
use std::fs;

const GOLDEN: &str = "tests/fixtures/api_routes.txt";

fn golden_lines() -> Vec<String> {
    fs::read_to_string(GOLDEN)
        .expect("Failed to read api_routes.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `(METHOD PATH)` pairs from `.route("/path", method(handler))` calls
fn routes_in(source_file: &str) -> BTreeSet<String> {
    let content = fs::read_to_string(source_file).expect("Failed to read router source");

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("//"))
        .filter_map(|line| {
            let rest = &line[line.find(".route(\"")? + 8..];
            let path = &rest[..rest.find('"')?];
            let method = ["get", "post", "put", "delete"]
                .into_iter()
                .find(|m| rest.contains(&format!("{}(", m)))?;
            Some(format!("{} {}", method.to_uppercase(), path))
        })
        .collect()
}

/// String constants ending in `_ROUTE` (paths the client fetches)
fn client_paths(source_file: &str) -> Vec<String> {
    let content = fs::read_to_string(source_file).expect("Failed to read client source");

    content
        .lines()
        .filter(|line| line.contains("_ROUTE: &str = \""))
        .filter_map(|line| {
            let start = line.find("= \"")? + 3;
            let end = start + line[start..].find('"')?;
            Some(line[start..end].to_string())
        })
        .collect()
}

#[test]
fn api_routes_match_contract() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();
    let actual = routes_in("src/api/mod.rs");

    let added: Vec<_> = actual.difference(&golden).collect();
    let removed: Vec<_> = golden.difference(&actual).collect();

    assert!(
        added.is_empty() && removed.is_empty(),
        "\n\nAPI CONTRACT VIOLATION!\n  added (not in {}): {:?}\n  removed (still in {}): {:?}\n",
        GOLDEN,
        added,
        GOLDEN,
        removed
    );
}

#[test]
fn client_only_requests_contracted_routes() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();
    let paths = client_paths("src/client/weather.rs");

    assert!(!paths.is_empty(), "client route constant not found");
    for path in paths {
        assert!(
            golden.contains(&format!("GET {}", path)),
            "client requests {} which is not a contracted GET route",
            path
        );
    }
}

#[test]
fn golden_file_is_sorted() {
    let routes = golden_lines();
    let mut sorted = routes.clone();
    sorted.sort();

    assert_eq!(
        routes, sorted,
        "api_routes.txt is not sorted! Please sort alphabetically."
    );
}
