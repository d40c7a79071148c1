//! Shared utilities for integration tests.

use std::path::PathBuf;

use route_matcher::{matches_patterns, Url};

/// Parse a candidate URL, panicking on malformed test input.
pub fn url(input: &str) -> Url {
    Url::parse(input).unwrap_or_else(|e| panic!("bad test URL {:?}: {}", input, e))
}

/// Whether `input` matches any of `patterns`.
#[allow(dead_code)]
pub fn is_match(input: &str, patterns: &[&str]) -> bool {
    matches_patterns(&url(input), patterns).unwrap()
}

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
