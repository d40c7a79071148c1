//! Route matching logic.
//!
//! # Responsibilities
//! - Match protocol (absent = any)
//! - Match hostname (exact, or suffix when the pattern had a `*` prefix)
//! - Match path plus query string (exact, or prefix when the pattern had a `*` suffix)
//! - Combine conditions with AND semantics, first matching route wins
//!
//! # Design Decisions
//! - Hostnames are compared as `url::Url` normalized them (lowercase, punycode)
//! - Path matching is case-sensitive
//! - Matching never fails; unsupported candidate schemes are only rejected by
//!   [`matches_patterns`]

use tracing::{debug, trace};
use url::Url;

use crate::error::RouteError;
use crate::routing::parser::parse_routes;
use crate::routing::protocol::validate_protocol;
use crate::routing::route::{ParseOptions, RawPattern, Route};

impl<T> Route<T> {
    /// Returns true if `url` satisfies this route's protocol, hostname and path.
    pub fn matches(&self, url: &Url) -> bool {
        self.matches_protocol(url) && self.matches_hostname(url) && self.matches_path(url)
    }

    fn matches_protocol(&self, url: &Url) -> bool {
        self.protocol
            .map(|protocol| protocol.scheme() == url.scheme())
            .unwrap_or(true)
    }

    fn matches_hostname(&self, url: &Url) -> bool {
        let hostname = url.host_str().unwrap_or_default();
        if self.wildcard_hostname_prefix {
            // An empty route hostname matches everything.
            hostname.ends_with(&self.hostname)
        } else {
            hostname == self.hostname
        }
    }

    fn matches_path(&self, url: &Url) -> bool {
        let path_with_query = path_with_query(url);
        if self.wildcard_path_suffix {
            path_with_query.starts_with(&self.path)
        } else {
            path_with_query == self.path
        }
    }
}

/// `path` followed by `?query` when the query is non-empty.
fn path_with_query(url: &Url) -> String {
    match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
        _ => url.path().to_string(),
    }
}

/// Return the first route, in order, that matches `url`.
pub fn find_matching_route<'a, T>(url: &Url, routes: &'a [Route<T>]) -> Option<&'a Route<T>> {
    let found = routes.iter().find(|route| {
        let matched = route.matches(url);
        trace!(route = %route, url = %url, matched, "Evaluated route");
        matched
    });

    match found {
        Some(route) => debug!(route = %route, url = %url, "Route matched"),
        None => debug!(url = %url, routes = routes.len(), "No route matched"),
    }

    found
}

/// Parse `patterns` and report whether any of them matches `url`.
///
/// Fails if `url` itself uses an unsupported scheme, or if any pattern is invalid.
pub fn matches_patterns<I>(url: &Url, patterns: I) -> Result<bool, RouteError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    validate_protocol(&format!("{}:", url.scheme()))?;

    let routes: Vec<Route> = parse_routes(
        patterns
            .into_iter()
            .map(|pattern| RawPattern::Bare(pattern.as_ref().to_string())),
        ParseOptions::default(),
    )?;

    Ok(find_matching_route(url, &routes).is_some())
}
