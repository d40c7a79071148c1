//! Route table lookup.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up the matching route for a URL
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in table order; order is fixed at build time

use url::Url;

use crate::config::MatcherConfig;
use crate::error::RouteError;
use crate::routing::matcher::find_matching_route;
use crate::routing::parser::parse_routes;
use crate::routing::protocol::validate_protocol;
use crate::routing::route::{ParseOptions, RawPattern, Route};

/// An ordered, immutable set of parsed routes.
#[derive(Debug, Clone)]
pub struct RouteTable<T = ()> {
    routes: Vec<Route<T>>,
}

impl<T> RouteTable<T> {
    /// Parse `patterns` into a table.
    pub fn new<I>(patterns: I, options: ParseOptions) -> Result<Self, RouteError>
    where
        I: IntoIterator,
        I::Item: Into<RawPattern<T>>,
    {
        let routes = parse_routes(patterns, options)?;
        tracing::info!(
            routes = routes.len(),
            sorted = options.sort_by_specificity,
            "Route table built"
        );
        Ok(Self { routes })
    }

    /// First route matching `url`. The URL's scheme is not validated.
    pub fn find(&self, url: &Url) -> Option<&Route<T>> {
        find_matching_route(url, &self.routes)
    }

    /// Whether any route matches `url`, rejecting unsupported URL schemes.
    pub fn matches(&self, url: &Url) -> Result<bool, RouteError> {
        validate_protocol(&format!("{}:", url.scheme()))?;
        Ok(self.find(url).is_some())
    }

    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteTable<String> {
    /// Build a table from configured routes, using each route's `target` as its data.
    pub fn from_config(config: &MatcherConfig) -> Result<Self, RouteError> {
        let options = ParseOptions {
            sort_by_specificity: config.sort_by_specificity,
        };
        Self::new(config.routes.iter().map(|route| route.to_raw_pattern()), options)
    }
}

impl<'a, T> IntoIterator for &'a RouteTable<T> {
    type Item = &'a Route<T>;
    type IntoIter = std::slice::Iter<'a, Route<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
