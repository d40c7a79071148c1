//! Worker-route style URL pattern matching.
//!
//! Patterns look like `[scheme://]hostname[path]`, where the hostname may start
//! with `*` (or be exactly `*`) and the path may end with `*`. Patterns are parsed
//! into immutable [`Route`]s, optionally ordered by specificity, and matched
//! against candidate URLs; the first matching route wins.

pub mod config;
pub mod error;
pub mod observability;
pub mod routing;

pub use config::MatcherConfig;
pub use error::{PatternErrorCode, RouteError};
pub use routing::{
    find_matching_route, is_supported_protocol, matches_patterns, parse_route, parse_routes,
    validate_protocol, ParseOptions, Protocol, RawPattern, Route, RouteTable,
};
pub use url::Url;
