//! Pattern parsing.
//!
//! # Responsibilities
//! - Turn raw patterns (`[scheme://]hostname[path]`) into canonical [`Route`]s
//! - Validate explicit schemes
//! - Extract hostname-prefix and path-suffix wildcards
//! - Reject query strings and wildcards in any other position
//! - Optionally score and order routes by specificity
//!
//! # Design Decisions
//! - A batch fails on its first invalid pattern; nothing partial is returned
//! - Missing schemes are filled in with `https://` for parsing only, the route
//!   itself keeps matching any protocol
//! - Hostnames go through `url::Url`, so IDNs compare in their punycode form

use tracing::debug;
use url::Url;

use crate::error::RouteError;
use crate::routing::protocol::validate_protocol;
use crate::routing::route::{ParseOptions, RawPattern, Route};
use crate::routing::specificity;

/// Parse a batch of patterns, left to right.
///
/// With [`ParseOptions::sort_by_specificity`] the result is ordered by descending
/// specificity, ties broken by the longer original pattern.
pub fn parse_routes<T, I>(patterns: I, options: ParseOptions) -> Result<Vec<Route<T>>, RouteError>
where
    I: IntoIterator,
    I::Item: Into<RawPattern<T>>,
{
    let mut routes = patterns
        .into_iter()
        .map(|raw| parse_route(raw.into(), options))
        .collect::<Result<Vec<_>, _>>()?;

    if options.sort_by_specificity {
        sort_by_specificity(&mut routes);
    }

    Ok(routes)
}

/// Parse a single pattern.
pub fn parse_route<T>(raw: RawPattern<T>, options: ParseOptions) -> Result<Route<T>, RouteError> {
    let (pattern, data) = raw.into_parts();

    let explicit_scheme = has_explicit_scheme(&pattern);
    let url = if explicit_scheme {
        Url::parse(&pattern)
    } else {
        Url::parse(&format!("https://{}", pattern))
    }
    .map_err(|e| RouteError::invalid_url(&pattern, e))?;

    let protocol = if explicit_scheme {
        Some(validate_protocol(&format!("{}:", url.scheme()))?)
    } else {
        None
    };

    let specificity = options
        .sort_by_specificity
        .then(|| specificity::score(&url));

    let parsed_hostname = url.host_str().unwrap_or_default();
    let any_hostname = parsed_hostname == "*";
    let (hostname, wildcard_hostname_prefix) = match parsed_hostname.strip_prefix('*') {
        Some(_) if any_hostname => ("", true),
        Some(rest) => (rest, true),
        None => (parsed_hostname, false),
    };

    let (path, wildcard_path_suffix) = match url.path().strip_suffix('*') {
        Some(rest) => (rest, true),
        None => (url.path(), false),
    };

    if url.query().is_some_and(|q| !q.is_empty()) {
        return Err(RouteError::query_string(&pattern));
    }
    if !any_hostname && contains_wildcard(&url, hostname, path) {
        return Err(RouteError::infix_wildcard(&pattern));
    }

    debug!(
        pattern = %pattern,
        hostname,
        path,
        wildcard_hostname_prefix,
        wildcard_path_suffix,
        "Parsed route pattern"
    );

    Ok(Route {
        hostname: hostname.to_string(),
        path: path.to_string(),
        original_pattern: pattern,
        data,
        protocol,
        wildcard_hostname_prefix,
        wildcard_path_suffix,
        specificity,
    })
}

/// `^[a-z0-9+\-.]+://`, case-insensitive.
fn has_explicit_scheme(pattern: &str) -> bool {
    match pattern.find("://") {
        Some(0) | None => false,
        Some(end) => pattern[..end]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
    }
}

/// Whether any serialized component still holds a `*` once the allowed
/// wildcard markers have been stripped from `hostname` and `path`.
fn contains_wildcard(url: &Url, hostname: &str, path: &str) -> bool {
    [
        url.username(),
        url.password().unwrap_or_default(),
        hostname,
        path,
        url.fragment().unwrap_or_default(),
    ]
    .iter()
    .any(|part| part.contains('*'))
}

fn sort_by_specificity<T>(routes: &mut [Route<T>]) {
    // Stable: routes equal on both keys keep their input order.
    routes.sort_by(|a, b| {
        b.specificity.cmp(&a.specificity).then_with(|| {
            b.original_pattern
                .chars()
                .count()
                .cmp(&a.original_pattern.chars().count())
        })
    });
}
