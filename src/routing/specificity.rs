//! Route specificity scoring.
//!
//! Hostname structure dominates path structure: each hostname label is worth
//! 26 path segments. The multiplier must stay 26 to order routes the same way
//! the edge routing table does.

use url::Url;

const HOST_WEIGHT: i32 = 26;

/// Score a parsed pattern URL (wildcard markers still present). Higher is more specific.
pub fn score(url: &Url) -> i32 {
    let host_parts: Vec<&str> = url.host_str().unwrap_or_default().split('.').collect();
    let mut host_score = host_parts.len() as i32;
    if host_parts.first() == Some(&"*") {
        host_score -= 2;
    }

    let path_parts: Vec<&str> = url.path().split('/').collect();
    let mut path_score = path_parts.len() as i32;
    if path_parts.last() == Some(&"*") {
        path_score -= 2;
    }

    host_score * HOST_WEIGHT + path_score
}
