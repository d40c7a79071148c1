//! End-to-end matching behaviour.

use std::sync::Arc;
use std::thread;

use route_matcher::{
    find_matching_route, matches_patterns, parse_routes, ParseOptions, PatternErrorCode,
    RawPattern, Route, RouteError, RouteTable,
};

mod common;

use common::{is_match, url};

#[test]
fn test_match_table() {
    let cases: &[(&str, &[&str], bool)] = &[
        ("https://example.com", &["example.com"], true),
        ("http://example.com", &["example.com"], true),
        ("https://example.com/", &["example.com/*"], true),
        ("https://example.com/path", &["example.com"], false),
        ("https://example.com/path", &["example.com/*"], true),
        ("https://sub.example.com/", &["*.example.com"], true),
        ("https://a.b.example.com/", &["*.example.com"], true),
        ("https://example.com/", &["*.example.com"], false),
        ("https://example.com/", &["*example.com"], true),
        ("https://notexample.com/", &["*example.com"], true),
        ("https://example.org/", &["*example.com"], false),
        ("https://example.com/blog/post?x=1", &["example.com/blog/*"], true),
        ("https://example.com/blog/post?x=1", &["example.com/blog/post"], false),
        ("https://example.com/blog", &["example.com/blog/*"], false),
        ("http://example.com/", &["https://example.com/*"], false),
        ("https://example.com/", &["http://example.com/*", "https://example.com/*"], true),
        ("https://example.com:8080/", &["example.com/*"], true),
        ("https://anything.org/x", &["*/*"], true),
        ("https://anything.org/x", &["*"], false),
        ("https://anything.org/", &["*"], true),
        ("https://EXAMPLE.com/blog", &["example.com/blog"], true),
        ("https://example.com/Blog", &["example.com/blog"], false),
        ("https://münchen.de/", &["münchen.de/*"], true),
        ("https://xn--mnchen-3ya.de/", &["münchen.de/*"], true),
        ("https://example.com/", &[], false),
    ];

    for (input, patterns, expected) in cases {
        assert_eq!(
            is_match(input, patterns),
            *expected,
            "{} against {:?}",
            input,
            patterns
        );
    }
}

#[test]
fn test_schemeless_patterns_match_both_protocols() {
    let routes: Vec<Route> = parse_routes(["example.com/*", "*.test/a"], ParseOptions::default()).unwrap();
    for route in &routes {
        assert_eq!(route.protocol(), None);
    }
    for scheme in ["http", "https"] {
        let candidate = url(&format!("{}://example.com/x", scheme));
        assert_eq!(
            find_matching_route(&candidate, &routes).map(Route::original_pattern),
            Some("example.com/*")
        );
    }
}

#[test]
fn test_path_suffix_is_prefix_check() {
    let patterns = ["example.com/api*"];
    assert!(is_match("https://example.com/api", &patterns));
    assert!(is_match("https://example.com/api/", &patterns));
    assert!(is_match("https://example.com/api/v1", &patterns));
    assert!(is_match("https://example.com/apis", &patterns));
    assert!(!is_match("https://example.com/ap", &patterns));
}

#[test]
fn test_infix_wildcard_rejected() {
    let err = matches_patterns(
        &url("https://example.com/blog/2025/post-1"),
        ["fingerprint.com/blog/*/post-*"],
    )
    .unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidPattern {
            code: PatternErrorCode::InfixWildcard,
            message: "Route \"fingerprint.com/blog/*/post-*\" contains an infix wildcard. This is not allowed."
                .into(),
        }
    );
}

#[test]
fn test_query_string_rejected() {
    let err = matches_patterns(
        &url("https://example.com/blog/2025/post-1"),
        ["fingerprint.com/blog/post123?q=test"],
    )
    .unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidPattern {
            code: PatternErrorCode::QueryString,
            message: "Route \"fingerprint.com/blog/post123?q=test\" contains a query string. This is not allowed."
                .into(),
        }
    );
}

#[test]
fn test_invalid_protocol_in_patterns() {
    for scheme in ["ws", "ftp"] {
        let err = matches_patterns(&url("https://example.com"), [format!("{}://example.com", scheme)])
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::InvalidProtocol {
                protocol: scheme.into(),
                supported: "http, https".into(),
            }
        );
    }
}

#[test]
fn test_invalid_protocol_in_url() {
    for scheme in ["ws", "ftp"] {
        let err = matches_patterns(&url(&format!("{}://example.com", scheme)), ["https://example.com"])
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Invalid protocol: {}. Supported protocols are: http, https", scheme));
    }
}

#[test]
fn test_returns_target_of_matched_route() {
    let routes = parse_routes(
        [
            RawPattern::WithData("https://example.com/blog/*".to_string(), "blog"),
            RawPattern::WithData("https://fingerprint.com".to_string(), "fingerprint"),
            RawPattern::Bare("https://google.com".to_string()),
        ],
        ParseOptions::default(),
    )
    .unwrap();

    let matched = find_matching_route(&url("https://example.com/blog/post123"), &routes).unwrap();
    assert_eq!(matched.data(), Some(&"blog"));
    assert_eq!(matched.original_pattern(), "https://example.com/blog/*");

    let matched = find_matching_route(&url("https://fingerprint.com"), &routes).unwrap();
    assert_eq!(matched.data(), Some(&"fingerprint"));

    let matched = find_matching_route(&url("https://google.com"), &routes).unwrap();
    assert_eq!(matched.data(), None);

    assert!(find_matching_route(&url("https://bing.com"), &routes).is_none());
}

#[test]
fn test_returns_target_respecting_specificity() {
    let routes = parse_routes(
        [
            RawPattern::WithData("https://example.com/blog/*".to_string(), "blog"),
            RawPattern::Bare("https://google.com".to_string()),
            RawPattern::WithData("https://example.com/blog/post123".to_string(), "specific-blog"),
        ],
        ParseOptions::sorted(),
    )
    .unwrap();

    let matched = find_matching_route(&url("https://example.com/blog/post123"), &routes).unwrap();
    assert_eq!(matched.data(), Some(&"specific-blog"));

    // Without sorting the first pattern shadows the specific one.
    let unsorted = parse_routes(
        [
            RawPattern::WithData("https://example.com/blog/*".to_string(), "blog"),
            RawPattern::WithData("https://example.com/blog/post123".to_string(), "specific-blog"),
        ],
        ParseOptions::default(),
    )
    .unwrap();
    let matched = find_matching_route(&url("https://example.com/blog/post123"), &unsorted).unwrap();
    assert_eq!(matched.data(), Some(&"blog"));
}

#[test]
fn test_specificity_ordering_is_stable() {
    // a.com/x/y: 2 host parts, 3 path parts; a.com: 2 host parts, 2 path parts.
    let routes: Vec<Route> = parse_routes(
        ["a.com", "b.com", "a.com/x/y", "https://c.com"],
        ParseOptions::sorted(),
    )
    .unwrap();
    let order: Vec<_> = routes.iter().map(Route::original_pattern).collect();
    assert_eq!(order, ["a.com/x/y", "https://c.com", "a.com", "b.com"]);

    let scores: Vec<_> = routes.iter().filter_map(Route::specificity).collect();
    assert_eq!(scores, [2 * 26 + 3, 2 * 26 + 2, 2 * 26 + 2, 2 * 26 + 2]);
}

#[test]
fn test_reparse_is_idempotent() {
    let patterns = [
        "example.com",
        "https://*.example.com/api/*",
        "http://example.org/a/b",
        "*/*",
        "*foo.test/static*",
    ];
    let first: Vec<Route> = parse_routes(patterns, ParseOptions::default()).unwrap();
    let second: Vec<Route> = parse_routes(
        first.iter().map(|route| route.original_pattern().to_string()),
        ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_table_shared_across_threads() {
    let table: Arc<RouteTable<&str>> = Arc::new(
        RouteTable::new(
            [("*.example.com/*", "sub"), ("example.com/*", "root")],
            ParseOptions::sorted(),
        )
        .unwrap(),
    );

    thread::scope(|scope| {
        for (input, expected) in [
            ("https://www.example.com/", "sub"),
            ("https://example.com/a", "root"),
        ] {
            let table = Arc::clone(&table);
            scope.spawn(move || {
                let route = table.find(&url(input)).unwrap();
                assert_eq!(route.data(), Some(&expected));
            });
        }
    });
}
