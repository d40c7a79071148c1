//! Route records and their raw inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::protocol::Protocol;

/// A pattern as supplied by the caller, optionally carrying attached data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPattern<T = ()> {
    /// Pattern string only.
    Bare(String),
    /// Pattern string with data carried through to the parsed route.
    WithData(String, T),
}

impl<T> RawPattern<T> {
    pub fn pattern(&self) -> &str {
        match self {
            RawPattern::Bare(pattern) | RawPattern::WithData(pattern, _) => pattern,
        }
    }

    pub(crate) fn into_parts(self) -> (String, Option<T>) {
        match self {
            RawPattern::Bare(pattern) => (pattern, None),
            RawPattern::WithData(pattern, data) => (pattern, Some(data)),
        }
    }
}

impl<T> From<&str> for RawPattern<T> {
    fn from(pattern: &str) -> Self {
        RawPattern::Bare(pattern.to_string())
    }
}

impl<T> From<String> for RawPattern<T> {
    fn from(pattern: String) -> Self {
        RawPattern::Bare(pattern)
    }
}

impl<T, S: Into<String>> From<(S, T)> for RawPattern<T> {
    fn from((pattern, data): (S, T)) -> Self {
        RawPattern::WithData(pattern.into(), data)
    }
}

/// Options for [`parse_routes`](crate::routing::parser::parse_routes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Sort the parsed routes by descending specificity.
    pub sort_by_specificity: bool,
}

impl ParseOptions {
    pub fn sorted() -> Self {
        Self {
            sort_by_specificity: true,
        }
    }
}

/// A parsed, validated route. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<T = ()> {
    pub(crate) original_pattern: String,
    pub(crate) data: Option<T>,
    pub(crate) protocol: Option<Protocol>,
    pub(crate) hostname: String,
    pub(crate) wildcard_hostname_prefix: bool,
    pub(crate) path: String,
    pub(crate) wildcard_path_suffix: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) specificity: Option<i32>,
}

impl<T> Route<T> {
    /// The pattern exactly as supplied.
    pub fn original_pattern(&self) -> &str {
        &self.original_pattern
    }

    /// Data attached to the pattern, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// `None` matches any protocol.
    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    /// Empty when the pattern hostname was `*`.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// When true, `hostname` is matched as a suffix.
    pub fn wildcard_hostname_prefix(&self) -> bool {
        self.wildcard_hostname_prefix
    }

    /// Whether this route matches every hostname.
    pub fn any_hostname(&self) -> bool {
        self.hostname.is_empty()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// When true, `path` is matched as a prefix.
    pub fn wildcard_path_suffix(&self) -> bool {
        self.wildcard_path_suffix
    }

    /// Only set when the batch was parsed with specificity ordering.
    pub fn specificity(&self) -> Option<i32> {
        self.specificity
    }

    /// Consume the route, returning its attached data.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> fmt::Display for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_pattern_conversions() {
        let bare: RawPattern = "example.com".into();
        assert_eq!(bare, RawPattern::Bare("example.com".into()));
        assert_eq!(bare.pattern(), "example.com");

        let with_data: RawPattern<&str> = ("example.com/*", "blog").into();
        assert_eq!(with_data.pattern(), "example.com/*");
        assert_eq!(
            with_data.into_parts(),
            ("example.com/*".to_string(), Some("blog"))
        );
    }

    #[test]
    fn test_parse_options_default() {
        assert!(!ParseOptions::default().sort_by_specificity);
        assert!(ParseOptions::sorted().sort_by_specificity);
    }
}
