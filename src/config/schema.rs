//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::routing::RawPattern;

/// Root configuration for the matcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MatcherConfig {
    /// Route patterns, in match order.
    pub routes: Vec<RouteConfig>,

    /// Reorder routes by descending specificity before matching.
    pub sort_by_specificity: bool,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single route pattern.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Pattern string, e.g. `"*.example.com/api/*"`.
    pub pattern: String,

    /// Label carried through to the matched route.
    #[serde(default)]
    pub target: Option<String>,
}

impl RouteConfig {
    pub fn to_raw_pattern(&self) -> RawPattern<String> {
        match &self.target {
            Some(target) => RawPattern::WithData(self.pattern.clone(), target.clone()),
            None => RawPattern::Bare(self.pattern.clone()),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
